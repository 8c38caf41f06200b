//! # giftmatch-report
//!
//! **Delivery plane: assignment out, report records written.**
//!
//! The draw core operates purely on participant ids. This plane owns
//! the id → display-name join and the output record format, one CSV
//! row per participant. Rendering is the last step of the pipeline;
//! nothing here feeds back into the draw.

pub mod report;

pub use report::{ReportRow, build_report, save_report, write_report};
