//! # giftmatch-roster
//!
//! **Intake plane: CSV records in, core types out.**
//!
//! Reads the two inputs the draw core consumes — the current
//! participant roster and the prior cycle's pairings — from their CSV
//! record formats. Parsing is the only job here: roster invariants
//! (size, key uniqueness) are enforced by the draw core's validation
//! gate, so a file that parses cleanly always produces a value, even
//! one the core will later reject.

pub mod participants;
pub mod prior;

pub use participants::{ParticipantRecord, load_participants, read_participants};
pub use prior::{
    PriorRecord, load_prior_assignments, load_prior_or_default, read_prior_assignments,
};
