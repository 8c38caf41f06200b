//! # giftmatch-types
//!
//! Shared types, errors, and constants for the **GiftMatch** draw engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`ParticipantId`]
//! - **Roster model**: [`Participant`], [`Roster`]
//! - **Assignment model**: [`PriorAssignments`], [`Assignment`]
//! - **Errors**: [`GiftmatchError`] with `GM_ERR_` prefix codes
//! - **Constants**: roster limits and draw attempt budgets

pub mod assignment;
pub mod constants;
pub mod error;
pub mod ids;
pub mod roster;

// Re-export all primary types at crate root for ergonomic imports:
//   use giftmatch_types::{Participant, Roster, Assignment, ...};

pub use assignment::*;
pub use error::*;
pub use ids::*;
pub use roster::*;

// Constants are accessed via `giftmatch_types::constants::FOO`
// (not re-exported to avoid name collisions).
