//! # giftmatch-matchcore
//!
//! **Pure randomized draw core for GiftMatch.**
//!
//! MatchCore is the compute plane — it takes the current roster and the
//! prior cycle's pairings and produces a constrained random assignment.
//! It has:
//!
//! - **Zero side effects**: no file reads, no writes, no process exits
//! - **Hard constraints**: bijection over the roster, no self-assignment
//! - **Soft constraint**: prior-cycle recipients avoided where feasible
//! - **Bounded retry**: greedy dead ends reshuffle instead of backtracking

pub mod matcher;
pub mod pool;
pub mod validate;

pub use matcher::{draw, draw_with_attempts, draw_with_rng};
pub use pool::RecipientPool;
pub use validate::validate_roster;
