//! Roster validation — hard gate before any draw attempt.
//!
//! Fail-closed: a roster that cannot possibly produce a valid
//! assignment is rejected before the randomized core runs. Validation
//! failures are distinct, non-retryable error variants, never merged
//! with draw infeasibility.

use std::collections::HashSet;

use giftmatch_types::{GiftmatchError, Result, Roster, constants::MIN_ROSTER_SIZE};

/// Validate roster invariants: non-empty, at least [`MIN_ROSTER_SIZE`]
/// participants, unique participant ids.
///
/// # Errors
/// Returns the specific 1xx variant for the first check that fails.
pub fn validate_roster(roster: &Roster) -> Result<()> {
    if roster.is_empty() {
        return Err(GiftmatchError::EmptyRoster);
    }

    if roster.len() < MIN_ROSTER_SIZE {
        return Err(GiftmatchError::RosterTooSmall {
            found: roster.len(),
        });
    }

    let mut seen = HashSet::with_capacity(roster.len());
    for participant in roster.iter() {
        if !seen.insert(&participant.id) {
            return Err(GiftmatchError::DuplicateParticipant(
                participant.id.clone(),
            ));
        }
    }

    Ok(())
}
