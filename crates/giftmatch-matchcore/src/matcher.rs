//! Pure randomized draw.
//!
//! The core matching function: takes a roster and the prior cycle's
//! pairings and produces an [`Assignment`]. This is the **only**
//! operation MatchCore exposes — no side effects, no I/O, no state
//! shared between calls.
//!
//! ```text
//! draw(Roster, PriorAssignments) -> Assignment
//! ```
//!
//! ## Algorithm
//!
//! A single attempt is a randomized greedy pass, not a backtracking
//! search:
//!
//! 1. Seed a [`RecipientPool`] with every roster id
//! 2. Visit givers in a freshly shuffled order
//! 3. Ask the pool for each giver's candidates (self excluded, prior
//!    recipient soft-excluded) and pick one uniformly at random
//! 4. A giver with no candidates dead-ends the whole attempt
//!
//! A dead end does not prove the instance unsolvable — an earlier
//! greedy choice may have pinned the last giver to themselves — so the
//! draw reshuffles and retries up to an attempt budget before
//! reporting [`GiftmatchError::DrawInfeasible`].
//!
//! ## Randomness
//!
//! Intentionally randomized: repeated draws over the same inputs may
//! produce different valid assignments. Callers that need reproducible
//! output inject a seeded RNG through [`draw_with_rng`] or
//! [`draw_with_attempts`].

use rand::Rng;
use rand::seq::SliceRandom;

use giftmatch_types::{
    Assignment, GiftmatchError, ParticipantId, PriorAssignments, Result, Roster,
    constants::DEFAULT_DRAW_ATTEMPTS,
};

use crate::{pool::RecipientPool, validate::validate_roster};

/// Draw an assignment using thread-local randomness and the default
/// attempt budget.
///
/// # Errors
/// 1xx validation variants for bad input, `DrawInfeasible` if every
/// attempt dead-ends.
pub fn draw(roster: &Roster, prior: &PriorAssignments) -> Result<Assignment> {
    draw_with_rng(roster, prior, &mut rand::thread_rng())
}

/// Draw with a caller-supplied RNG and the default attempt budget.
pub fn draw_with_rng<R: Rng + ?Sized>(
    roster: &Roster,
    prior: &PriorAssignments,
    rng: &mut R,
) -> Result<Assignment> {
    draw_with_attempts(roster, prior, DEFAULT_DRAW_ATTEMPTS, rng)
}

/// Draw with a caller-supplied RNG and attempt budget.
///
/// Validation runs exactly once, before the first attempt. A budget of
/// zero is treated as one attempt.
pub fn draw_with_attempts<R: Rng + ?Sized>(
    roster: &Roster,
    prior: &PriorAssignments,
    attempts: usize,
    rng: &mut R,
) -> Result<Assignment> {
    validate_roster(roster)?;

    let budget = attempts.max(1);
    for attempt in 1..=budget {
        if let Some(pairs) = attempt_draw(roster, prior, rng) {
            return Ok(Assignment::from_pairs(pairs));
        }
        tracing::debug!(attempt, budget, "draw attempt dead-ended, reshuffling");
    }

    Err(GiftmatchError::DrawInfeasible { attempts: budget })
}

/// One randomized greedy pass. `None` means some giver ran out of
/// candidates and the attempt is abandoned.
fn attempt_draw<R: Rng + ?Sized>(
    roster: &Roster,
    prior: &PriorAssignments,
    rng: &mut R,
) -> Option<Vec<(ParticipantId, ParticipantId)>> {
    let mut givers: Vec<&ParticipantId> = roster.ids().collect();
    givers.shuffle(rng);

    let mut pool = RecipientPool::new(roster.ids().cloned());
    let mut pairs = Vec::with_capacity(givers.len());

    for giver in givers {
        let candidates = pool.candidates_for(giver, prior);
        let chosen = candidates.choose(rng)?.clone();
        pool.claim(&chosen);
        pairs.push((giver.clone(), chosen));
    }

    Some(pairs)
}
