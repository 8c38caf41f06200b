//! Recipient pool — the draw's supply of unclaimed recipients.
//!
//! The pool hands the matcher a candidate set per giver and is drained
//! as recipients are claimed. All constraint filtering lives here:
//! self-exclusion is hard, the prior-cycle exclusion is soft.

use giftmatch_types::{ParticipantId, PriorAssignments};

/// Unclaimed recipients for a single draw attempt.
#[derive(Debug)]
pub struct RecipientPool {
    available: Vec<ParticipantId>,
}

impl RecipientPool {
    /// Seed the pool with every roster id.
    #[must_use]
    pub fn new(ids: impl IntoIterator<Item = ParticipantId>) -> Self {
        Self {
            available: ids.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }

    /// Candidate recipients for `giver`.
    ///
    /// 1. The giver themselves is always excluded
    /// 2. The giver's prior-cycle recipient is excluded only while at
    ///    least one other candidate would remain (soft no-repeat)
    ///
    /// An empty return means the current attempt has dead-ended.
    #[must_use]
    pub fn candidates_for(
        &self,
        giver: &ParticipantId,
        prior: &PriorAssignments,
    ) -> Vec<ParticipantId> {
        let mut candidates: Vec<ParticipantId> = self
            .available
            .iter()
            .filter(|id| *id != giver)
            .cloned()
            .collect();

        if let Some(previous) = prior.recipient_of(giver) {
            if candidates.len() > 1 {
                candidates.retain(|id| id != previous);
            }
        }

        candidates
    }

    /// Claim a recipient, removing it from the pool.
    pub fn claim(&mut self, recipient: &ParticipantId) {
        self.available.retain(|id| id != recipient);
    }
}
