//! Prior-cycle and current-cycle assignment maps.
//!
//! [`PriorAssignments`] is last cycle's giver → recipient map, consumed
//! by the draw core as a soft constraint. [`Assignment`] is the draw's
//! result: a bijection over the roster ids, immutable once produced.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// Last cycle's giver → recipient pairings.
///
/// May be empty (no history). Entries whose giver is not part of the
/// current roster are inert: the draw core never looks them up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorAssignments {
    pairs: HashMap<ParticipantId, ParticipantId>,
}

impl PriorAssignments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, giver: ParticipantId, recipient: ParticipantId) {
        self.pairs.insert(giver, recipient);
    }

    /// The recipient `giver` drew last cycle, if recorded.
    #[must_use]
    pub fn recipient_of(&self, giver: &ParticipantId) -> Option<&ParticipantId> {
        self.pairs.get(giver)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl FromIterator<(ParticipantId, ParticipantId)> for PriorAssignments {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, ParticipantId)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

/// A completed draw: giver → recipient bijection over the roster ids.
///
/// Constructed fresh per draw by the core, which guarantees the hard
/// constraints (bijection, no self-assignment). Iteration is in sorted
/// giver order, so downstream output is stable for a given mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pairs: BTreeMap<ParticipantId, ParticipantId>,
}

impl Assignment {
    /// Build an assignment from giver/recipient pairs.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ParticipantId, ParticipantId)>) -> Self {
        Self {
            pairs: pairs.into_iter().collect(),
        }
    }

    /// The recipient assigned to `giver`.
    #[must_use]
    pub fn recipient_of(&self, giver: &ParticipantId) -> Option<&ParticipantId> {
        self.pairs.get(giver)
    }

    /// Iterate giver/recipient pairs in sorted giver order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, &ParticipantId)> {
        self.pairs.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
