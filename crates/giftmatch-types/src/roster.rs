//! Participant and roster model.
//!
//! A [`Roster`] is the current cycle's participant set as supplied by
//! the intake plane, in intake order. The draw core only consumes the
//! ids; display names are carried for the report plane's join.

use serde::{Deserialize, Serialize};

use crate::ParticipantId;

/// A gift-exchange participant: unique key plus display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// The participant's unique key.
    pub id: ParticipantId,
    /// Human-readable name, used only when rendering results.
    pub name: String,
}

impl Participant {
    #[must_use]
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The current cycle's participants, in intake order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    #[must_use]
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    /// Iterate over participant ids in intake order.
    pub fn ids(&self) -> impl Iterator<Item = &ParticipantId> {
        self.participants.iter().map(|p| &p.id)
    }

    /// Look up a participant by id.
    #[must_use]
    pub fn get(&self, id: &ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == *id)
    }

    #[must_use]
    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.get(id).is_some()
    }
}

impl FromIterator<Participant> for Roster {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self {
            participants: iter.into_iter().collect(),
        }
    }
}
