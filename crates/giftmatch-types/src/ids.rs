//! Participant identifiers used throughout GiftMatch.
//!
//! Participants are keyed by a natural unique key supplied by the roster
//! source — in practice an email address. The draw core treats the key
//! as opaque: only equality and ordering matter to it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique key for a participant (an email address).
///
/// Uniqueness across a roster is an invariant enforced by validation
/// before any draw runs; duplicate keys upstream of that gate are a
/// caller bug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ParticipantId(pub String);

impl ParticipantId {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ParticipantId {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for ParticipantId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
