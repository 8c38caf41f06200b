//! Error types for the GiftMatch draw engine.
//!
//! All errors use the `GM_ERR_` prefix convention for easy grepping in
//! logs. Error codes are grouped by subsystem:
//! - 1xx: Roster / input validation errors
//! - 2xx: Draw errors
//! - 3xx: Report errors
//! - 9xx: General / internal errors
//!
//! Validation errors (1xx) mean the caller must fix the input; the draw
//! error (2xx) is retryable with a larger attempt budget. The two
//! families are never merged.

use thiserror::Error;

use crate::ParticipantId;

/// Central error enum for all GiftMatch operations.
#[derive(Debug, Error)]
pub enum GiftmatchError {
    // =================================================================
    // Roster / Input Errors (1xx)
    // =================================================================
    /// The roster contained no participants.
    #[error("GM_ERR_100: roster is empty")]
    EmptyRoster,

    /// Fewer participants than a non-self assignment requires.
    #[error(
        "GM_ERR_101: roster too small: {found} participant(s), need at least {min}",
        min = crate::constants::MIN_ROSTER_SIZE
    )]
    RosterTooSmall { found: usize },

    /// The same participant key appeared more than once.
    #[error("GM_ERR_102: duplicate participant: {0}")]
    DuplicateParticipant(ParticipantId),

    // =================================================================
    // Draw Errors (2xx)
    // =================================================================
    /// No valid assignment was found within the attempt budget.
    #[error("GM_ERR_200: no valid assignment found after {attempts} attempt(s)")]
    DrawInfeasible { attempts: usize },

    // =================================================================
    // Report Errors (3xx)
    // =================================================================
    /// An assignment referenced a recipient missing from the roster.
    #[error("GM_ERR_300: recipient not in roster: {0}")]
    UnknownRecipient(ParticipantId),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// I/O error (disk).
    #[error("GM_ERR_900: I/O error: {0}")]
    Io(String),

    /// CSV parse or serialize error.
    #[error("GM_ERR_901: CSV error: {0}")]
    Csv(String),
}

impl GiftmatchError {
    /// The stable `GM_ERR_xxx` code for this error, for machine output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyRoster => "GM_ERR_100",
            Self::RosterTooSmall { .. } => "GM_ERR_101",
            Self::DuplicateParticipant(_) => "GM_ERR_102",
            Self::DrawInfeasible { .. } => "GM_ERR_200",
            Self::UnknownRecipient(_) => "GM_ERR_300",
            Self::Io(_) => "GM_ERR_900",
            Self::Csv(_) => "GM_ERR_901",
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, GiftmatchError>;

// Conversion from std::io::Error
impl From<std::io::Error> for GiftmatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
