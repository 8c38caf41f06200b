//! Prior-assignment intake — last cycle's pairing records.
//!
//! Row format follows the upstream output files: `Employee_EmailID`
//! and `Secret_Child_EmailID` columns; a full report file with name
//! columns parses too since extras are ignored. History is optional,
//! so [`load_prior_or_default`] degrades a missing file to the empty
//! map instead of failing the run.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use giftmatch_types::{GiftmatchError, ParticipantId, PriorAssignments, Result};

/// One row of the prior-assignment CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct PriorRecord {
    #[serde(rename = "Employee_EmailID")]
    pub giver: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub recipient: String,
}

/// Read prior assignments from any CSV source.
///
/// # Errors
/// `Csv` on malformed rows or missing columns.
pub fn read_prior_assignments<R: Read>(reader: R) -> Result<PriorAssignments> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut prior = PriorAssignments::new();
    for row in csv_reader.deserialize::<PriorRecord>() {
        let record = row.map_err(|e| GiftmatchError::Csv(e.to_string()))?;
        prior.insert(
            ParticipantId::new(record.giver),
            ParticipantId::new(record.recipient),
        );
    }
    Ok(prior)
}

/// Load prior assignments from a CSV file.
pub fn load_prior_assignments(path: impl AsRef<Path>) -> Result<PriorAssignments> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let prior = read_prior_assignments(file)?;
    tracing::debug!(
        path = %path.display(),
        entries = prior.len(),
        "prior assignments loaded"
    );
    Ok(prior)
}

/// Load prior assignments, treating a missing file as no history.
///
/// Malformed content in a file that does exist is still an error: a
/// file that is present but unreadable more likely points at a wrong
/// path or a corrupted export than at a first-ever draw.
pub fn load_prior_or_default(path: impl AsRef<Path>) -> Result<PriorAssignments> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            path = %path.display(),
            "prior-assignment file not found, drawing without history"
        );
        return Ok(PriorAssignments::default());
    }
    load_prior_assignments(path)
}
