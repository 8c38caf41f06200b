//! Participant intake — roster CSV records.
//!
//! Row format follows the upstream data files: a header row with
//! `Employee_Name` and `Employee_EmailID` columns. Extra columns are
//! ignored.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use giftmatch_types::{GiftmatchError, Participant, ParticipantId, Result, Roster};

/// One row of the participant CSV.
#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantRecord {
    #[serde(rename = "Employee_Name")]
    pub name: String,
    #[serde(rename = "Employee_EmailID")]
    pub email: String,
}

impl From<ParticipantRecord> for Participant {
    fn from(record: ParticipantRecord) -> Self {
        Self {
            id: ParticipantId::new(record.email),
            name: record.name,
        }
    }
}

/// Read participants from any CSV source.
///
/// # Errors
/// `Csv` on malformed rows or missing columns.
pub fn read_participants<R: Read>(reader: R) -> Result<Roster> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut participants = Vec::new();
    for row in csv_reader.deserialize::<ParticipantRecord>() {
        let record = row.map_err(|e| GiftmatchError::Csv(e.to_string()))?;
        participants.push(record.into());
    }
    Ok(Roster::new(participants))
}

/// Load participants from a CSV file.
///
/// A missing file is an `Io` error — there is no draw without a roster.
pub fn load_participants(path: impl AsRef<Path>) -> Result<Roster> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let roster = read_participants(file)?;
    tracing::debug!(
        path = %path.display(),
        participants = roster.len(),
        "roster loaded"
    );
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_well_formed_roster() {
        let csv = "\
Employee_Name,Employee_EmailID
Alice,alice@example.com
Bob,bob@example.com
";
        let roster = read_participants(csv.as_bytes()).unwrap();
        assert_eq!(roster.len(), 2);
        let alice = roster.get(&ParticipantId::new("alice@example.com")).unwrap();
        assert_eq!(alice.name, "Alice");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = "\
Employee_Name,Employee_EmailID,Department
Alice,alice@example.com,Finance
";
        let roster = read_participants(csv.as_bytes()).unwrap();
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn missing_email_column_is_a_csv_error() {
        let csv = "\
Employee_Name
Alice
";
        let err = read_participants(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, GiftmatchError::Csv(_)));
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        let csv = "\
Employee_Name,Employee_EmailID
Alice,alice@example.com
Bob
";
        let err = read_participants(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, GiftmatchError::Csv(_)));
    }

    #[test]
    fn empty_input_yields_empty_roster() {
        // Validation of the empty roster belongs to the draw core.
        let roster = read_participants("Employee_Name,Employee_EmailID\n".as_bytes()).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn duplicate_rows_pass_through_unvalidated() {
        let csv = "\
Employee_Name,Employee_EmailID
Alice,alice@example.com
Alice,alice@example.com
";
        let roster = read_participants(csv.as_bytes()).unwrap();
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn load_from_file_and_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        std::fs::write(
            &path,
            "Employee_Name,Employee_EmailID\nAlice,alice@example.com\n",
        )
        .unwrap();

        let roster = load_participants(&path).unwrap();
        assert_eq!(roster.len(), 1);

        let err = load_participants(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, GiftmatchError::Io(_)));
    }
}
