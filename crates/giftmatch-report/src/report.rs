//! Assignment report — join and CSV output.
//!
//! Output columns follow the upstream report format: `Employee_Name`,
//! `Employee_EmailID`, `Secret_Child_Name`, `Secret_Child_EmailID`.
//! A written report is accepted back by the roster plane as next
//! cycle's history file.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use giftmatch_types::{Assignment, GiftmatchError, Result, Roster};

/// One row of the output report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    #[serde(rename = "Employee_Name")]
    pub giver_name: String,
    #[serde(rename = "Employee_EmailID")]
    pub giver_email: String,
    #[serde(rename = "Secret_Child_Name")]
    pub recipient_name: String,
    #[serde(rename = "Secret_Child_EmailID")]
    pub recipient_email: String,
}

/// Join an assignment back to roster display names, one row per
/// participant in roster order.
///
/// Givers without an entry in the assignment produce no row; for
/// assignments produced by the draw core that set is empty, since the
/// core covers the whole roster.
///
/// # Errors
/// `UnknownRecipient` if the assignment maps to an id missing from the
/// roster — impossible for core-produced assignments, which only hand
/// out roster ids.
pub fn build_report(roster: &Roster, assignment: &Assignment) -> Result<Vec<ReportRow>> {
    let mut rows = Vec::with_capacity(roster.len());
    for giver in roster.iter() {
        let Some(recipient_id) = assignment.recipient_of(&giver.id) else {
            continue;
        };
        let recipient = roster
            .get(recipient_id)
            .ok_or_else(|| GiftmatchError::UnknownRecipient(recipient_id.clone()))?;
        rows.push(ReportRow {
            giver_name: giver.name.clone(),
            giver_email: giver.id.as_str().to_string(),
            recipient_name: recipient.name.clone(),
            recipient_email: recipient.id.as_str().to_string(),
        });
    }
    Ok(rows)
}

/// Write report rows as CSV (header included) to any sink.
pub fn write_report<W: Write>(writer: W, rows: &[ReportRow]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer
            .serialize(row)
            .map_err(|e| GiftmatchError::Csv(e.to_string()))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write report rows to a CSV file.
pub fn save_report(path: impl AsRef<Path>, rows: &[ReportRow]) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    write_report(file, rows)?;
    tracing::info!(path = %path.display(), rows = rows.len(), "report written");
    Ok(())
}
