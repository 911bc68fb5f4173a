//! Qualification-result export.
//!
//! The qualified-buyer table serialized to a spreadsheet-compatible CSV
//! blob, named with the current timestamp and handed to the UI as a
//! downloadable binary payload.

use crate::{
    error::{HandbookError, HandbookResult},
    qualify::QualifiedBuyer,
};
use chrono::{DateTime, Local};

pub const REPORT_MIME: &str = "application/octet-stream";

/// A ready-to-download report.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// `report_<YYYY-MM-DD-HH-MM-SS>.csv`
pub fn report_filename(now: DateTime<Local>) -> String {
    format!("report_{}.csv", now.format("%Y-%m-%d-%H-%M-%S"))
}

/// Serialize the qualified table: one row per buyer, one column per field.
///
/// A failure here leaves the computed table untouched — the caller can
/// retry the export without recomputing.
pub fn export_qualified(rows: &[QualifiedBuyer]) -> HandbookResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| HandbookError::ExportFailure(e.to_string()))?;
    }
    writer
        .into_inner()
        .map_err(|e| HandbookError::ExportFailure(e.to_string()))
}

/// Build the full download payload for a qualified table.
pub fn build_report(rows: &[QualifiedBuyer], now: DateTime<Local>) -> HandbookResult<ReportFile> {
    Ok(ReportFile {
        filename: report_filename(now),
        mime: REPORT_MIME,
        bytes: export_qualified(rows)?,
    })
}
