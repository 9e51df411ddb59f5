//! JSON output formatter

use crate::error::ScanResult;
use crate::report::ScanReport;
use crate::types::{ArtifactId, DescriptorFailure};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    artifacts: &'a [ArtifactId],
    count: usize,
    failures: &'a [DescriptorFailure],
    directories_visited: usize,
    scanned_at: DateTime<Utc>,
}

/// Convert a scan report to a JSON string
///
/// # Errors
/// Returns an error if serialization fails
pub fn to_json(report: &ScanReport) -> ScanResult<String> {
    let view = JsonReport {
        root: &report.root,
        artifacts: &report.artifacts,
        count: report.count(),
        failures: &report.failures,
        directories_visited: report.directories_visited,
        scanned_at: report.scanned_at,
    };
    serde_json::to_string_pretty(&view).map_err(Into::into)
}
