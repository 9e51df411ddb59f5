//! Scan result container

use crate::types::{ArtifactId, DescriptorFailure};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything a single scan found
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Directory the walk started from
    pub root: PathBuf,
    /// Artifact identifiers, sorted ascending; duplicates are kept
    pub artifacts: Vec<ArtifactId>,
    /// Descriptors that were skipped, in walk order
    pub failures: Vec<DescriptorFailure>,
    pub directories_visited: usize,
    pub scanned_at: DateTime<Utc>,
}

impl ScanReport {
    /// Number of identifiers found
    pub fn count(&self) -> usize {
        self.artifacts.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
