//! Main scanner implementation

use crate::error::{ScanError, ScanResult};
use crate::extract::find_project;
use crate::output::{json::to_json, text::render};
use crate::report::ScanReport;
use crate::types::{ArtifactId, DescriptorFailure, ExclusionMode, OutputStyle};
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::Path;
use walkdir::WalkDir;

/// The main scanner struct
#[derive(Debug, Default)]
pub struct Scanner {
    /// How `src`/`target` directories are recognized
    pub exclusion: ExclusionMode,
}

impl Scanner {
    /// Create a new scanner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose how `src`/`target` directories are excluded
    #[must_use]
    pub fn with_exclusion(mut self, exclusion: ExclusionMode) -> Self {
        self.exclusion = exclusion;
        self
    }

    /// Walk `root` top-down and collect the artifact identifier of every project found.
    ///
    /// A descriptor that fails to parse is reported on stderr and skipped.
    ///
    /// # Errors
    /// Returns an error if the directory tree cannot be traversed
    pub fn scan(&self, root: &Path) -> ScanResult<ScanReport> {
        let mut artifacts: Vec<ArtifactId> = Vec::new();
        let mut failures = Vec::new();
        let mut directories_visited = 0;

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_dir() {
                continue;
            }
            directories_visited += 1;

            let filenames = list_files(entry.path())?;
            match find_project(entry.path(), &filenames, self.exclusion) {
                Ok(Some(id)) => artifacts.push(id),
                Ok(None) => {}
                Err(ScanError::Descriptor { path, source }) => {
                    eprintln!("Warning: Failed to parse {}: {source}", path.display());
                    failures.push(DescriptorFailure {
                        path,
                        reason: source.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        artifacts.sort();

        Ok(ScanReport {
            root: root.to_path_buf(),
            artifacts,
            failures,
            directories_visited,
            scanned_at: Utc::now(),
        })
    }
}

/// Names of the non-directory entries directly inside `dir`
fn list_files(dir: &Path) -> ScanResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Scan `root` and write the report to `out` in the given style.
///
/// # Errors
/// Returns an error if traversal fails or the report cannot be written
pub fn find_projects<W: Write>(
    scanner: &Scanner,
    root: &Path,
    style: OutputStyle,
    out: &mut W,
) -> ScanResult<ScanReport> {
    let report = scanner.scan(root)?;

    match style {
        OutputStyle::Json => writeln!(out, "{}", to_json(&report)?)?,
        OutputStyle::Wiki | OutputStyle::Plain => {
            out.write_all(render(&report.artifacts, style).as_bytes())?;
        }
    }
    out.flush()?;

    Ok(report)
}
