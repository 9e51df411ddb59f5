//! Shared types for the pomlist scanner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// XML namespace of Maven 4.0.0 project descriptors
pub const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// File name of a Maven project descriptor
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// Directory names that never hold a project root
pub const EXCLUDED_NAMES: [&str; 2] = ["src", "target"];

/// The `artifactId` of a Maven project, whitespace-trimmed.
///
/// An empty identifier is possible when the element has no text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactId(String);

impl ArtifactId {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the `src`/`target` exclusion is applied to a directory path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExclusionMode {
    /// Exclude when the full path string contains `src` or `target` anywhere,
    /// so `javasrc-tools` or `retargeted` are excluded too
    #[default]
    Substring,
    /// Exclude only when a path component is exactly `src` or `target`
    Segment,
}

impl ExclusionMode {
    /// Whether `directory` is ruled out as a project root
    pub fn excludes(self, directory: &Path) -> bool {
        match self {
            ExclusionMode::Substring => {
                let full = directory.to_string_lossy();
                EXCLUDED_NAMES.iter().any(|name| full.contains(name))
            }
            ExclusionMode::Segment => directory.components().any(|c| match c {
                Component::Normal(part) => EXCLUDED_NAMES.iter().any(|name| part == *name),
                _ => false,
            }),
        }
    }
}

/// How identifiers are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// `* {{id}}` per line
    #[default]
    Wiki,
    /// Bare identifier per line
    Plain,
    /// Whole report as JSON
    Json,
}

/// A descriptor that was skipped because it could not be parsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DescriptorFailure {
    /// Path to the offending `pom.xml`
    pub path: PathBuf,
    pub reason: String,
}
