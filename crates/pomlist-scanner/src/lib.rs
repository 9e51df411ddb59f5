//! pomlist scanner - Maven project discovery
//!
//! Walks a directory tree, finds Maven project roots by their `pom.xml`
//! descriptor and collects each project's `artifactId`.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc
)]

pub mod error;
pub mod extract;
pub mod output;
pub mod report;
pub mod scan;
pub mod types;

pub use error::{DescriptorError, ScanError, ScanResult};
pub use extract::{find_project, parse_artifact_id};
pub use report::ScanReport;
pub use scan::{find_projects, Scanner};
pub use types::{ArtifactId, DescriptorFailure, ExclusionMode, OutputStyle};
