//! Error types for the pomlist scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur during scanning
#[derive(Error, Debug)]
pub enum ScanError {
    /// Directory traversal failed
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A project descriptor could not be read or understood
    #[error("Failed to parse {}: {source}", path.display())]
    Descriptor {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },

    /// Failed to serialize the report
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single `pom.xml` yielded no artifact identifier
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("cannot read descriptor: {0}")]
    Read(#[from] std::io::Error),

    #[error("unsupported encoding: {0}")]
    UnknownEncoding(String),

    #[error("not valid {encoding}")]
    Decode { encoding: &'static str },

    #[error("malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("no artifactId element under the project root")]
    MissingArtifactId,
}
