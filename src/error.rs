//! Error types for submission scoring.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for submission scoring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while scoring a submission.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A file or archive could not be opened or read.
    #[error("I/O error: {path}: {source}")]
    Io {
        /// Path to the resource that could not be accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A resource is not a valid image in a supported format.
    #[error("Image decode failed: {resource}: {reason}")]
    Decode {
        /// Description of the resource (file path or archive entry).
        resource: String,
        /// Reason for the failure.
        reason: String,
    },

    /// The submission archive is not a valid ZIP container.
    #[error("Archive error: {path}: {reason}")]
    Archive {
        /// Path to the archive.
        path: PathBuf,
        /// Reason for the failure.
        reason: String,
    },

    /// A required entry was absent from the submission archive.
    #[error("Submission is missing required entry {name:?} (phase {phase}, {subset} subset)")]
    MissingSubmissionFile {
        /// Phase codename being scored.
        phase: String,
        /// Evaluation subset (`public` or `private`).
        subset: String,
        /// Expected base filename of the entry.
        name: String,
    },

    /// Compared tensors differ in shape.
    #[error("Dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        /// Expected shape (channels, height, width).
        expected: (usize, usize, usize),
        /// Actual shape (channels, height, width).
        actual: (usize, usize, usize),
    },

    /// A metric is undefined for the given inputs.
    #[error("Metric {metric} undefined for input: {reason}")]
    DegenerateComparison {
        /// Name of the metric that failed.
        metric: String,
        /// Reason the comparison is degenerate.
        reason: String,
    },

    /// Phase codename is not one of the recognized phases.
    #[error("Unknown phase codename: {0:?}")]
    UnknownPhase(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
