//! Error types for the few fallible canvas operations.
//!
//! Pointer and toolbar handling never fails: invalid gestures are no-ops.
//! Only decoding uploads, reading configuration, and parsing item snapshots
//! can return an error.

use thiserror::Error;

/// Failure to turn uploaded bytes into an image item.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UploadError {
    #[error("uploaded file is empty")]
    Empty,
    #[error("unsupported image format: {file_name}")]
    UnsupportedFormat { file_name: String },
}

/// Invalid canvas configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("inconsistent configuration: {0}")]
    Inconsistent(String),
}

/// Top-level error for the canvas crate.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid item snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
