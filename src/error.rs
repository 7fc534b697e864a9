//! Custom error types for whitebg.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the whitebg library.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file is missing or could not be decoded.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output file could not be encoded or written.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

/// Result type alias for whitebg operations.
pub type Result<T> = std::result::Result<T, Error>;
