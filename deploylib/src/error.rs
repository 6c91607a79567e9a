//! Error types for deploylib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving or executing a deployment
#[derive(Error, Debug)]
pub enum DeployError {
    /// Source directory does not exist (or is not a directory)
    #[error("could not find project directory at '{0}'")]
    SourceNotFound(PathBuf),

    /// No source given and root auto-detection came up empty
    #[error("could not find project directory automatically; please specify a [source]")]
    SourceUndetectable,

    /// Destination already exists; deploy never overwrites or merges
    #[error("'{0}' already exists! Please remove it before deploying")]
    DestinationExists(PathBuf),

    /// The resolved ignore-file path does not exist
    #[error("could not find ignore file at '{0}'")]
    IgnoreFileNotFound(PathBuf),

    /// Failed to read the ignore file
    #[error("failed to read ignore file '{path}': {source}")]
    IgnoreFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An I/O error partway through the copy; entries already copied stay on disk
    #[error("failed to copy '{path}': {source}")]
    CopyFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to traverse the source tree
    #[error("failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
