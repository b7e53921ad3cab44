//! Error types for fatal failures
//!
//! Per-file and per-directory problems never surface here: they are logged and
//! turned into skips or placeholder sections. Only conditions that make a run
//! meaningless (bad root, bad configuration, failed final write) are errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors that abort a run.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot access '{}': {source}", path.display())]
    RootAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("'{}' is not a directory", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("failed to read config '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to write output '{}': {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
