//! Directory tree walking
//!
//! This module provides the two walks over a scan root:
//!
//! - `Walker`: collects every file the ruleset includes, sorted by path
//! - `find_preamble`: locates the single `SYSTEM.txt` preamble file
//!
//! Both share one pruning traversal (`traversal::BaseTraversal`).

mod preamble;
mod traversal;
mod walker;

use std::path::PathBuf;

pub use preamble::{PREAMBLE_FILE_NAME, PreambleCandidate, find_preamble, load_preamble};
pub use walker::Walker;

/// A file selected by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Path relative to the scan root, `/`-separated. Unique within a run.
    pub relative_path: String,
    pub absolute_path: PathBuf,
}

impl FileDescriptor {
    pub fn new(relative_path: impl Into<String>, absolute_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            absolute_path: absolute_path.into(),
        }
    }

    /// Final path segment.
    pub fn file_name(&self) -> &str {
        crate::rules::base_name(&self.relative_path)
    }
}
