//! Preamble discovery
//!
//! The preamble is a file named [`PREAMBLE_FILE_NAME`] anywhere under the scan
//! root. The search prunes with [`RuleScope::Preamble`] rather than the full
//! rules, so a narrow include list does not hide it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::rules::{RuleScope, Ruleset, base_name};

use super::traversal::BaseTraversal;

/// Exact (case-sensitive) name of the preamble file.
pub const PREAMBLE_FILE_NAME: &str = "SYSTEM.txt";

/// A preamble file found under the scan root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreambleCandidate {
    pub absolute_path: PathBuf,
    pub relative_path: String,
}

impl PreambleCandidate {
    /// Number of path segments, `1` for a file directly under the root.
    pub fn depth(&self) -> usize {
        self.relative_path.split('/').count()
    }
}

/// Find the preamble closest to `root`.
///
/// Candidates are ordered by depth, then by byte-wise relative path.
pub fn find_preamble(root: &Path, ruleset: &Ruleset) -> Option<PreambleCandidate> {
    let mut candidates = Vec::new();
    BaseTraversal::new(ruleset, RuleScope::Preamble).run(root, &mut |file| {
        if base_name(&file.relative_path) == PREAMBLE_FILE_NAME {
            candidates.push(PreambleCandidate {
                absolute_path: file.absolute_path,
                relative_path: file.relative_path,
            });
        }
    });

    candidates.sort_by(|a, b| {
        a.depth()
            .cmp(&b.depth())
            .then_with(|| a.relative_path.cmp(&b.relative_path))
    });

    if candidates.len() > 1 {
        debug!(count = candidates.len(), "multiple preamble candidates");
    }
    let selected = candidates.into_iter().next();
    if let Some(ref c) = selected {
        info!(path = %c.relative_path, "using preamble");
    }
    selected
}

/// Read and trim the preamble. Failures and empty files yield `None`.
pub fn load_preamble(candidate: &PreambleCandidate) -> Option<String> {
    match fs::read_to_string(&candidate.absolute_path) {
        Ok(content) => {
            let trimmed = content.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Err(e) => {
            warn!(path = %candidate.relative_path, error = %e, "cannot read preamble, continuing without it");
            None
        }
    }
}
