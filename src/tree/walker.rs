//! Walker - collects every included file under a root, sorted by path

use std::path::Path;

use tracing::debug;

use crate::rules::{RuleScope, Ruleset};

use super::FileDescriptor;
use super::traversal::BaseTraversal;

/// Directory walker for the main content pass.
///
/// Directories rejected by the ruleset are pruned before they are listed, so
/// large ignored trees (dependency caches, build output) are never read.
pub struct Walker<'a> {
    ruleset: &'a Ruleset,
}

impl<'a> Walker<'a> {
    pub fn new(ruleset: &'a Ruleset) -> Self {
        Self { ruleset }
    }

    /// Walk `root` and return included files ordered by byte-wise comparison
    /// of their relative paths.
    pub fn walk(&self, root: &Path) -> Vec<FileDescriptor> {
        let mut files = Vec::new();
        BaseTraversal::new(self.ruleset, RuleScope::Full).run(root, &mut |file| files.push(file));

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        debug!(root = %root.display(), count = files.len(), "walk complete");
        files
    }
}
