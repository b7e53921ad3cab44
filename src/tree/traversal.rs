//! Depth-first traversal shared by the main walker and the preamble search.
//!
//! Both walks prune directories through the same [`Ruleset`]; they differ only
//! in the [`RuleScope`] they pass and in what they do with accepted files.

use std::fs::{self, DirEntry};
use std::path::Path;

use tracing::{debug, warn};

use crate::rules::{RuleScope, Ruleset};

use super::FileDescriptor;

/// Kind of a directory entry after resolving symlinks once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
    Skip,
}

/// Traversal state for one walk.
pub struct BaseTraversal<'a> {
    pub ruleset: &'a Ruleset,
    pub scope: RuleScope,
}

impl<'a> BaseTraversal<'a> {
    pub fn new(ruleset: &'a Ruleset, scope: RuleScope) -> Self {
        Self { ruleset, scope }
    }

    /// Walk `root`, handing every accepted file to `visit`.
    ///
    /// The root itself is never checked against the rules.
    pub fn run<F>(&self, root: &Path, visit: &mut F)
    where
        F: FnMut(FileDescriptor),
    {
        self.walk_dir(root, "", visit);
    }

    fn walk_dir<F>(&self, dir: &Path, relative: &str, visit: &mut F)
    where
        F: FnMut(FileDescriptor),
    {
        let Some(entries) = read_entries(dir) else {
            return;
        };

        for entry in entries {
            let name = entry.file_name().to_string_lossy().into_owned();
            let entry_relative = if relative.is_empty() {
                name
            } else {
                format!("{}/{}", relative, name)
            };

            let is_dir = match entry_kind(&entry) {
                EntryKind::Dir => true,
                EntryKind::File => false,
                EntryKind::Skip => continue,
            };

            if !self
                .ruleset
                .decide_in(&entry_relative, is_dir, self.scope)
                .is_included()
            {
                debug!(path = %entry_relative, is_dir, "excluded");
                continue;
            }

            if is_dir {
                self.walk_dir(&entry.path(), &entry_relative, visit);
            } else {
                visit(FileDescriptor::new(entry_relative, entry.path()));
            }
        }
    }
}

/// List a directory, logging and skipping it when it cannot be read.
fn read_entries(dir: &Path) -> Option<Vec<DirEntry>> {
    let entries = match fs::read_dir(dir) {
        Ok(e) => e,
        Err(e) => {
            warn!(path = %dir.display(), error = %e, "skipping unreadable directory");
            return None;
        }
    };

    let mut listed = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => listed.push(entry),
            Err(e) => warn!(path = %dir.display(), error = %e, "skipping unreadable entry"),
        }
    }
    // Visit order only affects performance predictability; output is sorted later.
    listed.sort_by_key(|e| e.file_name());
    Some(listed)
}

/// Classify an entry. Symlinks to files count as files; symlinks to
/// directories are skipped so a link cycle can never be followed.
fn entry_kind(entry: &DirEntry) -> EntryKind {
    let file_type = match entry.file_type() {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %entry.path().display(), error = %e, "cannot stat entry");
            return EntryKind::Skip;
        }
    };

    if file_type.is_dir() {
        return EntryKind::Dir;
    }
    if file_type.is_file() {
        return EntryKind::File;
    }
    if file_type.is_symlink() {
        return match fs::metadata(entry.path()) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            Ok(meta) if meta.is_dir() => {
                debug!(path = %entry.path().display(), "not following directory symlink");
                EntryKind::Skip
            }
            Ok(_) => EntryKind::Skip,
            Err(e) => {
                debug!(path = %entry.path().display(), error = %e, "dangling symlink");
                EntryKind::Skip
            }
        };
    }
    EntryKind::Skip
}
