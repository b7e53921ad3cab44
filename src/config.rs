//! Run configuration
//!
//! A [`Config`] is assembled at the boundary (defaults, then an optional JSON
//! config file, then command-line flags), validated once, and then reduced to
//! the immutable [`Ruleset`] the walker and processor consume.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rules::Ruleset;

/// Names ignored when no configuration says otherwise.
pub const DEFAULT_IGNORE: &[&str] = &[
    ".git",
    ".hg",
    ".svn",
    "node_modules",
    "target",
    "__pycache__",
    ".DS_Store",
];

pub const DEFAULT_METADATA_SUFFIX: &str = ".meta";

/// Configuration for one run.
///
/// The serialized form uses camelCase keys; every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Bare names or root-relative paths to exclude.
    pub ignore: Vec<String>,
    pub ignore_extensions: Vec<String>,
    /// When non-empty, only files with these extensions are included.
    pub include_extensions: Vec<String>,
    pub metadata_suffix: String,
    /// Number of parallel workers for content processing.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub jobs: usize,
    /// Search for and prepend a `SYSTEM.txt` preamble.
    pub preamble: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore: DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect(),
            ignore_extensions: Vec::new(),
            include_extensions: Vec::new(),
            metadata_suffix: DEFAULT_METADATA_SUFFIX.to_string(),
            jobs: 0,
            preamble: true,
        }
    }
}

impl Config {
    /// Load a JSON config file. Keys missing from the file keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(text: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Reject values the rules cannot interpret.
    pub fn validate(&self) -> Result<()> {
        if let Some(bad) = self.ignore.iter().find(|n| n.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "ignore entries must not be empty (got {:?})",
                bad
            )));
        }
        for ext in self.ignore_extensions.iter().chain(&self.include_extensions) {
            if ext.contains('/') || ext.contains('\\') {
                return Err(Error::InvalidConfig(format!(
                    "extension {:?} must not contain a path separator",
                    ext
                )));
            }
        }
        if self.metadata_suffix.contains('/') || self.metadata_suffix.contains('\\') {
            return Err(Error::InvalidConfig(format!(
                "metadata suffix {:?} must not contain a path separator",
                self.metadata_suffix
            )));
        }
        Ok(())
    }

    /// Validate and build the ruleset for this configuration.
    pub fn ruleset(&self) -> Result<Ruleset> {
        self.validate()?;
        Ok(Ruleset::new(
            &self.ignore,
            &self.ignore_extensions,
            &self.include_extensions,
            self.metadata_suffix.clone(),
        ))
    }
}

/// Everything a run needs beyond the rules.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub root: PathBuf,
    /// Destination file; `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub config: Config,
}

impl RunOptions {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            output: None,
            config,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }
}
