//! Stitch - assemble a directory tree into one Markdown document

pub mod config;
pub mod error;
pub mod file_utils;
pub mod language;
pub mod output;
pub mod pipeline;
pub mod processor;
pub mod rules;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{Config, RunOptions};
pub use error::{Error, Result};
pub use output::{DocumentHeader, Section, assemble, path_to_anchor};
pub use pipeline::{Document, RunSummary, build_document, list_files, run};
pub use processor::{Degradation, ProcessedFile, process};
pub use rules::{Decision, RuleScope, Ruleset};
pub use tree::{FileDescriptor, PreambleCandidate, Walker, find_preamble};
