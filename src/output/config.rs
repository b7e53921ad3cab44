//! Document header configuration

use chrono::{DateTime, SecondsFormat, Utc};

const DEFAULT_TITLE: &str = "Project";

/// Generation metadata shown in the document's title block.
#[derive(Debug, Clone)]
pub struct DocumentHeader {
    /// Name of the scanned project, usually the root directory's name.
    pub title: String,
    pub generated_at: DateTime<Utc>,
    /// Number of sections rendered as placeholders instead of file content.
    pub placeholders: usize,
}

impl DocumentHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            placeholders: 0,
        }
    }

    /// Fix the generation time, for reproducible output.
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    pub fn with_placeholders(mut self, placeholders: usize) -> Self {
        self.placeholders = placeholders;
        self
    }

    pub fn timestamp(&self) -> String {
        self.generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
