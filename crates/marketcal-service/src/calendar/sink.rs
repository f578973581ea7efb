use std::path::{Path, PathBuf};

use crate::error::ServiceResult;

/// Destination for a serialized calendar document.
pub trait CalendarSink {
    /// ## Summary
    /// Stores `document`, replacing whatever this sink held before.
    ///
    /// ## Errors
    /// Returns an error if the document cannot be stored.
    fn persist(&mut self, document: &str) -> ServiceResult<()>;

    /// Human-readable location, used in logs and reports.
    fn location(&self) -> String;
}

/// Writes the document to a file, creating parent directories as needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CalendarSink for FileSink {
    fn persist(&mut self, document: &str) -> ServiceResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, document)?;
        tracing::debug!(path = %self.path.display(), bytes = document.len(), "Wrote calendar file");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Keeps every persisted document in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySink {
    pub documents: Vec<String>,
}

impl MemorySink {
    /// The most recently persisted document.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.documents.last().map(String::as_str)
    }
}

impl CalendarSink for MemorySink {
    fn persist(&mut self, document: &str) -> ServiceResult<()> {
        self.documents.push(document.to_owned());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_owned()
    }
}
