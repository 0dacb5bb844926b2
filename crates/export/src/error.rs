//! Export-boundary errors.

use std::path::PathBuf;

use thiserror::Error;

/// Message shown to the user whenever an export fails, whatever the cause.
pub const EXPORT_FAILURE_MESSAGE: &str =
    "There was an error exporting your data. Please try again.";

/// Failure to hand a CSV document to its download collaborator.
///
/// Serialization itself cannot fail; only the environment can.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Writing the document to disk failed.
    #[error("failed to write export to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The download collaborator is unavailable.
    #[error("download sink unavailable: {0}")]
    Sink(String),
}

impl ExportError {
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Generic, user-facing description of the failure.
    pub fn user_message(&self) -> &'static str {
        EXPORT_FAILURE_MESSAGE
    }
}
