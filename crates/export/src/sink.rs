//! Download collaborators: where a finished CSV document is handed off.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::is_plain_file_prefix;
use crate::error::ExportError;

/// Receives a complete CSV document and a suggested filename.
///
/// Fire-and-forget: nothing flows back into the inventory except success or
/// failure.
pub trait DownloadSink {
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<(), ExportError>;
}

impl<S> DownloadSink for &mut S
where
    S: DownloadSink + ?Sized,
{
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<(), ExportError> {
        (**self).deliver(filename, contents)
    }
}

/// A delivered document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub filename: String,
    pub contents: String,
}

/// Keeps every delivered document in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    downloads: Vec<Download>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn downloads(&self) -> &[Download] {
        &self.downloads
    }

    pub fn last(&self) -> Option<&Download> {
        self.downloads.last()
    }
}

impl DownloadSink for MemorySink {
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<(), ExportError> {
        self.downloads.push(Download {
            filename: filename.to_string(),
            contents: contents.to_string(),
        });
        Ok(())
    }
}

/// Writes each document to `dir/filename`, creating `dir` if needed.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FileSink {
    fn deliver(&mut self, filename: &str, contents: &str) -> Result<(), ExportError> {
        if !is_plain_file_prefix(filename) {
            return Err(ExportError::sink(format!(
                "refusing to write {filename:?} outside {}",
                self.dir.display()
            )));
        }

        fs::create_dir_all(&self.dir).map_err(|source| ExportError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(filename);
        fs::write(&path, contents).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), bytes = contents.len(), "export written");
        Ok(())
    }
}
