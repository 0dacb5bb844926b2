//! CSV export of an estate inventory.
//!
//! Serialization is pure ([`export_to_csv`]); handing the document to the
//! outside world goes through a [`DownloadSink`] owned by an
//! [`ExportService`].

pub mod config;
pub mod csv;
pub mod error;
pub mod service;
pub mod sink;

pub use config::ExportConfig;
pub use csv::{CSV_HEADER, PHOTO_SEPARATOR, escape_field, export_filename, export_to_csv};
pub use error::{EXPORT_FAILURE_MESSAGE, ExportError};
pub use service::{ExportReport, ExportService};
pub use sink::{Download, DownloadSink, FileSink, MemorySink};
