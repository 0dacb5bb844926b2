//! Export orchestration: items -> CSV -> filename -> sink.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use estate_inventory::InventoryStore;

use crate::config::ExportConfig;
use crate::csv::{export_filename, export_to_csv};
use crate::error::ExportError;
use crate::sink::{DownloadSink, FileSink};

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub filename: String,
    pub item_count: usize,
    pub bytes: usize,
}

/// Hands CSV exports of an inventory to a download sink.
///
/// The store is only read; a failed export leaves it untouched.
#[derive(Debug)]
pub struct ExportService<S> {
    config: ExportConfig,
    sink: S,
}

impl ExportService<FileSink> {
    /// File-backed service writing into `config.output_dir`.
    pub fn to_files(config: ExportConfig) -> Self {
        let sink = FileSink::new(config.output_dir.clone());
        Self::new(config, sink)
    }

    /// File-backed service configured from `ESTATE_EXPORT_*` variables.
    pub fn from_env() -> Self {
        Self::to_files(ExportConfig::from_env())
    }
}

impl<S: DownloadSink> ExportService<S> {
    pub fn new(config: ExportConfig, sink: S) -> Self {
        Self { config, sink }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Export the store's current contents, named after today's date.
    pub fn export(&mut self, store: &InventoryStore) -> Result<ExportReport, ExportError> {
        self.export_on(store, Local::now().date_naive())
    }

    pub fn export_on(
        &mut self,
        store: &InventoryStore,
        date: NaiveDate,
    ) -> Result<ExportReport, ExportError> {
        let items = store.list_items();
        let contents = export_to_csv(items);
        let filename = export_filename(&self.config.file_prefix, date);

        if let Err(err) = self.sink.deliver(&filename, &contents) {
            tracing::error!(error = %err, filename = %filename, "export failed");
            return Err(err);
        }

        let report = ExportReport {
            filename,
            item_count: items.len(),
            bytes: contents.len(),
        };
        tracing::info!(
            filename = %report.filename,
            item_count = report.item_count,
            bytes = report.bytes,
            "inventory exported"
        );
        Ok(report)
    }
}
