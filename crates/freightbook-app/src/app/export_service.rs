//! Export Service - writes the current ledger to a dated spreadsheet
//!
//! 1. Read the full ledger from the store
//! 2. Refuse an empty ledger
//! 3. Resolve the output path (explicit, or dated name in the export dir)
//! 4. Write the spreadsheet

use std::path::PathBuf;

use chrono::NaiveDate;
use freightbook_domain::repository::LedgerRepository;
use freightbook_domain::service::LedgerStore;
use freightbook_types::Result;

use crate::config::Config;
use crate::export::{default_file_name, export_rows, ExportFormat};

/// Options for an export
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Explicit output path; a dated name in the export dir when absent
    pub output: Option<PathBuf>,

    pub format: ExportFormat,
}

impl ExportOptions {
    /// Path the export will be written to
    pub fn resolve_path(&self, config: &Config, today: NaiveDate) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => config
                .export_dir()
                .join(default_file_name(today, self.format)),
        }
    }
}

/// Export the whole ledger and return the written path
pub fn export_ledger<R: LedgerRepository>(
    store: &LedgerStore<R>,
    config: &Config,
    options: &ExportOptions,
    today: NaiveDate,
) -> Result<PathBuf> {
    let rows = store.list()?;
    let path = options.resolve_path(config, today);

    if let Some(parent) = path.parent() {
        if !rows.is_empty() && !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    export_rows(&rows, &path, options.format)?;
    Ok(path)
}
