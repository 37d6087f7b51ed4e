//! Spreadsheet export of the ledger

pub mod columns;
pub mod csv;
pub mod excel;

pub use self::columns::{project, Cell, ExportColumn};
pub use self::csv::export_to_csv;
pub use self::excel::export_to_excel;

use chrono::NaiveDate;
use freightbook_types::{Entry, Result};
use std::path::Path;

/// Spreadsheet file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }
}

/// File name for an export made on `date`, e.g. `transport_bills_2024-05-01.xlsx`
pub fn default_file_name(date: NaiveDate, format: ExportFormat) -> String {
    format!(
        "transport_bills_{}.{}",
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Write `rows` to `output_path` in the given format
pub fn export_rows(rows: &[Entry], output_path: &Path, format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Xlsx => export_to_excel(rows, output_path),
        ExportFormat::Csv => export_to_csv(rows, output_path),
    }
}
