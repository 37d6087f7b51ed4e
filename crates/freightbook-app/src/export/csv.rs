//! CSV export functionality

use freightbook_types::{Entry, Error, ExportError, Result};
use std::path::Path;
use tracing::info;

use super::columns::{project, Cell, ExportColumn};

fn csv_error(e: ::csv::Error) -> Error {
    ExportError::Csv(e.to_string()).into()
}

/// Export ledger rows to a CSV file with a header row of column labels.
///
/// Nothing is written when the ledger is empty.
pub fn export_to_csv(rows: &[Entry], output_path: &Path) -> Result<()> {
    let table = project(rows)?;

    let mut writer = ::csv::Writer::from_path(output_path).map_err(csv_error)?;
    writer
        .write_record(ExportColumn::ALL.iter().map(|c| c.label()))
        .map_err(csv_error)?;

    for cells in &table {
        let record: Vec<String> = cells
            .iter()
            .map(|cell| match cell {
                Cell::Number(n) => n.to_string(),
                Cell::Text(s) => s.clone(),
            })
            .collect();
        writer.write_record(&record).map_err(csv_error)?;
    }
    writer.flush()?;

    info!(rows = table.len(), path = %output_path.display(), "exported ledger to CSV");
    Ok(())
}
