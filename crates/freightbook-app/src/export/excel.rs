//! Excel export functionality

use freightbook_types::{Entry, Error, ExportError, Result};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::Path;
use tracing::info;

use super::columns::{project, Cell, ExportColumn};

/// Name of the single worksheet
pub const SHEET_NAME: &str = "Bills";

fn xlsx_error(e: XlsxError) -> Error {
    ExportError::Excel(e.to_string()).into()
}

/// Export ledger rows to an Excel file.
///
/// Nothing is written when the ledger is empty.
pub fn export_to_excel(rows: &[Entry], output_path: &Path) -> Result<()> {
    let table = project(rows)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    write_bills_sheet(sheet, &table)?;

    workbook.save(output_path).map_err(xlsx_error)?;

    info!(rows = table.len(), path = %output_path.display(), "exported ledger to Excel");
    Ok(())
}

fn write_bills_sheet(sheet: &mut Worksheet, table: &[Vec<Cell>]) -> Result<()> {
    sheet.set_name(SHEET_NAME).map_err(xlsx_error)?;

    let header_format = Format::new().set_bold();

    for (col, column) in ExportColumn::ALL.iter().enumerate() {
        let col = col as u16;
        sheet
            .write_string_with_format(0, col, column.label(), &header_format)
            .map_err(xlsx_error)?;
        sheet
            .set_column_width(col, column.width() as f64)
            .map_err(xlsx_error)?;
    }

    for (row_idx, cells) in table.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col, cell) in cells.iter().enumerate() {
            let col = col as u16;
            match cell {
                // Numbers stay numeric so sheet formulas keep working
                Cell::Number(n) => sheet.write_number(row, col, *n).map_err(xlsx_error)?,
                Cell::Text(s) => sheet.write_string(row, col, s).map_err(xlsx_error)?,
            };
        }
    }

    Ok(())
}
