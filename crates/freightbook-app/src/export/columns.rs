//! Column mapping from ledger entries to spreadsheet rows

use chrono::{DateTime, SecondsFormat, Utc};
use freightbook_types::{Entry, EntryField, ExportError, FieldValue, Result};

/// One spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Raw value, not currency formatted
    Number(f64),
}

/// One exported column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportColumn {
    Field(EntryField),
    GstAmount,
    Subtotal,
    Bill,
    Payable,
    Pending,
    CreatedAt,
    UpdatedAt,
}

impl ExportColumn {
    /// Columns in sheet order
    pub const ALL: [ExportColumn; 28] = [
        ExportColumn::Field(EntryField::LrNo),
        ExportColumn::Field(EntryField::TruckNo),
        ExportColumn::Field(EntryField::PanNo),
        ExportColumn::Field(EntryField::PanName),
        ExportColumn::Field(EntryField::BankDetail),
        ExportColumn::Field(EntryField::TransportPo),
        ExportColumn::Field(EntryField::SupplyPo),
        ExportColumn::Field(EntryField::Qty),
        ExportColumn::Field(EntryField::Rate),
        ExportColumn::Field(EntryField::UnloadingWeight),
        ExportColumn::Field(EntryField::Freight),
        ExportColumn::Field(EntryField::Gst),
        ExportColumn::GstAmount,
        ExportColumn::Subtotal,
        ExportColumn::Bill,
        ExportColumn::Field(EntryField::AdvanceBunker),
        ExportColumn::Field(EntryField::Diesel),
        ExportColumn::Field(EntryField::Advance),
        ExportColumn::Field(EntryField::Allowance),
        ExportColumn::Field(EntryField::Shortage),
        ExportColumn::Field(EntryField::ShortageKg),
        ExportColumn::Field(EntryField::Tds),
        ExportColumn::Payable,
        ExportColumn::Field(EntryField::PaidBalance),
        ExportColumn::Pending,
        ExportColumn::Field(EntryField::Notes),
        ExportColumn::CreatedAt,
        ExportColumn::UpdatedAt,
    ];

    /// Header label
    pub fn label(&self) -> &'static str {
        match self {
            ExportColumn::Field(field) => field.label(),
            ExportColumn::GstAmount => "GST Amount",
            ExportColumn::Subtotal => "Subtotal",
            ExportColumn::Bill => "Bill",
            ExportColumn::Payable => "Payable Amount",
            ExportColumn::Pending => "Pending",
            ExportColumn::CreatedAt => "Created At",
            ExportColumn::UpdatedAt => "Updated At",
        }
    }

    /// Column width in characters: label plus padding, at least 12
    pub fn width(&self) -> usize {
        (self.label().chars().count() + 2).max(12)
    }

    pub fn cell(&self, entry: &Entry) -> Cell {
        match self {
            ExportColumn::Field(field) => match entry.input.get(*field) {
                FieldValue::Text(s) => Cell::Text(s.to_string()),
                FieldValue::Number(n) => Cell::Number(n),
            },
            ExportColumn::GstAmount => Cell::Number(entry.amounts.gst_amount),
            ExportColumn::Subtotal => Cell::Number(entry.amounts.subtotal),
            ExportColumn::Bill => Cell::Number(entry.amounts.bill),
            ExportColumn::Payable => Cell::Number(entry.amounts.payable),
            ExportColumn::Pending => Cell::Number(entry.amounts.pending),
            ExportColumn::CreatedAt => timestamp_cell(entry.created_at),
            ExportColumn::UpdatedAt => timestamp_cell(entry.updated_at),
        }
    }
}

fn timestamp_cell(ts: Option<DateTime<Utc>>) -> Cell {
    Cell::Text(
        ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
            .unwrap_or_default(),
    )
}

/// Project the ledger to one row of cells per entry.
///
/// Fails with [`ExportError::Empty`] when there is nothing to export.
pub fn project(rows: &[Entry]) -> Result<Vec<Vec<Cell>>> {
    if rows.is_empty() {
        return Err(ExportError::Empty.into());
    }
    Ok(rows
        .iter()
        .map(|entry| ExportColumn::ALL.iter().map(|c| c.cell(entry)).collect())
        .collect())
}
