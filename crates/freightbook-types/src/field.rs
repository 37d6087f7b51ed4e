//! Input field catalogue and form-value coercion

use serde::{Deserialize, Serialize};

/// Kind of value an input field carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// One user-entered field of a billing entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryField {
    LrNo,
    TruckNo,
    PanNo,
    PanName,
    BankDetail,
    TransportPo,
    SupplyPo,
    Qty,
    Rate,
    UnloadingWeight,
    Freight,
    Gst,
    AdvanceBunker,
    Diesel,
    Advance,
    Allowance,
    Shortage,
    ShortageKg,
    Tds,
    PaidBalance,
    Notes,
}

impl EntryField {
    /// All input fields in form order
    pub const ALL: [EntryField; 21] = [
        EntryField::LrNo,
        EntryField::TruckNo,
        EntryField::PanNo,
        EntryField::PanName,
        EntryField::BankDetail,
        EntryField::TransportPo,
        EntryField::SupplyPo,
        EntryField::Qty,
        EntryField::Rate,
        EntryField::UnloadingWeight,
        EntryField::Freight,
        EntryField::Gst,
        EntryField::AdvanceBunker,
        EntryField::Diesel,
        EntryField::Advance,
        EntryField::Allowance,
        EntryField::Shortage,
        EntryField::ShortageKg,
        EntryField::Tds,
        EntryField::PaidBalance,
        EntryField::Notes,
    ];

    /// Key used in the persisted JSON rows
    pub fn key(&self) -> &'static str {
        match self {
            EntryField::LrNo => "lrNo",
            EntryField::TruckNo => "truckNo",
            EntryField::PanNo => "panNo",
            EntryField::PanName => "panName",
            EntryField::BankDetail => "bankDetail",
            EntryField::TransportPo => "transportPo",
            EntryField::SupplyPo => "supplyPo",
            EntryField::Qty => "qty",
            EntryField::Rate => "rate",
            EntryField::UnloadingWeight => "unloadingWeight",
            EntryField::Freight => "freight",
            EntryField::Gst => "gst",
            EntryField::AdvanceBunker => "advanceBunker",
            EntryField::Diesel => "diesel",
            EntryField::Advance => "advance",
            EntryField::Allowance => "allowance",
            EntryField::Shortage => "shortage",
            EntryField::ShortageKg => "shortageKg",
            EntryField::Tds => "tds",
            EntryField::PaidBalance => "paidBalance",
            EntryField::Notes => "notes",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            EntryField::LrNo => "LR No",
            EntryField::TruckNo => "Truck No",
            EntryField::PanNo => "PAN No",
            EntryField::PanName => "PAN Name",
            EntryField::BankDetail => "Bank Detail",
            EntryField::TransportPo => "Transportation PO No",
            EntryField::SupplyPo => "Supply PO No",
            EntryField::Qty => "Qty",
            EntryField::Rate => "Rate",
            EntryField::UnloadingWeight => "Unloading Weight",
            EntryField::Freight => "Freight",
            EntryField::Gst => "GST %",
            EntryField::AdvanceBunker => "Advance Bunker",
            EntryField::Diesel => "Diesel",
            EntryField::Advance => "Advance",
            EntryField::Allowance => "Allowance",
            EntryField::Shortage => "Shortage (₹)",
            EntryField::ShortageKg => "Shortage (Kg)",
            EntryField::Tds => "TDS (₹)",
            EntryField::PaidBalance => "Paid Balance",
            EntryField::Notes => "Notes",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            EntryField::LrNo
            | EntryField::TruckNo
            | EntryField::PanNo
            | EntryField::PanName
            | EntryField::BankDetail
            | EntryField::TransportPo
            | EntryField::SupplyPo
            | EntryField::Notes => FieldKind::Text,
            _ => FieldKind::Number,
        }
    }
}

impl std::fmt::Display for EntryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Coerce raw form text to a number.
///
/// Empty, non-numeric and non-finite input becomes 0.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Coerce raw form text to a text field value
pub fn coerce_text(raw: &str) -> String {
    raw.trim().to_string()
}
