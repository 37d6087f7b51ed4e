//! Billing entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::field::{coerce_number, coerce_text, EntryField, FieldKind};
use crate::lenient;

/// GST percent of a fresh entry form
pub const DEFAULT_GST_PERCENT: f64 = 12.0;

/// User-entered fields of a billing entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryInput {
    /// Lorry receipt number
    #[serde(default, deserialize_with = "lenient::text")]
    pub lr_no: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub truck_no: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pan_no: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub pan_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub bank_detail: String,
    /// Transportation purchase order number
    #[serde(default, deserialize_with = "lenient::text")]
    pub transport_po: String,
    /// Supply purchase order number
    #[serde(default, deserialize_with = "lenient::text")]
    pub supply_po: String,

    #[serde(default, deserialize_with = "lenient::number")]
    pub qty: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rate: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub unloading_weight: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub freight: f64,
    /// GST percent applied to the subtotal
    #[serde(default, deserialize_with = "lenient::number")]
    pub gst: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub advance_bunker: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub diesel: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub advance: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub allowance: f64,
    /// Shortage charged in currency
    #[serde(default, deserialize_with = "lenient::number")]
    pub shortage: f64,
    /// Shortage in weight, informational only
    #[serde(default, deserialize_with = "lenient::number")]
    pub shortage_kg: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub tds: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub paid_balance: f64,

    #[serde(default, deserialize_with = "lenient::text")]
    pub notes: String,
}

/// A field value read from an `EntryInput`
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
}

impl Default for EntryInput {
    /// A fresh entry form: empty text, zero amounts, GST at 12%
    fn default() -> Self {
        Self {
            gst: DEFAULT_GST_PERCENT,
            ..Self::blank()
        }
    }
}

impl EntryInput {
    /// Every field empty or zero, GST included
    pub fn blank() -> Self {
        Self {
            lr_no: String::new(),
            truck_no: String::new(),
            pan_no: String::new(),
            pan_name: String::new(),
            bank_detail: String::new(),
            transport_po: String::new(),
            supply_po: String::new(),
            qty: 0.0,
            rate: 0.0,
            unloading_weight: 0.0,
            freight: 0.0,
            gst: 0.0,
            advance_bunker: 0.0,
            diesel: 0.0,
            advance: 0.0,
            allowance: 0.0,
            shortage: 0.0,
            shortage_kg: 0.0,
            tds: 0.0,
            paid_balance: 0.0,
            notes: String::new(),
        }
    }

    /// Build an input from raw form values.
    ///
    /// Fields not supplied are empty or zero. Numbers go through
    /// [`coerce_number`], text through [`coerce_text`].
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (EntryField, &'a str)>,
    {
        let mut input = Self::blank();
        input.apply_fields(fields);
        input
    }

    /// Overlay raw form values on this input, leaving other fields untouched
    pub fn apply_fields<'a, I>(&mut self, fields: I)
    where
        I: IntoIterator<Item = (EntryField, &'a str)>,
    {
        for (field, raw) in fields {
            self.set(field, raw);
        }
    }

    /// Set one field from raw form text
    pub fn set(&mut self, field: EntryField, raw: &str) {
        match field.kind() {
            FieldKind::Text => *self.text_mut(field) = coerce_text(raw),
            FieldKind::Number => *self.number_mut(field) = coerce_number(raw),
        }
    }

    /// Read one field
    pub fn get(&self, field: EntryField) -> FieldValue<'_> {
        match field {
            EntryField::LrNo => FieldValue::Text(&self.lr_no),
            EntryField::TruckNo => FieldValue::Text(&self.truck_no),
            EntryField::PanNo => FieldValue::Text(&self.pan_no),
            EntryField::PanName => FieldValue::Text(&self.pan_name),
            EntryField::BankDetail => FieldValue::Text(&self.bank_detail),
            EntryField::TransportPo => FieldValue::Text(&self.transport_po),
            EntryField::SupplyPo => FieldValue::Text(&self.supply_po),
            EntryField::Notes => FieldValue::Text(&self.notes),
            EntryField::Qty => FieldValue::Number(self.qty),
            EntryField::Rate => FieldValue::Number(self.rate),
            EntryField::UnloadingWeight => FieldValue::Number(self.unloading_weight),
            EntryField::Freight => FieldValue::Number(self.freight),
            EntryField::Gst => FieldValue::Number(self.gst),
            EntryField::AdvanceBunker => FieldValue::Number(self.advance_bunker),
            EntryField::Diesel => FieldValue::Number(self.diesel),
            EntryField::Advance => FieldValue::Number(self.advance),
            EntryField::Allowance => FieldValue::Number(self.allowance),
            EntryField::Shortage => FieldValue::Number(self.shortage),
            EntryField::ShortageKg => FieldValue::Number(self.shortage_kg),
            EntryField::Tds => FieldValue::Number(self.tds),
            EntryField::PaidBalance => FieldValue::Number(self.paid_balance),
        }
    }

    fn text_mut(&mut self, field: EntryField) -> &mut String {
        match field {
            EntryField::LrNo => &mut self.lr_no,
            EntryField::TruckNo => &mut self.truck_no,
            EntryField::PanNo => &mut self.pan_no,
            EntryField::PanName => &mut self.pan_name,
            EntryField::BankDetail => &mut self.bank_detail,
            EntryField::TransportPo => &mut self.transport_po,
            EntryField::SupplyPo => &mut self.supply_po,
            _ => &mut self.notes,
        }
    }

    fn number_mut(&mut self, field: EntryField) -> &mut f64 {
        match field {
            EntryField::Qty => &mut self.qty,
            EntryField::Rate => &mut self.rate,
            EntryField::UnloadingWeight => &mut self.unloading_weight,
            EntryField::Freight => &mut self.freight,
            EntryField::Gst => &mut self.gst,
            EntryField::AdvanceBunker => &mut self.advance_bunker,
            EntryField::Diesel => &mut self.diesel,
            EntryField::Advance => &mut self.advance,
            EntryField::Allowance => &mut self.allowance,
            EntryField::Shortage => &mut self.shortage,
            EntryField::ShortageKg => &mut self.shortage_kg,
            EntryField::Tds => &mut self.tds,
            _ => &mut self.paid_balance,
        }
    }
}

/// Amounts derived from an entry's numeric inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAmounts {
    #[serde(default, deserialize_with = "lenient::number")]
    pub subtotal: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub gst_amount: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub bill: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub payable: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub pending: f64,
}

impl BillingAmounts {
    /// Whether every amount survives a JSON round trip unchanged.
    ///
    /// JSON has no infinity or NaN; such amounts are written as `null`
    /// and read back as 0.
    pub fn is_finite(&self) -> bool {
        [self.subtotal, self.gst_amount, self.bill, self.payable, self.pending]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl std::fmt::Display for BillingAmounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Subtotal: ₹{:.2} | GST: ₹{:.2} | Bill: ₹{:.2} | Payable: ₹{:.2}",
            self.subtotal, self.gst_amount, self.bill, self.payable
        )
    }
}

/// An input together with the amounts calculated from it
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatedEntry {
    pub input: EntryInput,
    pub amounts: BillingAmounts,
}

/// One persisted ledger row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(flatten)]
    pub input: EntryInput,

    #[serde(flatten)]
    pub amounts: BillingAmounts,

    /// When the entry was added
    #[serde(
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,

    /// When the entry was last updated, absent until the first update
    #[serde(
        default,
        deserialize_with = "lenient::timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,

    /// Keys this version does not know, written back unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// New entry stamped with its creation time
    pub fn new(calculated: CalculatedEntry, created_at: DateTime<Utc>) -> Self {
        Self {
            input: calculated.input,
            amounts: calculated.amounts,
            created_at: Some(created_at),
            updated_at: None,
            extra: Map::new(),
        }
    }

    /// Overlay recalculated fields, keeping creation time and unknown keys
    pub fn merge(&mut self, calculated: CalculatedEntry, updated_at: DateTime<Utc>) {
        self.input = calculated.input;
        self.amounts = calculated.amounts;
        self.updated_at = Some(updated_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_entry() -> Entry {
        let mut input = EntryInput::default();
        input.lr_no = "LR-101".to_string();
        input.qty = 10.0;
        input.rate = 100.0;
        Entry::new(
            CalculatedEntry {
                input,
                amounts: BillingAmounts {
                    subtotal: 1000.0,
                    gst_amount: 120.0,
                    bill: 1120.0,
                    payable: 1120.0,
                    pending: 1120.0,
                },
            },
            Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_default_input_is_fresh_form() {
        let input = EntryInput::default();
        assert_eq!(input.gst, 12.0);
        assert_eq!(input.qty, 0.0);
        assert!(input.lr_no.is_empty());
    }

    #[test]
    fn test_from_fields_coerces_values() {
        let input = EntryInput::from_fields([
            (EntryField::LrNo, "  LR-7 "),
            (EntryField::Qty, "12.5"),
            (EntryField::Rate, "abc"),
        ]);
        assert_eq!(input.lr_no, "LR-7");
        assert_eq!(input.qty, 12.5);
        assert_eq!(input.rate, 0.0);
        // Missing fields, GST included, read as zero
        assert_eq!(input.gst, 0.0);
    }

    #[test]
    fn test_apply_fields_overlays_only_given_fields() {
        let mut input = EntryInput::default();
        input.truck_no = "KA01".to_string();
        input.apply_fields([(EntryField::Diesel, "250")]);
        assert_eq!(input.diesel, 250.0);
        assert_eq!(input.truck_no, "KA01");
        assert_eq!(input.gst, 12.0);
    }

    #[test]
    fn test_get_reads_every_field() {
        let mut input = EntryInput::blank();
        for field in EntryField::ALL {
            match field.kind() {
                FieldKind::Text => input.set(field, field.key()),
                FieldKind::Number => input.set(field, "7"),
            }
        }
        for field in EntryField::ALL {
            match input.get(field) {
                FieldValue::Text(s) => assert_eq!(s, field.key()),
                FieldValue::Number(n) => assert_eq!(n, 7.0),
            }
        }
    }

    #[test]
    fn test_entry_serializes_with_slot_keys() {
        let value = serde_json::to_value(sample_entry()).unwrap();
        assert_eq!(value["lrNo"], "LR-101");
        assert_eq!(value["qty"], 10.0);
        assert_eq!(value["gstAmount"], 120.0);
        assert!(value["createdAt"].is_string());
        assert!(value.get("updatedAt").is_none());
    }

    #[test]
    fn test_entry_deserializes_leniently() {
        let json = r#"{
            "lrNo": "LR-9",
            "truckNo": 4521,
            "qty": "10",
            "rate": "ten",
            "freight": null,
            "bill": 1176,
            "createdAt": "2024-05-01T10:00:00.000Z",
            "updatedAt": "yesterday"
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.input.lr_no, "LR-9");
        assert_eq!(entry.input.truck_no, "4521");
        assert_eq!(entry.input.qty, 10.0);
        assert_eq!(entry.input.rate, 0.0);
        assert_eq!(entry.input.freight, 0.0);
        assert_eq!(entry.input.gst, 0.0);
        assert_eq!(entry.amounts.bill, 1176.0);
        assert_eq!(
            entry.created_at,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(entry.updated_at, None);
        assert!(entry.extra.is_empty());
    }

    #[test]
    fn test_unknown_keys_round_trip() {
        let json = r#"{"lrNo": "LR-1", "vehicleOwner": "Ramesh", "qty": 3}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.extra.get("vehicleOwner"), Some(&Value::from("Ramesh")));
        assert!(!entry.extra.contains_key("qty"));

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["vehicleOwner"], "Ramesh");
    }

    #[test]
    fn test_merge_keeps_created_at() {
        let mut entry = sample_entry();
        let created = entry.created_at;
        let updated = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let mut input = entry.input.clone();
        input.lr_no = "LR-102".to_string();
        entry.merge(
            CalculatedEntry {
                input,
                amounts: BillingAmounts::default(),
            },
            updated,
        );
        assert_eq!(entry.input.lr_no, "LR-102");
        assert_eq!(entry.created_at, created);
        assert_eq!(entry.updated_at, Some(updated));
    }

    #[test]
    fn test_non_finite_amounts_read_back_as_zero() {
        let amounts = BillingAmounts {
            subtotal: f64::INFINITY,
            gst_amount: f64::NAN,
            bill: 10.0,
            ..BillingAmounts::default()
        };
        assert!(!amounts.is_finite());
        assert!(BillingAmounts::default().is_finite());

        let json = serde_json::to_string(&amounts).unwrap();
        let back: BillingAmounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back.subtotal, 0.0);
        assert_eq!(back.gst_amount, 0.0);
        assert_eq!(back.bill, 10.0);
        assert!(back.is_finite());
    }

    #[test]
    fn test_amounts_summary_line() {
        let amounts = BillingAmounts {
            subtotal: 1050.0,
            gst_amount: 126.0,
            bill: 1176.0,
            payable: 1141.0,
            pending: 241.0,
        };
        assert_eq!(
            amounts.to_string(),
            "Subtotal: ₹1050.00 | GST: ₹126.00 | Bill: ₹1176.00 | Payable: ₹1141.00"
        );
    }
}
