//! Billing calculation for ledger entries
//!
//! Amounts are derived in dependency order:
//!
//! ```text
//! subtotal  = qty * rate + freight
//! gstAmount = subtotal * gst / 100
//! bill      = round2(subtotal + gstAmount)
//! payable   = round2(bill - deductions)
//! pending   = round2(payable - paidBalance)
//! ```
//!
//! Negative inputs are accepted and flow through the arithmetic unchanged.
//! Finite but huge inputs can overflow to infinity. Such amounts are returned
//! as computed, but the JSON slot stores them as `null`, so they read back
//! as 0 (see [`BillingAmounts::is_finite`]).

use freightbook_types::{BillingAmounts, CalculatedEntry, EntryInput};

/// Round to two decimal places, half up.
///
/// The value is nudged by `f64::EPSILON` first so that amounts such as
/// `1.005` land on the side their decimal spelling suggests.
pub fn round2(value: f64) -> f64 {
    ((value + f64::EPSILON) * 100.0 + 0.5).floor() / 100.0
}

/// Sum of charges taken off the bill.
///
/// Shortage in weight is informational and not deducted.
pub fn deductions(input: &EntryInput) -> f64 {
    input.advance_bunker
        + input.diesel
        + input.advance
        + input.allowance
        + input.tds
        + input.shortage
}

pub fn calculate_amounts(input: &EntryInput) -> BillingAmounts {
    let subtotal = input.qty * input.rate + input.freight;
    let gst_amount = subtotal * (input.gst / 100.0);
    let bill = round2(subtotal + gst_amount);
    let payable = round2(bill - deductions(input));
    let pending = round2(payable - input.paid_balance);

    BillingAmounts {
        subtotal,
        gst_amount,
        bill,
        payable,
        pending,
    }
}

/// Attach derived amounts to an input
pub fn calculate(input: EntryInput) -> CalculatedEntry {
    let amounts = calculate_amounts(&input);
    CalculatedEntry { input, amounts }
}
