//! Output formatting module

use freightbook_types::{BillingAmounts, Entry, EntryField, FieldValue, OutputFormat, Result};

pub fn output_ledger(output_format: OutputFormat, rows: &[Entry]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("No entries.");
        return Ok(());
    }

    println!(
        "{:>4}  {:<12} {:<14} {:>10} {:>10} {:>10} {:>6} {:>12} {:>12} {:>12} {:>12}",
        "#", "LR No", "Truck No", "Qty", "Rate", "Freight", "GST%", "Bill", "Payable", "Paid", "Pending"
    );
    println!("{}", "-".repeat(128));
    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>4}  {:<12} {:<14} {:>10.2} {:>10.2} {:>10.2} {:>6.2} {:>12} {:>12} {:>12} {:>12}",
            i + 1,
            r.input.lr_no,
            r.input.truck_no,
            r.input.qty,
            r.input.rate,
            r.input.freight,
            r.input.gst,
            rupees(r.amounts.bill),
            rupees(r.amounts.payable),
            rupees(r.input.paid_balance),
            rupees(r.amounts.pending),
        );
    }

    Ok(())
}

pub fn output_entry(output_format: OutputFormat, row: usize, entry: &Entry) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(entry)?);
        return Ok(());
    }

    println!("\nEntry #{}", row);
    println!("==========");
    for field in EntryField::ALL {
        match entry.input.get(field) {
            FieldValue::Text(s) => println!("{:<22}{}", format!("{}:", field.label()), s),
            FieldValue::Number(n) => println!("{:<22}{:.2}", format!("{}:", field.label()), n),
        }
    }

    println!("\n--- Calculated ---");
    println!("{:<22}{}", "Subtotal:", rupees(entry.amounts.subtotal));
    println!("{:<22}{}", "GST Amount:", rupees(entry.amounts.gst_amount));
    println!("{:<22}{}", "Bill:", rupees(entry.amounts.bill));
    println!("{:<22}{}", "Payable Amount:", rupees(entry.amounts.payable));
    println!("{:<22}{}", "Pending:", rupees(entry.amounts.pending));

    println!();
    if let Some(ts) = entry.created_at {
        println!("{:<22}{}", "Created At:", ts.to_rfc3339());
    }
    if let Some(ts) = entry.updated_at {
        println!("{:<22}{}", "Updated At:", ts.to_rfc3339());
    }

    Ok(())
}

pub fn output_summary(output_format: OutputFormat, amounts: &BillingAmounts) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(amounts)?);
    } else {
        println!("{}", amounts);
        println!("Pending: {}", rupees(amounts.pending));
    }
    Ok(())
}

fn rupees(amount: f64) -> String {
    format!("₹{:.2}", amount)
}
