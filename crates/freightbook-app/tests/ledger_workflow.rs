//! End-to-end ledger workflow against a file-backed slot

use chrono::NaiveDate;
use freightbook_app::app::{export_ledger, ExportOptions};
use freightbook_app::config::Config;
use freightbook_app::export::ExportFormat;
use freightbook_app::repository::{open_ledger_store, open_ledger_store_at};
use freightbook_domain::repository::LedgerRepository;
use freightbook_infra::persistence::SLOT_FILE_NAME;
use freightbook_types::{EntryField, EntryInput, Error, ExportError, LedgerError};
use tempfile::tempdir;

fn shipment(lr_no: &str) -> EntryInput {
    let mut input = EntryInput::default();
    input.apply_fields([
        (EntryField::LrNo, lr_no),
        (EntryField::TruckNo, " MH12AB1234 "),
        (EntryField::Qty, "10"),
        (EntryField::Rate, "100"),
        (EntryField::Freight, "50"),
        (EntryField::AdvanceBunker, "20"),
        (EntryField::Diesel, "10"),
        (EntryField::Tds, "5"),
        (EntryField::PaidBalance, "900"),
    ]);
    input
}

#[test]
fn test_full_lifecycle() {
    let dir = tempdir().expect("Failed to create temp dir");
    let store = open_ledger_store_at(dir.path().to_path_buf()).expect("Failed to open store");

    let (index, added) = store.add(shipment("LR-1")).unwrap();
    assert_eq!(index, 0);
    assert_eq!(added.input.truck_no, "MH12AB1234");
    assert_eq!(added.amounts.bill, 1176.0);
    assert_eq!(added.amounts.payable, 1141.0);
    assert_eq!(added.amounts.pending, 241.0);

    store.add(shipment("LR-2")).unwrap();
    store.add(shipment("LR-3")).unwrap();

    // Edit: pre-fill from the stored row, change one field
    let mut edit = store.get(1).unwrap().input;
    edit.set(EntryField::PaidBalance, "1141");
    let updated = store.update(1, edit).unwrap();
    assert_eq!(updated.amounts.pending, 0.0);
    assert!(updated.updated_at.is_some());

    store.delete(0).unwrap();
    let rows = store.list().unwrap();
    let lr_nos: Vec<_> = rows.iter().map(|e| e.input.lr_no.as_str()).collect();
    assert_eq!(lr_nos, vec!["LR-2", "LR-3"]);
    assert_eq!(rows[0].amounts.pending, 0.0);

    // A new store over the same directory sees the same ledger
    let reopened = open_ledger_store_at(dir.path().to_path_buf()).unwrap();
    assert_eq!(reopened.list().unwrap(), rows);

    let err = reopened.delete(2).unwrap_err();
    assert!(matches!(
        err,
        Error::Ledger(LedgerError::IndexOutOfRange { index: 2, len: 2 })
    ));

    reopened.clear().unwrap();
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_corrupt_slot_recovers_as_empty() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join(SLOT_FILE_NAME), "<html>not a ledger</html>").unwrap();
    let store = open_ledger_store_at(dir.path().to_path_buf()).unwrap();

    assert!(store.list().unwrap().is_empty());

    store.add(shipment("LR-1")).unwrap();
    assert_eq!(store.repository().load_all().unwrap().len(), 1);
}

#[test]
fn test_export_after_entries() {
    let dir = tempdir().unwrap();
    let config = Config {
        data_dir: Some(dir.path().join("data")),
        export_dir: Some(dir.path().join("exports")),
        ..Config::default()
    };
    let store = open_ledger_store(&config).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

    let options = ExportOptions {
        output: None,
        format: ExportFormat::Csv,
    };
    let err = export_ledger(&store, &config, &options, today).unwrap_err();
    assert!(matches!(err, Error::Export(ExportError::Empty)));

    store.add(shipment("LR-1")).unwrap();
    let path = export_ledger(&store, &config, &options, today).unwrap();
    assert!(path.ends_with("transport_bills_2024-05-01.csv"));

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert!(lines.next().unwrap().starts_with("LR No,Truck No,PAN No"));
    assert!(lines.next().unwrap().starts_with("LR-1,MH12AB1234,"));
    assert_eq!(lines.next(), None);
}
