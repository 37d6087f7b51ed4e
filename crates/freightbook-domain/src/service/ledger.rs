//! Ledger store: ordered billing entries over a persistence slot
//!
//! The store keeps no rows in memory between calls. Every operation loads
//! the full ledger from the repository, applies its change and writes the
//! full ledger back. Entries are addressed by their 0-based position in the
//! persisted sequence, so callers must re-read [`LedgerStore::list`] before
//! trusting an index captured earlier.

use chrono::Utc;
use tracing::{debug, warn};

use freightbook_types::{CalculatedEntry, Entry, EntryInput, LedgerError, Result};

use crate::repository::LedgerRepository;
use crate::service::billing::calculate;

/// CRUD operations on the ledger
pub struct LedgerStore<R> {
    repo: R,
}

impl<R: LedgerRepository> LedgerStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Underlying repository
    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Load the ledger, apply `mutate` and save the result.
    ///
    /// If `mutate` fails nothing is written.
    fn transact<T, F>(&self, mutate: F) -> Result<T>
    where
        F: FnOnce(&mut Vec<Entry>) -> Result<T>,
    {
        let mut rows = self.repo.load_all()?;
        let out = mutate(&mut rows)?;
        self.repo.save_all(&rows)?;
        Ok(out)
    }

    /// Calculate amounts for `input` and append it as a new entry.
    ///
    /// Returns the entry with the index it was stored at.
    pub fn add(&self, input: EntryInput) -> Result<(usize, Entry)> {
        let entry = Entry::new(checked_calculate(input), Utc::now());
        self.transact(|rows| {
            let index = rows.len();
            rows.push(entry.clone());
            debug!(index, len = rows.len(), "entry added");
            Ok((index, entry))
        })
    }

    /// Replace the fields of the entry at `index` with recalculated `input`.
    ///
    /// Creation time and keys unknown to this version are kept.
    pub fn update(&self, index: usize, input: EntryInput) -> Result<Entry> {
        let calculated = checked_calculate(input);
        self.transact(|rows| {
            let len = rows.len();
            let entry = rows
                .get_mut(index)
                .ok_or(LedgerError::IndexOutOfRange { index, len })?;
            entry.merge(calculated, Utc::now());
            debug!(index, len, "entry updated");
            Ok(entry.clone())
        })
    }

    /// Remove the entry at `index`, shifting later entries down by one
    pub fn delete(&self, index: usize) -> Result<Entry> {
        self.transact(|rows| {
            let len = rows.len();
            if index >= len {
                return Err(LedgerError::IndexOutOfRange { index, len }.into());
            }
            let removed = rows.remove(index);
            debug!(index, len = rows.len(), "entry deleted");
            Ok(removed)
        })
    }

    /// Remove every entry
    pub fn clear(&self) -> Result<()> {
        self.transact(|rows| {
            debug!(removed = rows.len(), "ledger cleared");
            rows.clear();
            Ok(())
        })
    }

    /// All entries in stored order
    pub fn list(&self) -> Result<Vec<Entry>> {
        self.repo.load_all()
    }

    /// The entry at `index`
    pub fn get(&self, index: usize) -> Result<Entry> {
        let mut rows = self.repo.load_all()?;
        let len = rows.len();
        if index >= len {
            return Err(LedgerError::IndexOutOfRange { index, len }.into());
        }
        Ok(rows.swap_remove(index))
    }

    /// Number of stored entries
    pub fn len(&self) -> Result<usize> {
        Ok(self.repo.load_all()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

fn checked_calculate(input: EntryInput) -> CalculatedEntry {
    let calculated = calculate(input);
    if !calculated.amounts.is_finite() {
        warn!(amounts = ?calculated.amounts, "amounts overflowed; they will be stored as 0");
    }
    calculated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::billing::calculate_amounts;
    use freightbook_types::Error;
    use std::cell::{Cell, RefCell};

    /// Slot that counts writes
    #[derive(Default)]
    struct VecRepository {
        rows: RefCell<Vec<Entry>>,
        saves: Cell<usize>,
    }

    impl LedgerRepository for VecRepository {
        fn load_all(&self) -> Result<Vec<Entry>> {
            Ok(self.rows.borrow().clone())
        }

        fn save_all(&self, rows: &[Entry]) -> Result<()> {
            *self.rows.borrow_mut() = rows.to_vec();
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    fn input(lr_no: &str, qty: f64) -> EntryInput {
        EntryInput {
            lr_no: lr_no.to_string(),
            qty,
            rate: 100.0,
            freight: 50.0,
            ..EntryInput::default()
        }
    }

    fn store_with(lr_nos: &[&str]) -> LedgerStore<VecRepository> {
        let store = LedgerStore::new(VecRepository::default());
        for (i, lr_no) in lr_nos.iter().enumerate() {
            store.add(input(lr_no, (i + 1) as f64)).unwrap();
        }
        store
    }

    fn lr_nos<R: LedgerRepository>(store: &LedgerStore<R>) -> Vec<String> {
        store
            .list()
            .unwrap()
            .into_iter()
            .map(|e| e.input.lr_no)
            .collect()
    }

    #[test]
    fn test_add_appends_with_amounts() {
        let store = store_with(&["LR-1"]);
        let raw = input("LR-2", 10.0);
        let expected = calculate_amounts(&raw);

        let (index, added) = store.add(raw).unwrap();
        let rows = store.list().unwrap();

        assert_eq!(index, 1);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].amounts, expected);
        assert_eq!(rows[1], added);
        assert!(added.created_at.is_some());
        assert!(added.updated_at.is_none());
    }

    #[test]
    fn test_update_overlays_and_recalculates() {
        let store = store_with(&["LR-1", "LR-2", "LR-3"]);
        let before = store.list().unwrap();

        let mut patch = before[1].input.clone();
        patch.qty = 20.0;
        patch.paid_balance = 500.0;
        let updated = store.update(1, patch.clone()).unwrap();

        let after = store.list().unwrap();
        assert_eq!(after.len(), 3);
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1], updated);
        assert_eq!(after[1].input, patch);
        assert_eq!(after[1].amounts, calculate_amounts(&patch));
        assert_eq!(after[1].created_at, before[1].created_at);
        assert!(after[1].updated_at.is_some());
    }

    #[test]
    fn test_update_keeps_unknown_keys() {
        let store = store_with(&["LR-1"]);
        let mut rows = store.list().unwrap();
        rows[0]
            .extra
            .insert("vehicleOwner".to_string(), "Ramesh".into());
        store.repository().save_all(&rows).unwrap();

        store.update(0, input("LR-1b", 3.0)).unwrap();
        let entry = store.get(0).unwrap();
        assert_eq!(entry.input.lr_no, "LR-1b");
        assert_eq!(entry.extra.get("vehicleOwner"), Some(&"Ramesh".into()));
    }

    #[test]
    fn test_delete_shifts_later_entries() {
        let store = store_with(&["LR-1", "LR-2", "LR-3", "LR-4"]);

        let removed = store.delete(1).unwrap();

        assert_eq!(removed.input.lr_no, "LR-2");
        assert_eq!(lr_nos(&store), vec!["LR-1", "LR-3", "LR-4"]);
    }

    #[test]
    fn test_out_of_range_leaves_ledger_unmodified() {
        let store = store_with(&["LR-1", "LR-2"]);
        let before = store.list().unwrap();
        let saves = store.repository().saves.get();

        let err = store.update(2, input("LR-X", 1.0)).unwrap_err();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::IndexOutOfRange { index: 2, len: 2 })
        ));
        let err = store.delete(5).unwrap_err();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::IndexOutOfRange { index: 5, len: 2 })
        ));

        assert_eq!(store.list().unwrap(), before);
        assert_eq!(store.repository().saves.get(), saves);
    }

    #[test]
    fn test_empty_ledger_rejects_index_zero() {
        let store = store_with(&[]);
        assert!(store.update(0, input("LR-1", 1.0)).is_err());
        assert!(store.delete(0).is_err());
        assert!(store.get(0).is_err());
    }

    #[test]
    fn test_clear_empties_ledger() {
        let store = store_with(&["LR-1", "LR-2"]);
        store.clear().unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_order_is_insertion_order() {
        let store = store_with(&["LR-9", "LR-1", "LR-5"]);
        assert_eq!(lr_nos(&store), vec!["LR-9", "LR-1", "LR-5"]);
    }

    #[test]
    fn test_operations_see_external_writes() {
        let store = store_with(&["LR-1"]);
        let mut rows = store.list().unwrap();
        rows.push(rows[0].clone());
        rows[1].input.lr_no = "LR-external".to_string();
        store.repository().save_all(&rows).unwrap();

        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.get(1).unwrap().input.lr_no, "LR-external");
    }

    #[test]
    fn test_add_index_follows_external_writes() {
        let store = store_with(&["LR-1"]);
        let mut rows = store.list().unwrap();
        rows.push(rows[0].clone());
        store.repository().save_all(&rows).unwrap();

        let (index, entry) = store.add(input("LR-3", 1.0)).unwrap();
        assert_eq!(index, 2);
        assert_eq!(store.get(index).unwrap(), entry);
    }

    #[test]
    fn test_overflowed_amounts_are_still_stored() {
        let store = store_with(&[]);
        let huge = EntryInput {
            qty: 1e200,
            rate: 1e200,
            ..EntryInput::blank()
        };

        let (index, entry) = store.add(huge).unwrap();
        assert_eq!(index, 0);
        assert!(!entry.amounts.is_finite());
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_store_over_borrowed_repository() {
        let repo = VecRepository::default();
        LedgerStore::new(&repo).add(input("LR-1", 1.0)).unwrap();
        assert_eq!(repo.rows.borrow().len(), 1);
    }
}
