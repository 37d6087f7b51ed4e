//! In-memory implementation of LedgerRepository
//!
//! Holds the serialized ledger in a string slot, so it goes through the same
//! encode/decode path as the file slot.

use std::cell::RefCell;

use freightbook_domain::repository::LedgerRepository;
use freightbook_types::{Entry, Error};

use super::codec::{decode_rows, encode_rows, recover};

/// In-memory ledger slot
#[derive(Debug, Default)]
pub struct MemoryLedgerRepository {
    slot: RefCell<Option<String>>,
}

impl MemoryLedgerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with raw content
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(content.into())),
        }
    }

    /// Raw slot content, `None` if never written
    pub fn content(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl LedgerRepository for MemoryLedgerRepository {
    fn load_all(&self) -> Result<Vec<Entry>, Error> {
        match self.slot.borrow().as_deref() {
            Some(content) => Ok(recover(decode_rows(content), "memory")),
            None => Ok(Vec::new()),
        }
    }

    fn save_all(&self, rows: &[Entry]) -> Result<(), Error> {
        let content = encode_rows(rows)?;
        *self.slot.borrow_mut() = Some(content);
        Ok(())
    }
}
