//! Repository trait definitions for data persistence

use freightbook_types::{Entry, Error};

/// Persistence slot holding the whole ledger
///
/// Implementations read and write the full ordered sequence at once. A slot
/// that is missing or holds corrupt data reads as an empty ledger.
pub trait LedgerRepository {
    /// Load every entry in stored order
    fn load_all(&self) -> Result<Vec<Entry>, Error>;

    /// Replace the stored ledger with `rows`
    fn save_all(&self, rows: &[Entry]) -> Result<(), Error>;
}

impl<R: LedgerRepository + ?Sized> LedgerRepository for &R {
    fn load_all(&self) -> Result<Vec<Entry>, Error> {
        (**self).load_all()
    }

    fn save_all(&self, rows: &[Entry]) -> Result<(), Error> {
        (**self).save_all(rows)
    }
}
