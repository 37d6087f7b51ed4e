//! Persistence implementations
//!
//! This module provides implementations of the ledger repository trait.

mod codec;
mod file_ledger_repo;
mod memory_ledger_repo;

pub use codec::{decode_rows, encode_rows};
pub use file_ledger_repo::{FileLedgerRepository, SLOT_FILE_NAME};
pub use memory_ledger_repo::MemoryLedgerRepository;
