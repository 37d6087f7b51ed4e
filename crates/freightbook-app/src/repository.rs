//! Repository adapters for persistence layer

use std::path::PathBuf;

use freightbook_domain::service::LedgerStore;
use freightbook_infra::persistence::FileLedgerRepository;
use freightbook_types::Result;

use crate::config::Config;

/// Open the file-based ledger slot
pub fn open_ledger_repo(config: &Config) -> Result<FileLedgerRepository> {
    let data_dir = config.data_dir()?;
    FileLedgerRepository::open(data_dir)
}

/// Open the ledger store over the configured slot
pub fn open_ledger_store(config: &Config) -> Result<LedgerStore<FileLedgerRepository>> {
    Ok(LedgerStore::new(open_ledger_repo(config)?))
}

/// Open the ledger store at a custom directory
pub fn open_ledger_store_at(data_dir: PathBuf) -> Result<LedgerStore<FileLedgerRepository>> {
    Ok(LedgerStore::new(FileLedgerRepository::open(data_dir)?))
}
