//! File-based implementation of LedgerRepository
//!
//! The whole ledger lives in one JSON file inside the data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use freightbook_domain::repository::LedgerRepository;
use freightbook_types::{Entry, Error, SlotError};

use super::codec::{decode_rows, encode_rows, recover};

/// File name of the ledger slot
pub const SLOT_FILE_NAME: &str = "transport_billing_rows_v2.json";

/// File-based ledger slot
pub struct FileLedgerRepository {
    slot_path: PathBuf,
}

impl FileLedgerRepository {
    /// Open the slot inside `store_dir`, creating the directory if needed
    pub fn open(store_dir: PathBuf) -> Result<Self, Error> {
        fs::create_dir_all(&store_dir)?;
        Ok(Self {
            slot_path: store_dir.join(SLOT_FILE_NAME),
        })
    }

    /// Path of the slot file
    pub fn slot_path(&self) -> &Path {
        &self.slot_path
    }

    fn temp_path(&self) -> PathBuf {
        self.slot_path.with_extension("json.tmp")
    }
}

impl LedgerRepository for FileLedgerRepository {
    fn load_all(&self) -> Result<Vec<Entry>, Error> {
        let bytes = match fs::read(&self.slot_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let decoded = String::from_utf8(bytes)
            .map_err(|e| SlotError::Corrupted(e.to_string()))
            .and_then(|content| decode_rows(&content));
        Ok(recover(decoded, &self.slot_path.display().to_string()))
    }

    /// Write to a sibling temp file and rename it over the slot
    fn save_all(&self, rows: &[Entry]) -> Result<(), Error> {
        let content = encode_rows(rows)?;
        let temp_path = self.temp_path();
        fs::write(&temp_path, content)?;
        fs::rename(&temp_path, &self.slot_path)?;
        Ok(())
    }
}
