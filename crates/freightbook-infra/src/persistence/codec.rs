//! Serialized form of the ledger slot: a JSON array of row objects

use tracing::warn;

use freightbook_types::{Entry, Result, SlotError};

/// Decode slot content.
///
/// Blank content is an empty ledger. Content that is not a JSON array of
/// objects is reported as [`SlotError::Corrupted`].
pub fn decode_rows(content: &str) -> std::result::Result<Vec<Entry>, SlotError> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(content).map_err(|e| SlotError::Corrupted(e.to_string()))
}

/// Encode rows for the slot
pub fn encode_rows(rows: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Turn a corrupt slot into an empty ledger
pub(crate) fn recover(decoded: std::result::Result<Vec<Entry>, SlotError>, slot: &str) -> Vec<Entry> {
    match decoded {
        Ok(rows) => rows,
        Err(e) => {
            warn!(slot, error = %e, "ignoring corrupt ledger data");
            Vec::new()
        }
    }
}
