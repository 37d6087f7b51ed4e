//! Application use cases

pub mod export_service;

pub use export_service::{export_ledger, ExportOptions};
