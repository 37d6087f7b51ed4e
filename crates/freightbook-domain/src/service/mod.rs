//! Domain services

pub mod billing;
pub mod ledger;

pub use billing::{calculate, calculate_amounts, deductions, round2};
pub use ledger::LedgerStore;
