//! Domain layer: billing calculation, ledger store, repository traits

pub mod repository;
pub mod service;
