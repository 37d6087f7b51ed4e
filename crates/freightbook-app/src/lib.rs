//! Application service layer - config, export, repository wiring

pub mod app;
pub mod config;
pub mod export;
pub mod repository;
