//! Infrastructure layer - persistence slot implementations

pub mod persistence;
