//! Book catalog models and catalog-source service contracts.

pub mod service;
pub mod types;
