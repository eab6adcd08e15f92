//! Application layer: per-entity services over the repository provider

pub mod services;

pub use services::{CategoryService, LedgerServices, TransactionService, TypeService};
