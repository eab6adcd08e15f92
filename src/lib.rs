//! # Ledger Service
//!
//! CRUD HTTP API over three related entities: Types, Categories and
//! Transactions.
//!
//! ## Architecture
//!
//! - **domain**: entities, list query types and repository traits
//! - **application**: one service per entity, applying relation expansion
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: axum handlers, DTOs and the router with Swagger UI
//! - **support**: error type and shutdown signalling

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::http::create_api_router;
