//! Infrastructure layer - external concerns

pub mod database;

pub use database::repositories::SeaOrmRepositoryProvider;
pub use database::{init_database, run_migrations, DatabaseConfig, PoolConfig};
