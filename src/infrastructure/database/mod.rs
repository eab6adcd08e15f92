pub mod entities;
pub mod migrator;
pub mod repositories;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use serde::{Deserialize, Serialize};
use tracing::info;

use migrator::Migrator;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./ledger.db?mode=rwc";

/// Database configuration, the `[database]` section of the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./ledger.db?mode=rwc")
    pub url: String,
    pub pool: PoolConfig,
}

/// Connection pool sizing, `[database.pool]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    /// Idle connections above `min_connections` are closed after this long.
    pub idle_timeout_secs: Option<u64>,
    /// Log every SQL statement sqlx executes.
    pub sqlx_logging: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 8,
            idle_timeout_secs: Some(300),
            sqlx_logging: false,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            pool: PoolConfig::default(),
        }
    }
}

impl DatabaseConfig {
    /// Create config for a SQLite file, created on first connect
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            ..Self::default()
        }
    }

    /// Private in-memory SQLite database.
    ///
    /// Every pooled connection to `sqlite::memory:` would open its own empty
    /// database, so the pool is pinned to a single long-lived connection.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            pool: PoolConfig {
                max_connections: 1,
                min_connections: 1,
                idle_timeout_secs: None,
                ..PoolConfig::default()
            },
        }
    }

    fn connect_options(&self) -> ConnectOptions {
        let mut opts = ConnectOptions::new(self.url.clone());
        opts.max_connections(self.pool.max_connections)
            .min_connections(self.pool.min_connections)
            .connect_timeout(Duration::from_secs(self.pool.connect_timeout_secs))
            .sqlx_logging(self.pool.sqlx_logging);
        if let Some(secs) = self.pool.idle_timeout_secs {
            opts.idle_timeout(Duration::from_secs(secs));
        }
        opts
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database: {}", config.url);
    let db = Database::connect(config.connect_options()).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Apply every pending schema migration
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    info!("Running database migrations...");
    Migrator::up(db, None).await?;
    info!("Migrations complete");
    Ok(())
}

/// Connect to a fresh in-memory database with the schema applied.
pub async fn connect_in_memory() -> Result<DatabaseConnection, DbErr> {
    let db = init_database(&DatabaseConfig::in_memory()).await?;
    run_migrations(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Statement};

    #[test]
    fn sqlite_helper_builds_rwc_url() {
        let cfg = DatabaseConfig::sqlite("/tmp/ledger-test.db");
        assert_eq!(cfg.url, "sqlite:///tmp/ledger-test.db?mode=rwc");
        assert_eq!(cfg.pool, PoolConfig::default());
    }

    #[tokio::test]
    async fn in_memory_database_has_schema() {
        let db = connect_in_memory().await.unwrap();
        let rows = db
            .query_all(Statement::from_string(
                db.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();
        for table in ["categories", "transactions", "types"] {
            assert!(names.iter().any(|n| n == table), "missing table {}", table);
        }
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = connect_in_memory().await.unwrap();
        let res = db
            .execute(Statement::from_string(
                db.get_database_backend(),
                "INSERT INTO categories (name, type_id) VALUES ('Orphan', 99)",
            ))
            .await;
        assert!(res.is_err());
    }
}
