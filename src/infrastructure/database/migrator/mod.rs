//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_types;
mod m20240101_000002_create_categories;
mod m20240101_000003_create_transactions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_types::Migration),
            Box::new(m20240101_000002_create_categories::Migration),
            Box::new(m20240101_000003_create_transactions::Migration),
        ]
    }
}
