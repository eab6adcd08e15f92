//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::category::CategoryRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::transaction::TransactionRepository;
use crate::domain::type_::TypeRepository;

use super::category_repository::SeaOrmCategoryRepository;
use super::transaction_repository::SeaOrmTransactionRepository;
use super::type_repository::SeaOrmTypeRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let income = repos.types().find_by_id(1).await?;
/// let salary = repos.categories().find_by_id(1, Expand::Parent).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    types: SeaOrmTypeRepository,
    categories: SeaOrmCategoryRepository,
    transactions: SeaOrmTransactionRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            types: SeaOrmTypeRepository::new(db.clone()),
            categories: SeaOrmCategoryRepository::new(db.clone()),
            transactions: SeaOrmTransactionRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn types(&self) -> &dyn TypeRepository {
        &self.types
    }

    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn transactions(&self) -> &dyn TransactionRepository {
        &self.transactions
    }
}
