//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod category_repository;
pub mod query;
pub mod repository_provider;
pub mod transaction_repository;
pub mod type_repository;

pub use category_repository::SeaOrmCategoryRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use transaction_repository::SeaOrmTransactionRepository;
pub use type_repository::SeaOrmTypeRepository;
