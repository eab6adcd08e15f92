//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::category::CategoryRepository;
use super::transaction::TransactionRepository;
use super::type_::TypeRepository;
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let income = repos.types().find_by_id(1).await?;
///     let salary = repos.categories().find_by_id(1, Expand::Parent).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn types(&self) -> &dyn TypeRepository;
    fn categories(&self) -> &dyn CategoryRepository;
    fn transactions(&self) -> &dyn TransactionRepository;
}
