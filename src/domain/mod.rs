pub mod category;
pub mod query;
pub mod repositories;
pub mod transaction;
pub mod type_;

// Re-export commonly used types
pub use category::{Category, CategoryPatch, NewCategory};
pub use query::{Expand, ListQuery, SortOrder};
pub use repositories::{DomainResult, RepositoryProvider};
pub use transaction::{NewTransaction, Transaction, TransactionPatch};
pub use type_::{NewType, Type, TypePatch};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
