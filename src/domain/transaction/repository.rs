//! Transaction repository interface

use async_trait::async_trait;

use super::model::{NewTransaction, Transaction, TransactionPatch, TransactionQuery};
use crate::domain::query::Expand;
use crate::domain::DomainResult;

#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// `Expand::Parent` attaches the Category, `Expand::Grandparent` also
    /// attaches that Category's Type.
    async fn find_by_id(&self, id: i32, expand: Expand) -> DomainResult<Option<Transaction>>;
    async fn find_many(
        &self,
        query: TransactionQuery,
        expand: Expand,
    ) -> DomainResult<Vec<Transaction>>;
    async fn create(&self, new: NewTransaction) -> DomainResult<Transaction>;
    async fn update(&self, id: i32, patch: TransactionPatch) -> DomainResult<Transaction>;
    async fn delete(&self, id: i32) -> DomainResult<Transaction>;
}
