//! Transaction service
//!
//! Reads carry the Category and that Category's Type.

use std::sync::Arc;

use crate::domain::transaction::{NewTransaction, Transaction, TransactionPatch, TransactionQuery};
use crate::domain::{DomainResult, Expand, RepositoryProvider};

#[derive(Clone)]
pub struct TransactionService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TransactionService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn find(&self, id: i32) -> DomainResult<Option<Transaction>> {
        self.repos
            .transactions()
            .find_by_id(id, Expand::Grandparent)
            .await
    }

    pub async fn find_all(&self, query: TransactionQuery) -> DomainResult<Vec<Transaction>> {
        self.repos
            .transactions()
            .find_many(query, Expand::Grandparent)
            .await
    }

    pub async fn create(&self, new: NewTransaction) -> DomainResult<Transaction> {
        self.repos.transactions().create(new).await
    }

    pub async fn update(&self, id: i32, patch: TransactionPatch) -> DomainResult<Transaction> {
        self.repos.transactions().update(id, patch).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<Transaction> {
        self.repos.transactions().delete(id).await
    }
}
