//! Category service
//!
//! Reads always carry the owning Type.

use std::sync::Arc;

use crate::domain::category::{Category, CategoryPatch, CategoryQuery, NewCategory};
use crate::domain::{DomainResult, Expand, RepositoryProvider};

#[derive(Clone)]
pub struct CategoryService {
    repos: Arc<dyn RepositoryProvider>,
}

impl CategoryService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn find(&self, id: i32) -> DomainResult<Option<Category>> {
        self.repos.categories().find_by_id(id, Expand::Parent).await
    }

    pub async fn find_all(&self, query: CategoryQuery) -> DomainResult<Vec<Category>> {
        self.repos.categories().find_many(query, Expand::Parent).await
    }

    pub async fn create(&self, new: NewCategory) -> DomainResult<Category> {
        self.repos.categories().create(new).await
    }

    pub async fn update(&self, id: i32, patch: CategoryPatch) -> DomainResult<Category> {
        self.repos.categories().update(id, patch).await
    }

    pub async fn delete(&self, id: i32) -> DomainResult<Category> {
        self.repos.categories().delete(id).await
    }
}
