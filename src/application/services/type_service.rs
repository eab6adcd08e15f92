//! Type service

use std::sync::Arc;

use crate::domain::type_::{NewType, Type, TypePatch, TypeQuery};
use crate::domain::{DomainResult, RepositoryProvider};

/// CRUD operations on Types
#[derive(Clone)]
pub struct TypeService {
    repos: Arc<dyn RepositoryProvider>,
}

impl TypeService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    pub async fn find(&self, id: i32) -> DomainResult<Option<Type>> {
        self.repos.types().find_by_id(id).await
    }

    pub async fn find_all(&self, query: TypeQuery) -> DomainResult<Vec<Type>> {
        self.repos.types().find_many(query).await
    }

    pub async fn create(&self, new: NewType) -> DomainResult<Type> {
        self.repos.types().create(new).await
    }

    pub async fn update(&self, id: i32, patch: TypePatch) -> DomainResult<Type> {
        self.repos.types().update(id, patch).await
    }

    /// Fails with `ReferentialIntegrity` while Categories still reference the Type.
    pub async fn delete(&self, id: i32) -> DomainResult<Type> {
        self.repos.types().delete(id).await
    }
}
