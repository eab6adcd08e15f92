//! Type repository interface

use async_trait::async_trait;

use super::model::{NewType, Type, TypePatch, TypeQuery};
use crate::domain::DomainResult;

#[async_trait]
pub trait TypeRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Type>>;
    async fn find_many(&self, query: TypeQuery) -> DomainResult<Vec<Type>>;
    async fn create(&self, new: NewType) -> DomainResult<Type>;
    /// Fails with `NotFound` when no Type has this id.
    async fn update(&self, id: i32, patch: TypePatch) -> DomainResult<Type>;
    /// Returns the removed record.
    async fn delete(&self, id: i32) -> DomainResult<Type>;
}
