//! Category repository interface

use async_trait::async_trait;

use super::model::{Category, CategoryPatch, CategoryQuery, NewCategory};
use crate::domain::query::Expand;
use crate::domain::DomainResult;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn find_by_id(&self, id: i32, expand: Expand) -> DomainResult<Option<Category>>;
    async fn find_many(&self, query: CategoryQuery, expand: Expand)
        -> DomainResult<Vec<Category>>;
    /// A `type_id` with no matching Type fails with `ReferentialIntegrity`.
    async fn create(&self, new: NewCategory) -> DomainResult<Category>;
    async fn update(&self, id: i32, patch: CategoryPatch) -> DomainResult<Category>;
    async fn delete(&self, id: i32) -> DomainResult<Category>;
}
