//! Category REST API handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::application::CategoryService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{
    domain_error, list_query, ApiError, EntityId, ListParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    params(ListParams),
    responses(
        (status = 200, description = "Matching categories, each with its type", body = Vec<CategoryResponse>),
        (status = 400, description = "Malformed query parameters")
    )
)]
pub async fn list_categories(
    State(service): State<CategoryService>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<CategoryResponse>>, ApiError> {
    let query = list_query(params)?;
    let categories = service.find_all(query).await.map_err(domain_error)?;
    Ok(Json(categories.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category with its type", body = CategoryResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_category(
    State(service): State<CategoryService>,
    EntityId(id): EntityId,
) -> Result<Json<CategoryResponse>, ApiError> {
    match service.find(id).await.map_err(domain_error)? {
        Some(c) => Ok(Json(c.into())),
        None => Err(domain_error(DomainError::not_found("Category", id))),
    }
}

#[utoipa::path(
    post,
    path = "/categories",
    tag = "Categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Created", body = CategoryResponse),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "typeId references no type"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_category(
    State(service): State<CategoryService>,
    ValidatedJson(req): ValidatedJson<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<CategoryResponse>), ApiError> {
    let created = service.create(req.into()).await.map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Updated", body = CategoryResponse),
        (status = 404, description = "Not found"),
        (status = 409, description = "typeId references no type")
    )
)]
pub async fn update_category(
    State(service): State<CategoryService>,
    EntityId(id): EntityId,
    ValidatedJson(req): ValidatedJson<UpdateCategoryRequest>,
) -> Result<Json<CategoryResponse>, ApiError> {
    let updated = service.update(id, req.into()).await.map_err(domain_error)?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "Categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Removed category", body = CategoryResponse),
        (status = 404, description = "Not found"),
        (status = 409, description = "Category still has transactions")
    )
)]
pub async fn delete_category(
    State(service): State<CategoryService>,
    EntityId(id): EntityId,
) -> Result<Json<CategoryResponse>, ApiError> {
    let removed = service.delete(id).await.map_err(domain_error)?;
    Ok(Json(removed.into()))
}
