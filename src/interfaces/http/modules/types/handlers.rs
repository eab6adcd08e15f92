//! Type REST API handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateTypeRequest, TypeResponse, UpdateTypeRequest};
use crate::application::TypeService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{
    domain_error, list_query, ApiError, EntityId, ListParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/types",
    tag = "Types",
    params(ListParams),
    responses(
        (status = 200, description = "Matching types", body = Vec<TypeResponse>),
        (status = 400, description = "Malformed query parameters")
    )
)]
pub async fn list_types(
    State(service): State<TypeService>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<TypeResponse>>, ApiError> {
    let query = list_query(params)?;
    let types = service.find_all(query).await.map_err(domain_error)?;
    Ok(Json(types.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/types/{id}",
    tag = "Types",
    params(("id" = i32, Path, description = "Type ID")),
    responses(
        (status = 200, description = "Type details", body = TypeResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_type(
    State(service): State<TypeService>,
    EntityId(id): EntityId,
) -> Result<Json<TypeResponse>, ApiError> {
    match service.find(id).await.map_err(domain_error)? {
        Some(t) => Ok(Json(t.into())),
        None => Err(domain_error(DomainError::not_found("Type", id))),
    }
}

#[utoipa::path(
    post,
    path = "/types",
    tag = "Types",
    request_body = CreateTypeRequest,
    responses(
        (status = 201, description = "Created", body = TypeResponse),
        (status = 400, description = "Malformed body"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_type(
    State(service): State<TypeService>,
    ValidatedJson(req): ValidatedJson<CreateTypeRequest>,
) -> Result<(StatusCode, Json<TypeResponse>), ApiError> {
    let created = service.create(req.into()).await.map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/types/{id}",
    tag = "Types",
    params(("id" = i32, Path, description = "Type ID")),
    request_body = UpdateTypeRequest,
    responses(
        (status = 200, description = "Updated", body = TypeResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn update_type(
    State(service): State<TypeService>,
    EntityId(id): EntityId,
    ValidatedJson(req): ValidatedJson<UpdateTypeRequest>,
) -> Result<Json<TypeResponse>, ApiError> {
    let updated = service.update(id, req.into()).await.map_err(domain_error)?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/types/{id}",
    tag = "Types",
    params(("id" = i32, Path, description = "Type ID")),
    responses(
        (status = 200, description = "Removed type", body = TypeResponse),
        (status = 404, description = "Not found"),
        (status = 409, description = "Type still has categories")
    )
)]
pub async fn delete_type(
    State(service): State<TypeService>,
    EntityId(id): EntityId,
) -> Result<Json<TypeResponse>, ApiError> {
    let removed = service.delete(id).await.map_err(domain_error)?;
    Ok(Json(removed.into()))
}
