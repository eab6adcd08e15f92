//! Transaction REST API handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateTransactionRequest, TransactionResponse, UpdateTransactionRequest};
use crate::application::TransactionService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{
    domain_error, list_query, ApiError, EntityId, ListParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/transactions",
    tag = "Transactions",
    params(ListParams),
    responses(
        (status = 200, description = "Matching transactions with category and type", body = Vec<TransactionResponse>),
        (status = 400, description = "Malformed query parameters")
    )
)]
pub async fn list_transactions(
    State(service): State<TransactionService>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<TransactionResponse>>, ApiError> {
    let query = list_query(params)?;
    let transactions = service.find_all(query).await.map_err(domain_error)?;
    Ok(Json(transactions.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    get,
    path = "/transactions/{id}",
    tag = "Transactions",
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction with category and type", body = TransactionResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_transaction(
    State(service): State<TransactionService>,
    EntityId(id): EntityId,
) -> Result<Json<TransactionResponse>, ApiError> {
    match service.find(id).await.map_err(domain_error)? {
        Some(t) => Ok(Json(t.into())),
        None => Err(domain_error(DomainError::not_found("Transaction", id))),
    }
}

#[utoipa::path(
    post,
    path = "/transactions",
    tag = "Transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Created", body = TransactionResponse),
        (status = 400, description = "Malformed body"),
        (status = 409, description = "categoryId references no category"),
        (status = 422, description = "Invalid data")
    )
)]
pub async fn create_transaction(
    State(service): State<TransactionService>,
    ValidatedJson(req): ValidatedJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    let created = service.create(req.into()).await.map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

#[utoipa::path(
    put,
    path = "/transactions/{id}",
    tag = "Transactions",
    params(("id" = i32, Path, description = "Transaction ID")),
    request_body = UpdateTransactionRequest,
    responses(
        (status = 200, description = "Updated", body = TransactionResponse),
        (status = 404, description = "Not found"),
        (status = 409, description = "categoryId references no category")
    )
)]
pub async fn update_transaction(
    State(service): State<TransactionService>,
    EntityId(id): EntityId,
    ValidatedJson(req): ValidatedJson<UpdateTransactionRequest>,
) -> Result<Json<TransactionResponse>, ApiError> {
    let updated = service.update(id, req.into()).await.map_err(domain_error)?;
    Ok(Json(updated.into()))
}

#[utoipa::path(
    delete,
    path = "/transactions/{id}",
    tag = "Transactions",
    params(("id" = i32, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Removed transaction", body = TransactionResponse),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_transaction(
    State(service): State<TransactionService>,
    EntityId(id): EntityId,
) -> Result<Json<TransactionResponse>, ApiError> {
    let removed = service.delete(id).await.map_err(domain_error)?;
    Ok(Json(removed.into()))
}
