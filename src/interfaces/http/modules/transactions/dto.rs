//! Transaction DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewTransaction, Transaction, TransactionPatch};
use crate::interfaces::http::modules::categories::CategoryResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: i32,
    pub amount: f64,
    /// RFC 3339, UTC
    pub date: DateTime<Utc>,
    pub description: String,
    pub category_id: i32,
    /// Category with its type, present on reads
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryResponse>,
}

impl From<Transaction> for TransactionResponse {
    fn from(t: Transaction) -> Self {
        Self {
            id: t.id,
            amount: t.amount,
            date: t.date,
            description: t.description,
            category_id: t.category_id,
            category: t.category.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTransactionRequest {
    pub amount: f64,
    pub date: DateTime<Utc>,
    #[validate(length(max = 1024))]
    pub description: String,
    pub category_id: i32,
}

impl From<CreateTransactionRequest> for NewTransaction {
    fn from(req: CreateTransactionRequest) -> Self {
        Self {
            amount: req.amount,
            date: req.date,
            description: req.description,
            category_id: req.category_id,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTransactionRequest {
    pub amount: Option<f64>,
    pub date: Option<DateTime<Utc>>,
    #[validate(length(max = 1024))]
    pub description: Option<String>,
    pub category_id: Option<i32>,
}

impl From<UpdateTransactionRequest> for TransactionPatch {
    fn from(req: UpdateTransactionRequest) -> Self {
        Self {
            amount: req.amount,
            date: req.date,
            description: req.description,
            category_id: req.category_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_requires_canonical_category_field() {
        let ok: Result<CreateTransactionRequest, _> = serde_json::from_str(
            r#"{"amount":12.5,"date":"2024-01-05T10:00:00Z","description":"Lunch","categoryId":2}"#,
        );
        assert_eq!(ok.unwrap().category_id, 2);

        let misspelled: Result<CreateTransactionRequest, _> = serde_json::from_str(
            r#"{"amount":12.5,"date":"2024-01-05T10:00:00Z","description":"Lunch","cateogryId":2}"#,
        );
        assert!(misspelled.is_err());
    }

    #[test]
    fn date_accepts_offsets_and_normalizes_to_utc() {
        let req: UpdateTransactionRequest =
            serde_json::from_str(r#"{"date":"2024-01-05T12:00:00+02:00"}"#).unwrap();
        let date = req.date.unwrap();
        assert_eq!(date.to_rfc3339(), "2024-01-05T10:00:00+00:00");
        assert!(req.amount.is_none());
    }
}
