//! Type DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewType, Type, TypePatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TypeResponse {
    pub id: i32,
    pub name: String,
}

impl From<Type> for TypeResponse {
    fn from(t: Type) -> Self {
        Self {
            id: t.id,
            name: t.name,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateTypeRequest {
    #[validate(length(min = 1, max = 255, message = "type name is required"))]
    pub name: String,
}

impl From<CreateTypeRequest> for NewType {
    fn from(req: CreateTypeRequest) -> Self {
        Self { name: req.name }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateTypeRequest {
    #[validate(length(min = 1, max = 255, message = "type name must not be empty"))]
    pub name: Option<String>,
}

impl From<UpdateTypeRequest> for TypePatch {
    fn from(req: UpdateTypeRequest) -> Self {
        Self { name: req.name }
    }
}
