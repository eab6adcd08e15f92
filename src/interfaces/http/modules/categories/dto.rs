//! Category DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Category, CategoryPatch, NewCategory};
use crate::interfaces::http::modules::types::TypeResponse;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub type_id: i32,
    /// Owning type, present on reads
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<TypeResponse>,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            type_id: c.type_id,
            type_: c.r#type.map(Into::into),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "category name is required"))]
    pub name: String,
    pub type_id: i32,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.name,
            type_id: req.type_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateCategoryRequest {
    #[validate(length(min = 1, max = 255, message = "category name must not be empty"))]
    pub name: Option<String>,
    pub type_id: Option<i32>,
}

impl From<UpdateCategoryRequest> for CategoryPatch {
    fn from(req: UpdateCategoryRequest) -> Self {
        Self {
            name: req.name,
            type_id: req.type_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Type;

    #[test]
    fn nested_type_is_serialized_only_when_loaded() {
        let mut category = Category {
            id: 1,
            name: "Salary".into(),
            type_id: 1,
            r#type: None,
        };
        let plain = serde_json::to_value(CategoryResponse::from(category.clone())).unwrap();
        assert_eq!(plain, serde_json::json!({"id": 1, "name": "Salary", "typeId": 1}));

        category.r#type = Some(Type {
            id: 1,
            name: "Income".into(),
        });
        let expanded = serde_json::to_value(CategoryResponse::from(category)).unwrap();
        assert_eq!(expanded["type"], serde_json::json!({"id": 1, "name": "Income"}));
    }
}
