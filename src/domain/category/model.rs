//! Category domain entity

use serde::{Deserialize, Serialize};

use crate::domain::query::{ListQuery, ScalarFilter, SortOrder, StringFilter};
use crate::domain::type_::Type;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub type_id: i32,
    /// Owning Type, attached when the read asked for it.
    pub r#type: Option<Type>,
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub type_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub type_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CategoryWhere {
    pub id: Option<ScalarFilter<i32>>,
    pub name: Option<StringFilter>,
    pub type_id: Option<ScalarFilter<i32>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CategoryOrderBy {
    Id(SortOrder),
    Name(SortOrder),
    TypeId(SortOrder),
}

pub type CategoryQuery = ListQuery<CategoryWhere, CategoryOrderBy>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::ScalarCondition;

    #[test]
    fn where_uses_camel_case_foreign_key() {
        let w: CategoryWhere = serde_json::from_str(r#"{"typeId":{"in":[1,2]}}"#).unwrap();
        assert_eq!(
            w.type_id,
            Some(ScalarFilter::Where(ScalarCondition::In(vec![1, 2])))
        );
        assert!(serde_json::from_str::<CategoryWhere>(r#"{"type_id":1}"#).is_err());
    }

    #[test]
    fn order_by_type_id() {
        let o: CategoryOrderBy = serde_json::from_str(r#"{"typeId":"asc"}"#).unwrap();
        assert_eq!(o, CategoryOrderBy::TypeId(SortOrder::Asc));
    }
}
