//! Type domain entity

use serde::{Deserialize, Serialize};

use crate::domain::query::{ListQuery, ScalarFilter, SortOrder, StringFilter};

/// Root of the ledger hierarchy: every Category belongs to one Type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Type {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewType {
    pub name: String,
}

#[derive(Debug, Clone, Default)]
pub struct TypePatch {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TypeWhere {
    pub id: Option<ScalarFilter<i32>>,
    pub name: Option<StringFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeOrderBy {
    Id(SortOrder),
    Name(SortOrder),
}

pub type TypeQuery = ListQuery<TypeWhere, TypeOrderBy>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::StringCondition;

    #[test]
    fn where_parses_known_fields() {
        let w: TypeWhere = serde_json::from_str(r#"{"name":{"contains":"come"}}"#).unwrap();
        assert_eq!(
            w.name,
            Some(StringFilter::Where(StringCondition::Contains("come".into())))
        );
        assert!(w.id.is_none());
    }

    #[test]
    fn where_rejects_unknown_field() {
        assert!(serde_json::from_str::<TypeWhere>(r#"{"label":"x"}"#).is_err());
    }

    #[test]
    fn order_by_takes_exactly_one_field() {
        let o: TypeOrderBy = serde_json::from_str(r#"{"name":"desc"}"#).unwrap();
        assert_eq!(o, TypeOrderBy::Name(SortOrder::Desc));
        assert!(serde_json::from_str::<TypeOrderBy>(r#"{"name":"asc","id":"asc"}"#).is_err());
        assert!(serde_json::from_str::<TypeOrderBy>(r#"{"typeId":"asc"}"#).is_err());
    }
}
