//! Transaction domain entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::category::Category;
use crate::domain::query::{ListQuery, ScalarFilter, SortOrder, StringFilter};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i32,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category_id: i32,
    /// Category (and, two levels deep, its Type) when the read expanded it.
    pub category: Option<Category>,
}

#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: String,
    pub category_id: i32,
}

#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub amount: Option<f64>,
    pub date: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TransactionWhere {
    pub id: Option<ScalarFilter<i32>>,
    pub amount: Option<ScalarFilter<f64>>,
    pub date: Option<ScalarFilter<DateTime<Utc>>>,
    pub description: Option<StringFilter>,
    pub category_id: Option<ScalarFilter<i32>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransactionOrderBy {
    Id(SortOrder),
    Amount(SortOrder),
    Date(SortOrder),
    Description(SortOrder),
    CategoryId(SortOrder),
}

pub type TransactionQuery = ListQuery<TransactionWhere, TransactionOrderBy>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::query::ScalarCondition;

    #[test]
    fn where_combines_several_fields() {
        let w: TransactionWhere = serde_json::from_str(
            r#"{"amount":{"gt":100},"description":"rent","categoryId":2}"#,
        )
        .unwrap();
        assert_eq!(w.amount, Some(ScalarFilter::Where(ScalarCondition::Gt(100.0))));
        assert_eq!(w.description, Some(StringFilter::Exact("rent".into())));
        assert_eq!(w.category_id, Some(ScalarFilter::Exact(2)));
        assert!(w.date.is_none());
    }

    #[test]
    fn misspelled_category_field_is_rejected() {
        assert!(serde_json::from_str::<TransactionWhere>(r#"{"cateogryId":2}"#).is_err());
    }

    #[test]
    fn order_by_name_is_not_a_transaction_field() {
        assert!(serde_json::from_str::<TransactionOrderBy>(r#"{"name":"asc"}"#).is_err());
        let o: TransactionOrderBy = serde_json::from_str(r#"{"date":"desc"}"#).unwrap();
        assert_eq!(o, TransactionOrderBy::Date(SortOrder::Desc));
    }
}
