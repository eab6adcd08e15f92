//! List query building blocks shared by every aggregate
//!
//! A list request carries offset pagination (`skip` / `take`), an optional
//! keyset `cursor`, a typed filter and an optional single-field ordering.
//! Filters deserialize from the JSON passed in the `where` query parameter:
//! a bare value means equality, an object must carry exactly one operator.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// How many levels of parent records a read should attach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Expand {
    #[default]
    None,
    Parent,
    Grandparent,
}

impl Expand {
    pub fn includes_parent(self) -> bool {
        self >= Expand::Parent
    }

    pub fn includes_grandparent(self) -> bool {
        self >= Expand::Grandparent
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery<W, O> {
    pub skip: Option<u64>,
    pub take: Option<u64>,
    /// Id of the first row to return, inclusive.
    pub cursor: Option<i32>,
    pub filter: W,
    pub order_by: Option<O>,
}

impl<W: Default, O> Default for ListQuery<W, O> {
    fn default() -> Self {
        Self {
            skip: None,
            take: None,
            cursor: None,
            filter: W::default(),
            order_by: None,
        }
    }
}

impl<W, O> ListQuery<W, O> {
    pub fn with_filter(mut self, filter: W) -> Self {
        self.filter = filter;
        self
    }

    pub fn ordered_by(mut self, order_by: O) -> Self {
        self.order_by = Some(order_by);
        self
    }
}

// ── String filters ──────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StringFilter {
    Exact(String),
    Where(StringCondition),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StringCondition {
    Equals(String),
    Not(String),
    In(Vec<String>),
    Contains(String),
    StartsWith(String),
    EndsWith(String),
}

// ── Scalar filters (ids, numbers, timestamps) ───────────────────

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarFilter<T> {
    Exact(T),
    Where(ScalarCondition<T>),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScalarCondition<T> {
    Equals(T),
    Not(T),
    In(Vec<T>),
    Lt(T),
    Lte(T),
    Gt(T),
    Gte(T),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    #[test]
    fn bare_string_is_exact_match() {
        let f: StringFilter = serde_json::from_str(r#""Income""#).unwrap();
        assert_eq!(f, StringFilter::Exact("Income".into()));
    }

    #[test]
    fn string_operator_object() {
        let f: StringFilter = serde_json::from_str(r#"{"startsWith":"Sal"}"#).unwrap();
        assert_eq!(f, StringFilter::Where(StringCondition::StartsWith("Sal".into())));

        let f: StringFilter = serde_json::from_str(r#"{"in":["a","b"]}"#).unwrap();
        assert_eq!(
            f,
            StringFilter::Where(StringCondition::In(vec!["a".into(), "b".into()]))
        );
    }

    #[test]
    fn two_operators_in_one_object_are_rejected() {
        let res: Result<StringFilter, _> =
            serde_json::from_str(r#"{"contains":"a","endsWith":"b"}"#);
        assert!(res.is_err());
    }

    #[test]
    fn unknown_operator_is_rejected() {
        let res: Result<ScalarFilter<i32>, _> = serde_json::from_str(r#"{"between":[1,2]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn scalar_filters_accept_numbers_and_timestamps() {
        let f: ScalarFilter<f64> = serde_json::from_str(r#"{"gte":10}"#).unwrap();
        assert_eq!(f, ScalarFilter::Where(ScalarCondition::Gte(10.0)));

        let f: ScalarFilter<i32> = serde_json::from_str("3").unwrap();
        assert_eq!(f, ScalarFilter::Exact(3));

        let f: ScalarFilter<DateTime<Utc>> =
            serde_json::from_str(r#"{"lt":"2024-02-01T00:00:00Z"}"#).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        assert_eq!(f, ScalarFilter::Where(ScalarCondition::Lt(expected)));
    }

    #[test]
    fn scalar_filter_rejects_wrong_type() {
        let res: Result<ScalarFilter<i32>, _> = serde_json::from_str(r#""seven""#);
        assert!(res.is_err());
    }

    #[test]
    fn sort_order_is_lowercase() {
        let o: SortOrder = serde_json::from_str(r#""desc""#).unwrap();
        assert_eq!(o, SortOrder::Desc);
        assert!(serde_json::from_str::<SortOrder>(r#""DESC""#).is_err());
    }

    #[test]
    fn expand_levels_are_ordered() {
        assert!(!Expand::None.includes_parent());
        assert!(Expand::Parent.includes_parent());
        assert!(!Expand::Parent.includes_grandparent());
        assert!(Expand::Grandparent.includes_parent());
        assert!(Expand::Grandparent.includes_grandparent());
    }
}
