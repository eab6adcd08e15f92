//! Helpers shared by the SeaORM repositories: error mapping and the
//! translation of list queries into `Select` filters, ordering and paging.

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ColumnTrait, Condition, DbErr, EntityTrait, Order, QueryOrder, QuerySelect, Select, SqlErr,
    Value,
};

use crate::domain::query::{ScalarCondition, ScalarFilter, SortOrder, StringCondition, StringFilter};
use crate::domain::DomainError;

// ── Error mapping ───────────────────────────────────────────────

pub(crate) fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => DomainError::ReferentialIntegrity(msg),
        Some(SqlErr::UniqueConstraintViolation(msg)) => DomainError::Conflict(msg),
        _ => {
            let msg = e.to_string();
            if msg.contains("FOREIGN KEY") {
                DomainError::ReferentialIntegrity(msg)
            } else if msg.contains("UNIQUE") {
                DomainError::Conflict(msg)
            } else {
                DomainError::Database(msg)
            }
        }
    }
}

// ── Filters ─────────────────────────────────────────────────────

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

pub(crate) fn string_expr<C: ColumnTrait>(col: C, filter: StringFilter) -> SimpleExpr {
    let condition = match filter {
        StringFilter::Exact(v) => StringCondition::Equals(v),
        StringFilter::Where(c) => c,
    };
    match condition {
        StringCondition::Equals(v) => col.eq(v),
        StringCondition::Not(v) => col.ne(v),
        StringCondition::In(vs) => col.is_in(vs),
        StringCondition::Contains(s) => col.contains(s.as_str()),
        StringCondition::StartsWith(s) => col.starts_with(s.as_str()),
        StringCondition::EndsWith(s) => col.ends_with(s.as_str()),
    }
}

pub(crate) fn scalar_expr<C, T>(col: C, filter: ScalarFilter<T>) -> SimpleExpr
where
    C: ColumnTrait,
    T: Into<Value>,
{
    let condition = match filter {
        ScalarFilter::Exact(v) => ScalarCondition::Equals(v),
        ScalarFilter::Where(c) => c,
    };
    match condition {
        ScalarCondition::Equals(v) => col.eq(v),
        ScalarCondition::Not(v) => col.ne(v),
        ScalarCondition::In(vs) => col.is_in(vs),
        ScalarCondition::Lt(v) => col.lt(v),
        ScalarCondition::Lte(v) => col.lte(v),
        ScalarCondition::Gt(v) => col.gt(v),
        ScalarCondition::Gte(v) => col.gte(v),
    }
}

// ── Ordering & pagination ───────────────────────────────────────

/// Rows at or after the cursor row in `(sort_col order, id asc)` ordering.
///
/// `pivot` is the cursor row's value in `sort_col`.
pub(crate) fn keyset<C: ColumnTrait>(
    sort_col: C,
    id_col: C,
    pivot: Value,
    cursor_id: i32,
    order: SortOrder,
) -> Condition {
    let beyond = match order {
        SortOrder::Asc => sort_col.gt(pivot.clone()),
        SortOrder::Desc => sort_col.lt(pivot.clone()),
    };
    Condition::any().add(beyond).add(
        Condition::all()
            .add(sort_col.eq(pivot))
            .add(id_col.gte(cursor_id)),
    )
}

/// Order by `col`, then by id ascending so pages are stable.
pub(crate) fn ordered<E, C>(select: Select<E>, col: C, order: SortOrder, id_col: C) -> Select<E>
where
    E: EntityTrait,
    C: ColumnTrait,
{
    select.order_by(col, order.into()).order_by_asc(id_col)
}

/// SQLite only accepts OFFSET after a LIMIT, so a bare `skip` gets an
/// unbounded limit.
pub(crate) fn page<E: EntityTrait>(select: Select<E>, skip: Option<u64>, take: Option<u64>) -> Select<E> {
    match (skip, take) {
        (skip, Some(take)) => select.offset(skip).limit(take),
        (Some(skip), None) => select.offset(skip).limit(i64::MAX as u64),
        (None, None) => select,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::entities::type_;
    use sea_orm::{DbBackend, QueryFilter, QueryTrait};

    fn sql(select: Select<type_::Entity>) -> String {
        select.build(DbBackend::Sqlite).to_string()
    }

    #[test]
    fn constraint_messages_map_to_domain_errors() {
        let fk = db_err(DbErr::Custom("FOREIGN KEY constraint failed".into()));
        assert!(matches!(fk, DomainError::ReferentialIntegrity(_)));

        let unique = db_err(DbErr::Custom("UNIQUE constraint failed: types.name".into()));
        assert!(matches!(unique, DomainError::Conflict(_)));

        let other = db_err(DbErr::Custom("disk I/O error".into()));
        assert!(matches!(other, DomainError::Database(_)));
    }

    #[test]
    fn string_operators_render_like_patterns() {
        let q = type_::Entity::find().filter(string_expr(
            type_::Column::Name,
            StringFilter::Where(StringCondition::StartsWith("Inc".into())),
        ));
        assert!(sql(q).contains(r#""types"."name" LIKE 'Inc%'"#));

        let q = type_::Entity::find().filter(string_expr(
            type_::Column::Name,
            StringFilter::Where(StringCondition::EndsWith("ome".into())),
        ));
        assert!(sql(q).contains(r#""types"."name" LIKE '%ome'"#));
    }

    #[test]
    fn scalar_in_renders_in_list() {
        let q = type_::Entity::find().filter(scalar_expr(
            type_::Column::Id,
            ScalarFilter::Where(ScalarCondition::In(vec![1, 3])),
        ));
        assert!(sql(q).contains(r#""types"."id" IN (1, 3)"#));
    }

    #[test]
    fn ordering_always_ends_with_id() {
        let q = ordered(
            type_::Entity::find(),
            type_::Column::Name,
            SortOrder::Desc,
            type_::Column::Id,
        );
        assert!(sql(q).ends_with(r#"ORDER BY "types"."name" DESC, "types"."id" ASC"#));
    }

    #[test]
    fn skip_without_take_still_emits_limit() {
        let rendered = sql(page(type_::Entity::find(), Some(2), None));
        assert!(rendered.contains("LIMIT"));
        assert!(rendered.contains("OFFSET 2"));

        let rendered = sql(page(type_::Entity::find(), None, None));
        assert!(!rendered.contains("LIMIT"));
    }
}
