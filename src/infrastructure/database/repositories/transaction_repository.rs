//! SeaORM implementation of TransactionRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, Condition, DatabaseConnection, EntityTrait,
    LoaderTrait, ModelTrait, QueryFilter, Set,
};

use super::category_repository;
use super::query::{db_err, keyset, ordered, page, scalar_expr, string_expr};
use crate::domain::category::Category;
use crate::domain::query::{Expand, SortOrder};
use crate::domain::transaction::{
    NewTransaction, Transaction, TransactionOrderBy, TransactionPatch, TransactionQuery,
    TransactionRepository, TransactionWhere,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{category, transaction};

fn model_to_domain(m: transaction::Model) -> Transaction {
    Transaction {
        id: m.id,
        amount: m.amount,
        date: m.date,
        description: m.description,
        category_id: m.category_id,
        category: None,
    }
}

fn where_condition(w: TransactionWhere) -> Condition {
    let mut condition = Condition::all();
    if let Some(f) = w.id {
        condition = condition.add(scalar_expr(transaction::Column::Id, f));
    }
    if let Some(f) = w.amount {
        condition = condition.add(scalar_expr(transaction::Column::Amount, f));
    }
    if let Some(f) = w.date {
        condition = condition.add(scalar_expr(transaction::Column::Date, f));
    }
    if let Some(f) = w.description {
        condition = condition.add(string_expr(transaction::Column::Description, f));
    }
    if let Some(f) = w.category_id {
        condition = condition.add(scalar_expr(transaction::Column::CategoryId, f));
    }
    condition
}

fn order_column(order_by: Option<TransactionOrderBy>) -> (transaction::Column, SortOrder) {
    match order_by {
        Some(TransactionOrderBy::Id(o)) => (transaction::Column::Id, o),
        Some(TransactionOrderBy::Amount(o)) => (transaction::Column::Amount, o),
        Some(TransactionOrderBy::Date(o)) => (transaction::Column::Date, o),
        Some(TransactionOrderBy::Description(o)) => (transaction::Column::Description, o),
        Some(TransactionOrderBy::CategoryId(o)) => (transaction::Column::CategoryId, o),
        None => (transaction::Column::Id, SortOrder::Asc),
    }
}

pub struct SeaOrmTransactionRepository {
    db: DatabaseConnection,
}

impl SeaOrmTransactionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> DomainResult<transaction::Model> {
        transaction::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Transaction", id))
    }

    async fn expand(
        &self,
        models: Vec<transaction::Model>,
        expand: Expand,
    ) -> DomainResult<Vec<Transaction>> {
        if !expand.includes_parent() {
            return Ok(models.into_iter().map(model_to_domain).collect());
        }

        let parents = models
            .load_one(category::Entity, &self.db)
            .await
            .map_err(db_err)?;

        let categories: Vec<Option<Category>> = if expand.includes_grandparent() {
            let present: Vec<category::Model> = parents.iter().flatten().cloned().collect();
            let mut expanded = category_repository::attach_types(&self.db, present)
                .await
                .map_err(db_err)?
                .into_iter();
            parents
                .iter()
                .map(|p| p.as_ref().and_then(|_| expanded.next()))
                .collect()
        } else {
            parents
                .into_iter()
                .map(|p| p.map(category_repository::model_to_domain))
                .collect()
        };

        Ok(models
            .into_iter()
            .zip(categories)
            .map(|(m, category)| Transaction {
                category,
                ..model_to_domain(m)
            })
            .collect())
    }
}

#[async_trait]
impl TransactionRepository for SeaOrmTransactionRepository {
    async fn find_by_id(&self, id: i32, expand: Expand) -> DomainResult<Option<Transaction>> {
        let Some(model) = transaction::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
        else {
            return Ok(None);
        };
        Ok(self.expand(vec![model], expand).await?.pop())
    }

    async fn find_many(
        &self,
        query: TransactionQuery,
        expand: Expand,
    ) -> DomainResult<Vec<Transaction>> {
        let (col, order) = order_column(query.order_by);
        let mut select = transaction::Entity::find().filter(where_condition(query.filter));

        if let Some(cursor) = query.cursor {
            let Some(anchor) = transaction::Entity::find_by_id(cursor)
                .one(&self.db)
                .await
                .map_err(db_err)?
            else {
                return Ok(Vec::new());
            };
            select = select.filter(keyset(
                col,
                transaction::Column::Id,
                anchor.get(col),
                cursor,
                order,
            ));
        }

        let models = page(
            ordered(select, col, order, transaction::Column::Id),
            query.skip,
            query.take,
        )
        .all(&self.db)
        .await
        .map_err(db_err)?;
        self.expand(models, expand).await
    }

    async fn create(&self, new: NewTransaction) -> DomainResult<Transaction> {
        let model = transaction::ActiveModel {
            id: NotSet,
            amount: Set(new.amount),
            date: Set(new.date),
            description: Set(new.description),
            category_id: Set(new.category_id),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Transaction created: {} ({}) amount={} category={}",
            result.description, result.id, result.amount, result.category_id
        );
        Ok(model_to_domain(result))
    }

    async fn update(&self, id: i32, patch: TransactionPatch) -> DomainResult<Transaction> {
        let existing = self.find_model(id).await?;

        let mut model: transaction::ActiveModel = existing.clone().into();
        if let Some(amount) = patch.amount {
            model.amount = Set(amount);
        }
        if let Some(date) = patch.date {
            model.date = Set(date);
        }
        if let Some(description) = patch.description {
            model.description = Set(description);
        }
        if let Some(category_id) = patch.category_id {
            model.category_id = Set(category_id);
        }
        if !model.is_changed() {
            return Ok(model_to_domain(existing));
        }

        let result = model.update(&self.db).await.map_err(db_err)?;
        info!("Transaction updated: {}", result.id);
        Ok(model_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<Transaction> {
        let existing = self.find_model(id).await?;
        transaction::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!("Transaction deleted: {}", existing.id);
        Ok(model_to_domain(existing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    use crate::domain::category::{CategoryRepository, NewCategory};
    use crate::domain::query::{ListQuery, ScalarCondition, ScalarFilter};
    use crate::domain::type_::{NewType, TypeRepository};
    use crate::infrastructure::database::connect_in_memory;
    use crate::infrastructure::database::repositories::{
        SeaOrmCategoryRepository, SeaOrmTypeRepository,
    };

    async fn setup() -> SeaOrmTransactionRepository {
        let db = connect_in_memory().await.unwrap();
        SeaOrmTypeRepository::new(db.clone())
            .create(NewType { name: "Expense".into() })
            .await
            .unwrap();
        let categories = SeaOrmCategoryRepository::new(db.clone());
        for name in ["Rent", "Food"] {
            categories
                .create(NewCategory {
                    name: name.into(),
                    type_id: 1,
                })
                .await
                .unwrap();
        }
        SeaOrmTransactionRepository::new(db)
    }

    fn new_tx(amount: f64, day: u32, category_id: i32) -> NewTransaction {
        NewTransaction {
            amount,
            date: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            description: format!("tx on day {}", day),
            category_id,
        }
    }

    #[tokio::test]
    async fn grandparent_expansion_attaches_category_and_type() {
        let repo = setup().await;
        let created = repo.create(new_tx(950.0, 1, 1)).await.unwrap();
        assert!(created.category.is_none());

        let found = repo
            .find_by_id(created.id, Expand::Grandparent)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.amount, 950.0);
        assert_eq!(found.date, created.date);
        let category = found.category.expect("category expanded");
        assert_eq!(category.name, "Rent");
        assert_eq!(category.r#type.map(|t| t.name), Some("Expense".to_string()));

        let shallow = repo
            .find_by_id(created.id, Expand::Parent)
            .await
            .unwrap()
            .unwrap();
        let category = shallow.category.expect("category expanded");
        assert!(category.r#type.is_none());
    }

    #[tokio::test]
    async fn missing_category_is_referential_integrity_error() {
        let repo = setup().await;
        let err = repo.create(new_tx(1.0, 1, 42)).await.unwrap_err();
        assert!(matches!(err, DomainError::ReferentialIntegrity(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn deleting_category_with_transactions_is_restricted() {
        let repo = setup().await;
        repo.create(new_tx(10.0, 2, 2)).await.unwrap();

        let categories = SeaOrmCategoryRepository::new(repo.db.clone());
        let err = categories.delete(2).await.unwrap_err();
        assert!(matches!(err, DomainError::ReferentialIntegrity(_)));
        assert!(categories.delete(1).await.is_ok());
    }

    #[tokio::test]
    async fn patch_changes_only_supplied_fields() {
        let repo = setup().await;
        let created = repo.create(new_tx(10.0, 3, 1)).await.unwrap();

        let updated = repo
            .update(
                created.id,
                TransactionPatch {
                    amount: Some(12.5),
                    ..TransactionPatch::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.amount, 12.5);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.category_id, 1);
    }

    #[tokio::test]
    async fn filters_by_amount_and_date_range() {
        let repo = setup().await;
        repo.create(new_tx(5.0, 1, 1)).await.unwrap();
        repo.create(new_tx(50.0, 10, 2)).await.unwrap();
        repo.create(new_tx(500.0, 20, 1)).await.unwrap();

        let query = TransactionQuery::default().with_filter(TransactionWhere {
            amount: Some(ScalarFilter::Where(ScalarCondition::Gte(50.0))),
            date: Some(ScalarFilter::Where(ScalarCondition::Lt(
                Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
            ))),
            ..TransactionWhere::default()
        });
        let found = repo.find_many(query, Expand::None).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].amount, 50.0);
    }

    #[tokio::test]
    async fn orders_by_amount_descending_with_take() {
        let repo = setup().await;
        for (amount, day) in [(20.0, 1), (70.0, 2), (40.0, 3)] {
            repo.create(new_tx(amount, day, 1)).await.unwrap();
        }

        let query = ListQuery {
            take: Some(2),
            ..TransactionQuery::default()
        }
        .ordered_by(TransactionOrderBy::Amount(SortOrder::Desc));
        let amounts: Vec<f64> = repo
            .find_many(query, Expand::Grandparent)
            .await
            .unwrap()
            .iter()
            .map(|t| t.amount)
            .collect();
        assert_eq!(amounts, [70.0, 40.0]);
    }
}
