//! SeaORM implementation of CategoryRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, Condition, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, ModelTrait, QueryFilter, Set,
};

use super::query::{db_err, keyset, ordered, page, scalar_expr, string_expr};
use super::type_repository;
use crate::domain::category::{
    Category, CategoryOrderBy, CategoryPatch, CategoryQuery, CategoryRepository, CategoryWhere,
    NewCategory,
};
use crate::domain::query::{Expand, SortOrder};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{category, type_};

pub(crate) fn model_to_domain(m: category::Model) -> Category {
    Category {
        id: m.id,
        name: m.name,
        type_id: m.type_id,
        r#type: None,
    }
}

/// Converts category rows and attaches each one's Type, keeping row order.
pub(crate) async fn attach_types(
    db: &DatabaseConnection,
    models: Vec<category::Model>,
) -> Result<Vec<Category>, DbErr> {
    let types = models.load_one(type_::Entity, db).await?;
    Ok(models
        .into_iter()
        .zip(types)
        .map(|(m, t)| Category {
            r#type: t.map(type_repository::model_to_domain),
            ..model_to_domain(m)
        })
        .collect())
}

fn where_condition(w: CategoryWhere) -> Condition {
    let mut condition = Condition::all();
    if let Some(f) = w.id {
        condition = condition.add(scalar_expr(category::Column::Id, f));
    }
    if let Some(f) = w.name {
        condition = condition.add(string_expr(category::Column::Name, f));
    }
    if let Some(f) = w.type_id {
        condition = condition.add(scalar_expr(category::Column::TypeId, f));
    }
    condition
}

fn order_column(order_by: Option<CategoryOrderBy>) -> (category::Column, SortOrder) {
    match order_by {
        Some(CategoryOrderBy::Id(o)) => (category::Column::Id, o),
        Some(CategoryOrderBy::Name(o)) => (category::Column::Name, o),
        Some(CategoryOrderBy::TypeId(o)) => (category::Column::TypeId, o),
        None => (category::Column::Id, SortOrder::Asc),
    }
}

pub struct SeaOrmCategoryRepository {
    db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> DomainResult<category::Model> {
        category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Category", id))
    }

    async fn expand(&self, models: Vec<category::Model>, expand: Expand) -> DomainResult<Vec<Category>> {
        if expand.includes_parent() {
            attach_types(&self.db, models).await.map_err(db_err)
        } else {
            Ok(models.into_iter().map(model_to_domain).collect())
        }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn find_by_id(&self, id: i32, expand: Expand) -> DomainResult<Option<Category>> {
        let Some(model) = category::Entity::find_by_id(id)
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
        query: CategoryQuery,
        expand: Expand,
    ) -> DomainResult<Vec<Category>> {
        let (col, order) = order_column(query.order_by);
        let mut select = category::Entity::find().filter(where_condition(query.filter));

        if let Some(cursor) = query.cursor {
            let Some(anchor) = category::Entity::find_by_id(cursor)
                .one(&self.db)
                .await
                .map_err(db_err)?
            else {
                return Ok(Vec::new());
            };
            select = select.filter(keyset(
                col,
                category::Column::Id,
                anchor.get(col),
                cursor,
                order,
            ));
        }

        let models = page(ordered(select, col, order, category::Column::Id), query.skip, query.take)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        self.expand(models, expand).await
    }

    async fn create(&self, new: NewCategory) -> DomainResult<Category> {
        let model = category::ActiveModel {
            id: NotSet,
            name: Set(new.name),
            type_id: Set(new.type_id),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!(
            "Category created: {} ({}) under type {}",
            result.name, result.id, result.type_id
        );
        Ok(model_to_domain(result))
    }

    async fn update(&self, id: i32, patch: CategoryPatch) -> DomainResult<Category> {
        let existing = self.find_model(id).await?;

        let mut model: category::ActiveModel = existing.clone().into();
        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if let Some(type_id) = patch.type_id {
            model.type_id = Set(type_id);
        }
        if !model.is_changed() {
            return Ok(model_to_domain(existing));
        }

        let result = model.update(&self.db).await.map_err(db_err)?;
        info!("Category updated: {} ({})", result.name, result.id);
        Ok(model_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<Category> {
        let existing = self.find_model(id).await?;
        category::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!("Category deleted: {} ({})", existing.name, existing.id);
        Ok(model_to_domain(existing))
    }
}
