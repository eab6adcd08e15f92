//! SeaORM implementation of TypeRepository

use async_trait::async_trait;
use log::info;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, Condition, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, Set,
};

use super::query::{db_err, keyset, ordered, page, scalar_expr, string_expr};
use crate::domain::query::SortOrder;
use crate::domain::type_::{NewType, Type, TypeOrderBy, TypePatch, TypeQuery, TypeRepository, TypeWhere};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::type_;

pub(crate) fn model_to_domain(m: type_::Model) -> Type {
    Type {
        id: m.id,
        name: m.name,
    }
}

fn where_condition(w: TypeWhere) -> Condition {
    let mut condition = Condition::all();
    if let Some(f) = w.id {
        condition = condition.add(scalar_expr(type_::Column::Id, f));
    }
    if let Some(f) = w.name {
        condition = condition.add(string_expr(type_::Column::Name, f));
    }
    condition
}

fn order_column(order_by: Option<TypeOrderBy>) -> (type_::Column, SortOrder) {
    match order_by {
        Some(TypeOrderBy::Id(o)) => (type_::Column::Id, o),
        Some(TypeOrderBy::Name(o)) => (type_::Column::Name, o),
        None => (type_::Column::Id, SortOrder::Asc),
    }
}

pub struct SeaOrmTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: i32) -> DomainResult<type_::Model> {
        type_::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("Type", id))
    }
}

#[async_trait]
impl TypeRepository for SeaOrmTypeRepository {
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Type>> {
        let model = type_::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_many(&self, query: TypeQuery) -> DomainResult<Vec<Type>> {
        let (col, order) = order_column(query.order_by);
        let mut select = type_::Entity::find().filter(where_condition(query.filter));

        if let Some(cursor) = query.cursor {
            let Some(anchor) = type_::Entity::find_by_id(cursor)
                .one(&self.db)
                .await
                .map_err(db_err)?
            else {
                return Ok(Vec::new());
            };
            select = select.filter(keyset(col, type_::Column::Id, anchor.get(col), cursor, order));
        }

        let models = page(ordered(select, col, order, type_::Column::Id), query.skip, query.take)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn create(&self, new: NewType) -> DomainResult<Type> {
        let model = type_::ActiveModel {
            id: NotSet,
            name: Set(new.name),
        };
        let result = model.insert(&self.db).await.map_err(db_err)?;
        info!("Type created: {} ({})", result.name, result.id);
        Ok(model_to_domain(result))
    }

    async fn update(&self, id: i32, patch: TypePatch) -> DomainResult<Type> {
        let existing = self.find_model(id).await?;

        let mut model: type_::ActiveModel = existing.clone().into();
        if let Some(name) = patch.name {
            model.name = Set(name);
        }
        if !model.is_changed() {
            return Ok(model_to_domain(existing));
        }

        let result = model.update(&self.db).await.map_err(db_err)?;
        info!("Type updated: {} ({})", result.name, result.id);
        Ok(model_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<Type> {
        let existing = self.find_model(id).await?;
        type_::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        info!("Type deleted: {} ({})", existing.name, existing.id);
        Ok(model_to_domain(existing))
    }
}
