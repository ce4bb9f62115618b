use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::{OffsetLimit, entities::app_errors::CoreError},
        shopping_list::{
            entities::{ShoppingList, ShoppingListItem},
            ports::ShoppingListRepository,
        },
    },
    entity::{shopping_list_items, shopping_lists},
    infrastructure::shopping_list::mappers::item_active_model,
};

#[derive(Debug, Clone)]
pub struct PostgresShoppingListRepository {
    pub db: DatabaseConnection,
}

impl PostgresShoppingListRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ShoppingListRepository for PostgresShoppingListRepository {
    async fn create_with_items(&self, list: ShoppingList) -> Result<ShoppingList, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let active_model = shopping_lists::ActiveModel {
            id: Set(list.id),
            user_id: Set(list.user_id),
            title: Set(list.title.clone()),
            status: Set(list.status.clone()),
            generated_from_meal_plan: Set(list.generated_from_meal_plan),
            created_at: Set(list.created_at.fixed_offset()),
        };

        shopping_lists::Entity::insert(active_model)
            .exec(&txn)
            .await
            .map_err(|e| {
                error!("Failed to create shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        if !list.items.is_empty() {
            shopping_list_items::Entity::insert_many(list.items.iter().map(item_active_model))
                .exec(&txn)
                .await
                .map_err(|e| {
                    error!("Failed to create shopping list items: {}", e);
                    CoreError::InternalServerError
                })?;
        }

        txn.commit().await.map_err(|e| {
            error!("Failed to commit shopping list: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(list)
    }

    async fn get_by_user(
        &self,
        user_id: Uuid,
        pagination: OffsetLimit,
    ) -> Result<Vec<ShoppingList>, CoreError> {
        let list_models = shopping_lists::Entity::find()
            .filter(shopping_lists::Column::UserId.eq(user_id))
            .order_by_desc(shopping_lists::Column::CreatedAt)
            .offset(pagination.offset as u64)
            .limit(pagination.limit as u64)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping lists: {}", e);
                CoreError::InternalServerError
            })?;

        if list_models.is_empty() {
            return Ok(Vec::new());
        }

        let list_ids: Vec<Uuid> = list_models.iter().map(|list| list.id).collect();
        let item_models = shopping_list_items::Entity::find()
            .filter(shopping_list_items::Column::ShoppingListId.is_in(list_ids))
            .order_by_asc(shopping_list_items::Column::SortOrder)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping list items: {}", e);
                CoreError::InternalServerError
            })?;

        let mut items_by_list: HashMap<Uuid, Vec<ShoppingListItem>> = HashMap::new();
        for model in item_models {
            items_by_list
                .entry(model.shopping_list_id)
                .or_default()
                .push(model.into());
        }

        Ok(list_models
            .into_iter()
            .map(|model| {
                let mut list = ShoppingList::from(model);
                list.items = items_by_list.remove(&list.id).unwrap_or_default();
                list
            })
            .collect())
    }

    async fn get_by_id(&self, list_id: Uuid) -> Result<Option<ShoppingList>, CoreError> {
        let model = shopping_lists::Entity::find_by_id(list_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping list: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(ShoppingList::from))
    }

    async fn set_item_checked(
        &self,
        list_id: Uuid,
        item_id: Uuid,
        checked: bool,
    ) -> Result<Option<ShoppingListItem>, CoreError> {
        let Some(model) = shopping_list_items::Entity::find_by_id(item_id)
            .filter(shopping_list_items::Column::ShoppingListId.eq(list_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get shopping list item: {}", e);
                CoreError::InternalServerError
            })?
        else {
            return Ok(None);
        };

        let mut active_model: shopping_list_items::ActiveModel = model.into();
        active_model.checked = Set(checked);

        let updated = active_model.update(&self.db).await.map_err(|e| {
            error!("Failed to update shopping list item: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Some(updated.into()))
    }
}
