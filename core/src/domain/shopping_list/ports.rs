use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{OffsetLimit, entities::app_errors::CoreError},
    shopping_list::{
        entities::{ShoppingList, ShoppingListItem},
        value_objects::SetItemCheckedInput,
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ShoppingListRepository: Send + Sync {
    /// Persists the list and its items atomically.
    fn create_with_items(
        &self,
        list: ShoppingList,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    /// Lists of one user, newest first, items in sort order.
    fn get_by_user(
        &self,
        user_id: Uuid,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    /// The list without its items.
    fn get_by_id(
        &self,
        list_id: Uuid,
    ) -> impl Future<Output = Result<Option<ShoppingList>, CoreError>> + Send;

    /// Updates the checked flag of one item of one list.
    fn set_item_checked(
        &self,
        list_id: Uuid,
        item_id: Uuid,
        checked: bool,
    ) -> impl Future<Output = Result<Option<ShoppingListItem>, CoreError>> + Send;
}

pub trait ShoppingListService: Send + Sync {
    fn generate_shopping_list(
        &self,
        identity: Identity,
        meal_plan_id: Uuid,
    ) -> impl Future<Output = Result<ShoppingList, CoreError>> + Send;

    fn get_shopping_lists(
        &self,
        identity: Identity,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Vec<ShoppingList>, CoreError>> + Send;

    fn set_item_checked(
        &self,
        identity: Identity,
        input: SetItemCheckedInput,
    ) -> impl Future<Output = Result<ShoppingListItem, CoreError>> + Send;
}
