use crate::{
    domain::shopping_list::entities::{ShoppingList, ShoppingListItem},
    entity::{shopping_list_items, shopping_lists},
};

impl From<shopping_list_items::Model> for ShoppingListItem {
    fn from(model: shopping_list_items::Model) -> Self {
        Self {
            id: model.id,
            shopping_list_id: model.shopping_list_id,
            ingredient: model.ingredient,
            quantity: model.quantity,
            unit: model.unit,
            checked: model.checked,
            sort_order: model.sort_order,
        }
    }
}

/// Items are attached by the repository once loaded.
impl From<shopping_lists::Model> for ShoppingList {
    fn from(model: shopping_lists::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            status: model.status,
            generated_from_meal_plan: model.generated_from_meal_plan,
            created_at: model.created_at.to_utc(),
            items: Vec::new(),
        }
    }
}

pub fn item_active_model(item: &ShoppingListItem) -> shopping_list_items::ActiveModel {
    use sea_orm::ActiveValue::Set;

    shopping_list_items::ActiveModel {
        id: Set(item.id),
        shopping_list_id: Set(item.shopping_list_id),
        ingredient: Set(item.ingredient.clone()),
        quantity: Set(item.quantity),
        unit: Set(item.unit.clone()),
        checked: Set(item.checked),
        sort_order: Set(item.sort_order),
    }
}
