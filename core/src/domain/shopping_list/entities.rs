use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

pub const DEFAULT_STATUS: &str = "draft";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub status: String,
    pub generated_from_meal_plan: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new(user_id: Uuid, title: String, generated_from_meal_plan: Option<Uuid>) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            title,
            status: DEFAULT_STATUS.to_string(),
            generated_from_meal_plan,
            created_at: now,
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ShoppingListItem {
    pub id: Uuid,
    pub shopping_list_id: Uuid,
    pub ingredient: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub checked: bool,
    pub sort_order: i32,
}

impl ShoppingListItem {
    pub fn new(
        shopping_list_id: Uuid,
        ingredient: String,
        quantity: Option<f64>,
        unit: Option<String>,
        sort_order: i32,
    ) -> Self {
        Self {
            id: generate_uuid_v7(),
            shopping_list_id,
            ingredient,
            quantity,
            unit,
            checked: false,
            sort_order,
        }
    }
}
