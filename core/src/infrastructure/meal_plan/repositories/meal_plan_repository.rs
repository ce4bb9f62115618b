use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal_plan::{
            entities::{MealPlan, MealPlanItem},
            ports::MealPlanRepository,
        },
    },
    entity::{meal_plan_items, meal_plans, recipes},
    infrastructure::meal_plan::mappers::map_item,
};

#[derive(Debug, Clone)]
pub struct PostgresMealPlanRepository {
    pub db: DatabaseConnection,
}

impl PostgresMealPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl MealPlanRepository for PostgresMealPlanRepository {
    async fn create_plan(&self, plan: MealPlan) -> Result<MealPlan, CoreError> {
        let active_model = meal_plans::ActiveModel {
            id: Set(plan.id),
            user_id: Set(plan.user_id),
            title: Set(plan.title),
            start_date: Set(plan.start_date),
            end_date: Set(plan.end_date),
            created_at: Set(plan.created_at.fixed_offset()),
        };

        let created = meal_plans::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn get_plans_by_user(&self, user_id: Uuid) -> Result<Vec<MealPlan>, CoreError> {
        let models = meal_plans::Entity::find()
            .filter(meal_plans::Column::UserId.eq(user_id))
            .order_by_desc(meal_plans::Column::StartDate)
            .order_by_desc(meal_plans::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plans: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(MealPlan::from).collect())
    }

    async fn get_plan_by_id(&self, plan_id: Uuid) -> Result<Option<MealPlan>, CoreError> {
        let model = meal_plans::Entity::find_by_id(plan_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(MealPlan::from))
    }

    async fn add_item(&self, item: MealPlanItem) -> Result<MealPlanItem, CoreError> {
        let active_model = meal_plan_items::ActiveModel {
            id: Set(item.id),
            meal_plan_id: Set(item.meal_plan_id),
            recipe_id: Set(item.recipe_id),
            scheduled_for: Set(item.scheduled_for),
            meal: Set(item.meal.to_string()),
            created_at: Set(item.created_at.fixed_offset()),
        };

        let created = meal_plan_items::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to add meal plan item: {}", e);
                CoreError::InternalServerError
            })?;

        let recipe = recipes::Entity::find_by_id(created.recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load planned recipe: {}", e);
                CoreError::InternalServerError
            })?;

        map_item(created, recipe)
    }

    async fn get_items(&self, plan_id: Uuid) -> Result<Vec<MealPlanItem>, CoreError> {
        let rows = meal_plan_items::Entity::find()
            .filter(meal_plan_items::Column::MealPlanId.eq(plan_id))
            .order_by_asc(meal_plan_items::Column::ScheduledFor)
            .order_by_asc(meal_plan_items::Column::CreatedAt)
            .find_also_related(recipes::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get meal plan items: {}", e);
                CoreError::InternalServerError
            })?;

        rows.into_iter()
            .map(|(item, recipe)| {
                map_item(item, recipe).map_err(|e| {
                    error!("Unreadable item in meal plan {}: {}", plan_id, e);
                    CoreError::InternalServerError
                })
            })
            .collect()
    }
}
