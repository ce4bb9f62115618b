use std::collections::HashMap;

use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{
        OffsetLimit,
        entities::app_errors::CoreError,
        policies::{ensure_policy, is_owner},
        services::Service,
    },
    engagement::ports::EngagementRepository,
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    recipe::{entities::Ingredient, ports::RecipeRepository},
    shopping_list::{
        aggregation::consolidate,
        entities::{ShoppingList, ShoppingListItem},
        ports::{ShoppingListRepository, ShoppingListService},
        value_objects::SetItemCheckedInput,
    },
};

impl<P, R, E, C, M, S, H, T> ShoppingListService for Service<P, R, E, C, M, S, H, T>
where
    P: ProfileRepository,
    R: RecipeRepository,
    E: EngagementRepository,
    C: CommentRepository,
    M: MealPlanRepository,
    S: ShoppingListRepository,
    H: HealthCheckRepository,
    T: TokenVerifier,
{
    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn generate_shopping_list(
        &self,
        identity: Identity,
        meal_plan_id: Uuid,
    ) -> Result<ShoppingList, CoreError> {
        let plan = self.owned_plan(&identity, meal_plan_id).await?;
        let planned = self.meal_plan_repository.get_items(plan.id).await?;

        let mut recipe_ids: Vec<Uuid> = planned.iter().map(|item| item.recipe_id).collect();
        recipe_ids.sort_unstable();
        recipe_ids.dedup();

        let ingredients = if recipe_ids.is_empty() {
            Vec::new()
        } else {
            self.recipe_repository
                .get_ingredients_for_recipes(recipe_ids)
                .await?
        };

        let mut by_recipe: HashMap<Uuid, Vec<&Ingredient>> = HashMap::new();
        for ingredient in &ingredients {
            by_recipe
                .entry(ingredient.recipe_id)
                .or_default()
                .push(ingredient);
        }

        // A recipe planned several times contributes its ingredients each time.
        let lines = planned
            .iter()
            .filter_map(|item| by_recipe.get(&item.recipe_id))
            .flatten()
            .copied();

        let mut list = ShoppingList::new(
            identity.id(),
            format!("Shopping list: {}", plan.title),
            Some(plan.id),
        );
        list.items = consolidate(lines)
            .into_iter()
            .zip(0..)
            .map(|(line, position)| {
                ShoppingListItem::new(list.id, line.name, line.quantity, line.unit, position)
            })
            .collect();

        let created = self.shopping_list_repository.create_with_items(list).await?;

        info!(
            list_id = %created.id,
            plan_id = %plan.id,
            items = created.items.len(),
            "shopping list generated"
        );

        Ok(created)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn get_shopping_lists(
        &self,
        identity: Identity,
        pagination: OffsetLimit,
    ) -> Result<Vec<ShoppingList>, CoreError> {
        self.shopping_list_repository
            .get_by_user(identity.id(), pagination)
            .await
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), item_id = %input.item_id))]
    async fn set_item_checked(
        &self,
        identity: Identity,
        input: SetItemCheckedInput,
    ) -> Result<ShoppingListItem, CoreError> {
        let list = self
            .shopping_list_repository
            .get_by_id(input.shopping_list_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            Ok(is_owner(&identity, list.user_id)),
            "shopping list belongs to another user",
        )?;

        self.shopping_list_repository
            .set_item_checked(list.id, input.item_id, input.checked)
            .await?
            .ok_or(CoreError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::{
        common::test_support::mock_service,
        meal_plan::entities::{MealPlan, MealPlanItem, MealSlot},
    };

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 11, d).unwrap()
    }

    #[tokio::test]
    async fn list_aggregates_every_planned_occurrence() {
        let owner = Identity::new(Uuid::new_v4(), None);
        let plan = MealPlan::new(owner.id(), "Busy week".to_string(), day(1), day(7));
        let plan_id = plan.id;
        let soup = Uuid::new_v4();
        let salad = Uuid::new_v4();

        let planned = vec![
            MealPlanItem::new(plan_id, soup, day(1), MealSlot::Dinner),
            MealPlanItem::new(plan_id, salad, day(2), MealSlot::Lunch),
            MealPlanItem::new(plan_id, soup, day(3), MealSlot::Dinner),
        ];
        let ingredients = vec![
            Ingredient::new(soup, "Carrot".to_string(), Some(2.0), None),
            Ingredient::new(soup, "Stock".to_string(), Some(1.0), Some("l".to_string())),
            Ingredient::new(salad, "carrot".to_string(), Some(1.0), None),
            Ingredient::new(salad, "Lettuce".to_string(), None, None),
        ];

        let mut service = mock_service();
        service
            .meal_plan_repository
            .expect_get_plan_by_id()
            .returning(move |_| {
                let plan = plan.clone();
                Box::pin(async move { Ok(Some(plan)) })
            });
        service
            .meal_plan_repository
            .expect_get_items()
            .returning(move |_| {
                let planned = planned.clone();
                Box::pin(async move { Ok(planned) })
            });
        service
            .recipe_repository
            .expect_get_ingredients_for_recipes()
            .withf(|ids| ids.len() == 2)
            .returning(move |_| {
                let ingredients = ingredients.clone();
                Box::pin(async move { Ok(ingredients) })
            });
        service
            .shopping_list_repository
            .expect_create_with_items()
            .times(1)
            .returning(|list| Box::pin(async move { Ok(list) }));

        let list = service
            .generate_shopping_list(owner.clone(), plan_id)
            .await
            .unwrap();

        assert_eq!(list.title, "Shopping list: Busy week");
        assert_eq!(list.status, "draft");
        assert_eq!(list.generated_from_meal_plan, Some(plan_id));
        assert_eq!(list.user_id, owner.id());

        let lines: Vec<(&str, Option<f64>, Option<&str>, i32)> = list
            .items
            .iter()
            .map(|i| (i.ingredient.as_str(), i.quantity, i.unit.as_deref(), i.sort_order))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("Carrot", Some(5.0), None, 0),
                ("Lettuce", None, None, 1),
                ("Stock", Some(2.0), Some("l"), 2),
            ]
        );
        assert!(list.items.iter().all(|i| !i.checked && i.shopping_list_id == list.id));
    }

    #[tokio::test]
    async fn empty_plan_gives_empty_list() {
        let owner = Identity::new(Uuid::new_v4(), None);
        let plan = MealPlan::new(owner.id(), "Nothing yet".to_string(), day(1), day(2));
        let plan_id = plan.id;

        let mut service = mock_service();
        service
            .meal_plan_repository
            .expect_get_plan_by_id()
            .returning(move |_| {
                let plan = plan.clone();
                Box::pin(async move { Ok(Some(plan)) })
            });
        service
            .meal_plan_repository
            .expect_get_items()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        service
            .recipe_repository
            .expect_get_ingredients_for_recipes()
            .never();
        service
            .shopping_list_repository
            .expect_create_with_items()
            .returning(|list| Box::pin(async move { Ok(list) }));

        let list = service.generate_shopping_list(owner, plan_id).await.unwrap();
        assert!(list.items.is_empty());
    }

    #[tokio::test]
    async fn checking_items_of_foreign_list_is_forbidden() {
        let list = ShoppingList::new(Uuid::new_v4(), "Theirs".to_string(), None);
        let list_id = list.id;

        let mut service = mock_service();
        service
            .shopping_list_repository
            .expect_get_by_id()
            .returning(move |_| {
                let list = list.clone();
                Box::pin(async move { Ok(Some(list)) })
            });
        service
            .shopping_list_repository
            .expect_set_item_checked()
            .never();

        let result = service
            .set_item_checked(
                Identity::new(Uuid::new_v4(), None),
                SetItemCheckedInput {
                    shopping_list_id: list_id,
                    item_id: Uuid::new_v4(),
                    checked: true,
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn checking_only_touches_the_item() {
        let owner = Identity::new(Uuid::new_v4(), None);
        let list = ShoppingList::new(owner.id(), "Mine".to_string(), None);
        let list_id = list.id;
        let item = ShoppingListItem::new(list_id, "Milk".to_string(), Some(1.0), Some("l".to_string()), 0);
        let item_id = item.id;

        let mut service = mock_service();
        service
            .shopping_list_repository
            .expect_get_by_id()
            .returning(move |_| {
                let list = list.clone();
                Box::pin(async move { Ok(Some(list)) })
            });
        service
            .shopping_list_repository
            .expect_set_item_checked()
            .withf(move |l, i, checked| *l == list_id && *i == item_id && *checked)
            .times(1)
            .returning(move |_, _, checked| {
                let mut item = item.clone();
                item.checked = checked;
                Box::pin(async move { Ok(Some(item)) })
            });
        service.meal_plan_repository.expect_get_plan_by_id().never();
        service.recipe_repository.expect_get_ingredients().never();

        let updated = service
            .set_item_checked(
                owner,
                SetItemCheckedInput {
                    shopping_list_id: list_id,
                    item_id,
                    checked: true,
                },
            )
            .await
            .unwrap();

        assert!(updated.checked);
        assert_eq!(updated.ingredient, "Milk");
    }
}
