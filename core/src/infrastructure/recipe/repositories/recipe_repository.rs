use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseBackend, DatabaseConnection, EntityTrait,
    FromQueryResult, QueryFilter, QueryOrder, Statement, Value,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        recipe::{
            entities::{Ingredient, Recipe, RecipeStep, RecipeSummary},
            ports::RecipeRepository,
            value_objects::SearchRecipesFilter,
        },
    },
    entity::{recipe_ingredients, recipe_steps, recipes},
    infrastructure::recipe::mappers::RecipeFeedRow,
};

const FEED_QUERY: &str = r#"
    SELECT
      r.id AS recipe_id,
      r.title,
      r.description,
      r.image_url,
      r.cuisine,
      r.tags,
      CASE
        WHEN r.prep_time_minutes IS NULL AND r.cook_time_minutes IS NULL THEN NULL
        ELSE COALESCE(r.prep_time_minutes, 0)::bigint + COALESCE(r.cook_time_minutes, 0)::bigint
      END AS total_time,
      p.username AS author_username,
      (SELECT COUNT(*) FROM recipe_likes l WHERE l.recipe_id = r.id) AS like_count,
      (SELECT COUNT(*) FROM comments c WHERE c.recipe_id = r.id) AS comment_count,
      EXISTS (
        SELECT 1 FROM recipe_likes l WHERE l.recipe_id = r.id AND l.user_id = $1::uuid
      ) AS is_liked,
      EXISTS (
        SELECT 1 FROM recipe_saves s WHERE s.recipe_id = r.id AND s.user_id = $1::uuid
      ) AS is_saved,
      r.created_at
    FROM recipes r
    LEFT JOIN profiles p ON p.id = r.author_id
    WHERE (r.is_public OR r.author_id = $1::uuid)
      AND (
        $2::text IS NULL
        OR r.title ILIKE $2
        OR COALESCE(r.description, '') ILIKE $2
        OR EXISTS (SELECT 1 FROM unnest(COALESCE(r.tags, '{}')) AS tag WHERE tag ILIKE $2)
      )
      AND (cardinality($3::text[]) = 0 OR lower(r.cuisine) = ANY($3::text[]))
      AND (
        $4::int IS NULL
        OR COALESCE(r.prep_time_minutes, 0)::bigint + COALESCE(r.cook_time_minutes, 0)::bigint
          <= $4::int
      )
    ORDER BY
      CASE WHEN $2::text IS NOT NULL AND r.title ILIKE $2 THEN 0 ELSE 1 END,
      r.created_at DESC
    LIMIT $5 OFFSET $6
"#;

/// `%text%` with LIKE wildcards in the text escaped.
fn like_pattern(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[derive(Debug, Clone)]
pub struct PostgresRecipeRepository {
    pub db: DatabaseConnection,
}

impl PostgresRecipeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl RecipeRepository for PostgresRecipeRepository {
    async fn create_recipe(&self, recipe: Recipe) -> Result<Recipe, CoreError> {
        let active_model = recipes::ActiveModel {
            id: Set(recipe.id),
            author_id: Set(recipe.author_id),
            title: Set(recipe.title),
            description: Set(recipe.description),
            cuisine: Set(recipe.cuisine),
            tags: Set(recipe.tags),
            prep_time_minutes: Set(recipe.prep_time_minutes),
            cook_time_minutes: Set(recipe.cook_time_minutes),
            servings: Set(recipe.servings),
            image_url: Set(recipe.image_url),
            is_public: Set(recipe.is_public),
            created_at: Set(recipe.created_at.fixed_offset()),
            updated_at: Set(recipe.updated_at.fixed_offset()),
        };

        let created = recipes::Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created.into())
    }

    async fn add_ingredients(
        &self,
        ingredients: Vec<Ingredient>,
    ) -> Result<Vec<Ingredient>, CoreError> {
        if ingredients.is_empty() {
            return Ok(ingredients);
        }

        let models = ingredients
            .iter()
            .enumerate()
            .map(|(position, ingredient)| recipe_ingredients::ActiveModel {
                id: Set(ingredient.id),
                recipe_id: Set(ingredient.recipe_id),
                name: Set(ingredient.name.clone()),
                quantity: Set(ingredient.quantity),
                unit: Set(ingredient.unit.clone()),
                position: Set(position as i32),
            });

        recipe_ingredients::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to add recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(ingredients)
    }

    async fn add_steps(&self, steps: Vec<RecipeStep>) -> Result<Vec<RecipeStep>, CoreError> {
        if steps.is_empty() {
            return Ok(steps);
        }

        let models = steps.iter().map(|step| recipe_steps::ActiveModel {
            id: Set(step.id),
            recipe_id: Set(step.recipe_id),
            step_number: Set(step.step_number),
            instruction: Set(step.instruction.clone()),
        });

        recipe_steps::Entity::insert_many(models)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to add recipe steps: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(steps)
    }

    async fn get_by_id(&self, recipe_id: Uuid) -> Result<Option<Recipe>, CoreError> {
        let model = recipes::Entity::find_by_id(recipe_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(model.map(Recipe::from))
    }

    async fn get_ingredients(&self, recipe_id: Uuid) -> Result<Vec<Ingredient>, CoreError> {
        self.get_ingredients_for_recipes(vec![recipe_id]).await
    }

    async fn get_steps(&self, recipe_id: Uuid) -> Result<Vec<RecipeStep>, CoreError> {
        let models = recipe_steps::Entity::find()
            .filter(recipe_steps::Column::RecipeId.eq(recipe_id))
            .order_by_asc(recipe_steps::Column::StepNumber)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe steps: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(RecipeStep::from).collect())
    }

    async fn get_ingredients_for_recipes(
        &self,
        recipe_ids: Vec<Uuid>,
    ) -> Result<Vec<Ingredient>, CoreError> {
        if recipe_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = recipe_ingredients::Entity::find()
            .filter(recipe_ingredients::Column::RecipeId.is_in(recipe_ids))
            .order_by_asc(recipe_ingredients::Column::RecipeId)
            .order_by_asc(recipe_ingredients::Column::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get recipe ingredients: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(models.into_iter().map(Ingredient::from).collect())
    }

    async fn search(&self, filter: SearchRecipesFilter) -> Result<Vec<RecipeSummary>, CoreError> {
        let statement = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            FEED_QUERY,
            [
                filter.viewer_id.into(),
                filter.search.as_deref().map(like_pattern).into(),
                Value::from(filter.cuisines),
                filter.max_total_time.into(),
                filter.pagination.limit.into(),
                filter.pagination.offset.into(),
            ],
        );

        let rows = RecipeFeedRow::find_by_statement(statement)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search recipes: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows.into_iter().map(RecipeSummary::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("dal"), "%dal%");
        assert_eq!(like_pattern("50%_off"), "%50\\%\\_off%");
    }
}
