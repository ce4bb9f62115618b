use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::{NoContext, Timestamp, Uuid};

pub mod entities;
pub mod policies;
pub mod services;

#[derive(Clone, Debug)]
pub struct LarderConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.name
        )
    }
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// Shared secret of the identity service that issues the bearer tokens.
    pub jwt_secret: String,
    pub audience: Option<String>,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}

pub fn generate_uuid_v7() -> Uuid {
    let (_, timestamp) = generate_timestamp();
    Uuid::new_v7(timestamp)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OffsetLimit {
    pub offset: i64,
    pub limit: i64,
}

impl Default for OffsetLimit {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 20,
        }
    }
}

impl OffsetLimit {
    /// Clamps to a non-negative offset and a limit between 1 and 100.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self {
            offset: offset.max(0),
            limit: limit.clamp(1, 100),
        }
    }
}


#[cfg(test)]
pub(crate) mod test_support {
    use uuid::Uuid;

    use crate::domain::{
        authentication::ports::MockTokenVerifier,
        comment::ports::MockCommentRepository,
        common::services::Service,
        engagement::ports::MockEngagementRepository,
        health::ports::MockHealthCheckRepository,
        meal_plan::ports::MockMealPlanRepository,
        profile::ports::MockProfileRepository,
        recipe::{
            entities::{Recipe, RecipeConfig},
            ports::MockRecipeRepository,
        },
        shopping_list::ports::MockShoppingListRepository,
    };

    pub type MockService = Service<
        MockProfileRepository,
        MockRecipeRepository,
        MockEngagementRepository,
        MockCommentRepository,
        MockMealPlanRepository,
        MockShoppingListRepository,
        MockHealthCheckRepository,
        MockTokenVerifier,
    >;

    pub fn mock_service() -> MockService {
        Service::new(
            MockProfileRepository::new(),
            MockRecipeRepository::new(),
            MockEngagementRepository::new(),
            MockCommentRepository::new(),
            MockMealPlanRepository::new(),
            MockShoppingListRepository::new(),
            MockHealthCheckRepository::new(),
            MockTokenVerifier::new(),
        )
    }

    pub fn sample_recipe(author_id: Uuid) -> Recipe {
        Recipe::new(RecipeConfig {
            author_id,
            title: "Weeknight dal".to_string(),
            description: Some("Red lentils, lots of cumin".to_string()),
            cuisine: Some("Indian".to_string()),
            tags: Some(vec!["vegan".to_string()]),
            prep_time_minutes: Some(10),
            cook_time_minutes: Some(25),
            servings: Some(4),
            image_url: None,
            is_public: true,
        })
    }
}
