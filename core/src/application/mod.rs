use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    domain::common::{AuthConfig, LarderConfig, services::Service},
    infrastructure::{
        auth::JwtTokenVerifier,
        comment::PostgresCommentRepository,
        db::postgres::{Postgres, PostgresConfig},
        engagement::PostgresEngagementRepository,
        health::PostgresHealthCheckRepository,
        meal_plan::PostgresMealPlanRepository,
        profile::PostgresProfileRepository,
        recipe::PostgresRecipeRepository,
        shopping_list::PostgresShoppingListRepository,
    },
};

pub type LarderService = Service<
    PostgresProfileRepository,
    PostgresRecipeRepository,
    PostgresEngagementRepository,
    PostgresCommentRepository,
    PostgresMealPlanRepository,
    PostgresShoppingListRepository,
    PostgresHealthCheckRepository,
    JwtTokenVerifier,
>;

/// Wires the Postgres adapters and the token verifier around one connection.
pub fn build_service(db: DatabaseConnection, auth: &AuthConfig) -> LarderService {
    Service::new(
        PostgresProfileRepository::new(db.clone()),
        PostgresRecipeRepository::new(db.clone()),
        PostgresEngagementRepository::new(db.clone()),
        PostgresCommentRepository::new(db.clone()),
        PostgresMealPlanRepository::new(db.clone()),
        PostgresShoppingListRepository::new(db.clone()),
        PostgresHealthCheckRepository::new(db),
        JwtTokenVerifier::new(auth),
    )
}

pub async fn create_service(config: LarderConfig) -> Result<LarderService, anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    if config.database.run_migrations {
        postgres.run_migrations().await?;
    } else {
        info!("skipping database migrations");
    }

    Ok(build_service(postgres.get_db(), &config.auth))
}
