use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, Statement,
    TransactionTrait,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    engagement::{
        entities::{EngagementKind, ToggleOutcome},
        ports::EngagementRepository,
    },
};

fn table(kind: EngagementKind) -> &'static str {
    match kind {
        EngagementKind::Like => "recipe_likes",
        EngagementKind::Save => "recipe_saves",
    }
}

#[derive(Debug, Clone)]
pub struct PostgresEngagementRepository {
    pub db: DatabaseConnection,
}

impl PostgresEngagementRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn toggle_in(
        txn: &DatabaseTransaction,
        table: &str,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<(bool, i64), sea_orm::DbErr> {
        let removed = txn
            .execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                format!("DELETE FROM {table} WHERE recipe_id = $1 AND user_id = $2"),
                [recipe_id.into(), user_id.into()],
            ))
            .await?
            .rows_affected();

        if removed == 0 {
            txn.execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                format!(
                    "INSERT INTO {table} (recipe_id, user_id) VALUES ($1, $2) ON CONFLICT DO NOTHING"
                ),
                [recipe_id.into(), user_id.into()],
            ))
            .await?;
        }

        let count = txn
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                format!("SELECT COUNT(*) AS count FROM {table} WHERE recipe_id = $1"),
                [recipe_id.into()],
            ))
            .await?
            .ok_or_else(|| sea_orm::DbErr::RecordNotFound(format!("{table} count")))?
            .try_get::<i64>("", "count")?;

        Ok((removed == 0, count))
    }
}

impl EngagementRepository for PostgresEngagementRepository {
    async fn toggle(
        &self,
        kind: EngagementKind,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> Result<ToggleOutcome, CoreError> {
        let txn = self.db.begin().await.map_err(|e| {
            error!("Failed to begin transaction: {}", e);
            CoreError::InternalServerError
        })?;

        let (active, count) = Self::toggle_in(&txn, table(kind), recipe_id, user_id)
            .await
            .map_err(|e| {
                error!("Failed to toggle {:?} on recipe {}: {}", kind, recipe_id, e);
                CoreError::InternalServerError
            })?;

        txn.commit().await.map_err(|e| {
            error!("Failed to commit toggle: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(ToggleOutcome {
            recipe_id,
            kind,
            active,
            count,
        })
    }
}
