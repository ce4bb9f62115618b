use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::error;
use uuid::Uuid;

use crate::{
    domain::{
        comment::{entities::Comment, ports::CommentRepository},
        common::{OffsetLimit, entities::app_errors::CoreError},
    },
    entity::{
        comments::{ActiveModel, Column, Entity},
        profiles,
    },
    infrastructure::comment::mappers::map_comment,
};

#[derive(Debug, Clone)]
pub struct PostgresCommentRepository {
    pub db: DatabaseConnection,
}

impl PostgresCommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CommentRepository for PostgresCommentRepository {
    async fn create_comment(&self, comment: Comment) -> Result<Comment, CoreError> {
        let active_model = ActiveModel {
            id: Set(comment.id),
            recipe_id: Set(comment.recipe_id),
            user_id: Set(comment.user_id),
            content: Set(comment.content),
            created_at: Set(comment.created_at.fixed_offset()),
        };

        let created = Entity::insert(active_model)
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create comment: {}", e);
                CoreError::InternalServerError
            })?;

        let author = profiles::Entity::find_by_id(created.user_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load comment author: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(map_comment(created, author))
    }

    async fn get_by_recipe(
        &self,
        recipe_id: Uuid,
        pagination: OffsetLimit,
    ) -> Result<Vec<Comment>, CoreError> {
        let rows = Entity::find()
            .filter(Column::RecipeId.eq(recipe_id))
            .order_by_desc(Column::CreatedAt)
            .offset(pagination.offset as u64)
            .limit(pagination.limit as u64)
            .find_also_related(profiles::Entity)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get comments: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| map_comment(comment, author))
            .collect())
    }
}
