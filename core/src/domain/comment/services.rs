use tracing::instrument;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::{
        entities::Comment,
        ports::{CommentRepository, CommentService},
        value_objects::{CreateCommentInput, GetCommentsInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    engagement::ports::EngagementRepository,
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
};

impl<P, R, E, C, M, S, H, T> CommentService for Service<P, R, E, C, M, S, H, T>
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
    #[instrument(skip(self, input), fields(user_id = %identity.id(), recipe_id = %input.recipe_id))]
    async fn create_comment(
        &self,
        identity: Identity,
        input: CreateCommentInput,
    ) -> Result<Comment, CoreError> {
        let content = input.content.trim();
        if content.is_empty() {
            return Err(CoreError::Invalid("comment must not be empty".to_string()));
        }

        let recipe = self.visible_recipe(Some(&identity), input.recipe_id).await?;

        self.comment_repository
            .create_comment(Comment::new(recipe.id, identity.id(), content.to_string()))
            .await
    }

    #[instrument(skip(self, viewer), fields(recipe_id = %input.recipe_id))]
    async fn get_comments(
        &self,
        viewer: Option<Identity>,
        input: GetCommentsInput,
    ) -> Result<Vec<Comment>, CoreError> {
        let recipe = self.visible_recipe(viewer.as_ref(), input.recipe_id).await?;

        self.comment_repository
            .get_by_recipe(recipe.id, input.pagination)
            .await
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::common::test_support::{mock_service, sample_recipe};

    #[tokio::test]
    async fn comment_content_is_trimmed() {
        let recipe = sample_recipe(Uuid::new_v4());
        let recipe_id = recipe.id;

        let mut service = mock_service();
        service
            .recipe_repository
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(Some(recipe)) })
            });
        service
            .comment_repository
            .expect_create_comment()
            .withf(|comment| comment.content == "Lovely!")
            .returning(|comment| Box::pin(async move { Ok(comment) }));

        let comment = service
            .create_comment(
                Identity::new(Uuid::new_v4(), None),
                CreateCommentInput {
                    recipe_id,
                    content: "  Lovely!\n".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(comment.recipe_id, recipe_id);
    }

    #[tokio::test]
    async fn blank_comment_is_rejected() {
        let mut service = mock_service();
        service.recipe_repository.expect_get_by_id().never();
        service.comment_repository.expect_create_comment().never();

        let result = service
            .create_comment(
                Identity::new(Uuid::new_v4(), None),
                CreateCommentInput {
                    recipe_id: Uuid::new_v4(),
                    content: " \t ".to_string(),
                },
            )
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }
}
