use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    comment::{
        entities::Comment,
        value_objects::{CreateCommentInput, GetCommentsInput},
    },
    common::{OffsetLimit, entities::app_errors::CoreError},
};

#[cfg_attr(test, mockall::automock)]
pub trait CommentRepository: Send + Sync {
    fn create_comment(
        &self,
        comment: Comment,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    /// Newest first, with author usernames.
    fn get_by_recipe(
        &self,
        recipe_id: Uuid,
        pagination: OffsetLimit,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;
}

pub trait CommentService: Send + Sync {
    fn create_comment(
        &self,
        identity: Identity,
        input: CreateCommentInput,
    ) -> impl Future<Output = Result<Comment, CoreError>> + Send;

    fn get_comments(
        &self,
        viewer: Option<Identity>,
        input: GetCommentsInput,
    ) -> impl Future<Output = Result<Vec<Comment>, CoreError>> + Send;
}
