use crate::{
    domain::comment::entities::Comment,
    entity::{comments, profiles},
};

pub fn map_comment(model: comments::Model, author: Option<profiles::Model>) -> Comment {
    Comment {
        id: model.id,
        recipe_id: model.recipe_id,
        user_id: model.user_id,
        content: model.content,
        author_username: author.map(|profile| profile.username),
        created_at: model.created_at.to_utc(),
    }
}
