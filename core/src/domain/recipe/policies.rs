use crate::domain::{authentication::value_objects::Identity, recipe::entities::Recipe};

/// Public recipes are visible to everyone, private ones only to their author.
pub fn can_view_recipe(viewer: Option<&Identity>, recipe: &Recipe) -> bool {
    recipe.is_public || viewer.is_some_and(|identity| identity.id() == recipe.author_id)
}
