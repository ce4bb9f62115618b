//! Repository tests against a live database. They run when `DATABASE_URL`
//! points at a Postgres instance and pass trivially otherwise.

use chrono::{Duration, Utc};
use larder_core::{
    domain::{
        common::OffsetLimit,
        engagement::{entities::EngagementKind, ports::EngagementRepository},
        recipe::{
            entities::{Recipe, RecipeConfig, RecipeSummary},
            ports::RecipeRepository,
            value_objects::SearchRecipesFilter,
        },
    },
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        engagement::PostgresEngagementRepository,
        recipe::PostgresRecipeRepository,
    },
};
use sea_orm::DatabaseConnection;
use test_context::{AsyncTestContext, test_context};
use uuid::Uuid;

struct PostgresContext {
    db: Option<DatabaseConnection>,
    /// Unique text mixed into every row a test creates, so searches only
    /// see that test's rows.
    marker: String,
}

impl AsyncTestContext for PostgresContext {
    async fn setup() -> Self {
        let marker = Uuid::new_v4().simple().to_string();
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            return PostgresContext { db: None, marker };
        };

        let postgres = Postgres::new(PostgresConfig { database_url })
            .await
            .unwrap();
        postgres.run_migrations().await.unwrap();

        PostgresContext {
            db: Some(postgres.get_db()),
            marker,
        }
    }
}

impl PostgresContext {
    fn repositories(&self) -> Option<(PostgresRecipeRepository, PostgresEngagementRepository)> {
        let db = self.db.clone()?;
        Some((
            PostgresRecipeRepository::new(db.clone()),
            PostgresEngagementRepository::new(db),
        ))
    }

    fn filter(&self, viewer_id: Option<Uuid>) -> SearchRecipesFilter {
        SearchRecipesFilter {
            viewer_id,
            search: Some(self.marker.clone()),
            cuisines: Vec::new(),
            max_total_time: None,
            pagination: OffsetLimit::default(),
        }
    }
}

fn recipe(author_id: Uuid, title: String, is_public: bool, age_minutes: i64) -> Recipe {
    let mut recipe = Recipe::new(RecipeConfig {
        author_id,
        title,
        description: None,
        cuisine: None,
        tags: None,
        prep_time_minutes: None,
        cook_time_minutes: None,
        servings: None,
        image_url: None,
        is_public,
    });
    recipe.created_at = Utc::now() - Duration::minutes(age_minutes);
    recipe
}

fn titles(rows: &[RecipeSummary]) -> Vec<&str> {
    rows.iter().map(|row| row.title.as_str()).collect()
}

#[test_context(PostgresContext)]
#[tokio::test]
async fn search_shows_public_recipes_and_own_private_ones(ctx: &mut PostgresContext) {
    let Some((recipes, _)) = ctx.repositories() else {
        return;
    };
    let m = &ctx.marker;
    let (alice, bob) = (Uuid::new_v4(), Uuid::new_v4());

    for (author, title, public, age) in [
        (alice, format!("Soup {m}"), true, 3),
        (alice, format!("Stew {m}"), false, 2),
        (bob, format!("Pie {m}"), false, 1),
    ] {
        recipes
            .create_recipe(recipe(author, title, public, age))
            .await
            .unwrap();
    }

    let anonymous = recipes.search(ctx.filter(None)).await.unwrap();
    assert_eq!(titles(&anonymous), vec![format!("Soup {m}")]);

    let as_alice = recipes.search(ctx.filter(Some(alice))).await.unwrap();
    assert_eq!(
        titles(&as_alice),
        vec![format!("Stew {m}"), format!("Soup {m}")]
    );

    let as_bob = recipes.search(ctx.filter(Some(bob))).await.unwrap();
    assert_eq!(titles(&as_bob), vec![format!("Pie {m}"), format!("Soup {m}")]);
}

#[test_context(PostgresContext)]
#[tokio::test]
async fn title_matches_rank_before_newer_other_matches(ctx: &mut PostgresContext) {
    let Some((recipes, _)) = ctx.repositories() else {
        return;
    };
    let m = &ctx.marker;
    let author = Uuid::new_v4();

    let mut by_description = recipe(author, "Lentil soup".to_string(), true, 0);
    by_description.description = Some(format!("Mentions {m} in passing"));
    let mut by_tag = recipe(author, "Flatbread".to_string(), true, 5);
    by_tag.tags = Some(vec![format!("tag-{m}")]);
    let old_title = recipe(author, format!("Old {m}"), true, 30);
    let new_title = recipe(author, format!("NEW {}", m.to_uppercase()), true, 20);

    for row in [by_description, by_tag, old_title, new_title] {
        recipes.create_recipe(row).await.unwrap();
    }

    let rows = recipes.search(ctx.filter(None)).await.unwrap();
    assert_eq!(
        titles(&rows),
        vec![
            format!("NEW {}", m.to_uppercase()),
            format!("Old {m}"),
            "Lentil soup".to_string(),
            "Flatbread".to_string(),
        ]
    );
}

#[test_context(PostgresContext)]
#[tokio::test]
async fn cuisine_ignores_case_and_unknown_time_counts_as_zero(ctx: &mut PostgresContext) {
    let Some((recipes, _)) = ctx.repositories() else {
        return;
    };
    let m = &ctx.marker;
    let author = Uuid::new_v4();
    let cuisine = format!("Thai-{m}");

    let mut untimed = recipe(author, format!("Untimed {m}"), true, 3);
    untimed.cuisine = Some(cuisine.clone());
    let mut quick = recipe(author, format!("Quick {m}"), true, 2);
    quick.cuisine = Some(cuisine.to_uppercase());
    quick.cook_time_minutes = Some(25);
    let mut slow = recipe(author, format!("Slow {m}"), true, 1);
    slow.cuisine = Some(cuisine.clone());
    slow.prep_time_minutes = Some(20);
    slow.cook_time_minutes = Some(20);
    let mut elsewhere = recipe(author, format!("Elsewhere {m}"), true, 0);
    elsewhere.cuisine = Some("Italian".to_string());

    for row in [untimed, quick, slow, elsewhere] {
        recipes.create_recipe(row).await.unwrap();
    }

    let mut filter = ctx.filter(None);
    filter.cuisines = vec![cuisine.to_lowercase()];
    filter.max_total_time = Some(30);
    let rows = recipes.search(filter).await.unwrap();

    assert_eq!(
        titles(&rows),
        vec![format!("Quick {m}"), format!("Untimed {m}")]
    );
    assert_eq!(rows[0].total_time, Some(25));
    assert_eq!(rows[1].total_time, None);
}

#[test_context(PostgresContext)]
#[tokio::test]
async fn huge_minutes_do_not_break_search(ctx: &mut PostgresContext) {
    let Some((recipes, _)) = ctx.repositories() else {
        return;
    };
    let m = &ctx.marker;

    let mut huge = recipe(Uuid::new_v4(), format!("Garum {m}"), true, 0);
    huge.prep_time_minutes = Some(i32::MAX);
    huge.cook_time_minutes = Some(i32::MAX);
    recipes.create_recipe(huge).await.unwrap();

    let rows = recipes.search(ctx.filter(None)).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].total_time, Some(2 * i64::from(i32::MAX)));

    let mut filter = ctx.filter(None);
    filter.max_total_time = Some(60);
    assert!(recipes.search(filter).await.unwrap().is_empty());
}

#[test_context(PostgresContext)]
#[tokio::test]
async fn anonymous_viewer_sees_counts_without_flags(ctx: &mut PostgresContext) {
    let Some((recipes, engagement)) = ctx.repositories() else {
        return;
    };
    let fan = Uuid::new_v4();
    let created = recipes
        .create_recipe(recipe(Uuid::new_v4(), format!("Dal {}", ctx.marker), true, 0))
        .await
        .unwrap();

    engagement
        .toggle(EngagementKind::Like, created.id, fan)
        .await
        .unwrap();
    engagement
        .toggle(EngagementKind::Save, created.id, fan)
        .await
        .unwrap();

    let anonymous = recipes.search(ctx.filter(None)).await.unwrap();
    assert_eq!(anonymous[0].like_count, 1);
    assert!(!anonymous[0].is_liked);
    assert!(!anonymous[0].is_saved);

    let as_fan = recipes.search(ctx.filter(Some(fan))).await.unwrap();
    assert!(as_fan[0].is_liked);
    assert!(as_fan[0].is_saved);
}

#[test_context(PostgresContext)]
#[tokio::test]
async fn toggles_flip_state_and_report_counts(ctx: &mut PostgresContext) {
    let Some((recipes, engagement)) = ctx.repositories() else {
        return;
    };
    let (first, second) = (Uuid::new_v4(), Uuid::new_v4());
    let recipe_id = recipes
        .create_recipe(recipe(Uuid::new_v4(), format!("Roti {}", ctx.marker), true, 0))
        .await
        .unwrap()
        .id;

    let liked = engagement
        .toggle(EngagementKind::Like, recipe_id, first)
        .await
        .unwrap();
    assert!(liked.active);
    assert_eq!(liked.count, 1);

    let liked_again = engagement
        .toggle(EngagementKind::Like, recipe_id, second)
        .await
        .unwrap();
    assert_eq!(liked_again.count, 2);

    let unliked = engagement
        .toggle(EngagementKind::Like, recipe_id, first)
        .await
        .unwrap();
    assert!(!unliked.active);
    assert_eq!(unliked.count, 1);

    let saved = engagement
        .toggle(EngagementKind::Save, recipe_id, first)
        .await
        .unwrap();
    assert!(saved.active);
    assert_eq!(saved.count, 1);
    assert_eq!(saved.kind, EngagementKind::Save);
}
