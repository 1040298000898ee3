use chefshare_recipe::{AdHocFilters, ListingParams, RecipeInput, SessionFilterState};
use temp_dir::TempDir;

mod helpers;

async fn seed(command: &chefshare_recipe::Command, pool: &sqlx::SqlitePool) -> anyhow::Result<()> {
    let recipes: [(RecipeInput, i64); 5] = [
        (
            RecipeInput {
                health_condition: Some("Diabetes".to_owned()),
                dietary: Some("Vegan".to_owned()),
                meal_time: Some("Lunch".to_owned()),
                meal_type: Some("Main Course".to_owned()),
                budget: Some(1500.0),
                origin_country: Some("Cameroon".to_owned()),
                ..helpers::recipe_input("Ndole without meat", &["ndole leaves", "peanuts"])
            },
            5,
        ),
        (
            RecipeInput {
                health_condition: Some("Hypertension".to_owned()),
                dietary: Some("Vegan".to_owned()),
                meal_time: Some("Dinner".to_owned()),
                meal_type: Some("Soup".to_owned()),
                budget: Some(40.0),
                ..helpers::recipe_input("Tomato soup", &["tomato", "onion"])
            },
            4,
        ),
        (
            RecipeInput {
                health_condition: Some("Diabetes".to_owned()),
                meal_time: Some("Breakfast".to_owned()),
                meal_type: Some("Drink".to_owned()),
                budget: Some(50.0),
                ..helpers::recipe_input("Green smoothie", &["spinach", "cucumber"])
            },
            3,
        ),
        (
            RecipeInput {
                dietary: Some("Halal".to_owned()),
                origin_country: Some("Senegal".to_owned()),
                ..helpers::recipe_input("Thieboudienne", &["fish", "rice", "tomatoes"])
            },
            2,
        ),
        (
            RecipeInput {
                meal_time: Some("Snack".to_owned()),
                budget: Some(10.0),
                ..helpers::recipe_input("Puff puff", &["flour", "yeast"])
            },
            1,
        ),
    ];

    for (input, created_at) in recipes {
        let id = command.create(input, "chef").await?;
        helpers::set_created_at(pool, &id, created_at).await?;
    }

    Ok(())
}

fn titles(recipes: &[chefshare_recipe::Recipe]) -> Vec<&str> {
    recipes.iter().map(|r| r.title.as_str()).collect()
}

#[tokio::test]
async fn test_no_filters_lists_newest_first() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = chefshare_recipe::Command(pool.clone());
    let query = chefshare_recipe::Query(pool.clone());
    seed(&command, &pool).await?;

    let result = query.filter(None, &AdHocFilters::default()).await?;

    assert!(!result.is_recommendation_active);
    assert_eq!(
        titles(&result.recipes),
        vec![
            "Ndole without meat",
            "Tomato soup",
            "Green smoothie",
            "Thieboudienne",
            "Puff puff"
        ]
    );
    assert_eq!(result.recipes[0].ingredients.0[1].name, "peanuts");

    Ok(())
}

#[tokio::test]
async fn test_session_health_condition_is_exact() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = chefshare_recipe::Command(pool.clone());
    let query = chefshare_recipe::Query(pool.clone());
    seed(&command, &pool).await?;

    let session = SessionFilterState {
        health_condition: Some("Diabetes".to_owned()),
        ..Default::default()
    };
    let result = query.filter(Some(&session), &AdHocFilters::default()).await?;
    assert!(result.is_recommendation_active);
    assert_eq!(
        titles(&result.recipes),
        vec!["Ndole without meat", "Green smoothie"]
    );

    let session = SessionFilterState {
        health_condition: Some("diabetes".to_owned()),
        ..Default::default()
    };
    let result = query.filter(Some(&session), &AdHocFilters::default()).await?;
    assert!(result.recipes.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_allergies_exclude_plural_and_singular_forms() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = chefshare_recipe::Command(pool.clone());
    let query = chefshare_recipe::Query(pool.clone());
    seed(&command, &pool).await?;

    let session = SessionFilterState {
        allergies: Some("Tomatoes, peanuts".to_owned()),
        ..Default::default()
    };
    let result = query.filter(Some(&session), &AdHocFilters::default()).await?;

    assert!(result.is_recommendation_active);
    assert_eq!(titles(&result.recipes), vec!["Green smoothie", "Puff puff"]);

    Ok(())
}

#[tokio::test]
async fn test_request_filters_narrow_the_listing() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = chefshare_recipe::Command(pool.clone());
    let query = chefshare_recipe::Query(pool.clone());
    seed(&command, &pool).await?;

    let search = AdHocFilters {
        search: Some("SENEGAL".to_owned()),
        ..Default::default()
    };
    let result = query.filter(None, &search).await?;
    assert_eq!(titles(&result.recipes), vec!["Thieboudienne"]);
    assert!(!result.is_recommendation_active);

    let prices = AdHocFilters::from(ListingParams {
        min_price: Some("abc".to_owned()),
        max_price: Some("50".to_owned()),
        ..Default::default()
    });
    let result = query.filter(None, &prices).await?;
    assert_eq!(
        titles(&result.recipes),
        vec!["Tomato soup", "Green smoothie", "Puff puff"]
    );

    let meals = AdHocFilters {
        meal_times: vec!["Lunch".to_owned(), "Dinner".to_owned()],
        meal_types: vec!["Soup".to_owned()],
        ..Default::default()
    };
    let result = query.filter(None, &meals).await?;
    assert_eq!(titles(&result.recipes), vec!["Tomato soup"]);

    Ok(())
}

#[tokio::test]
async fn test_session_and_request_dietary_combine() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = chefshare_recipe::Command(pool.clone());
    let query = chefshare_recipe::Query(pool.clone());
    seed(&command, &pool).await?;

    let session = SessionFilterState {
        dietary: Some("Vegan".to_owned()),
        health_condition: Some("None".to_owned()),
        allergies: Some(String::new()),
    };
    let request = AdHocFilters {
        dietary: Some("Vegan".to_owned()),
        search: Some("soup".to_owned()),
        ..Default::default()
    };
    let result = query.filter(Some(&session), &request).await?;

    assert!(result.is_recommendation_active);
    assert_eq!(titles(&result.recipes), vec!["Tomato soup"]);

    Ok(())
}

#[tokio::test]
async fn test_search_ignores_case_of_accented_text() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = chefshare_recipe::Command(pool.clone());
    let query = chefshare_recipe::Query(pool.clone());

    let id = command
        .create(
            RecipeInput {
                origin_country: Some("CÔTE D'IVOIRE".to_owned()),
                ..helpers::recipe_input("CRÈME BRÛLÉE", &["cream", "sugar"])
            },
            "chef",
        )
        .await?;
    command
        .create(helpers::recipe_input("Puff puff", &["flour", "yeast"]), "chef")
        .await?;

    let search = |needle: &str| AdHocFilters {
        search: Some(needle.to_owned()),
        ..Default::default()
    };

    let sql = query.filter(None, &search("crème")).await?;
    assert_eq!(titles(&sql.recipes), vec!["CRÈME BRÛLÉE"]);

    let everything = query.filter(None, &AdHocFilters::default()).await?;
    let memory =
        chefshare_recipe::filter_recipes(everything.recipes, None, &search("crème"));
    assert_eq!(titles(&sql.recipes), titles(&memory.recipes));

    let result = query.filter(None, &search("côte")).await?;
    assert_eq!(titles(&result.recipes), vec!["CRÈME BRÛLÉE"]);

    command
        .update(
            &id,
            helpers::recipe_input("ÉCLAIR AU CAFÉ", &["flour", "coffee"]),
            "chef",
        )
        .await?;

    let result = query.filter(None, &search("éclair")).await?;
    assert_eq!(titles(&result.recipes), vec!["ÉCLAIR AU CAFÉ"]);
    assert!(query.filter(None, &search("crème")).await?.recipes.is_empty());
    assert!(query.filter(None, &search("côte")).await?.recipes.is_empty());

    Ok(())
}
