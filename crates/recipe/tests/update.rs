use chefshare_recipe::RecipeInput;
use chefshare_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_update() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = chefshare_recipe::Command(pool.clone());
    let query = chefshare_recipe::Query(pool);

    let id = command
        .create(helpers::recipe_input("Pepper soup", &["goat", "pepper"]), "john")
        .await?;

    let input = RecipeInput {
        meal_time: Some("Dinner".to_owned()),
        ..helpers::recipe_input("Goat pepper soup", &["goat meat", "pepper", "salt"])
    };
    command.update(&id, input, "john").await?;

    let recipe = query.find(&id).await?.unwrap();
    assert_eq!(recipe.title, "Goat pepper soup");
    assert_eq!(recipe.meal_time.as_deref(), Some("Dinner"));
    assert_eq!(recipe.ingredients.0.len(), 3);
    assert!(recipe.updated_at.is_some());

    Ok(())
}

#[tokio::test]
async fn test_update_checks_owner_and_conflicts() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let pool = helpers::setup_test_pool(dir.child("db.sqlite3")).await?;
    let command = chefshare_recipe::Command(pool.clone());
    let query = chefshare_recipe::Query(pool);

    let id = command
        .create(helpers::recipe_input("Pepper soup", &["goat", "pepper"]), "john")
        .await?;

    let err = command
        .update(&id, helpers::recipe_input("Stolen soup", &["goat"]), "albert")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "forbidden: not owner of recipe");

    let vegan = RecipeInput {
        dietary: Some("Vegan".to_owned()),
        ..helpers::recipe_input("Pepper soup", &["goat", "pepper"])
    };
    let err = command.update(&id, vegan, "john").await.unwrap_err();
    assert!(matches!(err, Error::Conflict(_)));

    let err = command
        .update("missing", helpers::recipe_input("Pepper soup", &["pepper"]), "john")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "recipe not found");

    let recipe = query.find(&id).await?.unwrap();
    assert_eq!(recipe.title, "Pepper soup");
    assert_eq!(recipe.dietary, None);

    Ok(())
}
