#![allow(dead_code)]

use chefshare_recipe::{IngredientList, RecipeInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use std::{path::PathBuf, str::FromStr};

pub async fn setup_test_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    chefshare_db::migrate(&pool).await?;

    Ok(pool)
}

pub fn recipe_input(title: &str, ingredients: &[&str]) -> RecipeInput {
    RecipeInput {
        title: title.to_owned(),
        description: format!("How to cook {title}"),
        ingredients: ingredients.iter().copied().collect::<IngredientList>(),
        currency: "XAF".to_owned(),
        cooking_time: 30,
        ..Default::default()
    }
}

/// Pins the creation timestamp so listing order is deterministic.
pub async fn set_created_at(pool: &SqlitePool, id: &str, created_at: i64) -> anyhow::Result<()> {
    sqlx::query("UPDATE recipe SET created_at = ? WHERE id = ?")
        .bind(created_at)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}
