mod filter_session;
mod recipe;
mod recipe_review;
mod recipe_saved;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "chefshare",
    "m0001",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        recipe::CreateIdx2,
        recipe_review::CreateTable,
        recipe_review::CreateIdx1,
        recipe_saved::CreateTable,
        filter_session::CreateTable
    ]
);
