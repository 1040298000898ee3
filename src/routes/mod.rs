use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use chefshare_recipe::SessionStore;
use sqlx::SqlitePool;

mod choices;
mod dashboard;
mod health;
mod recipes;
mod recommendation;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub recipe_command: chefshare_recipe::Command,
    pub recipe_query: chefshare_recipe::Query,
    pub sessions: Arc<dyn SessionStore>,
    pub pool: SqlitePool,
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/dashboard", get(dashboard::page))
        .route("/recommendation", post(recommendation::action))
        .route("/reset-filters", post(recommendation::reset))
        .route("/choices", get(choices::list))
        .route("/recipes", post(recipes::index::create))
        .route(
            "/recipes/{id}",
            get(recipes::detail::page).post(recipes::edit::action),
        )
        .route("/recipes/{id}/delete", post(recipes::edit::delete))
        .route("/recipes/{id}/save", post(recipes::save::toggle))
        .route("/recipes/{id}/reviews", post(recipes::review::create))
        .with_state(app_state)
}
