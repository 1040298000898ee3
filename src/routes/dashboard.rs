use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::Query;
use chefshare_recipe::{AdHocFilters, ListingParams, Recipe, SessionFilterState};
use serde::Serialize;

use crate::{error::AppError, routes::AppState, session::Session};

#[derive(Serialize)]
pub struct DashboardView {
    pub is_filtered: bool,
    pub filters: Option<SessionFilterState>,
    pub recipes: Vec<Recipe>,
}

/// GET /dashboard - Recipe listing narrowed by the session's recommendation
/// preference and the query string
pub async fn page(
    session: Session,
    State(app): State<AppState>,
    Query(params): Query<ListingParams>,
) -> Result<impl IntoResponse, AppError> {
    let filters = app.sessions.get(&session.id).await.map_err(|err| {
        tracing::error!(session = %session.id, err = %err, "Failed to load session filters");
        err
    })?;

    let request = AdHocFilters::from(params);
    let result = app
        .recipe_query
        .filter(filters.as_ref(), &request)
        .await
        .map_err(|err| {
            tracing::error!(session = %session.id, err = %err, "Failed to query recipes");
            err
        })?;

    Ok((
        session.jar,
        Json(DashboardView {
            is_filtered: result.is_recommendation_active,
            filters,
            recipes: result.recipes,
        }),
    ))
}
