use axum::{Json, response::IntoResponse};
use chefshare_recipe::Choices;

/// GET /choices - Values offered by the authoring and recommendation forms
pub async fn list() -> impl IntoResponse {
    Json(Choices::offered())
}
