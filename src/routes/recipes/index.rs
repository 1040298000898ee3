use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chefshare_recipe::RecipeInput;
use serde_json::json;

use crate::{routes::AppState, session::Session};

/// POST /recipes - Create a recipe owned by the requester
pub async fn create(
    session: Session,
    State(app): State<AppState>,
    Json(input): Json<RecipeInput>,
) -> Response {
    match app.recipe_command.create(input.clone(), &session.id).await {
        Ok(id) => (StatusCode::CREATED, session.jar, Json(json!({"id": id}))).into_response(),
        Err(err) => {
            tracing::warn!(chef = %session.id, err = %err, "Recipe rejected");
            (session.jar, super::write_error(err, input)).into_response()
        }
    }
}
