use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chefshare_recipe::RecipeInput;
use serde_json::json;

use crate::{error::AppError, routes::AppState, session::Session};

/// POST /recipes/{id} - Update a recipe, owner only
pub async fn action(
    session: Session,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<RecipeInput>,
) -> Response {
    match app
        .recipe_command
        .update(&id, input.clone(), &session.id)
        .await
    {
        Ok(_) => (session.jar, Json(json!({"id": id}))).into_response(),
        Err(err) => {
            tracing::warn!(recipe = %id, chef = %session.id, err = %err, "Recipe update rejected");
            (session.jar, super::write_error(err, input)).into_response()
        }
    }
}

/// POST /recipes/{id}/delete - Delete a recipe, owner only
pub async fn delete(
    session: Session,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    app.recipe_command.delete(&id, &session.id).await?;

    Ok((session.jar, StatusCode::NO_CONTENT))
}
