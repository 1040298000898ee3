use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chefshare_recipe::ReviewInput;
use serde_json::json;

use crate::{error::AppError, routes::AppState, session::Session};

/// POST /recipes/{id}/reviews - Rate and comment on a recipe
pub async fn create(
    session: Session,
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<ReviewInput>,
) -> Result<impl IntoResponse, AppError> {
    let review_id = app
        .recipe_command
        .add_review(&id, input, &session.id)
        .await?;

    Ok((
        StatusCode::CREATED,
        session.jar,
        Json(json!({"id": review_id})),
    ))
}
