use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::{error::AppError, routes::AppState, session::Session};

/// POST /recipes/{id}/save - Toggle the recipe in the requester's saved list
pub async fn toggle(
    session: Session,
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let toggled = app.recipe_command.toggle_save(&id, &session.id).await?;

    Ok((session.jar, Json(toggled)))
}
