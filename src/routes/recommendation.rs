use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use chefshare_recipe::SessionFilterState;
use serde::Deserialize;

use crate::{error::AppError, routes::AppState, session::Session};

#[derive(Deserialize, Debug, Default)]
pub struct RecommendationForm {
    pub health_condition: Option<String>,
    pub dietary: Option<String>,
    pub allergies: Option<String>,
}

/// POST /recommendation - Replace the session's recommendation preference
pub async fn action(
    session: Session,
    State(app): State<AppState>,
    Form(input): Form<RecommendationForm>,
) -> Result<impl IntoResponse, AppError> {
    let state = SessionFilterState {
        health_condition: input.health_condition,
        dietary: input.dietary,
        allergies: input.allergies,
    };

    app.sessions.set(&session.id, state).await.map_err(|err| {
        tracing::error!(session = %session.id, err = %err, "Failed to store session filters");
        err
    })?;

    Ok((session.jar, Redirect::to("/dashboard")))
}

/// POST /reset-filters - Drop the session's recommendation preference
pub async fn reset(
    session: Session,
    State(app): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    app.sessions.delete(&session.id).await.map_err(|err| {
        tracing::error!(session = %session.id, err = %err, "Failed to clear session filters");
        err
    })?;

    Ok((session.jar, Redirect::to("/dashboard")))
}
