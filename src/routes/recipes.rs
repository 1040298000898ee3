pub mod detail;
pub mod edit;
pub mod index;
pub mod review;
pub mod save;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chefshare_recipe::RecipeInput;
use chefshare_shared::Error;
use serde_json::json;

use crate::error::AppError;

/// Renders a write failure; conflicts echo the submitted recipe back so the
/// author can fix the ingredients without retyping the rest.
fn write_error(err: Error, input: RecipeInput) -> Response {
    match err {
        Error::Conflict(messages) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "conflict",
                "messages": messages,
                "input": input,
            })),
        )
            .into_response(),
        err => AppError(err).into_response(),
    }
}
