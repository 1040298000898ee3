use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chefshare_shared::Error;
use serde_json::json;

/// JSON rendering of the shared domain error.
#[derive(Debug)]
pub struct AppError(pub Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self(Error::Unknown(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0 {
            Error::Validate(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": "validation", "fields": errors}),
            ),
            Error::Conflict(messages) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({"error": "conflict", "messages": messages}),
            ),
            Error::NotFound(what) => (
                StatusCode::NOT_FOUND,
                json!({"error": "not_found", "message": format!("{what} not found")}),
            ),
            Error::Forbidden(why) => (
                StatusCode::FORBIDDEN,
                json!({"error": "forbidden", "message": why}),
            ),
            Error::Server(msg) => {
                tracing::error!(err = %msg, "Server error");
                server_error()
            }
            Error::Unknown(err) => {
                tracing::error!(err = %err, "Unexpected error");
                server_error()
            }
        };

        (status, Json(body)).into_response()
    }
}

fn server_error() -> (StatusCode, serde_json::Value) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "server",
            "message": "An unexpected error occurred. Please try again later."
        }),
    )
}
