use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::error::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing job_name or location query parameters")]
    MissingParameters(Vec<&'static str>),

    #[error("Invalid query string: {0}")]
    BadQuery(String),

    #[error(transparent)]
    Pipeline(Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        match err {
            Error::MissingParameters(missing) => AppError::MissingParameters(missing),
            other => AppError::Pipeline(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingParameters(missing) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": self.to_string(),
                    "missing": missing,
                }),
            ),
            AppError::BadQuery(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            AppError::Pipeline(e) => {
                tracing::error!("Skill analysis failed: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": e.to_string() }),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": msg }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
