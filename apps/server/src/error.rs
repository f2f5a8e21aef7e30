//! API error mapping.
//!
//! Core errors carry enough structure to pick a status code; everything
//! unexpected becomes a 500 with the detail kept out of the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use centime_core::errors::{DatabaseError, Error};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Core(Error),
    Unauthorized(String),
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError::Core(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Core(Error::Unexpected(err.to_string()))
    }
}

fn status_for(err: &Error) -> StatusCode {
    match err {
        Error::Database(DatabaseError::NotFound(_)) => StatusCode::NOT_FOUND,
        Error::Database(DatabaseError::UniqueViolation(_)) => StatusCode::CONFLICT,
        Error::Database(DatabaseError::ForeignKeyViolation(_)) => StatusCode::CONFLICT,
        Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::Calculation(_) => StatusCode::BAD_REQUEST,
        Error::Forbidden(_) => StatusCode::FORBIDDEN,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Core(err) => {
                let status = status_for(&err);
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!("Internal error: {}", err);
                    (status, "Internal server error".to_string())
                } else {
                    (status, err.to_string())
                }
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
