//! Request identity.
//!
//! Every data route is scoped to a user. The server sits behind a reverse
//! proxy that authenticates and forwards the username in the `x-user`
//! header; requests without it are rejected.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::ApiError;

pub const USER_HEADER: &str = "x-user";

/// The authenticated username, extracted from the `x-user` header.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|user| !user.is_empty())
            .map(|user| CurrentUser(user.to_string()))
            .ok_or_else(|| ApiError::Unauthorized(format!("Missing {} header", USER_HEADER)))
    }
}
