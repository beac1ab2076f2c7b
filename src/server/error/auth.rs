use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Bearer token was malformed, expired, or signed with another key.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token is invalid: {0}")]
    InvalidToken(String),

    /// Token subject does not match any user in the database.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from token not found in database")]
    UserNotFound(i32),

    /// User exists but has been deactivated.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is deactivated")]
    UserInactive(i32),

    /// User lacks a permission required by the endpoint.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - Missing or invalid token, or unknown user
/// - 403 Forbidden - Deactivated user or missing permission
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotFound(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::UserInactive(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Account is deactivated".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Insufficient permissions".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
