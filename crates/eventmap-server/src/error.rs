//! Error types for the view API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventmap_core::CoreError;

/// Errors that can occur in the view API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The operation needs a signed-in user.
    #[error("sign-in required")]
    Unauthorized,

    /// Required form fields are missing.
    #[error("missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotAuthenticated => Self::Unauthorized,
            CoreError::Validation { fields } => Self::Validation(fields),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let mut body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });
        if let Self::Validation(fields) = &self {
            body["fields"] = serde_json::json!(fields);
        }

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_statuses() {
        let cases = [
            (CoreError::NotAuthenticated, StatusCode::UNAUTHORIZED),
            (
                CoreError::Validation {
                    fields: vec![String::from("title")],
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                CoreError::InvalidSeedDate {
                    year: 2025,
                    month: 2,
                    day: 30,
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }

    #[test]
    fn validation_message_lists_fields() {
        let err = ApiError::Validation(vec![String::from("address"), String::from("title")]);
        assert_eq!(err.to_string(), "missing required fields: address, title");
    }
}
