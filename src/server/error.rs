//! Error types and response handling for the HTTP server.
//!
//! Maps render and action failures to status codes and JSON error bodies.

use std::net::SocketAddr;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::app::ActionError;
use crate::component::RenderError;
use crate::config::ConfigError;

/// Errors that can occur while serving.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A component failed while rendering the page
    #[error("Render failed: {0}")]
    Render(#[from] RenderError),

    /// An action handler failed
    #[error("Action '{path}' failed: {source}")]
    Action {
        path: String,
        #[source]
        source: ActionError,
    },

    /// Could not bind the listener
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("bind() must be called before run()")]
    NotBound,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Config(_)
            | ServerError::Render(_)
            | ServerError::Action { .. }
            | ServerError::Bind { .. }
            | ServerError::NotBound
            | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::Config(_) => "config_error",
            ServerError::Render(_) => "render_error",
            ServerError::Action { .. } => "action_error",
            ServerError::Bind { .. } => "bind_error",
            ServerError::NotBound => "not_bound",
            ServerError::Io(_) => "io_error",
        }
    }
}

/// Builder for standardized error responses
pub struct ErrorResponse;

impl ErrorResponse {
    /// Create a JSON error response from a ServerError
    pub fn from_error(err: &ServerError, request_id: &str) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": err.error_type(),
                "message": err.to_string(),
                "request_id": request_id
            }
        });

        (
            err.status_code(),
            [(header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::error!(request_id = %request_id, error = %self, "request failed");
        ErrorResponse::from_error(&self, &request_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StateError;

    #[test]
    fn test_render_error_status_code() {
        let err = ServerError::from(RenderError::State(StateError::MissingKey {
            key: "val".to_string(),
        }));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_type(), "render_error");
        assert_eq!(err.to_string(), "Render failed: state key 'val' is not set");
    }

    #[test]
    fn test_action_error_message() {
        let err = ServerError::Action {
            path: "/counter".to_string(),
            source: ActionError::Overflow {
                key: "val".to_string(),
            },
        };
        assert_eq!(err.error_type(), "action_error");
        assert_eq!(
            err.to_string(),
            "Action '/counter' failed: counter overflow on 'val'"
        );
    }

    #[test]
    fn test_error_response_format() {
        let err = ServerError::NotBound;
        let response = ErrorResponse::from_error(&err, "test-id-123");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "application/json"
        );
    }
}
