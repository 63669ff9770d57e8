//! Error handling module

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Non-2xx response from the Home Assistant API. The message format is
    /// load-bearing: the dashboard banner shows it verbatim.
    #[error("Home Assistant API error: {status} - {body}")]
    Upstream { status: u16, body: String },

    #[error("Home Assistant not configured")]
    NotConfigured,

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Network(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream { .. } | AppError::Network(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(serde_json::json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_message_format() {
        let err = AppError::Upstream {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Home Assistant API error: 404 - not found");
    }

    #[test]
    fn test_not_configured_message() {
        assert_eq!(
            AppError::NotConfigured.to_string(),
            "Home Assistant not configured"
        );
    }
}
