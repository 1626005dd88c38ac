/// Unified error handling module
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error body returned to the browser
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    /// Non-success status from the photo service.
    #[error("NASA API error: {status} {reason}")]
    Upstream { status: u16, reason: String },

    /// Network failure, timeout or undecodable body.
    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn route_not_found() -> Self {
        ApiError::NotFound("API endpoint not found".to_string())
    }

    pub fn upstream(status: reqwest::StatusCode) -> Self {
        ApiError::Upstream {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } | ApiError::Transport(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// The request URL carries the api_key; keep it out of messages.
impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.without_url())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut message = self.to_string();
        if message.is_empty() {
            message = "Internal server error".to_string();
        }

        (status, Json(ErrorResponse { message })).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_carries_status_and_reason() {
        let err = ApiError::upstream(reqwest::StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "NASA API error: 404 Not Found");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_route_not_found_maps_to_404() {
        let err = ApiError::route_not_found();
        assert_eq!(err.to_string(), "API endpoint not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_transport_error_hides_api_key() {
        let err: ApiError = reqwest::Client::new()
            .get("http://127.0.0.1:1/manifests/curiosity?api_key=SECRET")
            .send()
            .await
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.to_string().contains("SECRET"));
    }

    #[test]
    fn test_empty_internal_message_gets_placeholder() {
        let response = ApiError::Internal(String::new()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
