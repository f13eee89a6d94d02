//! HTTP error mapping
//!
//! | Error | Status |
//! |---|---|
//! | malformed JSON / missing fields | 400 |
//! | `ScenarioError::InvalidRequest` | 400 |
//! | `ScenarioError::InvalidMarketData` | 422 |
//! | `ScenarioError::Computation` | 500 |

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use pricer_risk::ScenarioError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by every endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,
    /// Human-readable detail
    pub message: String,
}

/// Errors surfaced by request handlers
#[derive(Debug, Error)]
pub enum ServerError {
    /// Body could not be read as the expected JSON shape
    #[error("Malformed request body: {0}")]
    BadRequest(String),

    /// Scenario evaluation failed
    #[error(transparent)]
    Scenario(#[from] ScenarioError),
}

impl ServerError {
    /// Status code and error code for this error
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ServerError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ServerError::Scenario(ScenarioError::InvalidRequest(_)) => {
                (StatusCode::BAD_REQUEST, "invalid_request")
            }
            ServerError::Scenario(ScenarioError::InvalidMarketData(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "invalid_market_data")
            }
            ServerError::Scenario(ScenarioError::Computation(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "computation_error")
            }
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = ErrorResponse {
            error: code.to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ServerError::BadRequest("eof".to_string()), StatusCode::BAD_REQUEST),
            (
                ScenarioError::InvalidRequest("beta".to_string()).into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                ScenarioError::InvalidMarketData("spot".to_string()).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ScenarioError::Computation("NaN".to_string()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.status().0, expected);
        }
    }

    #[tokio::test]
    async fn test_into_response_body() {
        let err: ServerError = ScenarioError::InvalidMarketData("spot".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "invalid_market_data");
        assert_eq!(error.message, "Invalid market data: spot");
    }
}
