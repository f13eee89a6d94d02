//! Scenario evaluation endpoint
//!
//! `POST /api/v1/scenario` evaluates one book under one beta-scaled shock.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use pricer_risk::{ScenarioRequest, ScenarioResult};

use super::AppState;
use crate::error::ServerError;

/// Build the scenario routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/scenario", post(scenario_handler))
}

/// POST /api/v1/scenario
async fn scenario_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScenarioRequest>, JsonRejection>,
) -> Result<Json<ScenarioResult>, ServerError> {
    let Json(request) = payload?;
    let result = state.evaluator.evaluate(&request)?;

    tracing::info!(
        legs = request.legs.len(),
        legs_priced = result.legs_priced,
        shock_pct = request.shock_pct,
        beta = request.beta,
        pnl = result.pnl,
        "scenario evaluated"
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use crate::error::ErrorResponse;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use pricer_core::types::Date;
    use pricer_risk::ScenarioEvaluator;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_router() -> Router {
        let evaluator = ScenarioEvaluator::with_valuation_date(Date::from_ymd(2025, 1, 2).unwrap());
        let state = AppState::new(Arc::new(ServerConfig::default())).with_evaluator(evaluator);
        routes().with_state(state)
    }

    async fn post(body: String) -> (StatusCode, Vec<u8>) {
        let response = create_test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/scenario")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn request(spot: f64, shock_pct: f64, legs: Value) -> String {
        json!({
            "market": {"spot": spot, "risk_free_rate": 0.01, "volatility": 0.2},
            "shock_pct": shock_pct,
            "beta": 1.0,
            "legs": legs,
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_scenario_returns_totals() {
        let legs = json!([
            {"option_type": "CALL", "strike": 100.0, "expiry": "2026-01-02", "quantity": 1.0},
            {"option_type": "PUT", "strike": 100.0, "expiry": "2024-12-31", "quantity": 1.0},
            {"option_type": "PUT", "strike": 100.0, "expiry": "soon", "quantity": 1.0}
        ]);
        let (status, body) = post(request(100.0, 0.0, legs)).await;
        assert_eq!(status, StatusCode::OK);

        let result: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(result["pnl"], 0.0);
        let delta = result["delta"].as_f64().unwrap();
        assert!(delta > 0.5 && delta < 0.7);
        assert_eq!(result["legs_priced"], 1);
        assert_eq!(result["legs_skipped"]["expired"], 1);
        assert_eq!(result["legs_skipped"]["unparseable_expiry"], 1);
    }

    #[tokio::test]
    async fn test_invalid_market_returns_422() {
        let (status, body) = post(request(0.0, 0.05, json!([]))).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "invalid_market_data");
    }

    #[tokio::test]
    async fn test_invalid_leg_returns_400() {
        let legs = json!([
            {"option_type": "CALL", "strike": -5.0, "expiry": "2026-01-02", "quantity": 1.0}
        ]);
        let (status, body) = post(request(100.0, 0.05, legs)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "invalid_request");
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (status, body) = post("{\"market\":".to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "bad_request");

        let (status, _) = post(json!({"shock_pct": 0.1}).to_string()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
