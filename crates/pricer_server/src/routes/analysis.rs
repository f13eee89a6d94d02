//! Portfolio analysis endpoint
//!
//! `POST /api/analyze_portfolio` evaluates every position over a shock
//! ladder using the configured market data and returns
//! `ticker → shock label → metrics`.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json},
    routing::post,
    Router,
};
use pricer_risk::analysis::{AnalyzeRequest, PortfolioAnalyzer};
use uuid::Uuid;

use super::AppState;
use crate::error::ServerError;

/// Response header carrying the request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the analysis routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/analyze_portfolio", post(analyze_handler))
}

/// POST /api/analyze_portfolio
async fn analyze_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ServerError> {
    let Json(request) = payload?;
    let request_id = Uuid::new_v4();

    let span = tracing::info_span!("analyze_portfolio", %request_id);
    let report = span.in_scope(|| {
        tracing::info!(
            positions = request.positions.len(),
            scenarios = request.scenario_range.len(),
            "analysing portfolio"
        );
        PortfolioAnalyzer::new(state.evaluator).analyze(&request, state.market.as_ref())
    });

    Ok(([(REQUEST_ID_HEADER, request_id.to_string())], Json(report)))
}
