//! Route modules for the risk server
//!
//! This module contains endpoint group-specific routers:
//! - health: Health check and readiness endpoints
//! - scenario: Single beta-scaled scenario evaluation
//! - analysis: Multi-position portfolio analysis

pub mod analysis;
pub mod health;
pub mod scenario;

use axum::Router;
use pricer_risk::analysis::StaticMarketData;
use pricer_risk::ScenarioEvaluator;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime calculation
    pub start_time: std::time::Instant,
    /// Market data for portfolio analysis
    pub market: Arc<StaticMarketData>,
    /// Scenario evaluator (anchored at today unless pinned)
    pub evaluator: ScenarioEvaluator,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self {
            market: Arc::new(config.market.provider()),
            config,
            start_time: std::time::Instant::now(),
            evaluator: ScenarioEvaluator::new(),
        }
    }

    /// Replace the evaluator
    pub fn with_evaluator(self, evaluator: ScenarioEvaluator) -> Self {
        Self { evaluator, ..self }
    }
}

/// Build the main application router by merging all route modules
pub fn build_router(config: Arc<ServerConfig>) -> Router {
    router_with_state(AppState::new(config))
}

/// Build the router over an explicit state
pub fn router_with_state(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(scenario::routes())
        .merge(analysis::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
