//! Evaluate command implementation
//!
//! Runs one scenario request file through the evaluator and prints the
//! result as JSON.

use std::path::Path;

use pricer_risk::{ScenarioRequest, ScenarioResult};
use tracing::info;

use super::{evaluator, load_json};
use crate::Result;

/// Run the evaluate command
pub fn run(request: &Path, date: Option<&str>) -> Result<()> {
    let result = evaluate_file(request, date)?;
    println!("{}", render(&result)?);
    Ok(())
}

/// Loads and evaluates a request file.
pub fn evaluate_file(request: &Path, date: Option<&str>) -> Result<ScenarioResult> {
    let evaluator = evaluator(date)?;
    let request: ScenarioRequest = load_json(request)?;
    info!(
        legs = request.legs.len(),
        shock_pct = request.shock_pct,
        valuation_date = %evaluator.valuation_date(),
        "Evaluating scenario"
    );
    Ok(evaluator.evaluate(&request)?)
}

/// Pretty JSON for a scenario result.
pub fn render(result: &ScenarioResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}
