//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

use std::path::Path;

use pricer_core::types::Date;
use pricer_risk::ScenarioEvaluator;
use serde::de::DeserializeOwned;

use crate::{CliError, Result};

pub mod evaluate;
pub mod report;

/// Reads and deserialises a JSON request file.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Evaluator pinned to `--date`, or anchored at today when absent.
pub(crate) fn evaluator(date: Option<&str>) -> Result<ScenarioEvaluator> {
    match date {
        Some(raw) => {
            let date = Date::parse(raw.trim())
                .map_err(|e| CliError::InvalidArgument(format!("--date: {}", e)))?;
            Ok(ScenarioEvaluator::with_valuation_date(date))
        }
        None => Ok(ScenarioEvaluator::new()),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;

    /// Writes `contents` to a per-process scratch file and returns its path.
    pub fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("riskgo-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }
}
