//! Multi-position analysis across a shock ladder.
//!
//! Each position is one ticker with a signed quantity and a beta; all of its
//! legs carry the position quantity. Market data is fetched once per ticker
//! per request, every position is evaluated over the whole ladder, and the
//! results are summed per ticker and per shock label.

use std::collections::{BTreeMap, HashMap};

use pricer_core::market_data::MarketDataError;
use pricer_models::instruments::OptionType;
use tracing::{debug, warn};

use super::provider::MarketDataProvider;
use crate::scenarios::{
    MarketInputs, OptionLeg, ScenarioEvaluator, ScenarioRequest, ScenarioResult,
    DEFAULT_SHOCK_LADDER,
};

/// Ticker → shock label → summed metrics.
pub type PortfolioReport = BTreeMap<String, BTreeMap<String, Metrics>>;

/// Portfolio analysis input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnalyzeRequest {
    /// Positions to analyse
    pub positions: Vec<Position>,
    /// Market moves to evaluate; none when omitted
    #[cfg_attr(feature = "serde", serde(default))]
    pub scenario_range: Vec<f64>,
    /// Volatility override; `0` uses the provider's volatility
    #[cfg_attr(feature = "serde", serde(default))]
    pub volatility: f64,
}

impl AnalyzeRequest {
    /// Request over the default ladder using provider volatility.
    pub fn new(positions: Vec<Position>) -> Self {
        Self {
            positions,
            scenario_range: DEFAULT_SHOCK_LADDER.to_vec(),
            volatility: 0.0,
        }
    }
}

/// Holding in one underlying.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// Underlying ticker
    pub ticker: String,
    /// Quantity applied to every leg
    pub quantity: f64,
    /// Beta to the market move; zero when omitted
    #[cfg_attr(feature = "serde", serde(default))]
    pub beta: f64,
    /// Option legs
    #[cfg_attr(feature = "serde", serde(default))]
    pub legs: Vec<PositionLeg>,
}

/// Leg of a position, without its own quantity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionLeg {
    /// `"CALL"` or `"PUT"`
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub option_type: String,
    /// Strike price
    pub strike: f64,
    /// Expiry, `YYYY-MM-DD`
    pub expiry: String,
}

impl PositionLeg {
    /// Creates a leg.
    pub fn new(option_type: impl Into<String>, strike: f64, expiry: impl Into<String>) -> Self {
        Self {
            option_type: option_type.into(),
            strike,
            expiry: expiry.into(),
        }
    }

    /// Put for exactly `"PUT"`, call for anything else.
    pub fn kind(&self) -> OptionType {
        if self.option_type == "PUT" {
            OptionType::Put
        } else {
            OptionType::Call
        }
    }

    fn to_leg(&self, quantity: f64) -> OptionLeg {
        OptionLeg::new(self.kind(), self.strike, self.expiry.clone(), quantity)
    }
}

/// Summed scenario metrics for one ticker and shock.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Scenario PnL
    pub pnl: f64,
    /// Delta
    pub delta: f64,
    /// Gamma
    pub gamma: f64,
    /// Theta
    pub theta: f64,
}

impl Metrics {
    /// Adds one scenario's totals.
    pub fn add(&mut self, result: &ScenarioResult) {
        self.pnl += result.pnl;
        self.delta += result.delta;
        self.gamma += result.gamma;
        self.theta += result.theta;
    }
}

impl From<&ScenarioResult> for Metrics {
    fn from(result: &ScenarioResult) -> Self {
        let mut metrics = Metrics::default();
        metrics.add(result);
        metrics
    }
}

/// Report key for a shock: two decimals, `-0.05` → `"-0.05"`.
pub fn shock_label(shock: f64) -> String {
    format!("{shock:.2}")
}

/// Scenarios of one ticker in ascending numeric order of their labels.
pub fn ordered_scenarios(scenarios: &BTreeMap<String, Metrics>) -> Vec<(&str, &Metrics)> {
    let mut rows: Vec<(&str, &Metrics)> = scenarios
        .iter()
        .map(|(label, metrics)| (label.as_str(), metrics))
        .collect();
    rows.sort_by(|(a, _), (b, _)| {
        let a = a.parse::<f64>().unwrap_or(f64::INFINITY);
        let b = b.parse::<f64>().unwrap_or(f64::INFINITY);
        a.total_cmp(&b)
    });
    rows
}

/// Runs [`AnalyzeRequest`]s against a market data provider.
///
/// # Examples
///
/// ```
/// use pricer_core::types::Date;
/// use pricer_risk::analysis::{
///     AnalyzeRequest, PortfolioAnalyzer, Position, PositionLeg, StaticMarketData,
/// };
/// use pricer_risk::scenarios::ScenarioEvaluator;
///
/// let market = StaticMarketData::default().with_spot("AAPL", 190.0);
/// let analyzer = PortfolioAnalyzer::new(
///     ScenarioEvaluator::with_valuation_date(Date::from_ymd(2025, 6, 2).unwrap()),
/// );
/// let request = AnalyzeRequest::new(vec![Position {
///     ticker: "AAPL".to_string(),
///     quantity: 100.0,
///     beta: 1.2,
///     legs: vec![PositionLeg::new("CALL", 200.0, "2025-12-19")],
/// }]);
///
/// let report = analyzer.analyze(&request, &market);
/// let aapl = &report["AAPL"];
/// assert_eq!(aapl.len(), 5);
/// assert_eq!(aapl["0.00"].pnl, 0.0);
/// assert!(aapl["0.10"].pnl > 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PortfolioAnalyzer {
    evaluator: ScenarioEvaluator,
}

impl PortfolioAnalyzer {
    /// Analyzer using `evaluator` for every scenario.
    pub fn new(evaluator: ScenarioEvaluator) -> Self {
        Self { evaluator }
    }

    /// Evaluates every position over the request's ladder.
    ///
    /// A ticker whose market data cannot be obtained is logged and appears
    /// with no scenarios; a shock that fails to evaluate is logged and left
    /// out. Neither aborts the analysis.
    pub fn analyze<P>(&self, request: &AnalyzeRequest, provider: &P) -> PortfolioReport
    where
        P: MarketDataProvider + ?Sized,
    {
        let evaluator = match self.evaluator.pinned_date() {
            Some(_) => self.evaluator,
            None => ScenarioEvaluator::with_valuation_date(self.evaluator.valuation_date()),
        };
        let mut markets: HashMap<&str, MarketInputs> = HashMap::new();
        let mut report = PortfolioReport::new();

        for position in &request.positions {
            let ticker = position.ticker.as_str();
            let scenarios = report.entry(position.ticker.clone()).or_default();

            let market = match markets.get(ticker) {
                Some(market) => *market,
                None => match market_for(ticker, request.volatility, provider) {
                    Ok(market) => {
                        markets.insert(ticker, market);
                        market
                    }
                    Err(err) => {
                        warn!(ticker, error = %err, "no market data, skipping position");
                        continue;
                    }
                },
            };

            let legs = position
                .legs
                .iter()
                .map(|leg| leg.to_leg(position.quantity))
                .collect();
            let base = ScenarioRequest::new(market, 0.0, position.beta, legs);

            for outcome in evaluator.evaluate_ladder(&base, &request.scenario_range) {
                match outcome.result {
                    Ok(result) => {
                        scenarios
                            .entry(shock_label(outcome.shock))
                            .or_default()
                            .add(&result);
                    }
                    Err(err) => {
                        warn!(ticker, shock = outcome.shock, error = %err, "scenario failed");
                    }
                }
            }
        }

        debug!(
            positions = request.positions.len(),
            tickers = report.len(),
            "portfolio analysed"
        );
        report
    }
}

fn market_for<P>(
    ticker: &str,
    volatility: f64,
    provider: &P,
) -> Result<MarketInputs, MarketDataError>
where
    P: MarketDataProvider + ?Sized,
{
    let spot = provider.spot_price(ticker)?;
    let rate = provider.risk_free_rate()?;
    let volatility = if volatility == 0.0 {
        provider.volatility(ticker)?
    } else {
        volatility
    };
    Ok(MarketInputs::new(spot, rate, volatility))
}
