//! Criterion benchmarks for scenario evaluation.
//!
//! Benchmarks cover:
//! - Single scenario evaluation with varying book sizes
//! - Shock ladders evaluated in parallel
//! - Portfolio analysis across several tickers

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::types::Date;
use pricer_models::instruments::OptionType;
use pricer_risk::analysis::{
    AnalyzeRequest, PortfolioAnalyzer, Position, PositionLeg, StaticMarketData,
};
use pricer_risk::scenarios::{
    MarketInputs, OptionLeg, ScenarioEvaluator, ScenarioRequest, DEFAULT_SHOCK_LADDER,
};

fn valuation_date() -> Date {
    Date::from_ymd(2025, 1, 2).unwrap()
}

/// Generate a book of alternating calls and puts around the money.
fn generate_book(n_legs: usize) -> Vec<OptionLeg> {
    let today = valuation_date();
    (0..n_legs)
        .map(|i| {
            let option_type = if i % 2 == 0 { OptionType::Call } else { OptionType::Put };
            let strike = 80.0 + (i % 41) as f64;
            let expiry = today.add_days(30 + (i as i64 * 7) % 700).unwrap().to_string();
            let quantity = if i % 3 == 0 { -5.0 } else { 10.0 };
            OptionLeg::new(option_type, strike, expiry, quantity)
        })
        .collect()
}

/// Benchmark a single scenario evaluation.
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let evaluator = ScenarioEvaluator::with_valuation_date(valuation_date());

    for n_legs in [1, 10, 100, 1000] {
        let request = ScenarioRequest::new(
            MarketInputs::new(100.0, 0.03, 0.25),
            -0.05,
            1.2,
            generate_book(n_legs),
        );
        group.bench_with_input(BenchmarkId::new("legs", n_legs), &request, |b, request| {
            b.iter(|| evaluator.evaluate(black_box(request)));
        });
    }

    group.finish();
}

/// Benchmark the default five-shock ladder.
fn bench_ladder(c: &mut Criterion) {
    let mut group = c.benchmark_group("shock_ladder");
    let evaluator = ScenarioEvaluator::with_valuation_date(valuation_date());

    for n_legs in [10, 1000] {
        let base = ScenarioRequest::new(
            MarketInputs::new(100.0, 0.03, 0.25),
            0.0,
            1.2,
            generate_book(n_legs),
        );
        group.bench_with_input(BenchmarkId::new("legs", n_legs), &base, |b, base| {
            b.iter(|| evaluator.evaluate_ladder(black_box(base), &DEFAULT_SHOCK_LADDER));
        });
    }

    group.finish();
}

/// Benchmark portfolio analysis over several tickers.
fn bench_portfolio_analysis(c: &mut Criterion) {
    let tickers = ["AAPL", "MSFT", "TSLA", "NVDA", "SPY"];
    let market = tickers
        .iter()
        .enumerate()
        .fold(StaticMarketData::default(), |m, (i, t)| {
            m.with_spot(*t, 100.0 + 10.0 * i as f64)
        });
    let positions = tickers
        .iter()
        .map(|t| Position {
            ticker: t.to_string(),
            quantity: 100.0,
            beta: 1.1,
            legs: generate_book(20)
                .into_iter()
                .map(|leg| PositionLeg::new(leg.option_type.to_string(), leg.strike, leg.expiry))
                .collect(),
        })
        .collect();
    let request = AnalyzeRequest::new(positions);
    let analyzer = PortfolioAnalyzer::new(ScenarioEvaluator::with_valuation_date(valuation_date()));

    c.bench_function("analyze_portfolio_5_tickers", |b| {
        b.iter(|| analyzer.analyze(black_box(&request), &market));
    });
}

criterion_group!(benches, bench_evaluate, bench_ladder, bench_portfolio_analysis);
criterion_main!(benches);
