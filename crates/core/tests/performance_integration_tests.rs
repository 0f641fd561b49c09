//! Integration tests running the full path from a price provider to a
//! metrics report.

use alphafolio_core::factory::{BenchmarkFactory, PortfolioFactory, StockFactory};
use alphafolio_core::providers::InMemoryPriceProvider;
use alphafolio_core::{
    ChartRendererTrait, CumulativeReturnChart, Error, MetricsSettings, Performance, PricePoint,
    Result,
};
use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::{Arc, Mutex};

fn day(n: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 2).unwrap() + Duration::days(n)
}

fn history(closes: &[Decimal]) -> Vec<PricePoint> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint::new(day(i as i64), close))
        .collect()
}

fn provider() -> InMemoryPriceProvider {
    InMemoryPriceProvider::new()
        .with_history(
            "TCS.NS",
            history(&[
                dec!(3300), dec!(3342), dec!(3310), dec!(3365), dec!(3390), dec!(3372), dec!(3410),
            ]),
        )
        .with_history(
            "INFY.NS",
            history(&[
                dec!(1500), dec!(1512), dec!(1490), dec!(1521), dec!(1533), dec!(1528), dec!(1549),
            ]),
        )
        .with_history(
            "^NSEI",
            history(&[
                dec!(18000), dec!(18090), dec!(17950), dec!(18150), dec!(18230), dec!(18190),
                dec!(18300),
            ]),
        )
        .with_history(
            "^BSESN",
            history(&[
                dec!(60000), dec!(60240), dec!(59880), dec!(60500), dec!(60700), dec!(60610),
                dec!(60950),
            ]),
        )
        .with_history("FLAT", history(&[dec!(10); 7]))
}

fn stock_factory() -> StockFactory {
    StockFactory::new(Arc::new(provider()), day(0), day(6)).unwrap()
}

#[derive(Default)]
struct CollectingRenderer {
    titles: Mutex<Vec<String>>,
}

impl ChartRendererTrait for CollectingRenderer {
    fn render(&self, chart: &CumulativeReturnChart) -> Result<()> {
        self.titles.lock().unwrap().push(chart.title.clone());
        Ok(())
    }
}

#[test]
fn test_stock_against_itself() {
    let factory = stock_factory();
    let tcs = factory.create_stock("TCS.NS").unwrap();
    let benchmark = BenchmarkFactory::new(factory).create_benchmark(&["TCS.NS"]).unwrap();

    let report = Performance::new(tcs, benchmark).all_metrics(Decimal::ZERO).unwrap();
    assert_eq!(report.beta, dec!(1));
    assert_eq!(report.alpha, dec!(0));
    assert_eq!(report.tracking_error, dec!(0));
}

#[test]
fn test_portfolio_against_two_index_benchmark() {
    let settings = MetricsSettings::from_json_str(r#"{"periodsPerYear": 252}"#).unwrap();
    let factory = stock_factory().with_settings(settings);

    let portfolio = PortfolioFactory::new(factory.clone())
        .create_portfolio(&["TCS.NS", "INFY.NS"], &[dec!(0.6), dec!(0.4)])
        .unwrap();
    let benchmark = BenchmarkFactory::new(factory)
        .create_benchmark(&["^NSEI", "^BSESN"])
        .unwrap();

    let performance = Performance::new(portfolio, benchmark).with_settings(&settings);
    assert_eq!(performance.overlap_len().unwrap(), 6);

    let report = performance.all_metrics(dec!(0.05)).unwrap();
    assert!(report.beta > Decimal::ZERO);
    assert!(report.tracking_error > Decimal::ZERO);
    assert_eq!(report.to_map()["beta"], report.beta);

    let breakdown = performance.constituent_breakdown(dec!(0.05)).unwrap();
    assert_eq!(breakdown.len(), 2);
    assert_eq!(breakdown[0].ticker, "^NSEI");
    assert_eq!(breakdown[1].ticker, "^BSESN");

    let renderer = CollectingRenderer::default();
    performance.plot_cumulative_return(&renderer).unwrap();
    assert_eq!(
        renderer.titles.lock().unwrap().as_slice(),
        &["Performance of Portfolio[TCS.NS,INFY.NS] with Benchmark[^NSEI,^BSESN].".to_string()]
    );
}

#[test]
fn test_flat_benchmark_is_rejected() {
    let factory = stock_factory();
    let tcs = factory.create_stock("TCS.NS").unwrap();
    let benchmark = BenchmarkFactory::new(factory).create_benchmark(&["FLAT"]).unwrap();

    let err = Performance::new(tcs, benchmark).all_metrics(dec!(0.05)).unwrap_err();
    assert!(matches!(err, Error::DegenerateBenchmark(_)));
    assert!(err.is_data_error());
}

#[test]
fn test_empty_window_surfaces_as_insufficient_data() {
    let factory = StockFactory::new(Arc::new(provider()), day(30), day(40)).unwrap();
    let tcs = factory.create_stock("TCS.NS").unwrap();
    assert!(tcs.prices().is_empty());
    assert!(matches!(tcs.daily_return(), Err(Error::InsufficientData { .. })));
}

#[test]
fn test_missing_ticker_fails_benchmark_creation() {
    let result = BenchmarkFactory::new(stock_factory()).create_benchmark(&["^NSEI", "^DJI"]);
    assert!(matches!(result, Err(Error::PriceHistoryNotFound(t)) if t == "^DJI"));
}
