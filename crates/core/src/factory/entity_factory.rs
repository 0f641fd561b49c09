//! Constructors that turn raw price data into validated entities.

use log::debug;
use rust_decimal::Decimal;

use crate::benchmark::Benchmark;
use crate::constants::WEIGHT_TOLERANCE;
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::{Holding, Portfolio};
use crate::series::{PricePoint, PriceSeries};
use crate::stocks::Stock;

/// Builds a stock from unsorted price points.
pub fn create_stock(ticker: &str, points: Vec<PricePoint>) -> Result<Stock> {
    let ticker = ticker.trim();
    if ticker.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "ticker".to_string(),
        )));
    }

    let prices = PriceSeries::new(points)?;
    debug!("Created stock {} with {} prices", ticker, prices.len());
    Ok(Stock::new(ticker, prices))
}

/// Builds a portfolio whose weights must sum to one within the default tolerance.
pub fn create_portfolio(holdings: Vec<(Stock, Decimal)>) -> Result<Portfolio> {
    create_portfolio_with_tolerance(holdings, WEIGHT_TOLERANCE)
}

pub fn create_portfolio_with_tolerance(
    holdings: Vec<(Stock, Decimal)>,
    tolerance: Decimal,
) -> Result<Portfolio> {
    let holdings: Vec<Holding> = holdings
        .into_iter()
        .map(|(stock, weight)| Holding::new(stock, weight))
        .collect();
    let portfolio = Portfolio::new(holdings, tolerance)?;
    debug!("Created {}", portfolio);
    Ok(portfolio)
}

/// Builds an equal-weighted benchmark.
pub fn create_benchmark(stocks: Vec<Stock>) -> Result<Benchmark> {
    let benchmark = Benchmark::new(stocks)?;
    debug!("Created {}", benchmark);
    Ok(benchmark)
}

pub fn create_weighted_benchmark(stocks: Vec<Stock>, weights: Vec<Decimal>) -> Result<Benchmark> {
    create_weighted_benchmark_with_tolerance(stocks, weights, WEIGHT_TOLERANCE)
}

pub fn create_weighted_benchmark_with_tolerance(
    stocks: Vec<Stock>,
    weights: Vec<Decimal>,
    tolerance: Decimal,
) -> Result<Benchmark> {
    let benchmark = Benchmark::with_weights(stocks, weights, tolerance)?;
    debug!("Created weighted {}", benchmark);
    Ok(benchmark)
}
