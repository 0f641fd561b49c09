//! Factories that load price histories from a provider over a fixed date
//! window before building entities.

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::benchmark::Benchmark;
use crate::errors::{Error, Result};
use crate::factory::entity_factory::{
    create_benchmark, create_portfolio_with_tolerance, create_stock,
    create_weighted_benchmark_with_tolerance,
};
use crate::portfolio::Portfolio;
use crate::providers::PriceProviderTrait;
use crate::settings::MetricsSettings;
use crate::stocks::Stock;

/// Loads single stocks for the `start..=end` window.
#[derive(Clone)]
pub struct StockFactory {
    provider: Arc<dyn PriceProviderTrait>,
    start: NaiveDate,
    end: NaiveDate,
    settings: MetricsSettings,
}

impl StockFactory {
    pub fn new(
        provider: Arc<dyn PriceProviderTrait>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        if start > end {
            return Err(Error::invalid_input(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self {
            provider,
            start,
            end,
            settings: MetricsSettings::default(),
        })
    }

    pub fn with_settings(mut self, settings: MetricsSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn settings(&self) -> &MetricsSettings {
        &self.settings
    }

    pub fn create_stock(&self, ticker: &str) -> Result<Stock> {
        debug!(
            "Loading {} from {} for {}..={}",
            ticker,
            self.provider.name(),
            self.start,
            self.end
        );
        let points = self.provider.get_price_history(ticker, self.start, self.end)?;
        create_stock(ticker, points)
    }

    fn create_stocks(&self, tickers: &[&str]) -> Result<Vec<Stock>> {
        tickers.iter().map(|ticker| self.create_stock(ticker)).collect()
    }
}

/// Builds portfolios from tickers and weights.
#[derive(Clone)]
pub struct PortfolioFactory {
    stocks: StockFactory,
}

impl PortfolioFactory {
    pub fn new(stocks: StockFactory) -> Self {
        Self { stocks }
    }

    pub fn create_portfolio(&self, tickers: &[&str], weights: &[Decimal]) -> Result<Portfolio> {
        if tickers.len() != weights.len() {
            return Err(Error::InvalidWeight(format!(
                "{} tickers but {} weights",
                tickers.len(),
                weights.len()
            )));
        }
        let stocks = self.stocks.create_stocks(tickers)?;
        create_portfolio_with_tolerance(
            stocks.into_iter().zip(weights.iter().copied()).collect(),
            self.stocks.settings.weight_tolerance,
        )
    }
}

/// Builds benchmarks from index tickers.
#[derive(Clone)]
pub struct BenchmarkFactory {
    stocks: StockFactory,
}

impl BenchmarkFactory {
    pub fn new(stocks: StockFactory) -> Self {
        Self { stocks }
    }

    pub fn create_benchmark(&self, tickers: &[&str]) -> Result<Benchmark> {
        create_benchmark(self.stocks.create_stocks(tickers)?)
    }

    pub fn create_weighted_benchmark(
        &self,
        tickers: &[&str],
        weights: &[Decimal],
    ) -> Result<Benchmark> {
        let stocks = self.stocks.create_stocks(tickers)?;
        create_weighted_benchmark_with_tolerance(
            stocks,
            weights.to_vec(),
            self.stocks.settings.weight_tolerance,
        )
    }
}
