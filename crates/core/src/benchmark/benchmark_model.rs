//! Benchmark domain model.

use crate::errors::{Error, Result};
use crate::portfolio::validate_weights;
use crate::series::{weighted_sum, ReturnSeries};
use crate::stocks::Stock;

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Informational statistics for one benchmark constituent.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConstituentStats {
    pub cagr: Decimal,
    pub std_dev: Decimal,
}

/// A reference index built from one or more stocks.
///
/// Constituents are equal-weighted unless explicit weights are supplied
/// through [`Benchmark::with_weights`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Benchmark {
    stocks: Vec<Stock>,
    weights: Vec<Decimal>,
}

impl Benchmark {
    /// Equal-weighted benchmark over `stocks`.
    pub fn new(stocks: Vec<Stock>) -> Result<Self> {
        if stocks.is_empty() {
            return Err(Error::InvalidWeight(
                "Benchmark needs at least one stock".to_string(),
            ));
        }
        let weight = Decimal::ONE / Decimal::from(stocks.len());
        let weights = vec![weight; stocks.len()];
        Ok(Self { stocks, weights })
    }

    pub fn with_weights(
        stocks: Vec<Stock>,
        weights: Vec<Decimal>,
        tolerance: Decimal,
    ) -> Result<Self> {
        if stocks.len() != weights.len() {
            return Err(Error::InvalidWeight(format!(
                "{} stocks but {} weights",
                stocks.len(),
                weights.len()
            )));
        }
        validate_weights(&weights, tolerance)?;
        Ok(Self { stocks, weights })
    }

    pub fn stocks(&self) -> &[Stock] {
        &self.stocks
    }

    pub fn weights(&self) -> &[Decimal] {
        &self.weights
    }

    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }

    pub fn tickers(&self) -> Vec<&str> {
        self.stocks.iter().map(Stock::ticker).collect()
    }

    pub fn get_stock(&self, ticker: &str) -> Option<&Stock> {
        self.stocks.iter().find(|s| s.ticker() == ticker)
    }

    /// Aggregate daily return on the dates every constituent shares.
    pub fn daily_return(&self) -> Result<ReturnSeries> {
        let returns = self
            .stocks
            .iter()
            .map(Stock::daily_return)
            .collect::<Result<Vec<_>>>()?;
        let components: Vec<(&ReturnSeries, Decimal)> =
            returns.iter().zip(self.weights.iter().copied()).collect();
        weighted_sum(&components)
    }

    pub fn cagr(&self, periods_per_year: u32) -> Result<Decimal> {
        self.daily_return()?.cagr(periods_per_year)
    }

    pub fn std_dev(&self) -> Result<Decimal> {
        self.daily_return()?.std_dev()
    }

    /// CAGR and standard deviation of each constituent on its own full history.
    pub fn constituent_stats(
        &self,
        periods_per_year: u32,
    ) -> Result<BTreeMap<String, ConstituentStats>> {
        self.stocks
            .iter()
            .map(|stock| {
                let stats = ConstituentStats {
                    cagr: stock.cagr(periods_per_year)?,
                    std_dev: stock.std_dev()?,
                };
                Ok((stock.ticker().to_string(), stats))
            })
            .collect()
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Benchmark[{}]", self.tickers().join(","))
    }
}
