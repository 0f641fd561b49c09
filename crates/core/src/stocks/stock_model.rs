//! Stock domain model.

use crate::constants::{MIN_SERIES_POINTS, TRADING_DAYS_PER_YEAR};
use crate::errors::{Error, Result};
use crate::series::{price_ratio, PriceSeries, ReturnSeries};
use crate::utils::stats;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// A single listed instrument and its daily closing prices.
///
/// The price data is shared read-only, so cloning a `Stock` into a
/// portfolio or benchmark does not copy it.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    ticker: String,
    prices: Arc<PriceSeries>,
}

impl Stock {
    pub fn new(ticker: impl Into<String>, prices: PriceSeries) -> Self {
        Self {
            ticker: ticker.into(),
            prices: Arc::new(prices),
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn prices(&self) -> &PriceSeries {
        &self.prices
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.prices.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.prices.last().map(|p| p.date)
    }

    pub fn daily_return(&self) -> Result<ReturnSeries> {
        self.prices.daily_returns()
    }

    /// `(end_price / start_price)^(periods_per_year / n_periods) - 1`, where
    /// `n_periods` is the number of daily returns the price series spans.
    pub fn cagr(&self, periods_per_year: u32) -> Result<Decimal> {
        let (Some(start), Some(end)) = (self.prices.first(), self.prices.last()) else {
            return Err(Error::insufficient_data(MIN_SERIES_POINTS, 0));
        };
        let n_periods = self.prices.len() - 1;
        if n_periods == 0 {
            return Err(Error::insufficient_data(MIN_SERIES_POINTS, self.prices.len()));
        }
        if start.close <= Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "Start price of {} must be positive, got {}",
                self.ticker, start.close
            )));
        }

        let growth = price_ratio(end.close, start.close)?;
        stats::annualize_growth(growth, n_periods, periods_per_year)
    }

    /// CAGR assuming 252 trading days per year.
    pub fn cagr_default(&self) -> Result<Decimal> {
        self.cagr(TRADING_DAYS_PER_YEAR)
    }

    /// Sample standard deviation of the daily returns.
    pub fn std_dev(&self) -> Result<Decimal> {
        self.daily_return()?.std_dev()
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stock[{}]", self.ticker)
    }
}
