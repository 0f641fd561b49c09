//! Portfolio domain model.

use crate::errors::{Error, Result};
use crate::series::{weighted_sum, ReturnSeries};
use crate::stocks::Stock;

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// A stock held in a portfolio with its fraction of the portfolio value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub stock: Stock,
    pub weight: Decimal,
}

impl Holding {
    pub fn new(stock: Stock, weight: Decimal) -> Self {
        Self { stock, weight }
    }
}

/// Checks that `weights` is non-empty and sums to one within `tolerance`.
pub(crate) fn validate_weights(weights: &[Decimal], tolerance: Decimal) -> Result<()> {
    if tolerance.is_sign_negative() {
        return Err(Error::invalid_input(format!(
            "Weight tolerance must not be negative, got {}",
            tolerance
        )));
    }
    if weights.is_empty() {
        return Err(Error::InvalidWeight(
            "At least one weighted constituent is required".to_string(),
        ));
    }

    let total: Decimal = weights.iter().sum();
    if (total - Decimal::ONE).abs() > tolerance {
        return Err(Error::InvalidWeight(format!(
            "Weights sum to {}, expected 1 within {}",
            total, tolerance
        )));
    }
    Ok(())
}

/// A weighted set of stocks whose weights sum to one.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>, tolerance: Decimal) -> Result<Self> {
        let weights: Vec<Decimal> = holdings.iter().map(|h| h.weight).collect();
        validate_weights(&weights, tolerance)?;
        Ok(Self { holdings })
    }

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn tickers(&self) -> Vec<&str> {
        self.holdings.iter().map(|h| h.stock.ticker()).collect()
    }

    pub fn get_stock(&self, ticker: &str) -> Option<&Stock> {
        self.holdings
            .iter()
            .map(|h| &h.stock)
            .find(|s| s.ticker() == ticker)
    }

    /// Weighted sum of the constituents' daily returns on the dates every
    /// constituent has a return for.
    pub fn daily_return(&self) -> Result<ReturnSeries> {
        let returns = self
            .holdings
            .iter()
            .map(|h| h.stock.daily_return())
            .collect::<Result<Vec<_>>>()?;
        let components: Vec<(&ReturnSeries, Decimal)> = returns
            .iter()
            .zip(self.holdings.iter())
            .map(|(r, h)| (r, h.weight))
            .collect();
        weighted_sum(&components)
    }

    pub fn cagr(&self, periods_per_year: u32) -> Result<Decimal> {
        self.daily_return()?.cagr(periods_per_year)
    }

    pub fn std_dev(&self) -> Result<Decimal> {
        self.daily_return()?.std_dev()
    }
}

impl fmt::Display for Portfolio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Portfolio[{}]", self.tickers().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WEIGHT_TOLERANCE;
    use crate::series::{PricePoint, PriceSeries};
    use chrono::{Duration, NaiveDate};
    use rust_decimal_macros::dec;

    fn stock_from(ticker: &str, start_day: i64, closes: &[Decimal]) -> Stock {
        let origin = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                PricePoint::new(origin + Duration::days(start_day + i as i64), close)
            })
            .collect();
        Stock::new(ticker, PriceSeries::new(points).unwrap())
    }

    #[test]
    fn test_identical_constituents_reproduce_the_series() {
        let closes = [dec!(100), dec!(103), dec!(99), dec!(104), dec!(108)];
        let a = stock_from("A", 0, &closes);
        let b = stock_from("B", 0, &closes);

        let portfolio = Portfolio::new(
            vec![Holding::new(a.clone(), dec!(0.5)), Holding::new(b, dec!(0.5))],
            WEIGHT_TOLERANCE,
        )
        .unwrap();

        let combined = portfolio.daily_return().unwrap();
        let single = a.daily_return().unwrap();
        assert_eq!(combined.dates(), single.dates());
        for (c, s) in combined.values().iter().zip(single.values()) {
            assert!((*c - s).abs() < dec!(0.0000000001));
        }
    }

    #[test]
    fn test_rejects_weights_not_summing_to_one() {
        let a = stock_from("A", 0, &[dec!(100), dec!(101)]);
        let b = stock_from("B", 0, &[dec!(100), dec!(102)]);

        let result = Portfolio::new(
            vec![Holding::new(a, dec!(0.3)), Holding::new(b, dec!(0.6))],
            WEIGHT_TOLERANCE,
        );
        assert!(matches!(result, Err(Error::InvalidWeight(_))));
    }

    #[test]
    fn test_accepts_weights_within_tolerance() {
        let a = stock_from("A", 0, &[dec!(100), dec!(101)]);
        let b = stock_from("B", 0, &[dec!(100), dec!(102)]);
        let c = stock_from("C", 0, &[dec!(100), dec!(103)]);

        let third = dec!(0.3333333);
        let portfolio = Portfolio::new(
            vec![
                Holding::new(a, third),
                Holding::new(b, third),
                Holding::new(c, third),
            ],
            WEIGHT_TOLERANCE,
        );
        assert!(portfolio.is_ok());
    }

    #[test]
    fn test_rejects_empty_portfolio() {
        assert!(matches!(
            Portfolio::new(Vec::new(), WEIGHT_TOLERANCE),
            Err(Error::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_daily_return_uses_date_intersection() {
        // A covers days 0..=4, B covers days 2..=6; shared returns fall on days 3 and 4
        let a = stock_from("A", 0, &[dec!(100), dec!(100), dec!(100), dec!(110), dec!(121)]);
        let b = stock_from("B", 2, &[dec!(50), dec!(55), dec!(55), dec!(60), dec!(66)]);

        let portfolio = Portfolio::new(
            vec![Holding::new(a, dec!(0.5)), Holding::new(b, dec!(0.5))],
            WEIGHT_TOLERANCE,
        )
        .unwrap();

        let returns = portfolio.daily_return().unwrap();
        assert_eq!(returns.len(), 2);
        // day 3: 0.5 * 0.1 + 0.5 * 0.1, day 4: 0.5 * 0.1 + 0.5 * 0
        assert_eq!(returns.values(), vec![dec!(0.1), dec!(0.05)]);
    }

    #[test]
    fn test_daily_return_rejects_disjoint_constituents() {
        let a = stock_from("A", 0, &[dec!(100), dec!(101), dec!(102)]);
        let b = stock_from("B", 10, &[dec!(100), dec!(101), dec!(102)]);

        let portfolio = Portfolio::new(
            vec![Holding::new(a, dec!(0.5)), Holding::new(b, dec!(0.5))],
            WEIGHT_TOLERANCE,
        )
        .unwrap();

        assert!(matches!(
            portfolio.daily_return(),
            Err(Error::InsufficientOverlap { .. })
        ));
    }

    #[test]
    fn test_lookup_and_display() {
        let a = stock_from("TCS.NS", 0, &[dec!(100), dec!(101)]);
        let b = stock_from("MRF.NS", 0, &[dec!(100), dec!(102)]);
        let portfolio = Portfolio::new(
            vec![Holding::new(a, dec!(0.4)), Holding::new(b, dec!(0.6))],
            WEIGHT_TOLERANCE,
        )
        .unwrap();

        assert_eq!(portfolio.to_string(), "Portfolio[TCS.NS,MRF.NS]");
        assert_eq!(portfolio.len(), 2);
        assert!(portfolio.get_stock("MRF.NS").is_some());
        assert!(portfolio.get_stock("INFY.NS").is_none());
    }
}
