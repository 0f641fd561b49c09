//! The entity whose performance is measured: a single stock or a portfolio.

use crate::errors::Result;
use crate::portfolio::Portfolio;
use crate::series::ReturnSeries;
use crate::stocks::Stock;

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Subject {
    Stock(Stock),
    Portfolio(Portfolio),
}

impl Subject {
    pub fn daily_return(&self) -> Result<ReturnSeries> {
        match self {
            Subject::Stock(stock) => stock.daily_return(),
            Subject::Portfolio(portfolio) => portfolio.daily_return(),
        }
    }

    pub fn cagr(&self, periods_per_year: u32) -> Result<Decimal> {
        match self {
            Subject::Stock(stock) => stock.cagr(periods_per_year),
            Subject::Portfolio(portfolio) => portfolio.cagr(periods_per_year),
        }
    }

    pub fn std_dev(&self) -> Result<Decimal> {
        match self {
            Subject::Stock(stock) => stock.std_dev(),
            Subject::Portfolio(portfolio) => portfolio.std_dev(),
        }
    }

    /// Short label used for chart series: the ticker for a stock, the
    /// display form for a portfolio.
    pub fn label(&self) -> String {
        match self {
            Subject::Stock(stock) => stock.ticker().to_string(),
            Subject::Portfolio(portfolio) => portfolio.to_string(),
        }
    }
}

impl From<Stock> for Subject {
    fn from(stock: Stock) -> Self {
        Subject::Stock(stock)
    }
}

impl From<Portfolio> for Subject {
    fn from(portfolio: Portfolio) -> Self {
        Subject::Portfolio(portfolio)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Stock(stock) => fmt::Display::fmt(stock, f),
            Subject::Portfolio(portfolio) => fmt::Display::fmt(portfolio, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::WEIGHT_TOLERANCE;
    use crate::portfolio::Holding;
    use crate::series::{PricePoint, PriceSeries};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn stock(ticker: &str) -> Stock {
        let points = vec![
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), dec!(100)),
            PricePoint::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), dec!(105)),
        ];
        Stock::new(ticker, PriceSeries::new(points).unwrap())
    }

    #[test]
    fn test_labels_and_display() {
        let single: Subject = stock("INFY.NS").into();
        assert_eq!(single.label(), "INFY.NS");
        assert_eq!(single.to_string(), "Stock[INFY.NS]");

        let portfolio = Portfolio::new(
            vec![
                Holding::new(stock("INFY.NS"), dec!(0.5)),
                Holding::new(stock("TCS.NS"), dec!(0.5)),
            ],
            WEIGHT_TOLERANCE,
        )
        .unwrap();
        let basket: Subject = portfolio.into();
        assert_eq!(basket.label(), "Portfolio[INFY.NS,TCS.NS]");
        assert_eq!(basket.to_string(), basket.label());
    }

    #[test]
    fn test_dispatches_daily_return() {
        let subject = Subject::from(stock("INFY.NS"));
        assert_eq!(subject.daily_return().unwrap().values(), vec![dec!(0.05)]);
    }
}
