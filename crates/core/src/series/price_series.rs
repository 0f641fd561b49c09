use crate::constants::MIN_SERIES_POINTS;
use crate::errors::{Error, Result};
use crate::series::return_series::{ReturnPoint, ReturnSeries};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Closing price of an instrument on one day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: Decimal,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: Decimal) -> Self {
        Self { date, close }
    }
}

/// Daily closing prices sorted ascending by date, one price per date, every
/// price strictly positive.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from unordered points. Points are sorted by date;
    /// duplicate dates and non-positive prices are rejected.
    pub fn new(mut points: Vec<PricePoint>) -> Result<Self> {
        points.sort_by_key(|p| p.date);

        for window in points.windows(2) {
            if window[0].date == window[1].date {
                return Err(Error::invalid_input(format!(
                    "Duplicate price for date {}",
                    window[0].date
                )));
            }
        }

        if let Some(bad) = points.iter().find(|p| p.close <= Decimal::ZERO) {
            return Err(Error::invalid_input(format!(
                "Price on {} must be positive, got {}",
                bad.date, bad.close
            )));
        }

        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn price_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| self.points[idx].close)
    }

    /// Restricts the series to `start..=end`.
    pub fn window(&self, start: NaiveDate, end: NaiveDate) -> PriceSeries {
        PriceSeries {
            points: self
                .points
                .iter()
                .filter(|p| p.date >= start && p.date <= end)
                .copied()
                .collect(),
        }
    }

    /// Simple daily returns `price[i] / price[i-1] - 1`, dated at the later
    /// price. The result has one point fewer than the series.
    pub fn daily_returns(&self) -> Result<ReturnSeries> {
        if self.points.len() < MIN_SERIES_POINTS {
            return Err(Error::insufficient_data(MIN_SERIES_POINTS, self.points.len()));
        }

        let returns = self
            .points
            .windows(2)
            .map(|window| {
                let ratio = price_ratio(window[1].close, window[0].close)?;
                Ok(ReturnPoint {
                    date: window[1].date,
                    value: ratio - Decimal::ONE,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ReturnSeries::from_sorted(returns))
    }
}

/// `end / start`, failing instead of overflowing on extreme price ratios.
pub(crate) fn price_ratio(end: Decimal, start: Decimal) -> Result<Decimal> {
    end.checked_div(start).ok_or_else(|| {
        Error::Calculation(format!("Price ratio {} / {} overflowed", end, start))
    })
}
