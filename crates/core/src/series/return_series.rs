use crate::errors::{Error, Result};
use crate::utils::stats;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A periodic simple return, dated at the end of its period.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// Daily simple returns sorted ascending by date.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ReturnSeries {
    points: Vec<ReturnPoint>,
}

impl ReturnSeries {
    /// Builds a series from arbitrary points; they are sorted by date and
    /// duplicate dates are rejected.
    pub fn new(mut points: Vec<ReturnPoint>) -> Result<Self> {
        points.sort_by_key(|p| p.date);
        if let Some(window) = points.windows(2).find(|w| w[0].date == w[1].date) {
            return Err(Error::invalid_input(format!(
                "Duplicate return for date {}",
                window[0].date
            )));
        }
        Ok(Self { points })
    }

    /// Caller guarantees ascending, unique dates.
    pub(crate) fn from_sorted(points: Vec<ReturnPoint>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].date < w[1].date));
        Self { points }
    }

    pub fn points(&self) -> &[ReturnPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn values(&self) -> Vec<Decimal> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn value_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.points
            .binary_search_by_key(&date, |p| p.date)
            .ok()
            .map(|idx| self.points[idx].value)
    }

    /// Sample standard deviation of the returns.
    pub fn std_dev(&self) -> Result<Decimal> {
        stats::sample_std_dev(&self.values())
    }

    /// Compound growth over the whole series minus one.
    pub fn total_return(&self) -> Result<Decimal> {
        Ok(stats::compound_growth(&self.values())? - Decimal::ONE)
    }

    /// Compound annual growth rate: `prod(1 + r)^(periods_per_year / n) - 1`.
    pub fn cagr(&self, periods_per_year: u32) -> Result<Decimal> {
        if self.points.is_empty() {
            return Err(Error::insufficient_data(1, 0));
        }
        let growth = stats::compound_growth(&self.values())?;
        stats::annualize_growth(growth, self.points.len(), periods_per_year)
    }

    /// Running value of one unit invested at the start: `prod(1 + r)` up to
    /// and including each date.
    pub fn growth_index(&self) -> Result<Vec<ReturnPoint>> {
        let mut growth = Decimal::ONE;
        let mut index = Vec::with_capacity(self.points.len());
        for point in &self.points {
            growth = growth
                .checked_mul(Decimal::ONE + point.value)
                .ok_or_else(|| Error::Calculation("Growth index overflowed".to_string()))?;
            index.push(ReturnPoint {
                date: point.date,
                value: growth,
            });
        }
        Ok(index)
    }

    /// Cumulative return to date: the growth index minus one. The last value
    /// equals `last_price / first_price - 1` for a series built from prices.
    pub fn cumulative_returns(&self) -> Result<Vec<ReturnPoint>> {
        Ok(self
            .growth_index()?
            .into_iter()
            .map(|p| ReturnPoint {
                date: p.date,
                value: p.value - Decimal::ONE,
            })
            .collect())
    }
}
