//! Date alignment of return series.
//!
//! Series are aligned on the intersection of their dates: a date missing
//! from any series is dropped from all of them. Nothing is forward-filled.

use crate::errors::{Error, Result};
use crate::series::return_series::{ReturnPoint, ReturnSeries};

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Two return series restricted to the dates they share.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedPair {
    pub dates: Vec<NaiveDate>,
    pub left: Vec<Decimal>,
    pub right: Vec<Decimal>,
}

impl AlignedPair {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn left_series(&self) -> ReturnSeries {
        Self::to_series(&self.dates, &self.left)
    }

    pub fn right_series(&self) -> ReturnSeries {
        Self::to_series(&self.dates, &self.right)
    }

    /// `left - right` on every aligned date.
    pub fn differences(&self) -> Vec<Decimal> {
        self.left
            .iter()
            .zip(self.right.iter())
            .map(|(l, r)| l - r)
            .collect()
    }

    fn to_series(dates: &[NaiveDate], values: &[Decimal]) -> ReturnSeries {
        ReturnSeries::from_sorted(
            dates
                .iter()
                .zip(values.iter())
                .map(|(&date, &value)| ReturnPoint { date, value })
                .collect(),
        )
    }
}

fn value_map(series: &ReturnSeries) -> HashMap<NaiveDate, Decimal> {
    series.points().iter().map(|p| (p.date, p.value)).collect()
}

/// Dates present in every series, ascending.
pub fn common_dates(series: &[&ReturnSeries]) -> Vec<NaiveDate> {
    let Some((first, rest)) = series.split_first() else {
        return Vec::new();
    };

    let maps: Vec<HashMap<NaiveDate, Decimal>> = rest.iter().map(|s| value_map(s)).collect();
    first
        .points()
        .iter()
        .map(|p| p.date)
        .filter(|date| maps.iter().all(|m| m.contains_key(date)))
        .collect()
}

/// Aligns two series on their shared dates.
pub fn align_pair(left: &ReturnSeries, right: &ReturnSeries) -> AlignedPair {
    let right_map = value_map(right);
    let mut dates = Vec::with_capacity(left.len().min(right.len()));
    let mut left_values = Vec::with_capacity(dates.capacity());
    let mut right_values = Vec::with_capacity(dates.capacity());

    for point in left.points() {
        if let Some(&value) = right_map.get(&point.date) {
            dates.push(point.date);
            left_values.push(point.value);
            right_values.push(value);
        }
    }

    if dates.len() < left.len() || dates.len() < right.len() {
        debug!(
            "Aligned {} and {} returns on {} shared dates",
            left.len(),
            right.len(),
            dates.len()
        );
    }

    AlignedPair {
        dates,
        left: left_values,
        right: right_values,
    }
}

/// Weighted sum of the series on every date they all share.
///
/// Fails with `InsufficientOverlap` when the series have no date in common.
pub fn weighted_sum(components: &[(&ReturnSeries, Decimal)]) -> Result<ReturnSeries> {
    if components.is_empty() {
        return Err(Error::invalid_input("Weighted sum needs at least one series"));
    }

    let series: Vec<&ReturnSeries> = components.iter().map(|(s, _)| *s).collect();
    let dates = common_dates(&series);
    if dates.is_empty() {
        return Err(Error::insufficient_overlap(1, 0));
    }

    for (idx, s) in series.iter().enumerate() {
        let dropped = s.len() - dates.len();
        if dropped > 0 {
            debug!(
                "Component {} loses {} of {} dates to alignment",
                idx,
                dropped,
                s.len()
            );
        }
    }

    let maps: Vec<(HashMap<NaiveDate, Decimal>, Decimal)> = components
        .iter()
        .map(|(s, weight)| (value_map(s), *weight))
        .collect();

    let points = dates
        .into_iter()
        .map(|date| {
            let value: Decimal = maps
                .iter()
                .map(|(map, weight)| map.get(&date).copied().unwrap_or_default() * *weight)
                .sum();
            ReturnPoint { date, value }
        })
        .collect();

    Ok(ReturnSeries::from_sorted(points))
}
