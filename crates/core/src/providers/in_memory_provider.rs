//! Price provider backed by prices already held in memory.

use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::HashMap;

use crate::errors::{Error, Result};
use crate::providers::PriceProviderTrait;
use crate::series::PricePoint;

#[derive(Debug, Clone, Default)]
pub struct InMemoryPriceProvider {
    histories: HashMap<String, Vec<PricePoint>>,
}

impl InMemoryPriceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the history for `ticker`, replacing any earlier one.
    pub fn insert(&mut self, ticker: impl Into<String>, mut points: Vec<PricePoint>) {
        points.sort_by_key(|p| p.date);
        self.histories.insert(ticker.into(), points);
    }

    pub fn with_history(mut self, ticker: impl Into<String>, points: Vec<PricePoint>) -> Self {
        self.insert(ticker, points);
        self
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.histories.contains_key(ticker)
    }
}

impl PriceProviderTrait for InMemoryPriceProvider {
    fn get_price_history(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>> {
        if start > end {
            return Err(Error::invalid_input(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }

        let history = self
            .histories
            .get(ticker)
            .ok_or_else(|| Error::PriceHistoryNotFound(ticker.to_string()))?;

        let window: Vec<PricePoint> = history
            .iter()
            .filter(|p| p.date >= start && p.date <= end)
            .copied()
            .collect();

        if window.is_empty() {
            warn!(
                "No prices for {} between {} and {} in {}",
                ticker,
                start,
                end,
                self.name()
            );
        } else {
            debug!("Loaded {} prices for {} from {}", window.len(), ticker, self.name());
        }

        Ok(window)
    }

    fn name(&self) -> &'static str {
        "IN_MEMORY"
    }
}
