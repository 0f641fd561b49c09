//! Price source seam.

use chrono::NaiveDate;

use crate::errors::Result;
use crate::series::PricePoint;

/// Supplies daily closing prices for a ticker.
///
/// Implementations return the points whose dates fall in `start..=end`.
/// An unknown ticker is `Error::PriceHistoryNotFound`; a known ticker with
/// no prices in the window is an empty vector.
pub trait PriceProviderTrait: Send + Sync {
    fn get_price_history(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PricePoint>>;

    /// Short identifier used in log lines.
    fn name(&self) -> &'static str;
}
