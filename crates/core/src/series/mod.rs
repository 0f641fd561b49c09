//! Time series module - price and return series and their date alignment.

pub mod alignment;
mod price_series;
mod return_series;

pub use alignment::{align_pair, common_dates, weighted_sum, AlignedPair};
pub(crate) use price_series::price_ratio;
pub use price_series::{PricePoint, PriceSeries};
pub use return_series::{ReturnPoint, ReturnSeries};
