//! Alphafolio Core - performance metrics of stocks and portfolios against
//! a benchmark.
//!
//! Price histories become [`Stock`]s, which are combined into
//! [`Portfolio`]s and [`Benchmark`]s by the factory functions. A
//! [`Performance`] aligns the subject and benchmark daily returns and
//! computes beta, alpha, tracking error, the Treynor and Sharpe ratios,
//! and the cumulative return chart handed to a renderer.

pub mod benchmark;
pub mod constants;
pub mod errors;
pub mod factory;
pub mod performance;
pub mod portfolio;
pub mod providers;
pub mod series;
pub mod settings;
pub mod stocks;
pub mod subject;
pub mod utils;

pub use benchmark::{Benchmark, ConstituentStats};
pub use performance::{
    ChartPoint, ChartRendererTrait, ChartSeries, ConstituentMetrics, CumulativeReturnChart,
    MetricsReport, Performance,
};
pub use portfolio::{Holding, Portfolio};
pub use series::{PricePoint, PriceSeries, ReturnPoint, ReturnSeries};
pub use settings::MetricsSettings;
pub use stocks::Stock;
pub use subject::Subject;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
