//! Performance module - metrics of a stock or portfolio against a benchmark.
//!
//! Every metric is computed on the subject and benchmark daily returns
//! aligned on the dates both series share.

mod chart_traits;
mod performance_model;
mod performance_service;

pub use chart_traits::ChartRendererTrait;
pub use performance_model::*;
pub use performance_service::Performance;
