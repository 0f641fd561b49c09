//! Portfolio module - weighted collections of stocks.

mod portfolio_model;

pub(crate) use portfolio_model::validate_weights;
pub use portfolio_model::{Holding, Portfolio};
