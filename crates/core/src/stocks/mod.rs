//! Stocks module - the leaf entity every portfolio and benchmark is built from.

mod stock_model;

pub use stock_model::Stock;
