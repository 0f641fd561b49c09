//! Factory module - the entry points that build validated stocks,
//! portfolios and benchmarks.

mod entity_factory;
mod provider_factory;

pub use entity_factory::{
    create_benchmark, create_portfolio, create_portfolio_with_tolerance, create_stock,
    create_weighted_benchmark, create_weighted_benchmark_with_tolerance,
};
pub use provider_factory::{BenchmarkFactory, PortfolioFactory, StockFactory};
