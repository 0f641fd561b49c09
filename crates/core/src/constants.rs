use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Trading periods per year used to annualize daily statistics
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Allowed distance between the sum of portfolio weights and 1
pub const WEIGHT_TOLERANCE: Decimal = dec!(0.000001);

/// Annual risk-free rate used when the caller does not supply one
pub const DEFAULT_RISK_FREE_RATE: Decimal = dec!(0.05);

/// Decimal precision for reported metrics
pub const DECIMAL_PRECISION: u32 = 6;

/// Minimum number of points needed for a return or a sample variance
pub const MIN_SERIES_POINTS: usize = 2;
