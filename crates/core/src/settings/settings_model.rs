//! Settings model for metric calculations.

use crate::constants::{DEFAULT_RISK_FREE_RATE, TRADING_DAYS_PER_YEAR, WEIGHT_TOLERANCE};
use crate::errors::{Error, Result};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters shared by every metric calculation.
///
/// Missing fields fall back to their defaults when deserialized, so
/// `{"riskFreeRate": 0.065}` is a complete configuration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsSettings {
    pub periods_per_year: u32,
    pub weight_tolerance: Decimal,
    pub risk_free_rate: Decimal,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            periods_per_year: TRADING_DAYS_PER_YEAR,
            weight_tolerance: WEIGHT_TOLERANCE,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
        }
    }
}

impl MetricsSettings {
    /// Parses settings from JSON and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: MetricsSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.periods_per_year == 0 {
            return Err(Error::Settings(
                "periodsPerYear must be greater than zero".to_string(),
            ));
        }
        if self.weight_tolerance.is_sign_negative() {
            return Err(Error::Settings(format!(
                "weightTolerance must not be negative, got {}",
                self.weight_tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let settings = MetricsSettings::default();
        assert_eq!(settings.periods_per_year, 252);
        assert_eq!(settings.weight_tolerance, dec!(0.000001));
        assert_eq!(settings.risk_free_rate, dec!(0.05));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = MetricsSettings::from_json_str(r#"{"periodsPerYear": 12}"#).unwrap();
        assert_eq!(settings.periods_per_year, 12);
        assert_eq!(settings.risk_free_rate, DEFAULT_RISK_FREE_RATE);
    }

    #[test]
    fn test_reads_risk_free_rate() {
        let settings = MetricsSettings::from_json_str(r#"{"riskFreeRate": 0.065}"#).unwrap();
        assert!((settings.risk_free_rate - dec!(0.065)).abs() < dec!(0.000000001));
    }

    #[test]
    fn test_rejects_zero_periods() {
        let result = MetricsSettings::from_json_str(r#"{"periodsPerYear": 0}"#);
        assert!(matches!(result, Err(Error::Settings(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = MetricsSettings::from_json_str("{periodsPerYear: }");
        assert!(matches!(result, Err(Error::Settings(_))));
    }
}
