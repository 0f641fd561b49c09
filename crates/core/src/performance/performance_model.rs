use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::Result;

/// Every metric of a subject measured against one benchmark.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub beta: Decimal,
    pub alpha: Decimal,
    pub tracking_error: Decimal,
    pub treynor_ratio: Decimal,
    pub sharpe_ratio: Decimal,
    /// Subject CAGR over the aligned dates.
    pub cagr: Decimal,
    /// Sample standard deviation of the subject's aligned daily returns.
    pub std_dev: Decimal,
    /// Subject CAGR divided by benchmark CAGR, absent when the benchmark
    /// CAGR is zero.
    pub relative_return: Option<Decimal>,
}

impl MetricsReport {
    /// Metric name to value, keyed by the snake_case metric names.
    /// `relative_return` is left out when it is undefined.
    pub fn to_map(&self) -> BTreeMap<&'static str, Decimal> {
        let mut map = BTreeMap::from([
            ("beta", self.beta),
            ("alpha", self.alpha),
            ("tracking_error", self.tracking_error),
            ("treynor_ratio", self.treynor_ratio),
            ("sharpe_ratio", self.sharpe_ratio),
            ("cagr", self.cagr),
            ("std_dev", self.std_dev),
        ]);
        if let Some(relative_return) = self.relative_return {
            map.insert("relative_return", relative_return);
        }
        map
    }

    pub fn round_dp(&self, dp: u32) -> Self {
        Self {
            beta: self.beta.round_dp(dp),
            alpha: self.alpha.round_dp(dp),
            tracking_error: self.tracking_error.round_dp(dp),
            treynor_ratio: self.treynor_ratio.round_dp(dp),
            sharpe_ratio: self.sharpe_ratio.round_dp(dp),
            cagr: self.cagr.round_dp(dp),
            std_dev: self.std_dev.round_dp(dp),
            relative_return: self.relative_return.map(|r| r.round_dp(dp)),
        }
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConstituentMetrics {
    pub ticker: String,
    pub metrics: MetricsReport,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: Decimal,
}

/// One labelled line of a chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    pub fn last_value(&self) -> Option<Decimal> {
        self.points.last().map(|p| p.value)
    }
}

/// Growth of one unit invested in the subject and in the benchmark, over
/// the dates both have returns for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeReturnChart {
    pub title: String,
    pub subject: ChartSeries,
    pub benchmark: ChartSeries,
}

impl CumulativeReturnChart {
    pub fn len(&self) -> usize {
        self.subject.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subject.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.subject.points.iter().map(|p| p.date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn report() -> MetricsReport {
        MetricsReport {
            beta: dec!(1.23456789),
            alpha: dec!(-0.0123456789),
            tracking_error: dec!(0.05),
            treynor_ratio: dec!(0.1),
            sharpe_ratio: dec!(0.7),
            cagr: dec!(0.15),
            std_dev: dec!(0.012),
            relative_return: Some(dec!(1.2)),
        }
    }

    #[test]
    fn test_to_map_keys() {
        let map = report().to_map();
        let keys: Vec<&str> = map.keys().copied().collect();
        assert_eq!(
            keys,
            vec![
                "alpha",
                "beta",
                "cagr",
                "relative_return",
                "sharpe_ratio",
                "std_dev",
                "tracking_error",
                "treynor_ratio"
            ]
        );
        assert_eq!(map["beta"], dec!(1.23456789));
    }

    #[test]
    fn test_to_map_skips_undefined_relative_return() {
        let report = MetricsReport {
            relative_return: None,
            ..report()
        };
        let map = report.to_map();
        assert_eq!(map.len(), 7);
        assert!(!map.contains_key("relative_return"));
    }

    #[test]
    fn test_round_dp() {
        let rounded = report().round_dp(6);
        assert_eq!(rounded.beta, dec!(1.234568));
        assert_eq!(rounded.alpha, dec!(-0.012346));
        assert_eq!(rounded.cagr, dec!(0.15));
    }

    #[test]
    fn test_json_uses_camel_case() {
        let json = report().to_json().unwrap();
        assert!(json.get("trackingError").is_some());
        assert!(json.get("relativeReturn").is_some());
        assert!(json.get("tracking_error").is_none());
    }
}
