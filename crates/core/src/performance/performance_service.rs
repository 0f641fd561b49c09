use log::{debug, warn};
use rust_decimal::Decimal;
use std::cell::OnceCell;
use std::fmt;

use crate::benchmark::Benchmark;
use crate::constants::{
    DECIMAL_PRECISION, DEFAULT_RISK_FREE_RATE, MIN_SERIES_POINTS, TRADING_DAYS_PER_YEAR,
};
use crate::errors::{Error, Result};
use crate::performance::{
    ChartPoint, ChartRendererTrait, ChartSeries, ConstituentMetrics, CumulativeReturnChart,
    MetricsReport,
};
use crate::series::{align_pair, AlignedPair, ReturnPoint};
use crate::settings::MetricsSettings;
use crate::subject::Subject;
use crate::utils::stats;

/// Measures a stock or portfolio against a benchmark.
///
/// The subject and benchmark returns are aligned once, on first use, and
/// reused by every metric.
#[derive(Debug, Clone)]
pub struct Performance {
    subject: Subject,
    benchmark: Benchmark,
    periods_per_year: u32,
    risk_free_rate: Decimal,
    aligned: OnceCell<AlignedPair>,
}

impl Performance {
    pub fn new(subject: impl Into<Subject>, benchmark: Benchmark) -> Self {
        Self {
            subject: subject.into(),
            benchmark,
            periods_per_year: TRADING_DAYS_PER_YEAR,
            risk_free_rate: DEFAULT_RISK_FREE_RATE,
            aligned: OnceCell::new(),
        }
    }

    /// Zero is accepted here and rejected by the metrics that annualize.
    pub fn with_periods_per_year(mut self, periods_per_year: u32) -> Self {
        self.periods_per_year = periods_per_year;
        self
    }

    /// Rate used by [`Performance::report`].
    pub fn with_risk_free_rate(mut self, risk_free_rate: Decimal) -> Self {
        self.risk_free_rate = risk_free_rate;
        self
    }

    pub fn with_settings(self, settings: &MetricsSettings) -> Self {
        self.with_periods_per_year(settings.periods_per_year)
            .with_risk_free_rate(settings.risk_free_rate)
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    pub fn benchmark(&self) -> &Benchmark {
        &self.benchmark
    }

    pub fn periods_per_year(&self) -> u32 {
        self.periods_per_year
    }

    pub fn risk_free_rate(&self) -> Decimal {
        self.risk_free_rate
    }

    fn aligned(&self) -> Result<&AlignedPair> {
        if let Some(pair) = self.aligned.get() {
            return Ok(pair);
        }

        let subject_returns = self.subject.daily_return()?;
        let benchmark_returns = self.benchmark.daily_return()?;
        let pair = align_pair(&subject_returns, &benchmark_returns);
        if pair.len() < MIN_SERIES_POINTS {
            return Err(Error::insufficient_overlap(MIN_SERIES_POINTS, pair.len()));
        }

        debug!("{}: {} aligned dates", self, pair.len());
        Ok(self.aligned.get_or_init(|| pair))
    }

    /// Number of dates on which both subject and benchmark have a return.
    pub fn overlap_len(&self) -> Result<usize> {
        Ok(self.aligned()?.len())
    }

    pub fn subject_cagr(&self) -> Result<Decimal> {
        let aligned = self.aligned()?;
        stats::annualize_growth(
            stats::compound_growth(&aligned.left)?,
            aligned.len(),
            self.periods_per_year,
        )
    }

    pub fn benchmark_cagr(&self) -> Result<Decimal> {
        let aligned = self.aligned()?;
        stats::annualize_growth(
            stats::compound_growth(&aligned.right)?,
            aligned.len(),
            self.periods_per_year,
        )
    }

    pub fn subject_std_dev(&self) -> Result<Decimal> {
        stats::sample_std_dev(&self.aligned()?.left)
    }

    /// Cov(subject, benchmark) / Var(benchmark).
    pub fn beta(&self) -> Result<Decimal> {
        let aligned = self.aligned()?;
        let variance = stats::sample_variance(&aligned.right)?;
        if variance.is_zero() {
            warn!("{}: benchmark returns have zero variance", self);
            return Err(Error::DegenerateBenchmark(format!(
                "{} has zero return variance",
                self.benchmark
            )));
        }
        let covariance = stats::sample_covariance(&aligned.left, &aligned.right)?;
        checked_ratio(covariance, variance, "beta")
    }

    /// Jensen's alpha: `cagr - (rf + beta * (benchmark_cagr - rf))`.
    pub fn alpha(&self, risk_free_rate: Decimal) -> Result<Decimal> {
        let beta = self.beta()?;
        let expected = risk_free_rate + beta * (self.benchmark_cagr()? - risk_free_rate);
        Ok(self.subject_cagr()? - expected)
    }

    /// Annualized standard deviation of the active return.
    pub fn tracking_error(&self) -> Result<Decimal> {
        let active = self.aligned()?.differences();
        let factor = stats::annualization_factor(self.periods_per_year)?;
        Ok(stats::sample_std_dev(&active)? * factor)
    }

    pub fn treynor_ratio(&self, risk_free_rate: Decimal) -> Result<Decimal> {
        let beta = self.beta()?;
        if beta.is_zero() {
            warn!("{}: beta is zero", self);
            return Err(Error::DegenerateBenchmark(format!(
                "Beta against {} is zero",
                self.benchmark
            )));
        }
        checked_ratio(self.subject_cagr()? - risk_free_rate, beta, "Treynor ratio")
    }

    /// Excess CAGR per unit of annualized volatility.
    pub fn sharpe_ratio(&self, risk_free_rate: Decimal) -> Result<Decimal> {
        let factor = stats::annualization_factor(self.periods_per_year)?;
        let volatility = self.subject_std_dev()? * factor;
        if volatility.is_zero() {
            warn!("{}: subject returns have zero volatility", self);
            return Err(Error::ZeroVolatility(format!(
                "{} has constant returns",
                self.subject
            )));
        }
        checked_ratio(self.subject_cagr()? - risk_free_rate, volatility, "Sharpe ratio")
    }

    /// Subject CAGR as a multiple of benchmark CAGR.
    pub fn relative_return(&self) -> Result<Decimal> {
        let benchmark_cagr = self.benchmark_cagr()?;
        if benchmark_cagr.is_zero() {
            warn!("{}: benchmark CAGR is zero", self);
            return Err(Error::DegenerateBenchmark(format!(
                "{} has zero CAGR",
                self.benchmark
            )));
        }
        checked_ratio(self.subject_cagr()?, benchmark_cagr, "relative return")
    }

    /// All metrics at once, rounded for reporting. Fails on the first
    /// metric that cannot be computed, except the relative return, which is
    /// left empty when the benchmark CAGR is zero.
    pub fn all_metrics(&self, risk_free_rate: Decimal) -> Result<MetricsReport> {
        let relative_return = match self.relative_return() {
            Ok(value) => Some(value),
            Err(Error::DegenerateBenchmark(_)) => None,
            Err(err) => return Err(err),
        };
        let report = MetricsReport {
            beta: self.beta()?,
            alpha: self.alpha(risk_free_rate)?,
            tracking_error: self.tracking_error()?,
            treynor_ratio: self.treynor_ratio(risk_free_rate)?,
            sharpe_ratio: self.sharpe_ratio(risk_free_rate)?,
            cagr: self.subject_cagr()?,
            std_dev: self.subject_std_dev()?,
            relative_return,
        };
        Ok(report.round_dp(DECIMAL_PRECISION))
    }

    /// All metrics at the configured risk-free rate.
    pub fn report(&self) -> Result<MetricsReport> {
        self.all_metrics(self.risk_free_rate)
    }

    /// The subject measured against each benchmark constituent on its own,
    /// in benchmark order.
    pub fn constituent_breakdown(
        &self,
        risk_free_rate: Decimal,
    ) -> Result<Vec<ConstituentMetrics>> {
        self.benchmark
            .stocks()
            .iter()
            .map(|stock| {
                let single = Benchmark::new(vec![stock.clone()])?;
                let metrics = Performance::new(self.subject.clone(), single)
                    .with_periods_per_year(self.periods_per_year)
                    .all_metrics(risk_free_rate)?;
                Ok(ConstituentMetrics {
                    ticker: stock.ticker().to_string(),
                    metrics,
                })
            })
            .collect()
    }

    /// Growth of one unit in subject and benchmark over the aligned dates.
    pub fn cumulative_return_chart(&self) -> Result<CumulativeReturnChart> {
        let aligned = self.aligned()?;
        let subject = aligned.left_series().growth_index()?;
        let benchmark = aligned.right_series().growth_index()?;

        Ok(CumulativeReturnChart {
            title: self.to_string(),
            subject: chart_series(self.subject.label(), subject),
            benchmark: chart_series(self.benchmark.to_string(), benchmark),
        })
    }

    pub fn plot_cumulative_return(&self, renderer: &dyn ChartRendererTrait) -> Result<()> {
        let chart = self.cumulative_return_chart()?;
        debug!("Rendering {} points for {}", chart.len(), chart.title);
        renderer.render(&chart)
    }
}

impl fmt::Display for Performance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Performance of {} with {}.", self.subject, self.benchmark)
    }
}

fn chart_series(label: String, points: Vec<ReturnPoint>) -> ChartSeries {
    ChartSeries {
        label,
        points: points
            .into_iter()
            .map(|p| ChartPoint {
                date: p.date,
                value: p.value,
            })
            .collect(),
    }
}

fn checked_ratio(numerator: Decimal, denominator: Decimal, metric: &str) -> Result<Decimal> {
    numerator
        .checked_div(denominator)
        .ok_or_else(|| {
            Error::Calculation(format!(
                "{} overflowed: {} / {}",
                metric, numerator, denominator
            ))
        })
}
