//! Sample statistics over Decimal slices.
//!
//! Variances and covariances use the n-1 (sample) denominator throughout.

use crate::constants::MIN_SERIES_POINTS;
use crate::errors::{Error, Result};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;

/// Sample covariance of two equally long series.
pub fn sample_covariance(xs: &[Decimal], ys: &[Decimal]) -> Result<Decimal> {
    if xs.len() != ys.len() {
        return Err(Error::invalid_input(format!(
            "Covariance needs series of equal length, got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < MIN_SERIES_POINTS {
        return Err(Error::insufficient_data(MIN_SERIES_POINTS, xs.len()));
    }

    let count = Decimal::from(xs.len());
    let mean_x = xs.iter().sum::<Decimal>() / count;
    let mean_y = ys.iter().sum::<Decimal>() / count;

    let sum_cross: Decimal = xs
        .iter()
        .zip(ys.iter())
        .map(|(&x, &y)| (x - mean_x) * (y - mean_y))
        .sum();

    Ok(sum_cross / (count - Decimal::ONE))
}

/// Sample variance. Shares its arithmetic with [`sample_covariance`] so that
/// `cov(x, x) == var(x)` holds exactly.
pub fn sample_variance(values: &[Decimal]) -> Result<Decimal> {
    sample_covariance(values, values)
}

pub fn sample_std_dev(values: &[Decimal]) -> Result<Decimal> {
    let variance = sample_variance(values)?;
    if variance.is_sign_negative() {
        return Ok(Decimal::ZERO);
    }
    variance
        .sqrt()
        .ok_or_else(|| Error::Calculation(format!("Square root of variance {} failed", variance)))
}

/// sqrt(periods_per_year), the factor that annualizes a per-period deviation.
pub fn annualization_factor(periods_per_year: u32) -> Result<Decimal> {
    if periods_per_year == 0 {
        return Err(Error::invalid_input("Periods per year must be positive"));
    }
    Decimal::from(periods_per_year).sqrt().ok_or_else(|| {
        Error::Calculation(format!(
            "Square root of {} periods per year failed",
            periods_per_year
        ))
    })
}

/// Product of `(1 + r)` over the series.
pub fn compound_growth(returns: &[Decimal]) -> Result<Decimal> {
    returns.iter().try_fold(Decimal::ONE, |acc, &r| {
        acc.checked_mul(Decimal::ONE + r)
            .ok_or_else(|| Error::Calculation("Compounded growth overflowed".to_string()))
    })
}

/// Converts a growth multiple observed over `n_periods` into an annual rate:
/// `growth^(periods_per_year / n_periods) - 1`.
///
/// A total loss (growth <= 0) is capped at -100%. The power is taken in
/// f64; a rate too large for a Decimal is a `Calculation` error.
pub fn annualize_growth(
    growth: Decimal,
    n_periods: usize,
    periods_per_year: u32,
) -> Result<Decimal> {
    if periods_per_year == 0 {
        return Err(Error::invalid_input("Periods per year must be positive"));
    }
    if n_periods == 0 {
        return Err(Error::insufficient_data(MIN_SERIES_POINTS, n_periods + 1));
    }
    if growth <= Decimal::ZERO {
        return Ok(dec!(-1));
    }
    if growth == Decimal::ONE {
        return Ok(Decimal::ZERO);
    }
    if n_periods == periods_per_year as usize {
        return Ok(growth - Decimal::ONE);
    }

    let base = growth.to_f64().ok_or_else(|| {
        Error::Calculation(format!("Growth {} has no f64 representation", growth))
    })?;
    let exponent = f64::from(periods_per_year) / n_periods as f64;
    let annual_growth = base.powf(exponent);
    // below the smallest Decimal step
    if annual_growth < 1e-28 {
        return Ok(dec!(-1));
    }

    Decimal::from_f64(annual_growth)
        .filter(|_| annual_growth.is_finite())
        .map(|g| g - Decimal::ONE)
        .ok_or_else(|| {
            Error::Calculation(format!(
                "Annualized growth {}^{} = {:e} does not fit a Decimal",
                growth, exponent, annual_growth
            ))
        })
}
