//! Statistical Features Computation

use crate::error::FeatureError;

/// Reject empty series and NaN samples
pub(crate) fn validate(feature: &'static str, series: &[f64]) -> Result<(), FeatureError> {
    if series.is_empty() {
        return Err(FeatureError::EmptySeries { feature });
    }
    match series.iter().position(|v| v.is_nan()) {
        Some(index) => Err(FeatureError::NotANumber { feature, index }),
        None => Ok(()),
    }
}

/// Sorted copy of a validated series
fn sorted(series: &[f64]) -> Vec<f64> {
    let mut values = series.to_vec();
    values.sort_by(f64::total_cmp);
    values
}

/// Arithmetic mean
pub fn mean(series: &[f64]) -> Result<f64, FeatureError> {
    validate("Mean", series)?;
    Ok(series.iter().sum::<f64>() / series.len() as f64)
}

/// Median, averaging the two middle values for even lengths
pub fn median(series: &[f64]) -> Result<f64, FeatureError> {
    validate("Median", series)?;
    let values = sorted(series);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Ok((values[mid - 1] + values[mid]) * 0.5)
    } else {
        Ok(values[mid])
    }
}

/// Population standard deviation (divides by N)
pub fn std_dev(series: &[f64]) -> Result<f64, FeatureError> {
    validate("Std", series)?;
    let first = series[0];
    if series.iter().all(|&v| v == first) {
        // Constant series: skip the mean, whose rounding would leave a residue
        return Ok(0.0);
    }

    let n = series.len() as f64;
    let mean = series.iter().sum::<f64>() / n;
    let variance = series.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    Ok(variance.sqrt())
}

/// Percentile `q` (0-100) using linear interpolation between order statistics.
///
/// The rank is `h = (n - 1) * (q / 100)`; the result interpolates between the
/// sorted samples at `floor(h)` and `ceil(h)`.
pub fn percentile(series: &[f64], q: f64) -> Result<f64, FeatureError> {
    validate("Percentile", series)?;
    check_rank(q)?;
    Ok(percentile_of_sorted(&sorted(series), q))
}

fn check_rank(q: f64) -> Result<(), FeatureError> {
    if (0.0..=100.0).contains(&q) {
        Ok(())
    } else {
        Err(FeatureError::InvalidPercentile(q))
    }
}

fn percentile_of_sorted(sorted: &[f64], q: f64) -> f64 {
    let rank = (sorted.len() - 1) as f64 * (q / 100.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    lerp(sorted[lo], sorted[hi], rank - lo as f64)
}

/// Interpolate from whichever end is closer so both endpoints are exact
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Interquartile range: 75th minus 25th percentile
pub fn iqr(series: &[f64]) -> Result<f64, FeatureError> {
    validate("IQR", series)?;
    let values = sorted(series);
    Ok(percentile_of_sorted(&values, 75.0) - percentile_of_sorted(&values, 25.0))
}

/// Minimum value
pub fn min(series: &[f64]) -> Result<f64, FeatureError> {
    validate("Min", series)?;
    Ok(series.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Maximum value
pub fn max(series: &[f64]) -> Result<f64, FeatureError> {
    validate("Max", series)?;
    Ok(series.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Number of samples; defined for every series, including the empty one
pub fn length(series: &[f64]) -> usize {
    series.len()
}
