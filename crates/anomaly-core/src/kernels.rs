//! Scalar statistical kernels
//!
//! Order-statistic primitives shared by the detection crates. Everything here
//! operates on plain `f64` slices and allocates at most one scratch copy.

use crate::error::{Error, Result};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Consistency factor that makes MAD comparable to the standard deviation
/// for normally distributed data.
pub const MAD_CONSISTENCY: f64 = 1.4826;

/// Median of a sample.
///
/// Averages the two central order statistics for even-length input.
pub fn median(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_sample("median"));
    }
    let mut sorted = sample.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Ok(median_of_sorted(&sorted))
}

/// Median of an already-sorted non-empty sample.
///
/// Callers must guarantee `sorted` is non-empty and ordered.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    (sorted[(n - 1) / 2] + sorted[n / 2]) / 2.0
}

/// Median absolute deviation, scaled by [`MAD_CONSISTENCY`].
///
/// Robust spread estimate with a 50% breakdown point; a sample more than
/// half constant collapses it to zero.
pub fn mad(sample: &[f64]) -> Result<f64> {
    let center = median(sample)?;
    let deviations: Vec<f64> = sample.iter().map(|v| (v - center).abs()).collect();
    Ok(MAD_CONSISTENCY * median(&deviations)?)
}

/// Student-t quantile at cumulative probability `p` with `df` degrees of
/// freedom.
pub fn student_t_quantile(p: f64, df: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "cumulative probability {p} must be in [0, 1]"
        )));
    }
    if df < 1.0 {
        return Err(Error::InvalidParameter(format!(
            "degrees of freedom {df} must be at least 1"
        )));
    }
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("Student-t distribution: {e}")))?;
    Ok(dist.inverse_cdf(p))
}
