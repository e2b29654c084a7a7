//! Median-based seasonal decomposition
//!
//! Splits a series into trend, seasonal, and residual components using order
//! statistics throughout, so the extreme points the detector is hunting for
//! cannot drag the baseline toward themselves.

use anomaly_core::{kernels, Error, Result};

/// Additive decomposition of a series.
///
/// Invariant: all three components have the length of the input, and
/// `residual[i] = series[i] - trend[i] - seasonal[i]`.
#[derive(Debug, Clone)]
pub struct Decomposition {
    /// Slow-moving level, estimated by a centered moving median.
    pub trend: Vec<f64>,
    /// Repeating pattern, one median per phase broadcast over the series.
    pub seasonal: Vec<f64>,
    /// What remains after removing trend and seasonal structure.
    pub residual: Vec<f64>,
}

impl Decomposition {
    /// Length of the decomposed series.
    pub fn len(&self) -> usize {
        self.residual.len()
    }

    /// Whether the decomposed series was empty.
    pub fn is_empty(&self) -> bool {
        self.residual.is_empty()
    }
}

/// Trend window length derived from the seasonal period: the next odd
/// integer at or above one and a half periods, with a floor of 3.
///
/// One and a half periods is wide enough that a single-point spike cannot
/// become the window median, while still tracking level shifts that span a
/// few periods. Tunable via `EsdParameters::trend_window`.
pub fn trend_window(period: usize) -> usize {
    let w = period * 3 / 2;
    let w = if w % 2 == 0 { w + 1 } else { w };
    w.max(3)
}

/// Decompose `series` for the given seasonal period and trend window.
///
/// The caller is expected to have validated the series (length, NaN) before
/// decomposing; this function only rejects structurally impossible input.
pub fn decompose(series: &[f64], period: usize, window: usize) -> Result<Decomposition> {
    if period == 0 {
        return Err(Error::InvalidParameter("period must be positive".to_string()));
    }
    if window == 0 {
        return Err(Error::InvalidParameter(
            "trend window must be positive".to_string(),
        ));
    }
    if series.is_empty() {
        return Err(Error::empty_sample("decompose"));
    }

    let n = series.len();
    let trend = moving_median(series, window)?;
    let detrended: Vec<f64> = series.iter().zip(&trend).map(|(v, t)| v - t).collect();

    let mut phase_medians = Vec::with_capacity(period);
    let mut phase = Vec::with_capacity(n / period + 1);
    for p in 0..period.min(n) {
        phase.clear();
        phase.extend(detrended.iter().skip(p).step_by(period));
        phase_medians.push(kernels::median(&phase)?);
    }
    // Phases beyond the series length never occur; pad so indexing stays total.
    phase_medians.resize(period, 0.0);

    let seasonal: Vec<f64> = (0..n).map(|i| phase_medians[i % period]).collect();
    let residual: Vec<f64> = (0..n)
        .map(|i| series[i] - trend[i] - seasonal[i])
        .collect();

    Ok(Decomposition {
        trend,
        seasonal,
        residual,
    })
}

/// Centered moving median with the window clamped at both ends of the
/// series, so edge estimates use the observations that exist rather than
/// padding.
fn moving_median(series: &[f64], window: usize) -> Result<Vec<f64>> {
    let half = window / 2;
    let n = series.len();
    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + half + 1).min(n);
            kernels::median(&series[lo..hi])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_trend_window_tied_to_period() {
        assert_eq!(trend_window(7), 11);
        assert_eq!(trend_window(4), 7);
        assert_eq!(trend_window(2), 3);
        assert_eq!(trend_window(1), 3);
        assert_eq!(trend_window(24), 37);
    }

    #[test]
    fn test_components_have_input_length() {
        let series: Vec<f64> = (0..20).map(|i| (i % 4) as f64).collect();
        let dec = decompose(&series, 4, trend_window(4)).unwrap();
        assert_eq!(dec.trend.len(), series.len());
        assert_eq!(dec.seasonal.len(), series.len());
        assert_eq!(dec.residual.len(), series.len());
        assert_eq!(dec.len(), series.len());
    }

    #[test]
    fn test_components_sum_to_series() {
        let series = vec![5.0, 9.0, 2.0, 9.0, 0.0, 6.0, 3.0, 8.0, 5.0, 18.0, 7.0, 8.0];
        let dec = decompose(&series, 3, trend_window(3)).unwrap();
        for i in 0..series.len() {
            assert_relative_eq!(
                dec.trend[i] + dec.seasonal[i] + dec.residual[i],
                series[i],
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_seasonal_is_periodic() {
        let series: Vec<f64> = (0..28).map(|i| ((i * 7) % 13) as f64).collect();
        let period = 7;
        let dec = decompose(&series, period, trend_window(period)).unwrap();
        for i in 0..series.len() {
            assert_relative_eq!(dec.seasonal[i], dec.seasonal[i % period], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_constant_series_has_zero_residual() {
        let series = vec![3.5; 30];
        let dec = decompose(&series, 7, trend_window(7)).unwrap();
        for (t, r) in dec.trend.iter().zip(&dec.residual) {
            assert_relative_eq!(*t, 3.5, epsilon = 1e-12);
            assert_relative_eq!(*r, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pure_seasonal_signal_lands_in_seasonal() {
        // zero-median sawtooth with no trend: the residual vanishes away
        // from the clamped edge windows
        let pattern = [-1.0, 0.0, 1.0];
        let series: Vec<f64> = (0..30).map(|i| pattern[i % 3]).collect();
        let dec = decompose(&series, 3, 3).unwrap();
        for r in &dec.residual[1..29] {
            assert_relative_eq!(*r, 0.0, epsilon = 1e-12);
        }
        for r in &dec.residual {
            assert!(r.abs() <= 0.5 + 1e-12);
        }
    }

    #[test]
    fn test_spike_survives_into_residual() {
        let mut series = vec![1.0; 30];
        series[17] = 50.0;
        let dec = decompose(&series, 5, trend_window(5)).unwrap();
        let max_pos = dec
            .residual
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(max_pos, 17);
        assert!(dec.residual[17] > 10.0);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(decompose(&[], 3, 3).is_err());
        assert!(decompose(&[1.0, 2.0], 0, 3).is_err());
        assert!(decompose(&[1.0, 2.0], 2, 0).is_err());
    }
}
