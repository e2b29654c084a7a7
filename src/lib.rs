//! Robust anomaly detection for seasonal time series
//!
//! Flags statistically anomalous points in a fixed-frequency numeric series
//! given a seasonal period, a maximum anomaly fraction, and a significance
//! level. The pipeline is a median-based seasonal decomposition followed by
//! a generalized ESD test with median/MAD statistics, so the outliers being
//! hunted cannot bias the baseline used to find them.
//!
//! # Crates
//!
//! - [`anomaly_core`]: error type and scalar kernels (median, MAD, Student-t
//!   quantile)
//! - [`anomaly_esd`]: seasonal decomposition and the ESD detector
//! - [`anomaly_calendar`]: seasonal period inference from timestamp cadence
//!
//! # Usage
//!
//! ```rust
//! use anomaly_detection::{detect, EsdParameters};
//!
//! let series = vec![
//!     5.0, 9.0, 2.0, 9.0, 0.0, 6.0, 3.0, 8.0, 5.0, 18.0, 7.0, 8.0, 8.0, 0.0, 2.0, -5.0,
//!     0.0, 5.0, 6.0, 7.0, 3.0, 6.0, 1.0, 4.0, 4.0, 4.0, 30.0, 7.0, 5.0, 8.0,
//! ];
//! let params = EsdParameters { max_anoms: 0.2, ..EsdParameters::default() };
//! let result = detect(&series, 7, &params).unwrap();
//! assert_eq!(result.positions(), vec![9, 15, 26]);
//! ```
//!
//! Keyed series (e.g. date-indexed maps) go through [`detect_keyed`], which
//! sorts entries by key and maps flagged positions back to their keys.
//! Unknown periods can be inferred from timestamps with
//! [`infer_period`](anomaly_calendar::infer_period).

mod keyed;

pub use anomaly_calendar::{granularity, infer_period, Granularity};
pub use anomaly_core::{Error, Result};
pub use anomaly_esd::{
    decompose, trend_window, Anomaly, AnomalyResult, Decomposition, Direction, EsdDetector,
    EsdParameters,
};
pub use keyed::{detect_keyed, KeyedAnomaly};

/// Detect anomalous points in `series` under the given seasonal period.
///
/// Convenience wrapper around [`EsdDetector::detect`].
pub fn detect(series: &[f64], period: usize, params: &EsdParameters) -> Result<AnomalyResult> {
    EsdDetector::new(params.clone()).detect(series, period)
}
