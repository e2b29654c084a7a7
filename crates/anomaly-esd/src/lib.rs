//! Seasonal anomaly detection via robust decomposition and generalized ESD
//!
//! This crate finds statistically anomalous points in a fixed-frequency
//! series in two stages:
//!
//! 1. A median-based seasonal decomposition strips trend and periodic
//!    structure, leaving a residual of noise plus whatever does not belong.
//! 2. Rosner's Generalized Extreme Studentized Deviate test, with median and
//!    MAD in place of mean and standard deviation, removes the most deviant
//!    residual point round by round and keeps every candidate up to the last
//!    round whose statistic beat its critical value.
//!
//! Median-based statistics matter in both stages: the points being searched
//! for must not bias the baseline used to find them.
//!
//! # Example
//!
//! ```rust
//! use anomaly_esd::{Direction, EsdDetector, EsdParameters};
//!
//! let series = vec![
//!     5.0, 9.0, 2.0, 9.0, 0.0, 6.0, 3.0, 8.0, 5.0, 18.0, 7.0, 8.0, 8.0, 0.0, 2.0, -5.0,
//!     0.0, 5.0, 6.0, 7.0, 3.0, 6.0, 1.0, 4.0, 4.0, 4.0, 30.0, 7.0, 5.0, 8.0,
//! ];
//! let detector = EsdDetector::new(EsdParameters {
//!     max_anoms: 0.2,
//!     ..EsdParameters::default()
//! });
//! let result = detector.detect(&series, 7).unwrap();
//! assert_eq!(result.positions(), vec![9, 15, 26]);
//! ```

pub mod decompose;
pub mod detector;
pub mod types;

pub use decompose::{decompose, trend_window, Decomposition};
pub use detector::{EsdDetector, EsdParameters};
pub use types::{Anomaly, AnomalyResult, Direction};
