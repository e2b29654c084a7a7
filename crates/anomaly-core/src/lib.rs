//! Core error types and scalar kernels for robust anomaly detection
//!
//! This crate carries the pieces shared by the detection crates: a unified
//! [`Error`] type and the order-statistic kernels (median, MAD, Student-t
//! quantile) the seasonal ESD procedure is built from.
//!
//! The kernels are deliberately scalar and allocation-light; the series
//! handled here are monitoring-sized, not bulk-analytics-sized.

pub mod error;
pub mod kernels;

pub use error::{Error, Result};
pub use kernels::{mad, median, median_of_sorted, student_t_quantile, MAD_CONSISTENCY};
