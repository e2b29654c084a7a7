//! Seasonal period inference from timestamp cadence
//!
//! Callers with timestamped observations often do not know the seasonal
//! period to hand the detector. This crate classifies the median spacing of
//! a timestamp sequence into a calendar cadence and maps the cadence to the
//! number of observations per seasonal cycle: minutely data repeats daily
//! (1440 observations), hourly data daily (24), daily data weekly (7), and
//! so on.
//!
//! Pure functions over Unix timestamps, no shared state.

use log::debug;

use anomaly_core::{Error, Result};

const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const WEEK: i64 = 7 * DAY;

/// Calendar cadence of a timestamp sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Number of observations making up one seasonal cycle at this cadence.
    ///
    /// Secondly data repeats by the minute, minutely and hourly data by the
    /// day, daily data by the week, weekly and monthly data by the year.
    pub fn observations_per_cycle(self) -> usize {
        match self {
            Granularity::Second => 60,
            Granularity::Minute => 1_440,
            Granularity::Hour => 24,
            Granularity::Day => 7,
            Granularity::Week => 52,
            Granularity::Month => 12,
        }
    }

    /// Classify a median spacing in seconds.
    fn from_spacing(spacing: i64) -> Self {
        match spacing {
            s if s < MINUTE / 2 => Granularity::Second,
            s if s < HOUR / 2 => Granularity::Minute,
            s if s < DAY / 2 => Granularity::Hour,
            s if s < 4 * DAY => Granularity::Day,
            s if s < 3 * WEEK => Granularity::Week,
            _ => Granularity::Month,
        }
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Granularity::Second => "second",
            Granularity::Minute => "minute",
            Granularity::Hour => "hour",
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        };
        write!(f, "{name}")
    }
}

/// Infer the cadence of `timestamps` (Unix seconds, any order).
///
/// Uses the median of successive spacings, so occasional gaps or duplicated
/// readings do not skew the classification.
pub fn granularity(timestamps: &[i64]) -> Result<Granularity> {
    if timestamps.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: timestamps.len(),
        });
    }

    let mut sorted = timestamps.to_vec();
    sorted.sort_unstable();
    let mut spacings: Vec<i64> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
    spacings.sort_unstable();
    let spacing = spacings[spacings.len() / 2];
    if spacing == 0 {
        return Err(Error::InvalidParameter(
            "timestamps must be predominantly distinct".to_string(),
        ));
    }

    let granularity = Granularity::from_spacing(spacing);
    debug!("median spacing {spacing}s classified as {granularity}");
    Ok(granularity)
}

/// Infer the seasonal period for `timestamps`: the observations per cycle of
/// the inferred cadence. Feed the result to the detector's `period`.
pub fn infer_period(timestamps: &[i64]) -> Result<usize> {
    Ok(granularity(timestamps)?.observations_per_cycle())
}
