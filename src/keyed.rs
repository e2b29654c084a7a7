//! Detection over keyed series
//!
//! The detector itself only understands plain ordered sequences. This module
//! handles the keyed shape: entries are sorted by key, the value sequence is
//! run through the detector, and flagged positions are mapped back to their
//! original keys.

use anomaly_esd::{EsdDetector, EsdParameters};
use anomaly_core::Result;

/// An anomaly reported against its original key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyedAnomaly<K> {
    /// Key of the flagged entry.
    pub key: K,
    /// Robust deviation score from the round in which the point was removed.
    pub score: f64,
    /// +1 above the seasonal baseline, -1 below.
    pub sign: i8,
}

/// Detect anomalies in a keyed series.
///
/// Entries are ordered by key before detection, so map-like inputs with
/// arbitrary iteration order are fine. Results come back in ascending key
/// order.
pub fn detect_keyed<K, I>(
    entries: I,
    period: usize,
    params: &EsdParameters,
) -> Result<Vec<KeyedAnomaly<K>>>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut sorted: Vec<(K, f64)> = entries.into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let values: Vec<f64> = sorted.iter().map(|(_, value)| *value).collect();
    let result = EsdDetector::new(params.clone()).detect(&values, period)?;

    let mut anomalies = result.anomalies().iter().peekable();
    let mut keyed = Vec::with_capacity(result.count());
    for (position, (key, _)) in sorted.into_iter().enumerate() {
        match anomalies.peek() {
            Some(anomaly) if anomaly.position == position => {
                keyed.push(KeyedAnomaly {
                    key,
                    score: anomaly.score,
                    sign: anomaly.sign,
                });
                anomalies.next();
            }
            _ => {}
        }
    }
    Ok(keyed)
}
