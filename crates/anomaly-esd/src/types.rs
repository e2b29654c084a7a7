//! Types produced by seasonal ESD detection

use std::fmt;
use std::str::FromStr;

use anomaly_core::Error;

/// Which side of the seasonal baseline to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Only points above the baseline.
    Positive,
    /// Only points below the baseline.
    Negative,
    /// Points on either side.
    #[default]
    Both,
}

impl Direction {
    /// Whether an anomaly with the given sign passes this filter.
    pub fn admits(self, sign: i8) -> bool {
        match self {
            Direction::Positive => sign > 0,
            Direction::Negative => sign < 0,
            Direction::Both => true,
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pos" => Ok(Direction::Positive),
            "neg" => Ok(Direction::Negative),
            "both" => Ok(Direction::Both),
            other => Err(Error::InvalidParameter(format!(
                "direction must be pos, neg, or both, got {other}"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Positive => write!(f, "pos"),
            Direction::Negative => write!(f, "neg"),
            Direction::Both => write!(f, "both"),
        }
    }
}

/// A single flagged observation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anomaly {
    /// Zero-based position in the input series.
    pub position: usize,
    /// Robust deviation score from the round in which the point was removed.
    pub score: f64,
    /// +1 if the value lay above the local robust center, -1 otherwise.
    pub sign: i8,
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Anomaly {{ position: {}, score: {:.3}, sign: {:+} }}",
            self.position, self.score, self.sign
        )
    }
}

/// Result of a detection run.
///
/// Anomalies are unique by position and sorted ascending, independent of the
/// order in which the test removed them.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnomalyResult {
    anomalies: Vec<Anomaly>,
    sample_size: usize,
}

impl AnomalyResult {
    /// Create a new result; `anomalies` must already be position-sorted.
    pub fn new(anomalies: Vec<Anomaly>, sample_size: usize) -> Self {
        Self {
            anomalies,
            sample_size,
        }
    }

    /// An empty result for a series of the given length.
    pub fn empty(sample_size: usize) -> Self {
        Self::new(Vec::new(), sample_size)
    }

    /// The detected anomalies in ascending position order.
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    /// Consume the result, yielding the anomaly list.
    pub fn into_anomalies(self) -> Vec<Anomaly> {
        self.anomalies
    }

    /// Positions only, ascending.
    pub fn positions(&self) -> Vec<usize> {
        self.anomalies.iter().map(|a| a.position).collect()
    }

    /// Number of detected anomalies.
    pub fn count(&self) -> usize {
        self.anomalies.len()
    }

    /// Whether any anomalies were detected.
    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }

    /// Length of the analyzed series.
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }
}

impl fmt::Display for AnomalyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Anomaly Detection Result:")?;
        writeln!(f, "  Sample size: {}", self.sample_size)?;
        writeln!(f, "  Anomalies detected: {}", self.count())?;
        for anomaly in &self.anomalies {
            writeln!(f, "    {anomaly}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_from_str() {
        assert_eq!("pos".parse::<Direction>().unwrap(), Direction::Positive);
        assert_eq!("neg".parse::<Direction>().unwrap(), Direction::Negative);
        assert_eq!("both".parse::<Direction>().unwrap(), Direction::Both);
        assert!("up".parse::<Direction>().is_err());
        assert!("POS".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_admits() {
        assert!(Direction::Positive.admits(1));
        assert!(!Direction::Positive.admits(-1));
        assert!(Direction::Negative.admits(-1));
        assert!(!Direction::Negative.admits(1));
        assert!(Direction::Both.admits(1));
        assert!(Direction::Both.admits(-1));
    }

    #[test]
    fn test_direction_display_round_trips() {
        for dir in [Direction::Positive, Direction::Negative, Direction::Both] {
            assert_eq!(dir.to_string().parse::<Direction>().unwrap(), dir);
        }
    }

    #[test]
    fn test_result_accessors() {
        let anomalies = vec![
            Anomaly {
                position: 3,
                score: 4.2,
                sign: 1,
            },
            Anomaly {
                position: 9,
                score: 3.1,
                sign: -1,
            },
        ];
        let result = AnomalyResult::new(anomalies, 20);
        assert_eq!(result.count(), 2);
        assert!(result.has_anomalies());
        assert_eq!(result.positions(), vec![3, 9]);
        assert_eq!(result.sample_size(), 20);
    }

    #[test]
    fn test_empty_result() {
        let result = AnomalyResult::empty(10);
        assert_eq!(result.count(), 0);
        assert!(!result.has_anomalies());
        assert_eq!(result.sample_size(), 10);
    }
}
