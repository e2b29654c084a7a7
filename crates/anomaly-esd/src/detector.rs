//! Seasonal hybrid ESD anomaly detector
//!
//! Runs Rosner's Generalized Extreme Studentized Deviate test over the
//! residual of a median-based seasonal decomposition, with median and MAD
//! substituted for mean and standard deviation.

use log::{debug, trace};

use anomaly_core::{kernels, Error, Result};

use crate::decompose::{self, Decomposition};
use crate::types::{Anomaly, AnomalyResult, Direction};

/// Parameters for [`EsdDetector`].
#[derive(Debug, Clone, PartialEq)]
pub struct EsdParameters {
    /// Upper bound on the fraction of the series reported as anomalous,
    /// in (0, 1]. Zero short-circuits to an empty result.
    pub max_anoms: f64,
    /// Significance level of each test round, in (0, 1).
    pub alpha: f64,
    /// Which side of the seasonal baseline to report.
    pub direction: Direction,
    /// Override for the moving-median trend window; derived from the
    /// period when unset.
    pub trend_window: Option<usize>,
}

impl Default for EsdParameters {
    fn default() -> Self {
        Self {
            max_anoms: 0.1,
            alpha: 0.05,
            direction: Direction::Both,
            trend_window: None,
        }
    }
}

/// One round of the generalized ESD test.
///
/// Retained only long enough to locate the last qualifying round.
struct TestRound {
    statistic: f64,
    critical: f64,
}

/// Seasonal generalized ESD detector.
///
/// Stateless between calls; `detect` owns private copies of everything it
/// mutates, so one detector can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct EsdDetector {
    params: EsdParameters,
}

impl Default for EsdDetector {
    fn default() -> Self {
        Self::new(EsdParameters::default())
    }
}

impl EsdDetector {
    /// Create a detector with the given parameters.
    pub fn new(params: EsdParameters) -> Self {
        Self { params }
    }

    /// The configured parameters.
    pub fn params(&self) -> &EsdParameters {
        &self.params
    }

    /// Detect anomalous points in `series` under the given seasonal period.
    ///
    /// Returns the flagged positions with their robust deviation scores and
    /// signs, sorted ascending by position.
    pub fn detect(&self, series: &[f64], period: usize) -> Result<AnomalyResult> {
        self.validate(series, period)?;
        if self.params.max_anoms == 0.0 {
            return Ok(AnomalyResult::empty(series.len()));
        }

        let window = self
            .params
            .trend_window
            .unwrap_or_else(|| decompose::trend_window(period));
        let decomposition = decompose::decompose(series, period, window)?;
        debug!(
            "decomposed {} observations, period {period}, trend window {window}",
            series.len()
        );

        let candidates = self.test_residuals(&decomposition)?;
        let mut anomalies: Vec<Anomaly> = candidates
            .into_iter()
            .filter(|a| self.params.direction.admits(a.sign))
            .collect();
        anomalies.sort_by_key(|a| a.position);

        debug!(
            "{} anomalies after {} direction filter",
            anomalies.len(),
            self.params.direction
        );
        Ok(AnomalyResult::new(anomalies, series.len()))
    }

    fn validate(&self, series: &[f64], period: usize) -> Result<()> {
        if period == 0 {
            return Err(Error::InvalidParameter("period must be positive".to_string()));
        }
        if series.len() < 2 * period {
            return Err(Error::InsufficientData {
                expected: 2 * period,
                actual: series.len(),
            });
        }
        if self.params.max_anoms != 0.0
            && !(self.params.max_anoms > 0.0 && self.params.max_anoms <= 1.0)
        {
            return Err(Error::invalid_fraction("max_anoms", self.params.max_anoms));
        }
        if !(self.params.alpha > 0.0 && self.params.alpha < 1.0) {
            return Err(Error::invalid_significance(self.params.alpha));
        }
        if let Some(position) = series.iter().position(|v| v.is_nan()) {
            return Err(Error::NonNumeric { position });
        }
        Ok(())
    }

    /// Generalized ESD over the residual sequence.
    ///
    /// Removes the most deviant remaining point each round, then scans
    /// backward for the last round whose statistic exceeded its critical
    /// value. An anomaly can be masked while a larger one is still in the
    /// sample and only becomes significant after that point is removed, so
    /// stopping at the first failing round would under-detect.
    fn test_residuals(&self, decomposition: &Decomposition) -> Result<Vec<Anomaly>> {
        let residual = &decomposition.residual;
        let n = residual.len();
        let max_rounds = ((self.params.max_anoms * n as f64).floor() as usize).max(1);

        let mut working: Vec<f64> = residual.clone();
        let mut positions: Vec<usize> = (0..n).collect();
        let mut candidates: Vec<Anomaly> = Vec::with_capacity(max_rounds);
        let mut rounds: Vec<TestRound> = Vec::with_capacity(max_rounds);

        for i in 1..=max_rounds {
            // The critical value needs n - i - 1 degrees of freedom.
            if n < i + 2 {
                break;
            }

            let center = kernels::median(&working)?;
            let spread = kernels::mad(&working)?;
            if spread == 0.0 {
                // Remaining points are indistinguishable; no further
                // anomalies can be scored.
                debug!("MAD collapsed to zero after {} rounds", i - 1);
                break;
            }

            let mut extreme = 0;
            let mut statistic = f64::NEG_INFINITY;
            for (j, value) in working.iter().enumerate() {
                let score = (value - center).abs() / spread;
                if score > statistic {
                    extreme = j;
                    statistic = score;
                }
            }
            let sign: i8 = if working[extreme] > center { 1 } else { -1 };
            let position = positions[extreme];
            candidates.push(Anomaly {
                position,
                score: statistic,
                sign,
            });
            working.remove(extreme);
            positions.remove(extreme);

            let remaining = (n - i) as f64;
            let p = 1.0 - self.params.alpha / (2.0 * (remaining + 1.0));
            let t = kernels::student_t_quantile(p, remaining - 1.0)?;
            let critical =
                t * remaining / (((remaining - 1.0 + t * t) * (remaining + 1.0)).sqrt());
            trace!("round {i}: position {position}, statistic {statistic:.4}, critical {critical:.4}");
            rounds.push(TestRound {
                statistic,
                critical,
            });
        }

        let qualifying = rounds
            .iter()
            .rposition(|round| round.statistic > round.critical)
            .map_or(0, |index| index + 1);
        candidates.truncate(qualifying);
        Ok(candidates)
    }
}
