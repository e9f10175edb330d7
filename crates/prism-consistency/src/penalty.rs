//! Confidence penalties for contradictions

use prism_domain::traits::ContradictionPenalty;
use prism_domain::{Contradiction, Severity};

use crate::DetectorConfig;

/// `base × max(0, 1 − Σ weight(severity))`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityWeighted {
    /// Penalty per critical contradiction
    pub critical: f64,
    /// Penalty per moderate contradiction
    pub moderate: f64,
    /// Penalty per minor contradiction
    pub minor: f64,
}

impl SeverityWeighted {
    /// Weights from the detector configuration
    pub fn from_config(config: &DetectorConfig) -> Self {
        Self {
            critical: config.critical_weight,
            moderate: config.moderate_weight,
            minor: config.minor_weight,
        }
    }

    fn weight(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Critical => self.critical,
            Severity::Moderate => self.moderate,
            Severity::Minor => self.minor,
        }
    }
}

impl Default for SeverityWeighted {
    fn default() -> Self {
        Self::from_config(&DetectorConfig::default())
    }
}

impl ContradictionPenalty for SeverityWeighted {
    fn apply(&self, base: f64, contradictions: &[Contradiction]) -> f64 {
        let total: f64 = contradictions.iter().map(|c| self.weight(c.severity)).sum();
        (base * (1.0 - total).max(0.0)).clamp(0.0, 1.0)
    }
}

/// Leaves the confidence untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPenalty;

impl ContradictionPenalty for NoPenalty {
    fn apply(&self, base: f64, _contradictions: &[Contradiction]) -> f64 {
        base.clamp(0.0, 1.0)
    }
}
