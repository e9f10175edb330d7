//! Trait definitions for the pluggable policies
//!
//! These traits define the seams between the fixed algorithms and the
//! policies callers may swap out. Default implementations live next to the
//! component that uses them.

use crate::{Contradiction, Severity};

/// Maps statement text to a canonical subject key
///
/// Two statements refer to the same logical subject iff their keys are equal.
pub trait SubjectNormalizer: Send + Sync {
    /// Canonical key for a statement
    fn normalize(&self, statement: &str) -> String;
}

/// Combines a rule's baseline confidence with its evidence
///
/// Implemented by the validator crate (prism-validator)
pub trait ConfidenceStrategy: Send + Sync {
    /// Short name used in logs and configuration
    fn name(&self) -> &'static str;

    /// Combined confidence; callers clamp the result to [0, 1]
    fn combine(&self, rule_confidence: f64, evidence_confidences: &[f64]) -> f64;
}

/// Assigns a severity to a contradicted subject
///
/// Implemented by the consistency crate (prism-consistency)
pub trait SeverityPolicy: Send + Sync {
    /// Severity for a contradiction on `statement`
    fn classify(&self, statement: &str) -> Severity;
}

/// Reduces an aggregate confidence in the presence of contradictions
///
/// Implemented by the consistency crate (prism-consistency)
pub trait ContradictionPenalty: Send + Sync {
    /// Penalized confidence; `base` is the unpenalized mean
    fn apply(&self, base: f64, contradictions: &[Contradiction]) -> f64;
}
