//! Confidence combination strategies

use prism_domain::traits::ConfidenceStrategy;

/// `base × min(evidence)`: a proof is only as strong as its weakest link
///
/// Never exceeds the rule's baseline or any single piece of evidence. With no
/// evidence the result is 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeakestLink;

impl ConfidenceStrategy for WeakestLink {
    fn name(&self) -> &'static str {
        "weakest_link"
    }

    fn combine(&self, rule_confidence: f64, evidence_confidences: &[f64]) -> f64 {
        let weakest = evidence_confidences.iter().copied().reduce(f64::min);
        match weakest {
            Some(min) => rule_confidence * min,
            None => 0.0,
        }
    }
}

/// The rule's baseline alone; evidence confidence is ignored
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleOnly;

impl ConfidenceStrategy for RuleOnly {
    fn name(&self) -> &'static str {
        "rule_only"
    }

    fn combine(&self, rule_confidence: f64, _evidence_confidences: &[f64]) -> f64 {
        rule_confidence
    }
}
