//! Summary aggregation

use std::collections::HashSet;

use prism_consistency::SeverityWeighted;
use prism_domain::traits::ContradictionPenalty;
use prism_domain::{Contradiction, Severity, ValidatedInsight, ValidationResult, Verdict};
use tracing::info;

use crate::Summary;

/// Combines validation results into a [`Summary`]
pub struct Synthesizer {
    penalty: Box<dyn ContradictionPenalty>,
}

impl Synthesizer {
    /// Create a synthesizer with a custom contradiction penalty
    pub fn new(penalty: Box<dyn ContradictionPenalty>) -> Self {
        Self { penalty }
    }

    /// Summarize a batch of results
    ///
    /// The overall confidence is the mean of the individual confidences,
    /// penalized by the distinct contradictions attached to the results.
    /// An empty batch has confidence 0.
    pub fn synthesize(&self, results: &[ValidationResult]) -> Summary {
        let count = |verdict: Verdict| results.iter().filter(|r| r.valid == verdict).count();
        let proved = count(Verdict::Proved);
        let disproved = count(Verdict::Disproved);
        let unprovable = count(Verdict::Unprovable);

        let contradictions = distinct_contradictions(results);
        let critical = contradictions
            .iter()
            .filter(|c| c.severity == Severity::Critical)
            .count();

        let mean = if results.is_empty() {
            0.0
        } else {
            results.iter().map(|r| r.confidence).sum::<f64>() / results.len() as f64
        };
        let overall_confidence = self.penalty.apply(mean, &contradictions).clamp(0.0, 1.0);

        let narrative = format!(
            "Checked {} conclusions: {} proved, {} disproved, {} unprovable. \
             Found {} contradictions ({} critical). Overall confidence {:.2}.",
            results.len(),
            proved,
            disproved,
            unprovable,
            contradictions.len(),
            critical,
            overall_confidence
        );

        info!(
            total = results.len(),
            proved,
            contradictions = contradictions.len(),
            confidence = overall_confidence,
            "Synthesized batch"
        );

        Summary {
            total: results.len(),
            proved,
            disproved,
            unprovable,
            valid: proved,
            invalid: disproved,
            contradiction_count: contradictions.len(),
            critical_contradictions: critical,
            overall_confidence,
            narrative,
        }
    }

    /// Summarize the results of validated insights
    pub fn synthesize_insights(&self, insights: &[ValidatedInsight]) -> Summary {
        let results: Vec<ValidationResult> = insights.iter().map(|i| i.validation.clone()).collect();
        self.synthesize(&results)
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new(Box::new(SeverityWeighted::default()))
    }
}

/// Contradictions across all results, each counted once
///
/// The same conflict is attached to every result whose source it names.
fn distinct_contradictions(results: &[ValidationResult]) -> Vec<Contradiction> {
    let mut seen = HashSet::new();
    results
        .iter()
        .flat_map(|r| r.contradictions.iter())
        .filter(|c| {
            seen.insert((
                c.subject.clone(),
                c.proposition_a.id.clone(),
                c.proposition_b.id.clone(),
            ))
        })
        .cloned()
        .collect()
}
