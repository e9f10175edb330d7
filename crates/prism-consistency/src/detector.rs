//! Cross-source contradiction detection

use std::collections::BTreeMap;
use std::sync::Arc;

use prism_domain::normalize::latest_by_subject;
use prism_domain::traits::{ContradictionPenalty, SeverityPolicy, SubjectNormalizer};
use prism_domain::{
    CanonicalStatement, Contradiction, InputError, Proposition, Severity, ValidatedInsight,
};
use tracing::{debug, info, warn};

use crate::{DetectorConfig, DetectorError, KeywordSeverityPolicy, SeverityWeighted};

/// Propositions grouped by the source that reported them
pub type BySource = BTreeMap<String, Vec<Proposition>>;

/// Outcome of comparing sources
#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidation {
    /// Conflicts in canonical order
    pub contradictions: Vec<Contradiction>,

    /// Mean proposition confidence after the contradiction penalty
    pub confidence: f64,
}

/// Finds subjects on which sources disagree
///
/// Stateless apart from its policies; safe to share across threads.
pub struct ContradictionDetector {
    severity: Arc<dyn SeverityPolicy>,
    normalizer: Arc<dyn SubjectNormalizer>,
    penalty: Arc<dyn ContradictionPenalty>,
}

impl ContradictionDetector {
    /// Create a detector with keyword severity and weighted penalties
    pub fn new(config: DetectorConfig) -> Self {
        Self {
            severity: Arc::new(KeywordSeverityPolicy::from_config(&config)),
            normalizer: Arc::new(CanonicalStatement),
            penalty: Arc::new(SeverityWeighted::from_config(&config)),
        }
    }

    /// Replace the severity policy
    pub fn with_severity_policy(mut self, severity: Arc<dyn SeverityPolicy>) -> Self {
        self.severity = severity;
        self
    }

    /// Replace the subject normalizer
    pub fn with_normalizer(mut self, normalizer: Arc<dyn SubjectNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the confidence penalty
    pub fn with_penalty(mut self, penalty: Arc<dyn ContradictionPenalty>) -> Self {
        self.penalty = penalty;
        self
    }

    /// Compare every pair of distinct sources
    ///
    /// Within a source, propositions sharing a subject collapse to the most
    /// recent one before comparison. A contradiction takes the highest
    /// severity of its subject and both statements. Cost is O(N² × M) in sources and
    /// propositions per source; callers bound both.
    pub fn cross_validate(&self, by_source: &BySource) -> Result<CrossValidation, DetectorError> {
        for propositions in by_source.values() {
            propositions.iter().try_for_each(check_proposition)?;
        }

        let collapsed: Vec<(&str, BTreeMap<String, &Proposition>)> = by_source
            .iter()
            .map(|(source, props)| (source.as_str(), latest_by_subject(props, self.normalizer.as_ref())))
            .collect();

        let mut contradictions = Vec::new();
        for (i, (source_a, subjects_a)) in collapsed.iter().enumerate() {
            for (source_b, subjects_b) in &collapsed[i + 1..] {
                for (subject, a) in subjects_a {
                    let Some(b) = subjects_b.get(subject) else {
                        continue;
                    };
                    if a.value == b.value {
                        continue;
                    }

                    let severity = [subject.as_str(), &a.statement, &b.statement]
                        .into_iter()
                        .map(|text| self.severity.classify(text))
                        .max()
                        .unwrap_or(Severity::Minor);
                    warn!(
                        subject = %subject,
                        source_a = %source_a,
                        source_b = %source_b,
                        severity = severity.as_str(),
                        "Sources contradict each other"
                    );
                    contradictions.push(Contradiction::new(
                        subject.as_str(),
                        (*a).clone(),
                        (*b).clone(),
                        vec![source_a.to_string(), source_b.to_string()],
                        severity,
                    ));
                }
            }
        }

        let confidences: Vec<f64> = collapsed
            .iter()
            .flat_map(|(_, subjects)| subjects.values().map(|p| p.confidence))
            .collect();
        let mean = if confidences.is_empty() {
            0.0
        } else {
            confidences.iter().sum::<f64>() / confidences.len() as f64
        };
        let confidence = self.penalty.apply(mean, &contradictions).clamp(0.0, 1.0);

        info!(
            sources = by_source.len(),
            contradictions = contradictions.len(),
            confidence,
            "Cross-validated sources"
        );

        Ok(CrossValidation {
            contradictions,
            confidence,
        })
    }

    /// Compare validated insights by agent and attach the conflicts to them
    ///
    /// Evidence is grouped under each insight's agent name. Evidence without a
    /// timestamp is ordered by its position across that agent's insights, so
    /// a later insight supersedes an earlier one. Every insight
    /// receives the contradictions naming its agent, which moves its result
    /// from unchecked to consistent or contradicted.
    pub fn cross_validate_insights(
        &self,
        insights: &mut [ValidatedInsight],
        default_confidence: f64,
    ) -> Result<CrossValidation, DetectorError> {
        let mut by_source = BySource::new();
        for validated in insights.iter() {
            let merged = by_source
                .entry(validated.insight.agent_name.clone())
                .or_default();
            // Positions continue across insights from the same agent
            let propositions = validated
                .insight
                .propositions_from(default_confidence, merged.len() as u64)?;
            merged.extend(propositions);
        }

        let outcome = self.cross_validate(&by_source)?;

        for validated in insights.iter_mut() {
            let agent = validated.insight.agent_name.as_str();
            let own: Vec<Contradiction> = outcome
                .contradictions
                .iter()
                .filter(|c| c.involves(agent))
                .cloned()
                .collect();
            debug!(agent, contradictions = own.len(), "Attached contradictions");
            validated.validation.attach_contradictions(own);
        }

        Ok(outcome)
    }
}

impl Default for ContradictionDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

fn check_proposition(p: &Proposition) -> Result<(), InputError> {
    if p.statement.trim().is_empty() {
        return Err(InputError::MissingStatement);
    }
    if p.source.trim().is_empty() {
        return Err(InputError::MissingSource {
            statement: p.statement.clone(),
        });
    }
    if !(0.0..=1.0).contains(&p.confidence) {
        return Err(InputError::ConfidenceOutOfRange { value: p.confidence });
    }
    Ok(())
}
