//! Conclusion validation logic

use std::sync::Arc;

use prism_domain::traits::{ConfidenceStrategy, SubjectNormalizer};
use prism_domain::{
    InputError, Insight, ProofStep, Proposition, StepKind, ValidatedInsight, ValidationResult,
};
use prism_rules::{RuleBase, RuleMatch, RuleMatcher};
use tracing::{debug, info, warn};

use crate::{ValidatorConfig, ValidatorError};

/// Premise evaluation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PremiseState {
    Holds,
    Refuted,
    Missing,
}

/// The Validator checks conclusions against the rule base
///
/// Holds only immutable state, so one instance can serve any number of
/// threads concurrently.
pub struct Validator {
    matcher: RuleMatcher,
    strategy: Arc<dyn ConfidenceStrategy>,
    config: ValidatorConfig,
}

impl Validator {
    /// Create a Validator over a rule base
    pub fn new(rule_base: Arc<RuleBase>, config: ValidatorConfig) -> Self {
        Self {
            matcher: RuleMatcher::new(rule_base),
            strategy: config.confidence_strategy.build(),
            config,
        }
    }

    /// Create a Validator over the built-in rules with default configuration
    pub fn default_config() -> Self {
        Self::new(Arc::new(RuleBase::builtin()), ValidatorConfig::default())
    }

    /// Replace the confidence strategy
    pub fn with_strategy(mut self, strategy: Arc<dyn ConfidenceStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the statement normalizer used for premise matching
    pub fn with_normalizer(mut self, normalizer: Arc<dyn SubjectNormalizer>) -> Self {
        self.matcher = self.matcher.with_normalizer(normalizer);
        self
    }

    /// The rule base in use
    pub fn rule_base(&self) -> &RuleBase {
        self.matcher.rule_base()
    }

    /// The active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a conclusion against evidence
    ///
    /// # Arguments
    ///
    /// * `conclusion` - The conclusion statement being checked
    /// * `evidence` - Evaluated propositions backing it
    /// * `source` - The agent that drew the conclusion
    ///
    /// # Returns
    ///
    /// A proved, disproved or unprovable result. Only malformed input is an
    /// error.
    ///
    /// The rule is selected from the evidence alone. The claimed conclusion
    /// is not matched against the rule's conclusion; when the two differ, the
    /// explanation says so.
    pub fn validate(
        &self,
        conclusion: &str,
        evidence: &[Proposition],
        source: &str,
    ) -> Result<ValidationResult, ValidatorError> {
        if conclusion.trim().is_empty() {
            return Err(InputError::MissingStatement.into());
        }
        if source.trim().is_empty() {
            return Err(InputError::MissingSource {
                statement: conclusion.to_string(),
            }
            .into());
        }
        check_evidence(evidence)?;

        let Some(candidate) = self.matcher.best(evidence) else {
            info!(source, verdict = "unprovable", "No rule matches the evidence");
            return Ok(ValidationResult::unprovable(format!(
                "No rule matches the evidence for '{}'",
                conclusion
            )));
        };

        let result = self.evaluate(&candidate, conclusion, source);
        info!(
            source,
            rule = %candidate.rule.id,
            verdict = result.valid.as_str(),
            confidence = result.confidence,
            "Validated conclusion"
        );
        Ok(result)
    }

    /// Coerce an insight's evidence and validate its conclusion
    pub fn validate_insight(&self, insight: &Insight) -> Result<ValidatedInsight, ValidatorError> {
        let evidence = insight.propositions(self.config.default_evidence_confidence)?;
        let validation = self.validate(&insight.conclusion, &evidence, &insight.agent_name)?;
        Ok(ValidatedInsight {
            insight: insight.clone(),
            validation,
        })
    }

    /// Validate a batch of insights; the first malformed insight fails the batch
    pub fn validate_batch(&self, insights: &[Insight]) -> Result<Vec<ValidatedInsight>, ValidatorError> {
        insights.iter().map(|i| self.validate_insight(i)).collect()
    }

    /// Evaluate the premises of the selected rule and build the result
    fn evaluate(&self, candidate: &RuleMatch<'_, '_>, conclusion: &str, source: &str) -> ValidationResult {
        let rule = candidate.rule;

        let states: Vec<(&str, PremiseState, Option<&Proposition>)> = candidate
            .pairs()
            .map(|(premise, ev)| {
                let state = match ev {
                    Some(p) if p.value => PremiseState::Holds,
                    Some(_) => PremiseState::Refuted,
                    None => PremiseState::Missing,
                };
                debug!(rule = %rule.id, premise, state = ?state, "Evaluated premise");
                (premise, state, ev)
            })
            .collect();

        let all_hold = states.iter().all(|(_, s, _)| *s == PremiseState::Holds);
        let all_refuted = states.iter().all(|(_, s, _)| *s == PremiseState::Refuted);

        if !all_hold && !all_refuted {
            let missing = premises_in(&states, PremiseState::Missing);
            let refuted = premises_in(&states, PremiseState::Refuted);
            return ValidationResult::unprovable(mixed_explanation(&rule.id, &missing, &refuted));
        }

        let confidences: Vec<f64> = states
            .iter()
            .filter_map(|(_, _, ev)| ev.map(|p| p.confidence))
            .collect();
        let confidence = self
            .strategy
            .combine(rule.base_confidence, &confidences)
            .clamp(0.0, 1.0);

        if confidence < self.config.min_proof_confidence {
            warn!(
                rule = %rule.id,
                confidence,
                floor = self.config.min_proof_confidence,
                "Proof confidence below floor"
            );
            return ValidationResult::unprovable(format!(
                "Rule {} applies but confidence {:.3} is below the floor {:.3}",
                rule.id, confidence, self.config.min_proof_confidence
            ));
        }

        let rendered = rule.render_conclusion(source);
        let normalizer = self.matcher.normalizer();
        let note = if normalizer.normalize(conclusion) == normalizer.normalize(&rendered) {
            String::new()
        } else {
            format!("; the claimed conclusion differs from the derived conclusion '{}'", rendered)
        };
        let mut chain: Vec<ProofStep> = states
            .iter()
            .enumerate()
            .filter_map(|(i, (premise, _, ev))| ev.map(|p| premise_step(i + 1, premise, p)))
            .collect();

        if all_hold {
            chain.push(ProofStep::new(
                chain.len() + 1,
                StepKind::Inference,
                rule.id.as_str(),
                format!(
                    "Apply {} ({}) to steps 1-{}: therefore {}",
                    rule.id,
                    rule.form,
                    chain.len(),
                    rendered
                ),
            ));
            ValidationResult::proved(
                confidence,
                chain,
                rule.id.as_str(),
                rendered.as_str(),
                format!(
                    "Conclusion '{}' from {} is supported: every premise of {} holds, giving {}{}",
                    conclusion, source, rule.id, rendered, note
                ),
            )
        } else {
            chain.push(ProofStep::new(
                chain.len() + 1,
                StepKind::Inference,
                rule.id.as_str(),
                format!(
                    "Every premise of {} ({}) is false: {} does not follow",
                    rule.id, rule.form, rendered
                ),
            ));
            ValidationResult::disproved(
                confidence,
                chain,
                rule.id.as_str(),
                rendered.as_str(),
                format!(
                    "Conclusion '{}' from {} is refuted: every premise of {} is false{}",
                    conclusion, source, rule.id, note
                ),
            )
        }
    }
}

fn check_evidence(evidence: &[Proposition]) -> Result<(), InputError> {
    for p in evidence {
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
    }
    Ok(())
}

fn premise_step(step: usize, premise: &str, p: &Proposition) -> ProofStep {
    ProofStep::new(
        step,
        StepKind::Premise,
        premise,
        format!(
            "'{}' is {} according to {} (confidence {:.2})",
            p.statement, p.value, p.source, p.confidence
        ),
    )
}

fn premises_in<'a>(states: &[(&'a str, PremiseState, Option<&Proposition>)], wanted: PremiseState) -> Vec<&'a str> {
    states
        .iter()
        .filter(|(_, s, _)| *s == wanted)
        .map(|(p, _, _)| *p)
        .collect()
}

fn mixed_explanation(rule_id: &str, missing: &[&str], refuted: &[&str]) -> String {
    let mut parts = Vec::new();
    if !missing.is_empty() {
        parts.push(format!("missing premises: {}", missing.join(", ")));
    }
    if !refuted.is_empty() {
        parts.push(format!("false premises: {}", refuted.join(", ")));
    }
    format!("Rule {} cannot be applied; {}", rule_id, parts.join("; "))
}
