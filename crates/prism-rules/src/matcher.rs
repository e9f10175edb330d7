//! Rule matching: which rules can the evidence address?

use std::cmp::Reverse;
use std::sync::Arc;

use prism_domain::normalize::latest_by_subject;
use prism_domain::traits::SubjectNormalizer;
use prism_domain::{CanonicalStatement, Proposition, Rule};
use tracing::debug;

use crate::RuleBase;

/// A candidate rule and the evidence addressing each of its premises
#[derive(Debug, Clone)]
pub struct RuleMatch<'r, 'e> {
    /// The candidate rule
    pub rule: &'r Rule,

    /// Registration position in the rule base
    pub order: usize,

    /// Per premise (in rule order): the evidence addressing it, if any
    pub premises: Vec<Option<&'e Proposition>>,
}

impl<'r, 'e> RuleMatch<'r, 'e> {
    /// Number of premises with corresponding evidence
    pub fn matched_count(&self) -> usize {
        self.premises.iter().filter(|p| p.is_some()).count()
    }

    /// Number of premises whose evidence is true
    pub fn satisfied_count(&self) -> usize {
        self.premises.iter().filter(|p| matches!(p, Some(e) if e.value)).count()
    }

    /// Whether every premise has true evidence
    pub fn is_satisfied(&self) -> bool {
        self.premises.iter().all(|p| matches!(p, Some(e) if e.value))
    }

    /// Whether every premise has false evidence
    pub fn is_refuted(&self) -> bool {
        self.premises.iter().all(|p| matches!(p, Some(e) if !e.value))
    }

    /// Ranking class: satisfied rules first, then refuted, then the rest
    fn class(&self) -> u8 {
        if self.is_satisfied() {
            0
        } else if self.is_refuted() {
            1
        } else {
            2
        }
    }

    /// Whether every premise has corresponding evidence
    pub fn is_complete(&self) -> bool {
        self.premises.iter().all(Option::is_some)
    }

    /// Premise descriptors with no corresponding evidence
    pub fn missing(&self) -> Vec<&'r str> {
        self.rule
            .premises
            .iter()
            .zip(&self.premises)
            .filter(|(_, ev)| ev.is_none())
            .map(|(p, _)| p.as_str())
            .collect()
    }

    /// Iterate premise descriptors with their evidence
    pub fn pairs(&self) -> impl Iterator<Item = (&'r str, Option<&'e Proposition>)> + '_ {
        self.rule
            .premises
            .iter()
            .map(String::as_str)
            .zip(self.premises.iter().copied())
    }
}

/// Finds candidate rules for a set of evidence
///
/// Premises correspond to evidence by normalized statement text. When several
/// propositions share a statement, the most recent one is used.
#[derive(Clone)]
pub struct RuleMatcher {
    rule_base: Arc<RuleBase>,
    normalizer: Arc<dyn SubjectNormalizer>,
}

impl RuleMatcher {
    /// Create a matcher with the default statement normalizer
    pub fn new(rule_base: Arc<RuleBase>) -> Self {
        Self {
            rule_base,
            normalizer: Arc::new(CanonicalStatement),
        }
    }

    /// Replace the statement normalizer
    pub fn with_normalizer(mut self, normalizer: Arc<dyn SubjectNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// The rule base this matcher reads
    pub fn rule_base(&self) -> &RuleBase {
        &self.rule_base
    }

    /// The statement normalizer in use
    pub fn normalizer(&self) -> &dyn SubjectNormalizer {
        self.normalizer.as_ref()
    }

    /// All rules with at least one premise addressed by the evidence
    ///
    /// Rules whose premises are all true rank first, then rules whose
    /// premises are all false, then partial or mixed matches. Within a class,
    /// more satisfied premises rank higher, then more matched premises, then
    /// registration order. An empty result means "unprovable", not an error.
    pub fn matches<'s, 'e>(&'s self, evidence: &'e [Proposition]) -> Vec<RuleMatch<'s, 'e>> {
        let latest = latest_by_subject(evidence, self.normalizer.as_ref());

        let mut candidates: Vec<RuleMatch<'s, 'e>> = self
            .rule_base
            .rules()
            .iter()
            .enumerate()
            .map(|(order, rule)| RuleMatch {
                rule,
                order,
                premises: rule
                    .premises
                    .iter()
                    .map(|p| latest.get(&self.normalizer.normalize(p)).copied())
                    .collect(),
            })
            .filter(|m| m.matched_count() > 0)
            .collect();

        candidates.sort_by_key(|m| {
            (
                m.class(),
                Reverse(m.satisfied_count()),
                Reverse(m.matched_count()),
                m.order,
            )
        });

        debug!(
            evidence = evidence.len(),
            candidates = candidates.len(),
            "Matched rules against evidence"
        );

        candidates
    }

    /// The highest-ranked candidate, if any
    pub fn best<'s, 'e>(&'s self, evidence: &'e [Proposition]) -> Option<RuleMatch<'s, 'e>> {
        self.matches(evidence).into_iter().next()
    }
}
