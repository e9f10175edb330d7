//! Insights: conclusions produced by upstream analysis agents

use crate::{InputError, Proposition, PropositionId, RawValue, ValidationResult};

/// One piece of evidence as the upstream layer reports it
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvidence {
    /// Optional caller identifier
    pub id: Option<String>,

    /// Fact text, e.g. "DSCR < 1.2"
    pub statement: String,

    /// Uncoerced truth value
    pub value: RawValue,

    /// Producing source; defaults to the insight's agent
    pub source: Option<String>,

    /// Reliability estimate; defaults to the insight's confidence
    pub confidence: Option<f64>,

    /// Creation time; defaults to the evidence's position in the list
    pub timestamp: Option<u64>,
}

impl RawEvidence {
    /// Evidence with only a statement and value
    pub fn new(statement: impl Into<String>, value: impl Into<RawValue>) -> Self {
        Self {
            id: None,
            statement: statement.into(),
            value: value.into(),
            source: None,
            confidence: None,
            timestamp: None,
        }
    }

    /// Set the confidence
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// Set the source
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// A natural-language conclusion backed by extracted facts
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    /// Agent that produced the conclusion
    pub agent_name: String,

    /// The conclusion text
    pub conclusion: String,

    /// Supporting facts
    pub evidence: Vec<RawEvidence>,

    /// Agent-level confidence, used for evidence that has none
    pub confidence: Option<f64>,
}

impl Insight {
    /// Coerce the evidence into propositions
    ///
    /// Confidence falls back from evidence to insight to `default_confidence`.
    /// A missing timestamp becomes the position in the list, so later entries
    /// win when statements repeat.
    pub fn propositions(&self, default_confidence: f64) -> Result<Vec<Proposition>, InputError> {
        self.propositions_from(default_confidence, 0)
    }

    /// Like [`Insight::propositions`], with positions starting at `offset`
    ///
    /// Used when several insights from one agent are merged, so that evidence
    /// from a later insight supersedes evidence from an earlier one.
    pub fn propositions_from(
        &self,
        default_confidence: f64,
        offset: u64,
    ) -> Result<Vec<Proposition>, InputError> {
        if let Some(c) = self.confidence {
            if !(0.0..=1.0).contains(&c) {
                return Err(InputError::ConfidenceOutOfRange { value: c });
            }
        }

        self.evidence
            .iter()
            .enumerate()
            .map(|(idx, ev)| {
                let source = ev.source.as_deref().unwrap_or(&self.agent_name);
                let confidence = ev.confidence.or(self.confidence).unwrap_or(default_confidence);
                let mut prop = Proposition::from_raw(ev.statement.as_str(), &ev.value, source, confidence)?
                    .with_timestamp(ev.timestamp.unwrap_or(offset + idx as u64));
                if let Some(id) = &ev.id {
                    prop = prop.with_id(PropositionId::from_string(id.as_str()));
                }
                Ok(prop)
            })
            .collect()
    }
}

/// An insight together with its validation outcome
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInsight {
    /// The original insight
    pub insight: Insight,

    /// Outcome of validating its conclusion
    pub validation: ValidationResult,
}
