//! Validation results
//!
//! Lifecycle of a conclusion:
//!
//! ```text
//! Unvalidated → { Proved, Disproved, Unprovable }
//!             × { Unchecked → Consistent | Contradicted }
//! ```
//!
//! There is no transition back; every call produces a fresh result.

use crate::{Contradiction, ProofStep};

/// Outcome of checking one conclusion against the rule base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Every premise of the matched rule holds
    Proved,
    /// Every premise of the matched rule is refuted
    Disproved,
    /// No rule matched, or the evidence is incomplete or mixed
    Unprovable,
}

impl Verdict {
    /// Get the verdict name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Proved => "proved",
            Verdict::Disproved => "disproved",
            Verdict::Unprovable => "unprovable",
        }
    }

    /// Parse a verdict name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "proved" => Some(Verdict::Proved),
            "disproved" => Some(Verdict::Disproved),
            "unprovable" => Some(Verdict::Unprovable),
            _ => None,
        }
    }
}

/// Cross-source consistency state, orthogonal to the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consistency {
    /// Not compared against other sources yet
    Unchecked,
    /// Compared; nothing conflicts
    Consistent,
    /// Compared; at least one contradiction involves this result
    Contradicted,
}

/// Outcome of validating one conclusion
///
/// Invariant: `proof_chain` is non-empty iff `valid != Unprovable`.
/// The constructors are the only way to build one, so the invariant holds.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Proved, disproved or unprovable
    pub valid: Verdict,

    /// Combined confidence [0.0, 1.0]
    pub confidence: f64,

    /// Ordered proof steps (empty when unprovable)
    pub proof_chain: Vec<ProofStep>,

    /// Id of the rule used (none when unprovable)
    pub matched_rule: Option<String>,

    /// Rendered conclusion of the matched rule
    pub conclusion: Option<String>,

    /// Human-readable reason for the verdict
    pub explanation: String,

    /// Conflicts found by cross-source comparison
    pub contradictions: Vec<Contradiction>,

    consistency: Consistency,
}

impl ValidationResult {
    /// A proved result
    pub fn proved(
        confidence: f64,
        proof_chain: Vec<ProofStep>,
        rule_id: impl Into<String>,
        conclusion: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self::decided(Verdict::Proved, confidence, proof_chain, rule_id, conclusion, explanation)
    }

    /// A disproved result
    pub fn disproved(
        confidence: f64,
        proof_chain: Vec<ProofStep>,
        rule_id: impl Into<String>,
        conclusion: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self::decided(Verdict::Disproved, confidence, proof_chain, rule_id, conclusion, explanation)
    }

    /// An unprovable result: zero confidence, no proof, no rule
    pub fn unprovable(explanation: impl Into<String>) -> Self {
        Self {
            valid: Verdict::Unprovable,
            confidence: 0.0,
            proof_chain: Vec::new(),
            matched_rule: None,
            conclusion: None,
            explanation: explanation.into(),
            contradictions: Vec::new(),
            consistency: Consistency::Unchecked,
        }
    }

    fn decided(
        valid: Verdict,
        confidence: f64,
        proof_chain: Vec<ProofStep>,
        rule_id: impl Into<String>,
        conclusion: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        let explanation = explanation.into();
        if proof_chain.is_empty() {
            return Self::unprovable(explanation);
        }

        Self {
            valid,
            confidence: confidence.clamp(0.0, 1.0),
            proof_chain,
            matched_rule: Some(rule_id.into()),
            conclusion: Some(conclusion.into()),
            explanation,
            contradictions: Vec::new(),
            consistency: Consistency::Unchecked,
        }
    }

    /// Record the outcome of cross-source comparison
    pub fn attach_contradictions(&mut self, contradictions: Vec<Contradiction>) {
        self.consistency = if contradictions.is_empty() {
            Consistency::Consistent
        } else {
            Consistency::Contradicted
        };
        self.contradictions = contradictions;
    }

    /// Cross-source consistency state
    pub fn consistency(&self) -> Consistency {
        self.consistency
    }

    /// Whether the conclusion was proved
    pub fn is_proved(&self) -> bool {
        self.valid == Verdict::Proved
    }

    /// Whether any contradiction involves this result
    pub fn is_contradicted(&self) -> bool {
        !self.contradictions.is_empty()
    }
}
