//! Contradictions between sources

use crate::Proposition;

/// How serious a contradiction is
///
/// Ordered so that `Critical > Moderate > Minor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Cosmetic or low-impact disagreement
    Minor,
    /// Financial disagreement
    Moderate,
    /// Safety or compliance disagreement
    Critical,
}

impl Severity {
    /// Get the severity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Critical => "critical",
        }
    }

    /// Parse a severity name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "minor" => Some(Severity::Minor),
            "moderate" => Some(Severity::Moderate),
            "critical" => Some(Severity::Critical),
            _ => None,
        }
    }
}

/// Caller-supplied or inferred category of a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubjectTag {
    /// Life-safety, hazards, physical condition
    Safety,
    /// Regulatory, legal, covenant compliance
    Compliance,
    /// Money: income, debt, valuation
    Financial,
    /// Everything else
    General,
}

impl SubjectTag {
    /// Severity a contradiction on a subject with this tag receives
    pub fn severity(&self) -> Severity {
        match self {
            SubjectTag::Safety | SubjectTag::Compliance => Severity::Critical,
            SubjectTag::Financial => Severity::Moderate,
            SubjectTag::General => Severity::Minor,
        }
    }

    /// Parse a tag name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "safety" => Some(SubjectTag::Safety),
            "compliance" => Some(SubjectTag::Compliance),
            "financial" => Some(SubjectTag::Financial),
            "general" => Some(SubjectTag::General),
            _ => None,
        }
    }
}

/// Two propositions about the same subject with incompatible truth values
#[derive(Debug, Clone, PartialEq)]
pub struct Contradiction {
    /// Normalized subject both propositions refer to
    pub subject: String,

    /// Proposition from the first source
    pub proposition_a: Proposition,

    /// Proposition from the second source
    pub proposition_b: Proposition,

    /// Distinct sources involved, sorted
    pub agents: Vec<String>,

    /// How serious the conflict is
    pub severity: Severity,
}

impl Contradiction {
    /// Create a contradiction; `agents` is sorted and de-duplicated
    pub fn new(
        subject: impl Into<String>,
        proposition_a: Proposition,
        proposition_b: Proposition,
        mut agents: Vec<String>,
        severity: Severity,
    ) -> Self {
        agents.sort();
        agents.dedup();
        Self {
            subject: subject.into(),
            proposition_a,
            proposition_b,
            agents,
            severity,
        }
    }

    /// Whether a source takes part in this contradiction
    pub fn involves(&self, agent: &str) -> bool {
        self.agents.iter().any(|a| a == agent)
    }
}
