//! Severity policies

use std::collections::HashMap;
use std::sync::Arc;

use prism_domain::traits::{SeverityPolicy, SubjectNormalizer};
use prism_domain::{CanonicalStatement, Severity, SubjectTag};

use crate::DetectorConfig;

/// Infers a subject tag from keyword lists
///
/// Keywords are matched case-insensitively as substrings of the statement.
/// Critical keywords are checked before moderate ones.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSeverityPolicy {
    critical: Vec<String>,
    moderate: Vec<String>,
}

impl KeywordSeverityPolicy {
    /// Create a policy from explicit keyword lists
    pub fn new(critical: Vec<String>, moderate: Vec<String>) -> Self {
        let lower = |list: Vec<String>| -> Vec<String> {
            list.into_iter().map(|k| k.trim().to_lowercase()).collect()
        };
        Self {
            critical: lower(critical),
            moderate: lower(moderate),
        }
    }

    /// Create a policy from the detector configuration
    pub fn from_config(config: &DetectorConfig) -> Self {
        Self::new(config.critical_keywords.clone(), config.moderate_keywords.clone())
    }

    /// Infer the tag of a statement
    pub fn tag(&self, statement: &str) -> SubjectTag {
        let statement = statement.to_lowercase();
        if self.critical.iter().any(|k| statement.contains(k.as_str())) {
            SubjectTag::Safety
        } else if self.moderate.iter().any(|k| statement.contains(k.as_str())) {
            SubjectTag::Financial
        } else {
            SubjectTag::General
        }
    }
}

impl Default for KeywordSeverityPolicy {
    fn default() -> Self {
        Self::from_config(&DetectorConfig::default())
    }
}

impl SeverityPolicy for KeywordSeverityPolicy {
    fn classify(&self, statement: &str) -> Severity {
        self.tag(statement).severity()
    }
}

/// Uses caller-supplied subject tags, falling back to keywords
///
/// Subjects are compared after normalization, so a tag registered for
/// `"Fire inspection overdue"` also covers `" fire  inspection overdue"`.
pub struct TaggedSeverityPolicy {
    tags: HashMap<String, SubjectTag>,
    normalizer: Arc<dyn SubjectNormalizer>,
    fallback: KeywordSeverityPolicy,
}

impl TaggedSeverityPolicy {
    /// Create a policy from `(subject, tag)` pairs
    pub fn new<I, S>(tags: I, fallback: KeywordSeverityPolicy) -> Self
    where
        I: IntoIterator<Item = (S, SubjectTag)>,
        S: AsRef<str>,
    {
        Self::with_normalizer(tags, fallback, Arc::new(CanonicalStatement))
    }

    /// Create a policy with a custom subject normalizer
    pub fn with_normalizer<I, S>(
        tags: I,
        fallback: KeywordSeverityPolicy,
        normalizer: Arc<dyn SubjectNormalizer>,
    ) -> Self
    where
        I: IntoIterator<Item = (S, SubjectTag)>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|(subject, tag)| (normalizer.normalize(subject.as_ref()), tag))
            .collect();
        Self {
            tags,
            normalizer,
            fallback,
        }
    }

    /// The tag for a statement: registered if present, inferred otherwise
    pub fn tag(&self, statement: &str) -> SubjectTag {
        self.tags
            .get(&self.normalizer.normalize(statement))
            .copied()
            .unwrap_or_else(|| self.fallback.tag(statement))
    }
}

impl SeverityPolicy for TaggedSeverityPolicy {
    fn classify(&self, statement: &str) -> Severity {
        self.tag(statement).severity()
    }
}
