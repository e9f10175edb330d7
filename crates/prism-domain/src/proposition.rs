//! Proposition module - the atomic evaluated fact

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{InputError, RawValue};

/// Unique identifier for a proposition
///
/// Generated identifiers are UUIDv7 strings, so identifiers minted by this
/// crate sort chronologically. Callers may also bring their own identifiers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropositionId(String);

impl PropositionId {
    /// Generate a new UUIDv7-based identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_domain::PropositionId;
    ///
    /// let id = PropositionId::new();
    /// assert_eq!(id.as_str().len(), 36);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().to_string())
    }

    /// Wrap a caller-supplied identifier
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Borrow the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PropositionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PropositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Milliseconds since the Unix epoch
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// An atomic, evaluated fact
///
/// Propositions are immutable once created. The constructor enforces the
/// invariants: non-blank statement and source, confidence in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct Proposition {
    /// Unique identifier
    pub id: PropositionId,

    /// Human-readable fact, e.g. "DSCR < 1.2"
    pub statement: String,

    /// Truth value after coercion
    pub value: bool,

    /// Agent or analysis routine that produced the fact
    pub source: String,

    /// Caller-supplied reliability estimate [0.0, 1.0]
    pub confidence: f64,

    /// Creation time (milliseconds since Unix epoch)
    pub timestamp: u64,
}

impl Proposition {
    /// Create a proposition stamped with a fresh id and the current time
    pub fn new(
        statement: impl Into<String>,
        value: bool,
        source: impl Into<String>,
        confidence: f64,
    ) -> Result<Self, InputError> {
        let statement = statement.into();
        let source = source.into();

        if statement.trim().is_empty() {
            return Err(InputError::MissingStatement);
        }
        if source.trim().is_empty() {
            return Err(InputError::MissingSource { statement });
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(InputError::ConfidenceOutOfRange { value: confidence });
        }

        Ok(Self {
            id: PropositionId::new(),
            statement,
            value,
            source,
            confidence,
            timestamp: current_timestamp_ms(),
        })
    }

    /// Create a proposition from an uncoerced value
    pub fn from_raw(
        statement: impl Into<String>,
        value: &RawValue,
        source: impl Into<String>,
        confidence: f64,
    ) -> Result<Self, InputError> {
        let statement = statement.into();
        if statement.trim().is_empty() {
            return Err(InputError::MissingStatement);
        }
        let value = value.coerce(&statement)?;
        Self::new(statement, value, source, confidence)
    }

    /// Replace the generated identifier
    pub fn with_id(mut self, id: PropositionId) -> Self {
        self.id = id;
        self
    }

    /// Replace the creation timestamp
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_proposition() {
        let p = Proposition::new("DSCR < 1.2", true, "financial-agent", 0.9).unwrap();
        assert_eq!(p.statement, "DSCR < 1.2");
        assert!(p.value);
        assert_eq!(p.source, "financial-agent");
        assert!(p.timestamp > 0);
    }

    #[test]
    fn test_blank_statement_rejected() {
        let err = Proposition::new("   ", true, "agent", 0.5).unwrap_err();
        assert_eq!(err, InputError::MissingStatement);
    }

    #[test]
    fn test_blank_source_rejected() {
        let err = Proposition::new("TenantRisk", true, "", 0.5).unwrap_err();
        assert!(matches!(err, InputError::MissingSource { .. }));
    }

    #[test]
    fn test_confidence_bounds() {
        assert!(Proposition::new("x", true, "a", 0.0).is_ok());
        assert!(Proposition::new("x", true, "a", 1.0).is_ok());
        assert!(matches!(
            Proposition::new("x", true, "a", 1.01),
            Err(InputError::ConfidenceOutOfRange { .. })
        ));
        assert!(Proposition::new("x", true, "a", -0.1).is_err());
        assert!(Proposition::new("x", true, "a", f64::NAN).is_err());
    }

    #[test]
    fn test_from_raw_coerces() {
        let p = Proposition::from_raw("TenantRisk", &RawValue::from("high"), "a", 0.7).unwrap();
        assert!(p.value);

        let err = Proposition::from_raw("TenantRisk", &RawValue::from("perhaps"), "a", 0.7);
        assert!(matches!(err, Err(InputError::UncoercibleValue { .. })));
    }

    #[test]
    fn test_builders() {
        let p = Proposition::new("x", false, "a", 0.5)
            .unwrap()
            .with_id(PropositionId::from_string("p-1"))
            .with_timestamp(42);
        assert_eq!(p.id.as_str(), "p-1");
        assert_eq!(p.timestamp, 42);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = PropositionId::new();
        let b = PropositionId::new();
        assert_ne!(a, b);
    }
}
