//! Input error taxonomy
//!
//! Only malformed input is an error. "No rule matched" and "contradiction
//! found" are results, not failures, and never surface here.

use thiserror::Error;

/// Malformed input supplied to a single validation call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Statement text is missing or blank
    #[error("Proposition statement is missing")]
    MissingStatement,

    /// Source identifier is missing or blank
    #[error("Proposition source is missing (statement '{statement}')")]
    MissingSource {
        /// Statement of the offending proposition
        statement: String,
    },

    /// Confidence is outside [0, 1] or not a number
    #[error("Confidence {value} is outside [0.0, 1.0]")]
    ConfidenceOutOfRange {
        /// The rejected value
        value: f64,
    },

    /// Raw value has no boolean reading
    #[error("Value '{value}' for '{statement}' cannot be coerced to a boolean")]
    UncoercibleValue {
        /// Statement the value belongs to
        statement: String,
        /// Display form of the rejected value
        value: String,
    },

    /// Too many sources in one cross-validation request
    #[error("Too many sources: {count} (max: {max})")]
    TooManySources {
        /// Number of sources supplied
        count: usize,
        /// Configured maximum
        max: usize,
    },

    /// Too many propositions for one source
    #[error("Too many propositions for source '{source_name}': {count} (max: {max})")]
    TooManyPropositions {
        /// Source that exceeded the bound
        source_name: String,
        /// Number of propositions supplied
        count: usize,
        /// Configured maximum
        max: usize,
    },
}

impl InputError {
    /// Whether the error is a size bound rather than a malformed proposition
    pub fn is_bound_violation(&self) -> bool {
        matches!(
            self,
            InputError::TooManySources { .. } | InputError::TooManyPropositions { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = InputError::UncoercibleValue {
            statement: "TenantRisk".to_string(),
            value: "maybe".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("maybe"));
        assert!(msg.contains("TenantRisk"));
    }

    #[test]
    fn test_bound_violation() {
        assert!(InputError::TooManySources { count: 20, max: 16 }.is_bound_violation());
        assert!(!InputError::MissingStatement.is_bound_violation());
    }
}
