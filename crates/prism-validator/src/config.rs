//! Validator configuration

use std::sync::Arc;

use prism_domain::traits::ConfidenceStrategy;
use serde::{Deserialize, Serialize};

use crate::{RuleOnly, ValidatorError, WeakestLink};

/// Which confidence strategy to use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceStrategyKind {
    /// `base × min(evidence)`
    #[default]
    WeakestLink,
    /// `base` only
    RuleOnly,
}

impl ConfidenceStrategyKind {
    /// Instantiate the strategy
    pub fn build(&self) -> Arc<dyn ConfidenceStrategy> {
        match self {
            ConfidenceStrategyKind::WeakestLink => Arc::new(WeakestLink),
            ConfidenceStrategyKind::RuleOnly => Arc::new(RuleOnly),
        }
    }
}

/// Configuration for validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// How rule and evidence confidence combine
    pub confidence_strategy: ConfidenceStrategyKind,

    /// Proved/disproved results below this confidence become unprovable
    /// (0.0 disables the floor)
    pub min_proof_confidence: f64,

    /// Confidence for insight evidence that carries none, when the insight
    /// itself has none either
    pub default_evidence_confidence: f64,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            confidence_strategy: ConfidenceStrategyKind::WeakestLink,
            min_proof_confidence: 0.0,
            default_evidence_confidence: 0.5,
        }
    }
}

impl ValidatorConfig {
    /// Strict preset: refuse weak proofs, distrust unlabelled evidence
    pub fn strict() -> Self {
        Self {
            confidence_strategy: ConfidenceStrategyKind::WeakestLink,
            min_proof_confidence: 0.5,
            default_evidence_confidence: 0.3,
        }
    }

    /// Permissive preset: rule confidence only, no floor
    pub fn permissive() -> Self {
        Self {
            confidence_strategy: ConfidenceStrategyKind::RuleOnly,
            min_proof_confidence: 0.0,
            default_evidence_confidence: 0.7,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidatorError> {
        if !(0.0..=1.0).contains(&self.min_proof_confidence) {
            return Err(ValidatorError::Config(format!(
                "min_proof_confidence {} is outside [0.0, 1.0]",
                self.min_proof_confidence
            )));
        }
        if !(0.0..=1.0).contains(&self.default_evidence_confidence) {
            return Err(ValidatorError::Config(format!(
                "default_evidence_confidence {} is outside [0.0, 1.0]",
                self.default_evidence_confidence
            )));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ValidatorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| ValidatorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(ValidatorConfig::default().validate().is_ok());
        assert!(ValidatorConfig::strict().validate().is_ok());
        assert!(ValidatorConfig::permissive().validate().is_ok());
    }

    #[test]
    fn test_strict_config() {
        let config = ValidatorConfig::strict();
        assert_eq!(config.min_proof_confidence, 0.5);
        assert_eq!(config.confidence_strategy, ConfidenceStrategyKind::WeakestLink);
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ValidatorConfig::from_toml(r#"confidence_strategy = "rule_only""#).unwrap();
        assert_eq!(config.confidence_strategy, ConfidenceStrategyKind::RuleOnly);
        assert_eq!(config.default_evidence_confidence, 0.5);
    }

    #[test]
    fn test_from_toml_rejects_out_of_range() {
        let result = ValidatorConfig::from_toml("min_proof_confidence = 2.0");
        assert!(matches!(result, Err(ValidatorError::Config(_))));
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(ConfidenceStrategyKind::WeakestLink.build().name(), "weakest_link");
        assert_eq!(ConfidenceStrategyKind::RuleOnly.build().name(), "rule_only");
    }
}
