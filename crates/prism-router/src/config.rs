//! Configuration file parsing for the service.
//!
//! Loads bind settings, the rule file location, request bounds and the
//! validator and detector sections from TOML.

use std::path::{Path, PathBuf};

use prism_consistency::DetectorConfig;
use prism_rules::{RuleBase, RuleBaseError};
use prism_validator::ValidatorConfig;
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Service configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Service configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Bind address (e.g., "127.0.0.1")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Bind port (e.g., 8080)
    #[serde(default = "default_bind_port")]
    pub bind_port: u16,

    /// Rule file; the built-in rules are used when absent
    #[serde(default)]
    pub rules_path: Option<PathBuf>,

    /// Maximum sources per cross-validation request (default: 16)
    #[serde(default = "default_max_sources")]
    pub max_sources: usize,

    /// Maximum propositions per source (default: 256)
    #[serde(default = "default_max_propositions")]
    pub max_propositions_per_source: usize,

    /// Validator settings
    #[serde(default)]
    pub validator: ValidatorConfig,

    /// Detector settings
    #[serde(default)]
    pub detector: DetectorConfig,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_bind_port() -> u16 {
    8080
}

fn default_max_sources() -> usize {
    16
}

fn default_max_propositions() -> usize {
    256
}

impl ServiceConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and check configuration from TOML text
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Check bounds and the nested sections
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_sources == 0 {
            return Err(ConfigError::Invalid("max_sources must be at least 1".to_string()));
        }
        if self.max_propositions_per_source == 0 {
            return Err(ConfigError::Invalid(
                "max_propositions_per_source must be at least 1".to_string(),
            ));
        }
        self.validator
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        self.detector
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    /// Create a default configuration for testing
    pub fn default_test_config() -> Self {
        ServiceConfig {
            bind_address: default_bind_address(),
            bind_port: default_bind_port(),
            rules_path: None,
            max_sources: default_max_sources(),
            max_propositions_per_source: default_max_propositions(),
            validator: ValidatorConfig::default(),
            detector: DetectorConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Load the configured rule file, or the built-in rules
    pub fn load_rule_base(&self) -> Result<RuleBase, RuleBaseError> {
        match &self.rules_path {
            Some(path) => RuleBase::from_file(path),
            None => {
                info!("No rule file configured, using built-in rules");
                Ok(RuleBase::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_validator::ConfidenceStrategyKind;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ServiceConfig::default_test_config();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.max_sources, 16);
        assert_eq!(config.max_propositions_per_source, 256);
        assert!(config.rules_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            bind_address = "0.0.0.0"
            bind_port = 9000
            max_sources = 4

            [validator]
            confidence_strategy = "rule_only"
            min_proof_confidence = 0.4

            [detector]
            critical_keywords = ["roof"]
            minor_weight = 0.0
        "#;

        let config = ServiceConfig::from_toml(toml).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
        assert_eq!(config.max_sources, 4);
        assert_eq!(config.max_propositions_per_source, 256);
        assert_eq!(config.validator.confidence_strategy, ConfidenceStrategyKind::RuleOnly);
        assert_eq!(config.validator.min_proof_confidence, 0.4);
        assert_eq!(config.detector.critical_keywords, vec!["roof"]);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = ServiceConfig::from_toml("").unwrap();
        assert_eq!(config.bind_port, 8080);
        assert_eq!(config.validator, ValidatorConfig::default());
    }

    #[test]
    fn test_rejects_zero_bound() {
        assert!(matches!(
            ServiceConfig::from_toml("max_sources = 0"),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_rejects_bad_nested_section() {
        let result = ServiceConfig::from_toml("[validator]\ndefault_evidence_confidence = 3.0\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_file_with_rules() {
        let dir = tempfile::tempdir().unwrap();
        let rules_path = dir.path().join("rules.toml");
        std::fs::write(
            &rules_path,
            "[[rules]]\nid = \"R1\"\npremises = [\"Roof leaking\"]\nconclusion = \"RepairNeeded\"\nbase_confidence = 0.6\n",
        )
        .unwrap();

        let mut file = tempfile::NamedTempFile::new_in(dir.path()).unwrap();
        writeln!(file, "rules_path = {:?}", rules_path.display().to_string()).unwrap();

        let config = ServiceConfig::from_file(file.path()).unwrap();
        let rules = config.load_rule_base().unwrap();
        assert_eq!(rules.len(), 1);
        assert!(rules.get("R1").is_some());
    }

    #[test]
    fn test_builtin_rules_without_path() {
        let rules = ServiceConfig::default_test_config().load_rule_base().unwrap();
        assert_eq!(rules.len(), 4);
    }
}
