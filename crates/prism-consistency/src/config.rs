//! Detector configuration

use serde::{Deserialize, Serialize};

use crate::DetectorError;

/// Configuration for contradiction severity and the confidence penalty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Keywords marking a subject as safety or compliance related
    pub critical_keywords: Vec<String>,

    /// Keywords marking a subject as financial
    pub moderate_keywords: Vec<String>,

    /// Penalty per critical contradiction
    pub critical_weight: f64,

    /// Penalty per moderate contradiction
    pub moderate_weight: f64,

    /// Penalty per minor contradiction
    pub minor_weight: f64,
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            critical_keywords: words(&[
                "safety",
                "hazard",
                "fire",
                "asbestos",
                "flood",
                "structural",
                "environmental",
                "compliance",
                "regulatory",
                "violation",
                "covenant",
                "legal",
                "lawsuit",
                "zoning",
            ]),
            moderate_keywords: words(&[
                "dscr",
                "ltv",
                "noi",
                "income",
                "revenue",
                "debt",
                "liquidity",
                "occupancy",
                "rent",
                "valuation",
                "market value",
                "cash",
                "loan",
                "refinanc",
                "interest",
            ]),
            critical_weight: 0.30,
            moderate_weight: 0.15,
            minor_weight: 0.05,
        }
    }
}

impl DetectorConfig {
    /// Strict preset: heavier penalties
    pub fn strict() -> Self {
        Self {
            critical_weight: 0.50,
            moderate_weight: 0.25,
            minor_weight: 0.10,
            ..Self::default()
        }
    }

    /// Permissive preset: light penalties, minor disagreements are free
    pub fn permissive() -> Self {
        Self {
            critical_weight: 0.15,
            moderate_weight: 0.05,
            minor_weight: 0.0,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), DetectorError> {
        let weights = [
            ("critical_weight", self.critical_weight),
            ("moderate_weight", self.moderate_weight),
            ("minor_weight", self.minor_weight),
        ];
        for (name, weight) in weights {
            if !(0.0..=1.0).contains(&weight) {
                return Err(DetectorError::Config(format!(
                    "{} {} is outside [0.0, 1.0]",
                    name, weight
                )));
            }
        }

        let blank = self
            .critical_keywords
            .iter()
            .chain(&self.moderate_keywords)
            .any(|k| k.trim().is_empty());
        if blank {
            return Err(DetectorError::Config("severity keywords must not be blank".to_string()));
        }

        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, DetectorError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| DetectorError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.critical_weight, 0.30);
        assert!(config.critical_keywords.iter().any(|k| k == "safety"));
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(DetectorConfig::strict().validate().is_ok());
        assert!(DetectorConfig::permissive().validate().is_ok());
        assert_eq!(DetectorConfig::permissive().minor_weight, 0.0);
    }

    #[test]
    fn test_from_toml_overrides() {
        let config = DetectorConfig::from_toml(
            r#"
            critical_keywords = ["roof"]
            minor_weight = 0.0
            "#,
        )
        .unwrap();
        assert_eq!(config.critical_keywords, vec!["roof"]);
        assert_eq!(config.minor_weight, 0.0);
        assert_eq!(config.moderate_weight, 0.15);
    }

    #[test]
    fn test_rejects_bad_weight() {
        assert!(matches!(
            DetectorConfig::from_toml("critical_weight = -0.1"),
            Err(DetectorError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_blank_keyword() {
        let config = DetectorConfig {
            moderate_keywords: vec!["  ".to_string()],
            ..DetectorConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
