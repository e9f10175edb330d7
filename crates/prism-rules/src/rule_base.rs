//! The rule base: a flat, read-only table of inference rules

use std::collections::HashSet;
use std::path::Path;

use prism_domain::rule::derive_form;
use prism_domain::{Provenance, Rule};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::RuleBaseError;

/// A rule as written in a TOML rule file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleRecord {
    /// Rule id, e.g. "L002"
    pub id: String,

    /// Premise statement patterns
    pub premises: Vec<String>,

    /// Conclusion template
    pub conclusion: String,

    /// Baseline confidence [0.0, 1.0]
    pub base_confidence: f64,

    /// Provenance name (default: domain_standard)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<String>,

    /// Logical form (default: derived from the premise count)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
}

impl RuleRecord {
    /// Validate and convert into a domain rule
    pub fn into_rule(self) -> Result<Rule, RuleBaseError> {
        let mut rule = Rule::new(self.id, self.premises, self.conclusion, self.base_confidence)
            .map_err(RuleBaseError::InvalidRule)?;
        if let Some(p) = self.provenance {
            rule = rule.with_provenance(Provenance::parse(&p));
        }
        if let Some(form) = self.form {
            rule = rule.with_form(form);
        }
        Ok(rule)
    }
}

impl From<&Rule> for RuleRecord {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id.clone(),
            premises: rule.premises.clone(),
            conclusion: rule.conclusion.clone(),
            base_confidence: rule.base_confidence,
            provenance: Some(rule.provenance.as_str().to_string()),
            form: Some(rule.form.clone()),
        }
    }
}

/// Top-level layout of a rule file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleFile {
    /// Rules in registration order
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}

/// Immutable, validated rule table
///
/// Registration order is preserved and used as the matcher's final tie-break.
/// There is no way to add or remove rules after construction; share it with
/// `Arc<RuleBase>`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleBase {
    rules: Vec<Rule>,
}

impl RuleBase {
    /// Build a rule base, checking every rule and id uniqueness
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleBaseError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            // Re-run the constructor checks: rules may have been built as literals.
            Rule::new(
                rule.id.clone(),
                rule.premises.clone(),
                rule.conclusion.clone(),
                rule.base_confidence,
            )
            .map_err(RuleBaseError::InvalidRule)?;

            if !seen.insert(rule.id.as_str()) {
                return Err(RuleBaseError::DuplicateId(rule.id.clone()));
            }
        }

        Ok(Self { rules })
    }

    /// Parse a rule base from TOML text
    pub fn from_toml(toml_str: &str) -> Result<Self, RuleBaseError> {
        let file: RuleFile = toml::from_str(toml_str)?;
        let rules = file
            .rules
            .into_iter()
            .map(RuleRecord::into_rule)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    /// Load a rule base from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RuleBaseError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let base = Self::from_toml(&contents)?;
        info!(path = %path.display(), rules = base.len(), "Loaded rule base");
        Ok(base)
    }

    /// Serialize the rule base to TOML
    pub fn to_toml(&self) -> Result<String, RuleBaseError> {
        let file = RuleFile {
            rules: self.rules.iter().map(RuleRecord::from).collect(),
        };
        Ok(toml::to_string_pretty(&file)?)
    }

    /// The built-in commercial real-estate credit rules
    ///
    /// | Id | Premises | Conclusion | Base |
    /// |----|----------|------------|------|
    /// | L001 | NOI declining ∧ Occupancy < 85 | IncomeDeterioration | 0.85 |
    /// | L002 | DSCR < 1.2 ∧ LiquidityCoverage < 60 | CovenantBreach | 0.92 |
    /// | L003 | LTV > 75 ∧ Market value declining | RefinancingRisk | 0.78 |
    /// | L004 | Lease rollover < 12 months ∧ Tenant concentration > 30 | TenantRisk | 0.85 |
    pub fn builtin() -> Self {
        let rule = |id: &str, premises: &[&str], conclusion: &str, base: f64, provenance: Provenance| Rule {
            id: id.to_string(),
            form: derive_form(premises.len()),
            premises: premises.iter().map(|p| p.to_string()).collect(),
            conclusion: conclusion.to_string(),
            base_confidence: base,
            provenance,
        };

        Self {
            rules: vec![
                rule(
                    "L001",
                    &["NOI declining", "Occupancy < 85"],
                    "IncomeDeterioration",
                    0.85,
                    Provenance::HistoricalCalibration,
                ),
                rule(
                    "L002",
                    &["DSCR < 1.2", "LiquidityCoverage < 60"],
                    "CovenantBreach",
                    0.92,
                    Provenance::DomainStandard,
                ),
                rule(
                    "L003",
                    &["LTV > 75", "Market value declining"],
                    "RefinancingRisk",
                    0.78,
                    Provenance::ExpertJudgement,
                ),
                rule(
                    "L004",
                    &["Lease rollover < 12 months", "Tenant concentration > 30"],
                    "TenantRisk",
                    0.85,
                    Provenance::HistoricalCalibration,
                ),
            ],
        }
    }

    /// All rules in registration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Look up a rule by id
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
