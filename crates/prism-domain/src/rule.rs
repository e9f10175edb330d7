//! Rule module - declarative inference templates

use std::fmt;

/// Where a rule's baseline confidence comes from
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// Published industry or regulatory standard
    DomainStandard,
    /// Calibrated against historical outcomes
    HistoricalCalibration,
    /// Analyst or underwriter judgement
    ExpertJudgement,
    /// Anything else, described by the caller
    Custom(String),
}

impl Provenance {
    /// Get the provenance name as a string
    pub fn as_str(&self) -> &str {
        match self {
            Provenance::DomainStandard => "domain_standard",
            Provenance::HistoricalCalibration => "historical_calibration",
            Provenance::ExpertJudgement => "expert_judgement",
            Provenance::Custom(s) => s,
        }
    }

    /// Parse a provenance name; unknown names become `Custom`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "domain_standard" => Provenance::DomainStandard,
            "historical_calibration" => Provenance::HistoricalCalibration,
            "expert_judgement" | "expert_judgment" => Provenance::ExpertJudgement,
            _ => Provenance::Custom(s.trim().to_string()),
        }
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Provenance::DomainStandard
    }
}

/// A declarative inference template: conjunctive premises imply a conclusion
///
/// Rules are immutable once built and carry their own a-priori reliability.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Unique identifier, e.g. "L002"
    pub id: String,

    /// Logical shape, e.g. "A ∧ B → C"
    pub form: String,

    /// Ordered premise statement patterns
    pub premises: Vec<String>,

    /// Conclusion template; `{source}` is replaced with the validating agent
    pub conclusion: String,

    /// A-priori reliability [0.0, 1.0]
    pub base_confidence: f64,

    /// Origin of `base_confidence`
    pub provenance: Provenance,
}

impl Rule {
    /// Create a rule, deriving its form from the premise count
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_domain::Rule;
    ///
    /// let rule = Rule::new(
    ///     "L002",
    ///     vec!["DSCR < 1.2".into(), "LiquidityCoverage < 60".into()],
    ///     "CovenantBreach",
    ///     0.92,
    /// ).unwrap();
    /// assert_eq!(rule.form, "A ∧ B → C");
    /// ```
    pub fn new(
        id: impl Into<String>,
        premises: Vec<String>,
        conclusion: impl Into<String>,
        base_confidence: f64,
    ) -> Result<Self, String> {
        let id = id.into();
        let conclusion = conclusion.into();

        if id.trim().is_empty() {
            return Err("rule id is empty".to_string());
        }
        if premises.is_empty() {
            return Err(format!("rule {} has no premises", id));
        }
        if premises.iter().any(|p| p.trim().is_empty()) {
            return Err(format!("rule {} has a blank premise", id));
        }
        if conclusion.trim().is_empty() {
            return Err(format!("rule {} has an empty conclusion", id));
        }
        if !(0.0..=1.0).contains(&base_confidence) {
            return Err(format!(
                "rule {} base confidence {} is outside [0.0, 1.0]",
                id, base_confidence
            ));
        }

        Ok(Self {
            form: derive_form(premises.len()),
            id,
            premises,
            conclusion,
            base_confidence,
            provenance: Provenance::default(),
        })
    }

    /// Set the provenance
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Override the derived form
    pub fn with_form(mut self, form: impl Into<String>) -> Self {
        self.form = form.into();
        self
    }

    /// Render the conclusion template for a validating source
    pub fn render_conclusion(&self, source: &str) -> String {
        self.conclusion.replace("{source}", source)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} → {}",
            self.id,
            self.premises.join(" ∧ "),
            self.conclusion
        )
    }
}

/// Build "A ∧ B → C" style forms for `n` premises
pub fn derive_form(n: usize) -> String {
    let symbol = |i: usize| -> String {
        let letter = (b'A' + (i % 26) as u8) as char;
        if i < 26 {
            letter.to_string()
        } else {
            format!("{}{}", letter, i / 26)
        }
    };

    let premises: Vec<String> = (0..n).map(symbol).collect();
    format!("{} → {}", premises.join(" ∧ "), symbol(n))
}
