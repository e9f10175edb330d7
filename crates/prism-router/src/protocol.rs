//! JSON request and response bodies
//!
//! Field names are camelCase on the wire.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A truth value as sent by clients: `true`, `1.05` or `"yes"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    /// JSON boolean
    Bool(bool),
    /// JSON number
    Number(f64),
    /// JSON string
    Text(String),
    /// Anything else (`null`, arrays, objects); rejected during conversion
    Other(serde_json::Value),
}

/// A proposition or piece of evidence
///
/// Optional fields are filled in by the service: `source` from the request's
/// agent or by-source key, `confidence` from the validator configuration,
/// `timestamp` from the position in the list and `id` freshly generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProposition {
    /// Caller identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Fact text
    #[serde(default)]
    pub statement: String,

    /// Truth value before coercion
    pub value: WireValue,

    /// Producing source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Reliability estimate [0, 1]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,

    /// Creation time (ms since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

/// POST /validate request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    /// Agent that drew the conclusion
    #[serde(default)]
    pub agent: String,

    /// Conclusion to check
    #[serde(default)]
    pub conclusion: String,

    /// Supporting evidence
    #[serde(default)]
    pub evidence: Vec<WireProposition>,
}

/// One proof step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireProofStep {
    /// 1-based position
    pub step: usize,
    /// "premise" or "inference"
    pub kind: String,
    /// Statement or rule id
    pub subject: String,
    /// Why the step holds
    pub justification: String,
}

/// A detected conflict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireContradiction {
    /// Normalized subject
    pub subject: String,
    /// Proposition from the lexicographically smaller source
    pub proposition_a: WireProposition,
    /// Proposition from the other source
    pub proposition_b: WireProposition,
    /// Sources involved, sorted
    pub agents: Vec<String>,
    /// "critical", "moderate" or "minor"
    pub severity: String,
}

/// POST /validate response; also embedded in validated insights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    /// "proved", "disproved" or "unprovable"
    pub valid: String,
    /// Combined confidence
    pub confidence: f64,
    /// Ordered proof steps
    pub proof_chain: Vec<WireProofStep>,
    /// Rule used, if any
    pub matched_rule: Option<String>,
    /// Rendered rule conclusion, if any
    pub conclusion: Option<String>,
    /// Reason for the verdict
    pub explanation: String,
    /// Conflicts involving this result
    #[serde(default)]
    pub contradictions: Vec<WireContradiction>,
    /// "unchecked", "consistent" or "contradicted"
    pub consistency: String,
}

/// POST /cross-validate request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossValidateRequest {
    /// Propositions keyed by source
    #[serde(default)]
    pub by_source: BTreeMap<String, Vec<WireProposition>>,
}

/// POST /cross-validate response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossValidateResponse {
    /// Conflicts in canonical order
    pub contradictions: Vec<WireContradiction>,
    /// Penalized mean confidence
    pub confidence: f64,
}

/// An upstream insight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireInsight {
    /// Producing agent
    pub agent_name: String,
    /// Conclusion text
    pub conclusion: String,
    /// Supporting evidence
    #[serde(default)]
    pub evidence: Vec<WireProposition>,
    /// Agent-level confidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// An insight with its validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireValidatedInsight {
    /// The insight as received
    #[serde(flatten)]
    pub insight: WireInsight,
    /// Its validation outcome
    pub validation: ValidationResponse,
}

/// POST /synthesize request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeRequest {
    /// Insights to validate, cross-check and summarize
    #[serde(default)]
    pub insights: Vec<WireInsight>,
}

/// Batch summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireSummary {
    /// Number of results
    pub total: usize,
    /// Proved results
    pub proved: usize,
    /// Disproved results
    pub disproved: usize,
    /// Undecided results
    pub unprovable: usize,
    /// Same as proved
    pub valid: usize,
    /// Same as disproved
    pub invalid: usize,
    /// Distinct contradictions
    pub contradiction_count: usize,
    /// Distinct critical contradictions
    pub critical_contradictions: usize,
    /// Penalized mean confidence
    pub overall_confidence: f64,
    /// Text summary
    pub narrative: String,
}

/// POST /synthesize response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesizeResponse {
    /// Validated insights in request order
    pub insights: Vec<WireValidatedInsight>,
    /// All contradictions between agents
    pub contradictions: Vec<WireContradiction>,
    /// Cross-validation confidence over the evidence
    pub confidence: f64,
    /// Summary of the validation results
    pub summary: WireSummary,
}

/// A rule as listed by GET /rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRule {
    /// Rule id
    pub id: String,
    /// Logical form
    pub form: String,
    /// Premise descriptors
    pub premises: Vec<String>,
    /// Conclusion template
    pub conclusion: String,
    /// Baseline confidence
    pub base_confidence: f64,
    /// Provenance name
    pub provenance: String,
}

/// GET /rules response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesResponse {
    /// Rules in registration order
    pub rules: Vec<WireRule>,
}

/// GET /health response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
    /// Number of loaded rules
    pub rule_count: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
