//! Type conversions between wire and domain types

use prism_domain::{
    Consistency, Contradiction, InputError, Insight, ProofStep, Proposition, PropositionId, RawEvidence,
    RawValue, Rule, StepKind, ValidatedInsight, ValidationResult,
};
use prism_synthesizer::Summary;

use crate::protocol::{
    ValidationResponse, WireContradiction, WireInsight, WireProofStep, WireProposition, WireRule,
    WireSummary, WireValidatedInsight, WireValue,
};

/// Convert a wire value to a raw domain value
///
/// JSON values that are not booleans, numbers or strings cannot be coerced.
pub fn value_from_wire(value: WireValue, statement: &str) -> Result<RawValue, InputError> {
    match value {
        WireValue::Bool(b) => Ok(RawValue::Bool(b)),
        WireValue::Number(n) => Ok(RawValue::Number(n)),
        WireValue::Text(s) => Ok(RawValue::Text(s)),
        WireValue::Other(other) => Err(InputError::UncoercibleValue {
            statement: statement.to_string(),
            value: other.to_string(),
        }),
    }
}

/// Convert a raw domain value to a wire value
pub fn value_to_wire(value: &RawValue) -> WireValue {
    match value {
        RawValue::Bool(b) => WireValue::Bool(*b),
        RawValue::Number(n) => WireValue::Number(*n),
        RawValue::Text(s) => WireValue::Text(s.clone()),
    }
}

/// Convert a wire proposition to a domain proposition
///
/// `position` stands in for a missing timestamp so later entries win when
/// statements repeat.
pub fn proposition_from_wire(
    wire: WireProposition,
    default_source: &str,
    default_confidence: f64,
    position: usize,
) -> Result<Proposition, InputError> {
    let source = wire.source.unwrap_or_else(|| default_source.to_string());
    let confidence = wire.confidence.unwrap_or(default_confidence);
    let value = value_from_wire(wire.value, &wire.statement)?;

    let mut prop = Proposition::from_raw(wire.statement, &value, source, confidence)?
        .with_timestamp(wire.timestamp.unwrap_or(position as u64));
    if let Some(id) = wire.id {
        prop = prop.with_id(PropositionId::from_string(id));
    }
    Ok(prop)
}

/// Convert a list of wire propositions sharing a default source
pub fn propositions_from_wire(
    wire: Vec<WireProposition>,
    default_source: &str,
    default_confidence: f64,
) -> Result<Vec<Proposition>, InputError> {
    wire.into_iter()
        .enumerate()
        .map(|(position, p)| proposition_from_wire(p, default_source, default_confidence, position))
        .collect()
}

/// Convert a domain proposition to a wire proposition
pub fn proposition_to_wire(prop: &Proposition) -> WireProposition {
    WireProposition {
        id: Some(prop.id.to_string()),
        statement: prop.statement.clone(),
        value: WireValue::Bool(prop.value),
        source: Some(prop.source.clone()),
        confidence: Some(prop.confidence),
        timestamp: Some(prop.timestamp),
    }
}

/// Convert wire evidence to uncoerced domain evidence
pub fn evidence_from_wire(wire: WireProposition) -> Result<RawEvidence, InputError> {
    let value = value_from_wire(wire.value, &wire.statement)?;
    Ok(RawEvidence {
        id: wire.id,
        statement: wire.statement,
        value,
        source: wire.source,
        confidence: wire.confidence,
        timestamp: wire.timestamp,
    })
}

/// Convert uncoerced domain evidence to wire evidence
pub fn evidence_to_wire(evidence: &RawEvidence) -> WireProposition {
    WireProposition {
        id: evidence.id.clone(),
        statement: evidence.statement.clone(),
        value: value_to_wire(&evidence.value),
        source: evidence.source.clone(),
        confidence: evidence.confidence,
        timestamp: evidence.timestamp,
    }
}

/// Convert a wire insight to a domain insight
pub fn insight_from_wire(wire: WireInsight) -> Result<Insight, InputError> {
    Ok(Insight {
        agent_name: wire.agent_name,
        conclusion: wire.conclusion,
        evidence: wire
            .evidence
            .into_iter()
            .map(evidence_from_wire)
            .collect::<Result<_, _>>()?,
        confidence: wire.confidence,
    })
}

/// Convert a domain insight to a wire insight
pub fn insight_to_wire(insight: &Insight) -> WireInsight {
    WireInsight {
        agent_name: insight.agent_name.clone(),
        conclusion: insight.conclusion.clone(),
        evidence: insight.evidence.iter().map(evidence_to_wire).collect(),
        confidence: insight.confidence,
    }
}

/// Convert a proof step to the wire form
pub fn proof_step_to_wire(step: &ProofStep) -> WireProofStep {
    let kind = match step.kind {
        StepKind::Premise => "premise",
        StepKind::Inference => "inference",
    };
    WireProofStep {
        step: step.step,
        kind: kind.to_string(),
        subject: step.subject.clone(),
        justification: step.justification.clone(),
    }
}

/// Convert a contradiction to the wire form
pub fn contradiction_to_wire(c: &Contradiction) -> WireContradiction {
    WireContradiction {
        subject: c.subject.clone(),
        proposition_a: proposition_to_wire(&c.proposition_a),
        proposition_b: proposition_to_wire(&c.proposition_b),
        agents: c.agents.clone(),
        severity: c.severity.as_str().to_string(),
    }
}

fn consistency_name(consistency: Consistency) -> &'static str {
    match consistency {
        Consistency::Unchecked => "unchecked",
        Consistency::Consistent => "consistent",
        Consistency::Contradicted => "contradicted",
    }
}

/// Convert a validation result to the wire form
pub fn validation_to_wire(result: &ValidationResult) -> ValidationResponse {
    ValidationResponse {
        valid: result.valid.as_str().to_string(),
        confidence: result.confidence,
        proof_chain: result.proof_chain.iter().map(proof_step_to_wire).collect(),
        matched_rule: result.matched_rule.clone(),
        conclusion: result.conclusion.clone(),
        explanation: result.explanation.clone(),
        contradictions: result.contradictions.iter().map(contradiction_to_wire).collect(),
        consistency: consistency_name(result.consistency()).to_string(),
    }
}

/// Convert a validated insight to the wire form
pub fn validated_insight_to_wire(validated: &ValidatedInsight) -> WireValidatedInsight {
    WireValidatedInsight {
        insight: insight_to_wire(&validated.insight),
        validation: validation_to_wire(&validated.validation),
    }
}

/// Convert a summary to the wire form
pub fn summary_to_wire(summary: &Summary) -> WireSummary {
    WireSummary {
        total: summary.total,
        proved: summary.proved,
        disproved: summary.disproved,
        unprovable: summary.unprovable,
        valid: summary.valid,
        invalid: summary.invalid,
        contradiction_count: summary.contradiction_count,
        critical_contradictions: summary.critical_contradictions,
        overall_confidence: summary.overall_confidence,
        narrative: summary.narrative.clone(),
    }
}

/// Convert a rule to the wire form
pub fn rule_to_wire(rule: &Rule) -> WireRule {
    WireRule {
        id: rule.id.clone(),
        form: rule.form.clone(),
        premises: rule.premises.clone(),
        conclusion: rule.conclusion.clone(),
        base_confidence: rule.base_confidence,
        provenance: rule.provenance.as_str().to_string(),
    }
}
