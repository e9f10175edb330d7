//! End-to-end validation scenarios over the built-in rule base

use std::sync::Arc;

use prism_domain::proof::is_contiguous;
use prism_domain::{Insight, Proposition, RawEvidence, StepKind, Verdict};
use prism_rules::RuleBase;
use prism_validator::{Validator, ValidatorConfig};

fn validator() -> Validator {
    Validator::new(Arc::new(RuleBase::builtin()), ValidatorConfig::default())
}

fn evidence(facts: &[(&str, bool, f64)]) -> Vec<Proposition> {
    facts
        .iter()
        .enumerate()
        .map(|(i, (statement, value, confidence))| {
            Proposition::new(*statement, *value, "financial-agent", *confidence)
                .unwrap()
                .with_timestamp(i as u64)
        })
        .collect()
}

#[test]
fn scenario_covenant_breach_is_proved() {
    let result = validator()
        .validate(
            "Borrower has breached its covenants",
            &evidence(&[("DSCR < 1.2", true, 0.9), ("LiquidityCoverage < 60", true, 0.95)]),
            "financial-agent",
        )
        .unwrap();

    assert_eq!(result.valid, Verdict::Proved);
    assert_eq!(result.matched_rule.as_deref(), Some("L002"));
    assert!(result.conclusion.as_deref().unwrap().contains("CovenantBreach"));
    assert!((result.confidence - 0.828).abs() < 1e-9);

    assert!(is_contiguous(&result.proof_chain));
    let kinds: Vec<_> = result.proof_chain.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![StepKind::Premise, StepKind::Premise, StepKind::Inference]);
    assert_eq!(result.proof_chain[0].subject, "DSCR < 1.2");
    assert_eq!(result.proof_chain[2].subject, "L002");
}

#[test]
fn scenario_mixed_income_evidence_does_not_hide_covenant_breach() {
    let result = validator()
        .validate(
            "Borrower has breached its covenants",
            &evidence(&[
                ("NOI declining", true, 0.9),
                ("Occupancy < 85", false, 0.9),
                ("DSCR < 1.2", true, 0.9),
                ("LiquidityCoverage < 60", true, 0.95),
            ]),
            "financial-agent",
        )
        .unwrap();

    assert_eq!(result.valid, Verdict::Proved);
    assert_eq!(result.matched_rule.as_deref(), Some("L002"));
    assert!((result.confidence - 0.828).abs() < 1e-9);
}

#[test]
fn scenario_claimed_conclusion_differing_from_rule_is_noted() {
    let result = validator()
        .validate(
            "Tenant is safe",
            &evidence(&[("DSCR < 1.2", true, 0.9), ("LiquidityCoverage < 60", true, 0.95)]),
            "financial-agent",
        )
        .unwrap();

    assert_eq!(result.valid, Verdict::Proved);
    assert!(result.explanation.contains("differs from the derived conclusion"));
}

#[test]
fn scenario_missing_liquidity_premise_is_unprovable() {
    let result = validator()
        .validate(
            "Borrower has breached its covenants",
            &evidence(&[("DSCR < 1.2", true, 0.9)]),
            "financial-agent",
        )
        .unwrap();

    assert_eq!(result.valid, Verdict::Unprovable);
    assert_eq!(result.confidence, 0.0);
    assert!(result.proof_chain.is_empty());
    assert!(result.matched_rule.is_none());
    assert!(result.explanation.contains("L002"));
    assert!(result.explanation.contains("LiquidityCoverage < 60"));
}

#[test]
fn scenario_refinancing_risk_disproved() {
    let result = validator()
        .validate(
            "Refinancing will be difficult",
            &evidence(&[("LTV > 75", false, 0.8), ("Market value declining", false, 0.7)]),
            "market-agent",
        )
        .unwrap();

    assert_eq!(result.valid, Verdict::Disproved);
    assert_eq!(result.matched_rule.as_deref(), Some("L003"));
    assert!((result.confidence - 0.78 * 0.7).abs() < 1e-9);
}

#[test]
fn scenario_unrelated_evidence_is_unprovable() {
    let result = validator()
        .validate(
            "Roof needs replacing",
            &evidence(&[("Roof age > 20", true, 0.9)]),
            "inspection-agent",
        )
        .unwrap();

    assert_eq!(result.valid, Verdict::Unprovable);
    assert!(result.explanation.contains("No rule matches"));
}

#[test]
fn scenario_raw_insight_with_loose_values() {
    let insight = Insight {
        agent_name: "lease-agent".to_string(),
        conclusion: "Tenant exposure is elevated".to_string(),
        evidence: vec![
            RawEvidence::new("Lease rollover < 12 months", "Yes"),
            RawEvidence::new("Tenant concentration > 30", 42.0),
        ],
        confidence: Some(0.8),
    };

    let validated = validator().validate_insight(&insight).unwrap();
    assert_eq!(validated.validation.valid, Verdict::Proved);
    assert_eq!(validated.validation.matched_rule.as_deref(), Some("L004"));
    assert!((validated.validation.confidence - 0.85 * 0.8).abs() < 1e-9);
}

#[test]
fn scenario_batch_keeps_input_order() {
    let insights = vec![
        Insight {
            agent_name: "financial-agent".to_string(),
            conclusion: "Covenant breach".to_string(),
            evidence: vec![
                RawEvidence::new("DSCR < 1.2", true),
                RawEvidence::new("LiquidityCoverage < 60", true),
            ],
            confidence: Some(0.9),
        },
        Insight {
            agent_name: "market-agent".to_string(),
            conclusion: "Income is deteriorating".to_string(),
            evidence: vec![RawEvidence::new("NOI declining", true)],
            confidence: None,
        },
    ];

    let validated = validator().validate_batch(&insights).unwrap();
    assert_eq!(validated.len(), 2);
    assert_eq!(validated[0].validation.valid, Verdict::Proved);
    assert_eq!(validated[1].validation.valid, Verdict::Unprovable);
    assert_eq!(validated[1].insight.agent_name, "market-agent");
}
