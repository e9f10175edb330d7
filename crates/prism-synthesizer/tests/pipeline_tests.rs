//! Full pipeline: validate insights, cross-validate, summarize

use std::sync::Arc;

use prism_consistency::ContradictionDetector;
use prism_domain::{Insight, Proposition, RawEvidence};
use prism_rules::RuleBase;
use prism_synthesizer::Synthesizer;
use prism_validator::{Validator, ValidatorConfig};

fn validator() -> Validator {
    Validator::new(Arc::new(RuleBase::builtin()), ValidatorConfig::default())
}

#[test]
fn scenario_four_proved_results_keep_plain_mean() {
    let validator = validator();
    let cases: [(&str, &str, f64); 4] = [
        ("NOI declining", "Occupancy < 85", 0.9),
        ("DSCR < 1.2", "LiquidityCoverage < 60", 0.8),
        ("LTV > 75", "Market value declining", 0.7),
        ("Lease rollover < 12 months", "Tenant concentration > 30", 0.95),
    ];

    let results: Vec<_> = cases
        .iter()
        .map(|(first, second, confidence)| {
            let evidence = vec![
                Proposition::new(*first, true, "agent", *confidence).unwrap(),
                Proposition::new(*second, true, "agent", *confidence).unwrap(),
            ];
            validator.validate("Risk identified", &evidence, "agent").unwrap()
        })
        .collect();

    assert!(results.iter().all(|r| r.is_proved()));

    let mean = results.iter().map(|r| r.confidence).sum::<f64>() / 4.0;
    let summary = Synthesizer::default().synthesize(&results);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.valid, 4);
    assert_eq!(summary.contradiction_count, 0);
    assert!((summary.overall_confidence - mean).abs() < 1e-12);
}

#[test]
fn pipeline_with_conflicting_agents() {
    let insights = vec![
        Insight {
            agent_name: "financial-agent".to_string(),
            conclusion: "Borrower is in covenant breach".to_string(),
            evidence: vec![
                RawEvidence::new("DSCR < 1.2", true).with_confidence(0.9),
                RawEvidence::new("LiquidityCoverage < 60", true).with_confidence(0.95),
            ],
            confidence: None,
        },
        Insight {
            agent_name: "market-agent".to_string(),
            conclusion: "Debt service is comfortable".to_string(),
            evidence: vec![RawEvidence::new("DSCR < 1.2", "no").with_confidence(0.7)],
            confidence: None,
        },
    ];

    let config = ValidatorConfig::default();
    let mut validated = validator().validate_batch(&insights).unwrap();
    let outcome = ContradictionDetector::default()
        .cross_validate_insights(&mut validated, config.default_evidence_confidence)
        .unwrap();

    assert_eq!(outcome.contradictions.len(), 1);
    assert!(validated.iter().all(|v| v.validation.is_contradicted()));

    let summary = Synthesizer::default().synthesize_insights(&validated);
    assert_eq!(summary.proved, 1);
    assert_eq!(summary.unprovable, 1);
    assert_eq!(summary.contradiction_count, 1);

    // one moderate contradiction on a financial subject
    let mean = 0.92 * 0.9 / 2.0;
    assert!((summary.overall_confidence - mean * 0.85).abs() < 1e-9);
    assert!(summary.narrative.contains("1 contradictions"));
}
