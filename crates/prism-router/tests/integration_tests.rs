//! Integration tests for the HTTP service

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use prism_router::{
    config::ServiceConfig,
    handlers::{create_router, AppState},
    protocol::{
        CrossValidateResponse, ErrorResponse, HealthCheckResponse, RulesResponse, SynthesizeResponse,
        ValidationResponse,
    },
};
use prism_rules::RuleBase;
use serde::de::DeserializeOwned;
use tower::ServiceExt; // for oneshot

/// Helper to create the application with the built-in rules
fn create_app() -> Router {
    let config = ServiceConfig::default_test_config();
    create_router(AppState::new(&config, RuleBase::builtin()))
}

async fn send<T: DeserializeOwned>(app: Router, request: Request<Body>) -> (StatusCode, T) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (status, health): (_, HealthCheckResponse) = send(create_app(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health.status, "healthy");
    assert_eq!(health.rule_count, 4);
}

#[tokio::test]
async fn test_rules_endpoint() {
    let (status, rules): (_, RulesResponse) = send(create_app(), get("/rules")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = rules.rules.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["L001", "L002", "L003", "L004"]);
    assert_eq!(rules.rules[1].base_confidence, 0.92);
    assert_eq!(rules.rules[1].provenance, "domain_standard");
}

#[tokio::test]
async fn test_validate_covenant_breach() {
    let body = serde_json::json!({
        "agent": "financial-agent",
        "conclusion": "Borrower is in covenant breach",
        "evidence": [
            {"statement": "DSCR < 1.2", "value": true, "confidence": 0.9},
            {"statement": "LiquidityCoverage < 60", "value": "yes", "confidence": 0.95}
        ]
    });

    let (status, result): (_, ValidationResponse) = send(create_app(), post("/validate", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.valid, "proved");
    assert_eq!(result.matched_rule.as_deref(), Some("L002"));
    assert!((result.confidence - 0.828).abs() < 1e-9);
    assert_eq!(result.proof_chain.len(), 3);
    assert_eq!(result.proof_chain[2].kind, "inference");
    assert!(result.conclusion.unwrap().contains("CovenantBreach"));
}

#[tokio::test]
async fn test_validate_camel_case_response() {
    let body = serde_json::json!({
        "agent": "financial-agent",
        "conclusion": "Borrower is in covenant breach",
        "evidence": [{"statement": "DSCR < 1.2", "value": 1}]
    });

    let (status, raw): (_, serde_json::Value) = send(create_app(), post("/validate", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(raw["valid"], "unprovable");
    assert!(raw["proofChain"].as_array().unwrap().is_empty());
    assert!(raw["matchedRule"].is_null());
    assert!(raw["explanation"].as_str().unwrap().contains("LiquidityCoverage < 60"));
}

#[tokio::test]
async fn test_validate_missing_statement() {
    let body = serde_json::json!({
        "agent": "financial-agent",
        "conclusion": "Anything",
        "evidence": [{"value": true}]
    });

    let (status, error): (_, ErrorResponse) = send(create_app(), post("/validate", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error.error.contains("statement"));
}

#[tokio::test]
async fn test_validate_confidence_out_of_range() {
    let body = serde_json::json!({
        "agent": "financial-agent",
        "conclusion": "Anything",
        "evidence": [{"statement": "DSCR < 1.2", "value": true, "confidence": 1.5}]
    });

    let (status, error): (_, ErrorResponse) = send(create_app(), post("/validate", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error.error.contains("1.5"));
}

#[tokio::test]
async fn test_non_scalar_values_are_bad_request() {
    for value in [serde_json::Value::Null, serde_json::json!([true]), serde_json::json!({"v": 1})] {
        let body = serde_json::json!({
            "agent": "financial-agent",
            "conclusion": "Anything",
            "evidence": [{"statement": "TenantRisk", "value": value}]
        });

        let (status, error): (_, ErrorResponse) = send(create_app(), post("/validate", body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(error.error.contains("TenantRisk"));
    }
}

#[tokio::test]
async fn test_synthesize_null_value_is_bad_request() {
    let body = serde_json::json!({
        "insights": [{
            "agentName": "lease-agent",
            "conclusion": "Tenant exposure",
            "evidence": [{"statement": "TenantRisk", "value": null}]
        }]
    });

    let (status, _): (_, ErrorResponse) = send(create_app(), post("/synthesize", body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cross_validate_tenant_risk() {
    let body = serde_json::json!({
        "bySource": {
            "lease-agent": [{"statement": "TenantRisk", "value": true, "confidence": 0.8}],
            "credit-agent": [{"statement": "TenantRisk", "value": false, "confidence": 0.7}]
        }
    });

    let (status, outcome): (_, CrossValidateResponse) =
        send(create_app(), post("/cross-validate", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome.contradictions.len(), 1);
    let c = &outcome.contradictions[0];
    assert_eq!(c.agents, vec!["credit-agent", "lease-agent"]);
    assert_eq!(c.proposition_a.source.as_deref(), Some("credit-agent"));
    assert_eq!(c.severity, "minor");
    assert!(outcome.confidence < 0.75);
}

#[tokio::test]
async fn test_cross_validate_too_many_sources() {
    let mut by_source = serde_json::Map::new();
    for i in 0..17 {
        by_source.insert(format!("agent-{}", i), serde_json::json!([]));
    }
    let body = serde_json::json!({ "bySource": by_source });

    let (status, error): (_, ErrorResponse) = send(create_app(), post("/cross-validate", body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(error.error.contains("17"));
}

#[tokio::test]
async fn test_synthesize_pipeline() {
    let body = serde_json::json!({
        "insights": [
            {
                "agentName": "financial-agent",
                "conclusion": "Borrower is in covenant breach",
                "evidence": [
                    {"statement": "DSCR < 1.2", "value": true, "confidence": 0.9},
                    {"statement": "LiquidityCoverage < 60", "value": true, "confidence": 0.95}
                ]
            },
            {
                "agentName": "market-agent",
                "conclusion": "Debt service looks fine",
                "evidence": [{"statement": "DSCR<1.2", "value": "no"}],
                "confidence": 0.6
            }
        ]
    });

    let (status, response): (_, SynthesizeResponse) = send(create_app(), post("/synthesize", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response.insights.len(), 2);
    assert_eq!(response.insights[0].insight.agent_name, "financial-agent");
    assert_eq!(response.insights[0].validation.valid, "proved");
    assert_eq!(response.insights[0].validation.consistency, "contradicted");
    assert_eq!(response.insights[1].validation.valid, "unprovable");
    assert_eq!(response.contradictions.len(), 1);
    assert_eq!(response.summary.total, 2);
    assert_eq!(response.summary.contradiction_count, 1);
    assert!(response.summary.narrative.contains("1 proved"));
}

#[tokio::test]
async fn test_custom_rule_base() {
    let rules = RuleBase::from_toml(
        r#"
        [[rules]]
        id = "S001"
        premises = ["Fire inspection overdue"]
        conclusion = "LifeSafetyViolation flagged by {source}"
        base_confidence = 0.95
        "#,
    )
    .unwrap();
    let app = create_router(AppState::new(&ServiceConfig::default_test_config(), rules));

    let body = serde_json::json!({
        "agent": "inspection-agent",
        "conclusion": "Building is unsafe",
        "evidence": [{"statement": "Fire inspection overdue", "value": "confirmed", "confidence": 1.0}]
    });

    let (status, result): (_, ValidationResponse) = send(app, post("/validate", body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result.valid, "proved");
    assert_eq!(
        result.conclusion.as_deref(),
        Some("LifeSafetyViolation flagged by inspection-agent")
    );
}
