//! HTTP request handlers for the validation service.
//!
//! Implements validation, cross-validation, synthesis, rule listing and
//! health check endpoints using axum.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router as AxumRouter,
};
use prism_consistency::{BySource, ContradictionDetector, DetectorError};
use prism_domain::InputError;
use prism_rules::RuleBase;
use prism_synthesizer::Synthesizer;
use prism_validator::{Validator, ValidatorError};
use tracing::{debug, warn};

use crate::config::ServiceConfig;
use crate::conversions::{
    contradiction_to_wire, insight_from_wire, propositions_from_wire, rule_to_wire, summary_to_wire,
    validated_insight_to_wire, validation_to_wire,
};
use crate::protocol::{
    CrossValidateRequest, CrossValidateResponse, ErrorResponse, HealthCheckResponse, RulesResponse,
    SynthesizeRequest, SynthesizeResponse, ValidateRequest, ValidationResponse,
};

/// Request size bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum sources (or insights) per request
    pub max_sources: usize,
    /// Maximum propositions per source (or insight)
    pub max_propositions_per_source: usize,
}

impl Limits {
    fn check_sources(&self, count: usize) -> Result<(), InputError> {
        if count > self.max_sources {
            return Err(InputError::TooManySources {
                count,
                max: self.max_sources,
            });
        }
        Ok(())
    }

    fn check_propositions(&self, source: &str, count: usize) -> Result<(), InputError> {
        if count > self.max_propositions_per_source {
            return Err(InputError::TooManyPropositions {
                source_name: source.to_string(),
                count,
                max: self.max_propositions_per_source,
            });
        }
        Ok(())
    }
}

/// Shared application state
///
/// Everything is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Validator over the loaded rule base
    pub validator: Arc<Validator>,
    /// Cross-source contradiction detector
    pub detector: Arc<ContradictionDetector>,
    /// Batch summarizer
    pub synthesizer: Arc<Synthesizer>,
    /// Request bounds
    pub limits: Limits,
}

impl AppState {
    /// Build the state from configuration and a loaded rule base
    pub fn new(config: &ServiceConfig, rule_base: RuleBase) -> Self {
        Self {
            validator: Arc::new(Validator::new(Arc::new(rule_base), config.validator.clone())),
            detector: Arc::new(ContradictionDetector::new(config.detector.clone())),
            synthesizer: Arc::new(Synthesizer::default()),
            limits: Limits {
                max_sources: config.max_sources,
                max_propositions_per_source: config.max_propositions_per_source,
            },
        }
    }

    fn default_confidence(&self) -> f64 {
        self.validator.config().default_evidence_confidence
    }
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Malformed or oversized request
    Input(InputError),
    /// Internal server error
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Input(e) if e.is_bound_violation() => (StatusCode::PAYLOAD_TOO_LARGE, e.to_string()),
            AppError::Input(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            AppError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        debug!(status = %status, error = %message, "Request rejected");
        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        AppError::Input(e)
    }
}

impl From<ValidatorError> for AppError {
    fn from(e: ValidatorError) -> Self {
        match e {
            ValidatorError::Input(e) => AppError::Input(e),
            ValidatorError::Config(msg) => AppError::InternalError(msg),
        }
    }
}

impl From<DetectorError> for AppError {
    fn from(e: DetectorError) -> Self {
        match e {
            DetectorError::Input(e) => AppError::Input(e),
            DetectorError::Config(msg) => AppError::InternalError(msg),
        }
    }
}

/// POST /validate - Validate one conclusion against its evidence
async fn validate(
    State(state): State<AppState>,
    Json(request): Json<ValidateRequest>,
) -> Result<Json<ValidationResponse>, AppError> {
    state
        .limits
        .check_propositions(&request.agent, request.evidence.len())?;

    let evidence = propositions_from_wire(request.evidence, &request.agent, state.default_confidence())?;
    let result = state
        .validator
        .validate(&request.conclusion, &evidence, &request.agent)?;

    Ok(Json(validation_to_wire(&result)))
}

/// POST /cross-validate - Compare propositions across sources
async fn cross_validate(
    State(state): State<AppState>,
    Json(request): Json<CrossValidateRequest>,
) -> Result<Json<CrossValidateResponse>, AppError> {
    state.limits.check_sources(request.by_source.len())?;

    let mut by_source = BySource::new();
    for (source, wire) in request.by_source {
        state.limits.check_propositions(&source, wire.len())?;
        let props = propositions_from_wire(wire, &source, state.default_confidence())?;
        by_source.insert(source, props);
    }

    let outcome = state.detector.cross_validate(&by_source)?;
    if !outcome.contradictions.is_empty() {
        warn!(
            contradictions = outcome.contradictions.len(),
            "Cross-validation found contradictions"
        );
    }

    Ok(Json(CrossValidateResponse {
        contradictions: outcome.contradictions.iter().map(contradiction_to_wire).collect(),
        confidence: outcome.confidence,
    }))
}

/// POST /synthesize - Validate insights, cross-check them and summarize
async fn synthesize(
    State(state): State<AppState>,
    Json(request): Json<SynthesizeRequest>,
) -> Result<Json<SynthesizeResponse>, AppError> {
    state.limits.check_sources(request.insights.len())?;
    for insight in &request.insights {
        state
            .limits
            .check_propositions(&insight.agent_name, insight.evidence.len())?;
    }

    let insights = request
        .insights
        .into_iter()
        .map(insight_from_wire)
        .collect::<Result<Vec<_>, _>>()?;
    let mut validated = state.validator.validate_batch(&insights)?;
    let outcome = state
        .detector
        .cross_validate_insights(&mut validated, state.default_confidence())?;
    let summary = state.synthesizer.synthesize_insights(&validated);

    Ok(Json(SynthesizeResponse {
        insights: validated.iter().map(validated_insight_to_wire).collect(),
        contradictions: outcome.contradictions.iter().map(contradiction_to_wire).collect(),
        confidence: outcome.confidence,
        summary: summary_to_wire(&summary),
    }))
}

/// GET /rules - List the loaded rules
async fn list_rules(State(state): State<AppState>) -> Json<RulesResponse> {
    Json(RulesResponse {
        rules: state.validator.rule_base().rules().iter().map(rule_to_wire).collect(),
    })
}

/// GET /health - Health check
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let rule_count = state.validator.rule_base().len();
    let status = if rule_count == 0 { "degraded" } else { "healthy" };

    Json(HealthCheckResponse {
        status: status.to_string(),
        rule_count,
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> AxumRouter {
    AxumRouter::new()
        .route("/validate", post(validate))
        .route("/cross-validate", post(cross_validate))
        .route("/synthesize", post(synthesize))
        .route("/rules", get(list_rules))
        .route("/health", get(health_check))
        .with_state(state)
}
