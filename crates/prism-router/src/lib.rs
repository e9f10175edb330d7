//! Prism Router
//!
//! Standalone HTTP service over the validation engine. Exposes:
//!
//! - `POST /validate` - check one conclusion against its evidence
//! - `POST /cross-validate` - compare propositions across sources
//! - `POST /synthesize` - validate, cross-check and summarize insights
//! - `GET /rules` - list the loaded rule base
//! - `GET /health` - liveness and rule count

#![warn(missing_docs)]

pub mod config;
pub mod conversions;
pub mod handlers;
pub mod protocol;

use config::ServiceConfig;
use handlers::{create_router, AppState};
use prism_rules::RuleBaseError;
use tokio::net::TcpListener;
use tracing::info;

/// Service error
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Rule file could not be loaded
    #[error("Rule base error: {0}")]
    Rules(#[from] RuleBaseError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server
///
/// Loads the rule base once, builds the shared state and serves until the
/// listener fails.
pub async fn start_server(config: ServiceConfig) -> Result<(), ServiceError> {
    info!("Starting Prism service");
    info!("Bind address: {}", config.bind_addr());
    info!(
        max_sources = config.max_sources,
        max_propositions = config.max_propositions_per_source,
        "Request bounds"
    );

    let rule_base = config.load_rule_base()?;
    info!("Loaded {} rules", rule_base.len());

    let state = AppState::new(&config, rule_base);
    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Service listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServiceError::Server(e.to_string()))?;

    Ok(())
}
