//! Prism service CLI
//!
//! Starts the HTTP validation service.

use std::env;
use std::process;

use anyhow::Context;
use prism_router::{config::ServiceConfig, start_server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        let config_path = &args[2];
        ServiceConfig::from_file(config_path)
            .with_context(|| format!("loading {}", config_path))?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        tracing::warn!("No config file specified, using default configuration");
        eprintln!("Usage: prism-router --config <path-to-config.toml>");
        eprintln!();
        ServiceConfig::default_test_config()
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Prism - Proposition validation and cross-source consistency service");
    println!();
    println!("USAGE:");
    println!("    prism-router --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address: IP address to bind (default: '127.0.0.1')");
    println!("    - bind_port: Port number (default: 8080)");
    println!("    - rules_path: Rule file (default: built-in rules)");
    println!("    - max_sources: Sources per request (default: 16)");
    println!("    - max_propositions_per_source: Propositions per source (default: 256)");
    println!("    - [validator]: confidence_strategy, min_proof_confidence,");
    println!("      default_evidence_confidence");
    println!("    - [detector]: critical_keywords, moderate_keywords,");
    println!("      critical_weight, moderate_weight, minor_weight");
    println!();
    println!("LOGGING:");
    println!("    Set RUST_LOG (e.g. RUST_LOG=prism_validator=debug) to adjust verbosity.");
    println!();
}
