//! Error types for the detector

use prism_domain::InputError;
use thiserror::Error;

/// Errors that can occur during cross-source comparison
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetectorError {
    /// A proposition failed its invariants
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
