//! Validator error types

use prism_domain::InputError;
use thiserror::Error;

/// Errors that can occur during validation
///
/// "No rule matched" is not an error; it is an unprovable result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidatorError {
    /// Malformed proposition or insight
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
