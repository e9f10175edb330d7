//! Rule base error types

use thiserror::Error;

/// Errors raised while building a rule base
#[derive(Error, Debug)]
pub enum RuleBaseError {
    /// Failed to read a rule file
    #[error("Failed to read rule file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse rule TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("Failed to serialize rules to TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// A rule violates its invariants
    #[error("Invalid rule: {0}")]
    InvalidRule(String),

    /// Two rules share an id
    #[error("Duplicate rule id: {0}")]
    DuplicateId(String),
}
