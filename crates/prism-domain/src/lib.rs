//! Prism Domain Layer
//!
//! Core data model for validating agent conclusions against a rule base and
//! checking them for consistency across sources. This crate holds value
//! objects and seam traits only; rule matching, validation, contradiction
//! detection and synthesis live in their own crates.
//!
//! ## Key Concepts
//!
//! - **Proposition**: an atomic, evaluated fact with a source and confidence
//! - **Raw value**: the untyped truth value an upstream routine supplied, coerced
//!   to a boolean by a total, documented function
//! - **Rule**: a declarative `premises → conclusion` template
//! - **Validation result**: proved / disproved / unprovable, with a proof chain
//! - **Contradiction**: two sources asserting opposite truth values for one subject
//!
//! ## Architecture
//!
//! - No I/O, no global state
//! - Everything is immutable once constructed
//! - Trait definitions for the pluggable policies (normalization, confidence,
//!   severity, penalties)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contradiction;
pub mod error;
pub mod insight;
pub mod normalize;
pub mod proof;
pub mod proposition;
pub mod rule;
pub mod traits;
pub mod validation;
pub mod value;

// Re-exports for convenience
pub use contradiction::{Contradiction, Severity, SubjectTag};
pub use error::InputError;
pub use insight::{Insight, RawEvidence, ValidatedInsight};
pub use normalize::CanonicalStatement;
pub use proof::{ProofStep, StepKind};
pub use proposition::{Proposition, PropositionId};
pub use rule::{Provenance, Rule};
pub use validation::{Consistency, ValidationResult, Verdict};
pub use value::RawValue;
