//! Prism Validator
//!
//! Checks an agent's conclusion against the rule base and explains the
//! outcome with a proof chain and a confidence score.
//!
//! The Validator provides:
//! - Rule selection through the [`prism_rules::RuleMatcher`]
//! - Premise evaluation (proved / disproved / unprovable)
//! - Proof-chain construction
//! - Pluggable confidence combination (weakest link by default)
//! - Ingestion of raw upstream insights
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use prism_domain::{Proposition, Verdict};
//! use prism_rules::RuleBase;
//! use prism_validator::{Validator, ValidatorConfig};
//!
//! let validator = Validator::new(Arc::new(RuleBase::builtin()), ValidatorConfig::default());
//!
//! let evidence = vec![
//!     Proposition::new("DSCR < 1.2", true, "financial-agent", 0.9).unwrap(),
//!     Proposition::new("LiquidityCoverage < 60", true, "financial-agent", 0.95).unwrap(),
//! ];
//!
//! let result = validator
//!     .validate("Borrower is in covenant breach", &evidence, "financial-agent")
//!     .unwrap();
//! assert_eq!(result.valid, Verdict::Proved);
//! assert!((result.confidence - 0.828).abs() < 1e-9);
//! ```

#![warn(missing_docs)]

mod config;
mod confidence;
mod error;
mod validator;

pub use config::{ConfidenceStrategyKind, ValidatorConfig};
pub use confidence::{RuleOnly, WeakestLink};
pub use error::ValidatorError;
pub use validator::Validator;
