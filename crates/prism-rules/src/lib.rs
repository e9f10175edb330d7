//! Prism Rules
//!
//! The immutable rule base and the matcher that selects candidate rules for
//! a set of evidence.
//!
//! The rule base is built once at startup (from the built-in table or a TOML
//! file), validated, and then shared read-only as `Arc<RuleBase>`. It is never
//! ambient global state: every consumer receives it explicitly.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use prism_domain::Proposition;
//! use prism_rules::{RuleBase, RuleMatcher};
//!
//! let rules = Arc::new(RuleBase::builtin());
//! let matcher = RuleMatcher::new(rules);
//!
//! let evidence = vec![
//!     Proposition::new("DSCR < 1.2", true, "financial-agent", 0.9).unwrap(),
//!     Proposition::new("LiquidityCoverage < 60", true, "financial-agent", 0.95).unwrap(),
//! ];
//!
//! let best = matcher.best(&evidence).unwrap();
//! assert_eq!(best.rule.id, "L002");
//! assert!(best.is_complete());
//! ```

#![warn(missing_docs)]

mod error;
mod matcher;
mod rule_base;

pub use error::RuleBaseError;
pub use matcher::{RuleMatch, RuleMatcher};
pub use rule_base::{RuleBase, RuleFile, RuleRecord};
