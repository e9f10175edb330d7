//! Prism Consistency
//!
//! Compares propositions reported by independent sources and flags subjects
//! on which they disagree.
//!
//! The detector provides:
//! - Pairwise comparison of every pair of distinct sources
//! - Severity rating through a pluggable [`prism_domain::traits::SeverityPolicy`]
//! - An overall confidence penalized by a pluggable
//!   [`prism_domain::traits::ContradictionPenalty`]
//! - Attachment of contradictions to validated insights
//!
//! Output is canonical: sources are visited in lexicographic order and
//! `proposition_a` always comes from the smaller source name, so the result
//! does not depend on the order in which sources were supplied.
//!
//! # Examples
//!
//! ```
//! use prism_consistency::{BySource, ContradictionDetector, DetectorConfig};
//! use prism_domain::Proposition;
//!
//! let detector = ContradictionDetector::new(DetectorConfig::default());
//!
//! let mut by_source = BySource::new();
//! by_source.insert(
//!     "lease-agent".to_string(),
//!     vec![Proposition::new("TenantRisk", true, "lease-agent", 0.8).unwrap()],
//! );
//! by_source.insert(
//!     "credit-agent".to_string(),
//!     vec![Proposition::new("TenantRisk", false, "credit-agent", 0.6).unwrap()],
//! );
//!
//! let outcome = detector.cross_validate(&by_source).unwrap();
//! assert_eq!(outcome.contradictions.len(), 1);
//! assert_eq!(outcome.contradictions[0].agents, vec!["credit-agent", "lease-agent"]);
//! ```

#![warn(missing_docs)]

mod config;
mod detector;
mod error;
mod penalty;
mod severity;

pub use config::DetectorConfig;
pub use detector::{BySource, ContradictionDetector, CrossValidation};
pub use error::DetectorError;
pub use penalty::{NoPenalty, SeverityWeighted};
pub use severity::{KeywordSeverityPolicy, TaggedSeverityPolicy};
