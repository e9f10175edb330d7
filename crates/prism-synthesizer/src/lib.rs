//! Prism Synthesizer
//!
//! Rolls a batch of validation results into a [`Summary`] for downstream
//! consumers: verdict counts, contradiction counts, an overall confidence and
//! a short narrative.
//!
//! The synthesizer is a plain consumer of results. It has no view of the
//! sources beyond what the results carry, and it adds no reasoning of its own.

#![warn(missing_docs)]

mod summary;
mod synthesizer;

pub use summary::Summary;
pub use synthesizer::Synthesizer;
