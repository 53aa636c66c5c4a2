//! Application-level configuration.
//!
//! - [`ScoringParams`]: judge mode and per-call timeout
//! - [`AssessmentParams`]: session size and catalog generation

pub mod assessment_params;
pub mod scoring_params;

pub use assessment_params::AssessmentParams;
pub use scoring_params::ScoringParams;
