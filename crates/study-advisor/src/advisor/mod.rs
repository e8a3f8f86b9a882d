//! Daily activity advisory workflow: fact model, rule set, inference engine,
//! input provider, completeness analysis, extraction collaborator, and the
//! HTTP surface that ties them together.
//!
//! One advisory run is a single pass: resolve the intake fields into an
//! immutable [`StudentState`], evaluate the sixteen-rule catalogue against
//! it, and return the fired recommendations ranked by priority then
//! confidence. Nothing persists between runs.

pub mod completeness;
pub mod domain;
pub mod engine;
pub mod export;
pub mod extraction;
pub mod input;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use completeness::CompletenessReport;
pub use domain::{
    ActivityCategory, DeadlineUrgency, EnergyLevel, Recommendation, StateValidationError,
    StressLevel, StudentState, TaskComplexity,
};
pub use engine::InferenceEngine;
pub use extraction::{ExtractionError, GroqExtractor, StateExtractor};
pub use input::{ResolvedFields, StateFields};
pub use router::advisor_router;
pub use service::{AdvisorOutcome, AdvisorService, AdvisorServiceError, OutcomeSummary};
