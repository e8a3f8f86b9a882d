use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::completeness::CompletenessReport;
use super::domain::{Recommendation, StateValidationError, StudentState};
use super::engine::InferenceEngine;
use super::extraction::{ExtractionError, StateExtractor};
use super::input::{self, StateFields};

/// Facade composing the input provider, inference engine, completeness
/// analysis, and extraction collaborator. A fresh engine is constructed per
/// request; the service itself holds no mutable state, so it can be shared
/// across concurrent callers behind an `Arc`.
pub struct AdvisorService<E> {
    extractor: Arc<E>,
}

impl<E> AdvisorService<E>
where
    E: StateExtractor + 'static,
{
    pub fn new(extractor: Arc<E>) -> Self {
        Self { extractor }
    }

    /// Structured path: default-fill, validate, evaluate.
    pub fn advise(&self, fields: StateFields) -> Result<AdvisorOutcome, StateValidationError> {
        let (state, completeness) = input::resolve_structured(fields)?;
        Ok(self.run_inference(&state, completeness))
    }

    /// Free-text path: extraction first, then the same inference run. When
    /// the collaborator fails, the engine is never invoked and the error is
    /// surfaced as-is.
    pub async fn advise_text(&self, text: &str) -> Result<AdvisorOutcome, AdvisorServiceError> {
        let fields = self.extractor.extract(text).await?;
        let (state, completeness) = input::resolve_extracted(fields)?;
        Ok(self.run_inference(&state, completeness))
    }

    fn run_inference(
        &self,
        state: &StudentState,
        completeness: CompletenessReport,
    ) -> AdvisorOutcome {
        let engine = InferenceEngine::new();
        let recommendations = engine.evaluate(state);
        let summary = OutcomeSummary::from_recommendations(&recommendations);

        AdvisorOutcome {
            recommendations,
            completeness,
            summary,
        }
    }
}

/// Result of one advisory run: the ranked list plus the display-side context
/// the original interface reported alongside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorOutcome {
    pub recommendations: Vec<Recommendation>,
    pub completeness: CompletenessReport,
    pub summary: OutcomeSummary,
}

impl AdvisorOutcome {
    /// No rule fired. Callers read this as a balanced state, not an error.
    pub fn is_balanced(&self) -> bool {
        self.recommendations.is_empty()
    }
}

/// Aggregate metrics over a recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    /// Number of ranked alternatives generated.
    pub alternatives: usize,
    /// Mean confidence across all recommendations; zero when none fired.
    pub average_confidence: f64,
    /// Distinct rules that fired.
    pub rules_fired: usize,
}

impl OutcomeSummary {
    fn from_recommendations(recommendations: &[Recommendation]) -> Self {
        let alternatives = recommendations.len();
        let average_confidence = if alternatives == 0 {
            0.0
        } else {
            recommendations
                .iter()
                .map(|rec| rec.confidence as f64)
                .sum::<f64>()
                / alternatives as f64
        };
        let rules_fired = recommendations
            .iter()
            .map(|rec| rec.rule_fired.as_str())
            .collect::<HashSet<_>>()
            .len();

        Self {
            alternatives,
            average_confidence,
            rules_fired,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdvisorServiceError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
    #[error(transparent)]
    State(#[from] StateValidationError),
}
