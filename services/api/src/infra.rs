use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use study_advisor::advisor::{ExtractionError, GroqExtractor, ResolvedFields, StateExtractor};
use study_advisor::config::ExtractionConfig;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Extractor wired from configuration. Without an API key the service still
/// serves the structured path; only the free-text endpoint reports that
/// extraction is not configured.
pub(crate) enum ApiExtractor {
    Groq(GroqExtractor),
    Disabled,
}

impl ApiExtractor {
    pub(crate) fn from_config(config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        if config.api_key.is_none() {
            warn!("GROQ_API_KEY not set; free-text intake is disabled");
            return Ok(Self::Disabled);
        }
        Ok(Self::Groq(GroqExtractor::from_config(config)?))
    }
}

#[async_trait]
impl StateExtractor for ApiExtractor {
    async fn extract(&self, text: &str) -> Result<ResolvedFields, ExtractionError> {
        match self {
            ApiExtractor::Groq(extractor) => extractor.extract(text).await,
            ApiExtractor::Disabled => Err(ExtractionError::NotConfigured),
        }
    }
}
