use std::sync::Arc;

use crate::{
    error::AdapterError,
    models::{AnalysisResult, BodyMetrics},
    services::inference::{normalize, prompt, InferenceProvider, VisionRequest},
};

/// Turns a photo and body metrics into a normalized styling analysis
///
/// Builds the prompt, performs a single provider round trip (no retries, no
/// follow-up turns) and normalizes whatever comes back.
#[derive(Clone)]
pub struct StyleAnalyzer {
    provider: Arc<dyn InferenceProvider>,
}

impl StyleAnalyzer {
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    pub async fn analyze(
        &self,
        image: &[u8],
        image_mime: &str,
        metrics: BodyMetrics,
    ) -> Result<AnalysisResult, AdapterError> {
        let request = VisionRequest::new(
            prompt::SYSTEM_PROMPT,
            prompt::user_text(metrics),
            image_mime,
            image,
        );

        let raw = self.provider.complete(&request).await?;
        let result = normalize::normalize_reply(&raw)?;

        tracing::info!(
            provider = self.provider.name(),
            palette = result.color_palette.len(),
            recommendations = result.recommendations.len(),
            "Analysis normalized"
        );

        Ok(result)
    }
}
