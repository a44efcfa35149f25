use std::sync::Arc;

use crate::{
    config::Config,
    error::AdapterError,
    services::{CatalogLookup, InferenceProvider, OpenAiProvider, StaticCatalog, StyleAnalyzer},
};

/// Shared state of the analysis service
#[derive(Clone)]
pub struct AnalysisState {
    pub analyzer: StyleAnalyzer,
    /// Largest accepted photo, in bytes
    pub max_image_bytes: usize,
}

impl AnalysisState {
    pub fn new(provider: Arc<dyn InferenceProvider>, max_image_bytes: usize) -> Self {
        Self {
            analyzer: StyleAnalyzer::new(provider),
            max_image_bytes,
        }
    }

    /// Wires the OpenAI provider from configuration
    pub fn from_config(config: &Config) -> Result<Self, AdapterError> {
        let provider = OpenAiProvider::from_config(config)?;
        Ok(Self::new(Arc::new(provider), config.max_image_bytes))
    }
}

/// Shared state of the recommendation service
#[derive(Clone)]
pub struct RecommendationState {
    pub catalog: Arc<dyn CatalogLookup>,
}

impl Default for RecommendationState {
    fn default() -> Self {
        Self::new(Arc::new(StaticCatalog::new()))
    }
}

impl RecommendationState {
    pub fn new(catalog: Arc<dyn CatalogLookup>) -> Self {
        Self { catalog }
    }
}
