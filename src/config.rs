use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Credential for the inference provider.
    ///
    /// Optional on purpose: a missing key only fails the first analysis call.
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// Base URL of the OpenAI-compatible API
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Multimodal model used for the analysis
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Upper bound for one provider round trip, in seconds
    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,

    /// Largest accepted photo upload
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Port of the analysis service
    #[serde(default = "default_analysis_port")]
    pub analysis_port: u16,

    /// Port of the recommendation service
    #[serde(default = "default_recommendation_port")]
    pub recommendation_port: u16,
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_provider_timeout_secs() -> u64 {
    60
}

fn default_max_image_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_analysis_port() -> u16 {
    8000
}

fn default_recommendation_port() -> u16 {
    8001
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit key/value pairs (upper-case names, like the environment)
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// The provider credential, ignoring blank values
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    pub fn analysis_addr(&self) -> String {
        format!("{}:{}", self.host, self.analysis_port)
    }

    pub fn recommendation_addr(&self) -> String {
        format!("{}:{}", self.host, self.recommendation_port)
    }
}
