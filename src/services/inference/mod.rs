/// Inference provider abstraction
///
/// The visual analysis itself is delegated to an external multimodal model. This module
/// defines the seam (`InferenceProvider`), the request handed to it, and the helpers that
/// turn the provider's free-form reply into an `AnalysisResult`.
use base64::{engine::general_purpose, Engine as _};

use crate::error::AdapterError;

pub mod normalize;
pub mod openai;
pub mod prompt;

pub use openai::OpenAiProvider;

/// One multimodal request: instructions, a short text and a single image
#[derive(Debug, Clone, PartialEq)]
pub struct VisionRequest {
    pub system_prompt: String,
    pub user_text: String,
    pub image_mime: String,
    pub image_base64: String,
}

impl VisionRequest {
    pub fn new(
        system_prompt: impl Into<String>,
        user_text: impl Into<String>,
        image_mime: impl Into<String>,
        image: &[u8],
    ) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_text: user_text.into(),
            image_mime: image_mime.into(),
            image_base64: general_purpose::STANDARD.encode(image),
        }
    }

    /// The image as a `data:` URI, the form vision models accept inline
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.image_mime, self.image_base64)
    }
}

/// Trait for external multimodal model backends
///
/// Implementations perform exactly one round trip and return the raw text of the reply,
/// which may be empty. Parsing is left to `normalize`.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn complete(&self, request: &VisionRequest) -> Result<String, AdapterError>;

    /// Provider name for logging
    fn name(&self) -> &'static str;
}
