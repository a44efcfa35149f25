/// OpenAI-compatible chat completions provider
///
/// Sends the system prompt plus one user message holding the text and the inline image,
/// and returns the content of the first choice.
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::AdapterError,
    services::inference::{InferenceProvider, VisionRequest},
};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "role", rename_all = "lowercase")]
enum ChatMessage<'a> {
    System { content: &'a str },
    User { content: Vec<ContentPart<'a>> },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Text { text: &'a str },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiProvider {
    http_client: HttpClient,
    api_key: Option<String>,
    api_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiProvider {
    pub fn new(
        api_key: Option<String>,
        api_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, AdapterError> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
            model,
            timeout,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AdapterError> {
        Self::new(
            config.api_key().map(str::to_string),
            config.openai_api_url.clone(),
            config.openai_model.clone(),
            config.provider_timeout(),
        )
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }

    fn build_body<'a>(&'a self, request: &'a VisionRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage::System {
                    content: &request.system_prompt,
                },
                ChatMessage::User {
                    content: vec![
                        ContentPart::Text {
                            text: &request.user_text,
                        },
                        ContentPart::ImageUrl {
                            image_url: ImageUrl {
                                url: request.data_uri(),
                            },
                        },
                    ],
                },
            ],
        }
    }

    fn map_transport_error(&self, err: reqwest::Error) -> AdapterError {
        if err.is_timeout() {
            AdapterError::Timeout(self.timeout.as_secs())
        } else {
            AdapterError::Http(err)
        }
    }
}

#[async_trait::async_trait]
impl InferenceProvider for OpenAiProvider {
    async fn complete(&self, request: &VisionRequest) -> Result<String, AdapterError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AdapterError::MissingCredential)?;

        let response = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&self.build_body(request))
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                status = status.as_u16(),
                provider = self.name(),
                "Provider returned an error status"
            );
            return Err(AdapterError::Provider {
                status: status.as_u16(),
                message: body,
            });
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .ok_or(AdapterError::EmptyChoices)?
            .message
            .content
            .unwrap_or_default();

        tracing::debug!(
            provider = self.name(),
            model = %self.model,
            reply_len = content.len(),
            "Provider reply received"
        );

        Ok(content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
