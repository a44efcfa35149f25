use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Upstream(String),
}

/// Failures of the inference provider round trip or of its reply
#[derive(thiserror::Error, Debug)]
pub enum AdapterError {
    #[error("OPENAI_API_KEY environment variable is not set")]
    MissingCredential,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider did not respond within {0}s")]
    Timeout(u64),

    #[error("provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("provider returned no completion choices")]
    EmptyChoices,

    #[error("could not decode JSON from provider response: {source}: {raw}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
        raw: String,
    },

    #[error("provider response is not a JSON object: {0}")]
    NotAnObject(String),
}

impl From<AdapterError> for AppError {
    fn from(err: AdapterError) -> Self {
        AppError::Upstream(format!("Analysis failed: {}", err))
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "detail": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
