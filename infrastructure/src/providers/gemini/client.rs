//! Gemini HTTP client
//!
//! One [`reqwest::Client`] is built at construction and reused for every
//! request in the session.

use super::types::{GeminiRequest, GeminiResponse};
use async_trait::async_trait;
use quizgen_application::{GatewayError, GenerationClient};
use quizgen_domain::{Model, truncate};
use reqwest::StatusCode;
use tracing::{debug, warn};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Bytes of an error body kept in error messages.
const ERROR_BODY_PREVIEW: usize = 300;

/// Connection settings for [`GeminiClient`].
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: Model,
    pub base_url: String,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: Model,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, GatewayError> {
        if config.api_key.trim().is_empty() {
            return Err(GatewayError::MissingCredential(
                "Gemini API key is empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .user_agent(concat!("quizgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GatewayError::Other(format!("Failed to build HTTP client: {}", e)))?;

        let endpoint = endpoint_url(&config.base_url, &config.model);
        debug!(%endpoint, "Gemini client ready");

        Ok(Self {
            http,
            api_key: config.api_key.trim().to_string(),
            model: config.model,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let response = self
            .http
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GeminiRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini API returned an error status");
            return Err(map_status(status, &body));
        }

        let body: GeminiResponse = response.json().await.map_err(map_transport_error)?;

        if let Some(error) = body.error {
            return Err(GatewayError::RequestFailed(format!(
                "Gemini error: {}",
                error.message
            )));
        }

        match body.text() {
            Some(text) => Ok(text),
            None => {
                debug!(finish_reason = ?body.finish_reason(), "Gemini returned no text");
                Err(GatewayError::EmptyResponse)
            }
        }
    }
}

fn endpoint_url(base_url: &str, model: &Model) -> String {
    format!(
        "{}/v1beta/models/{}:generateContent",
        base_url.trim().trim_end_matches('/'),
        model.as_str()
    )
}

fn map_status(status: StatusCode, body: &str) -> GatewayError {
    let detail = format!("{}: {}", status, truncate(body.trim(), ERROR_BODY_PREVIEW));
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::AuthenticationFailed(detail),
        _ => GatewayError::RequestFailed(detail),
    }
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else if error.is_decode() {
        GatewayError::RequestFailed(format!("Malformed Gemini response: {}", error))
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}
