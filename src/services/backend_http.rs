//! HTTP adapter for the generative text backend.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{API_KEY_ENV, AppError, BackendConfig};
use crate::ports::{GeneratedText, GenerationRequest, TextGenerator, UsageRecord};

const API_KEY_HEADER: &str = "x-api-key";
const VERSION_HEADER: &str = "anthropic-version";
const API_VERSION: &str = "2023-06-01";
const DEFAULT_STATUS_MESSAGE: &str = "Backend request failed";

/// Blocking HTTP transport for the messages endpoint.
///
/// Performs a single request per call; what happens after a failure is the
/// orchestrator's decision.
#[derive(Clone)]
pub struct HttpTextGenerator {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpTextGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTextGenerator")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpTextGenerator {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &BackendConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::backend(format!("Failed to create HTTP client: {}", e), None))?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the `FOLIOGEN_API_KEY` environment variable.
    pub fn from_env(config: &BackendConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AppError::MissingApiKey(API_KEY_ENV.to_string()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<GeneratedText, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(VERSION_HEADER, API_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::backend(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                AppError::backend(format!("Failed to parse response: {}", e), Some(status.as_u16()))
            })?;

            let text = api_response
                .content
                .into_iter()
                .find_map(|block| block.text)
                .ok_or_else(|| {
                    AppError::backend("No text content in response", Some(status.as_u16()))
                })?;

            let usage = api_response
                .usage
                .map(|usage| UsageRecord { input: usage.input_tokens, output: usage.output_tokens });

            return Ok(GeneratedText { text, usage });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(AppError::Backend { message, status: Some(status.as_u16()) })
    }
}

impl TextGenerator for HttpTextGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<GeneratedText, AppError> {
        let api_request = ApiRequest {
            model: &request.model,
            max_tokens: request.max_tokens,
            temperature: request.temperature,
            system: request.system.as_deref(),
            messages: vec![ApiMessage { role: "user", content: &request.prompt }],
        };

        self.send_request(&api_request)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<ApiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ApiMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}
