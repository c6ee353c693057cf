//! OpenAI chat-completion adapter.
//!
//! Each prompt is sent as a single user message; the first choice's message
//! content is returned whole (no streaming).

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::{AdapterOutput, CompletionAdapter};
use crate::core::error::GenerationError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI-compatible chat completion client
pub struct OpenAiAdapter {
    api_key: String,
    base_url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    total_tokens: u64,
}

impl OpenAiAdapter {
    /// Create a client against the public OpenAI API with the default model
    pub fn new(api_key: String) -> Self {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_MODEL)
    }

    /// Create a client with a custom endpoint and model
    pub fn with_options(
        api_key: String,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn build_request<'a>(&'a self, prompt: &'a str, temperature: f32) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            temperature,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        }
    }
}

fn status_error(status: StatusCode, body: String) -> GenerationError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GenerationError::Authentication(body),
        StatusCode::TOO_MANY_REQUESTS => GenerationError::RateLimit(body),
        _ => GenerationError::Provider {
            status: status.as_u16(),
            body,
        },
    }
}

fn parse_response(body: &str) -> Result<AdapterOutput, GenerationError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| GenerationError::Decode(e.to_string()))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| GenerationError::Decode("response contained no message content".into()))?;

    Ok(AdapterOutput {
        content,
        tokens_used: response.usage.map(|u| u.total_tokens),
    })
}

#[async_trait]
impl CompletionAdapter for OpenAiAdapter {
    fn name(&self) -> &str {
        "openai"
    }

    #[instrument(skip(self, prompt), fields(adapter = "openai", model = %self.model, prompt_bytes = prompt.len()))]
    async fn complete(
        &self,
        prompt: &str,
        temperature: f32,
    ) -> Result<AdapterOutput, GenerationError> {
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&self.build_request(prompt, temperature))
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(status_error(status, body));
        }

        let output = parse_response(&body)?;
        debug!(tokens_used = ?output.tokens_used, "Completion received");

        Ok(output)
    }
}
