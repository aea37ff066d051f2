//! OpenAI-compatible chat-completions driver.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};
use vermeer_core::{Completion, CompletionRequest, EngineConfig, Role};
use vermeer_error::{EngineError, EngineErrorKind, VermeerResult};
use vermeer_interface::CompletionDriver;

const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Wire message for the chat-completions request body.
#[derive(Debug, Clone, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Driver for OpenAI-compatible chat-completion endpoints.
///
/// The engine is stateless per call: every request re-sends the entire
/// session history. The request timeout comes from configuration; exceeding
/// it surfaces as a fatal [`EngineError`] for the in-flight request.
#[derive(Debug, Clone)]
pub struct OpenAiCompatClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    timeout_secs: u64,
}

impl OpenAiCompatClient {
    /// Create a client from engine configuration and an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: impl Into<String>, config: &EngineConfig) -> VermeerResult<Self> {
        let timeout_secs = *config.timeout_secs();
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| EngineError::new(EngineErrorKind::Request(e.to_string())))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url().clone(),
            model: config.model().clone(),
            temperature: *config.temperature(),
            max_tokens: *config.max_tokens(),
            timeout_secs,
        })
    }

    /// Create a client reading the API key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is not set.
    pub fn from_env(config: &EngineConfig) -> VermeerResult<Self> {
        let api_key = std::env::var(OPENAI_API_KEY_VAR).map_err(|_| {
            EngineError::new(EngineErrorKind::MissingApiKey(OPENAI_API_KEY_VAR.to_string()))
        })?;
        Self::new(api_key, config)
    }

    fn convert_request(&self, request: &CompletionRequest) -> ChatRequest {
        let messages = request
            .messages
            .iter()
            .map(|message| ChatMessage {
                role: wire_role(message.role),
                content: message.content.clone(),
            })
            .collect();

        ChatRequest {
            model: request.model.clone().unwrap_or_else(|| self.model.clone()),
            messages,
            temperature: request.temperature.or(Some(self.temperature)),
            max_tokens: request.max_tokens.or(self.max_tokens),
        }
    }
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

fn completion_from_response(response: ChatResponse) -> VermeerResult<Completion> {
    let text = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| EngineError::new(EngineErrorKind::EmptyCompletion))?;
    Ok(Completion { text })
}

#[async_trait]
impl CompletionDriver for OpenAiCompatClient {
    #[instrument(skip(self, request), fields(provider = "openai", model = %self.model, messages = request.messages.len()))]
    async fn complete(&self, request: &CompletionRequest) -> VermeerResult<Completion> {
        let body = self.convert_request(request);
        debug!(endpoint = %self.base_url, "Sending completion request");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!(timeout_secs = self.timeout_secs, "Engine call timed out");
                    EngineError::new(EngineErrorKind::Timeout(self.timeout_secs))
                } else {
                    error!(error = %e, "Engine request failed");
                    EngineError::new(EngineErrorKind::Request(e.to_string()))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            error!(status, "Engine endpoint returned an error");
            return Err(EngineError::new(EngineErrorKind::Api { status, message }).into());
        }

        let parsed: ChatResponse = response.json().await.map_err(|e| {
            error!(error = %e, "Failed to decode completion payload");
            EngineError::new(EngineErrorKind::MalformedResponse(e.to_string()))
        })?;

        let completion = completion_from_response(parsed)?;
        debug!(completion_len = completion.text.len(), "Received completion");
        Ok(completion)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
