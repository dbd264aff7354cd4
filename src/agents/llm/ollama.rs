//! Ollama LLM Provider (for local models)

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{
    http_client, CompletionRequest, CompletionResponse, FinishReason, LlmProvider, TokenUsage,
};
use crate::agents::config::LlmProviderConfig;
use crate::agents::domain::Message;
use crate::agents::error::{LlmError, LlmResult};

/// Ollama LLM Provider (for local models)
pub struct OllamaProvider {
    client: reqwest::Client,
    base_url: String,
    model: String,
    default_temperature: Option<f32>,
    default_max_tokens: Option<u32>,
}

impl OllamaProvider {
    /// Create a new Ollama provider from configuration
    pub fn new(config: &LlmProviderConfig) -> LlmResult<Self> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "http://localhost:11434".to_string());

        Ok(Self {
            client: http_client(config)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            default_temperature: config.temperature,
            default_max_tokens: config.max_tokens,
        })
    }

    fn build_request_body(&self, request: &CompletionRequest) -> Value {
        json!({
            "model": request.model.as_ref().unwrap_or(&self.model),
            "messages": convert_messages(&request.messages),
            "stream": false,
            "options": {
                "temperature": request.temperature.or(self.default_temperature),
                "num_predict": request.max_tokens.or(self.default_max_tokens),
            }
        })
    }
}

fn convert_messages(messages: &[Message]) -> Vec<Value> {
    messages
        .iter()
        .map(|m| {
            json!({
                "role": m.role.as_str(),
                "content": m.content
            })
        })
        .collect()
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse> {
        let body = self.build_request_body(&request);
        tracing::debug!(model = %self.model, messages = request.messages.len(), "ollama completion");

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let ollama_response: OllamaResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(format!("Failed to parse response: {}", e)))?;

        let prompt_tokens = ollama_response.prompt_eval_count.unwrap_or(0);
        let completion_tokens = ollama_response.eval_count.unwrap_or(0);

        Ok(CompletionResponse {
            message: Message::assistant(ollama_response.message.content),
            finish_reason: if ollama_response.done {
                FinishReason::Stop
            } else {
                FinishReason::Length
            },
            usage: Some(TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            }),
        })
    }
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
    #[serde(default)]
    done: bool,
    prompt_eval_count: Option<u32>,
    eval_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}
