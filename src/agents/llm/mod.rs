//! LLM provider implementations
//!
//! This module provides a unified interface for the chat-completion service:
//! - OpenAI (and OpenAI-compatible endpoints)
//! - Ollama (local models)

mod ollama;
mod openai;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::agents::config::{LlmProviderConfig, LlmProviderType};
use crate::agents::domain::Message;
use crate::agents::error::{LlmError, LlmResult};

/// Trait for LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Get the model being used
    fn model(&self) -> &str;

    /// Complete a request
    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse>;

    /// Convenience wrapper returning only the completion text
    async fn complete_text(
        &self,
        messages: Vec<Message>,
        max_tokens: Option<u32>,
    ) -> LlmResult<String> {
        let response = self
            .complete(CompletionRequest {
                messages,
                max_tokens,
                ..Default::default()
            })
            .await?;
        Ok(response.message.content)
    }
}

/// Request for LLM completion
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Messages in the conversation
    pub messages: Vec<Message>,
    /// Model to use (overrides provider default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Temperature for sampling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Response from LLM completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Generated message
    pub message: Message,
    /// Reason the completion stopped
    pub finish_reason: FinishReason,
    /// Token usage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// Reason completion stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop
    Stop,
    /// Hit max tokens
    Length,
    /// Content filtered
    ContentFilter,
}

impl FinishReason {
    fn from_wire(reason: Option<&str>) -> Self {
        match reason {
            Some("length") => FinishReason::Length,
            Some("content_filter") => FinishReason::ContentFilter,
            _ => FinishReason::Stop,
        }
    }
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Shared HTTP client with the configured request timeout
fn http_client(config: &LlmProviderConfig) -> LlmResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| LlmError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))
}

/// Create an LLM provider from configuration
pub fn create_provider(config: &LlmProviderConfig) -> LlmResult<Arc<dyn LlmProvider>> {
    match config.provider {
        LlmProviderType::OpenAI => {
            let provider = OpenAiProvider::new(config)?;
            Ok(Arc::new(provider))
        }
        LlmProviderType::Ollama => {
            // Ollama doesn't require an API key
            let provider = OllamaProvider::new(config)?;
            Ok(Arc::new(provider))
        }
    }
}
