//! Error types for the travel agent system

use thiserror::Error;

/// Errors that can occur during agent operations
#[derive(Debug, Error)]
pub enum AgentError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Data tool error (flight/hotel search)
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    /// Trip facts that could not be interpreted
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors specific to LLM provider operations
#[derive(Debug, Error)]
pub enum LlmError {
    /// API error
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Authentication error
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

/// Errors raised by the external data tools
#[derive(Debug, Error)]
pub enum ToolError {
    /// Upstream answered with an error payload or status
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Response did not match the expected shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Missing API key or similar setup problem
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Arguments rejected before any call was made
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::Network(format!("Connection error: {}", err))
        } else {
            LlmError::Network(err.to_string())
        }
    }
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ToolError::Timeout
        } else if err.is_decode() {
            ToolError::Parse(err.to_string())
        } else {
            ToolError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ToolError {
    fn from(err: serde_json::Error) -> Self {
        ToolError::Parse(err.to_string())
    }
}

impl From<tera::Error> for AgentError {
    fn from(err: tera::Error) -> Self {
        AgentError::Internal(format!("Template error: {}", err))
    }
}

/// Result type alias for agent operations
pub type AgentResult<T> = Result<T, AgentError>;

/// Result type alias for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Result type alias for data tool operations
pub type ToolResult<T> = Result<T, ToolError>;
