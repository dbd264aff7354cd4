//! Configuration types for the LLM provider and the specialist roster

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::domain::AgentKind;

/// LLM provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmProviderConfig {
    /// Provider type
    #[serde(default)]
    pub provider: LlmProviderType,
    /// Model name/identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable containing the API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    /// Custom base URL (for self-hosted or proxied endpoints)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Default temperature for completions
    #[serde(default = "default_temperature")]
    pub temperature: Option<f32>,
    /// Default max tokens for completions
    #[serde(default = "default_max_tokens")]
    pub max_tokens: Option<u32>,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl Default for LlmProviderConfig {
    fn default() -> Self {
        Self {
            provider: LlmProviderType::default(),
            model: default_model(),
            api_key_env: None,
            base_url: None,
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_temperature() -> Option<f32> {
    Some(0.7)
}

fn default_max_tokens() -> Option<u32> {
    Some(200)
}

fn default_timeout() -> u64 {
    60
}

/// Supported LLM providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LlmProviderType {
    /// OpenAI or any OpenAI-compatible chat completions endpoint
    #[default]
    OpenAI,
    /// Ollama (local models)
    Ollama,
}

impl std::fmt::Display for LlmProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProviderType::OpenAI => write!(f, "openai"),
            LlmProviderType::Ollama => write!(f, "ollama"),
        }
    }
}

/// Roster and synthesis settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AgentsConfig {
    /// Max tokens for the router's final synthesis call
    #[serde(default = "default_synthesis_max_tokens")]
    pub synthesis_max_tokens: u32,
    /// Agents left out of the roster (by name)
    #[serde(default)]
    pub disabled: Vec<String>,
    /// Role prompt overrides (agent name -> system prompt)
    #[serde(default)]
    pub prompts: HashMap<String, String>,
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            synthesis_max_tokens: default_synthesis_max_tokens(),
            disabled: Vec::new(),
            prompts: HashMap::new(),
        }
    }
}

fn default_synthesis_max_tokens() -> u32 {
    400
}

impl AgentsConfig {
    /// Whether the agent should be placed in the roster
    pub fn is_enabled(&self, kind: AgentKind) -> bool {
        !self
            .disabled
            .iter()
            .any(|name| name.parse::<AgentKind>() == Ok(kind))
    }

    /// Role prompt for a prompted agent: configured override, else the built-in one
    pub fn role_prompt(&self, kind: AgentKind) -> Option<String> {
        self.prompts
            .iter()
            .find(|(name, _)| name.parse::<AgentKind>() == Ok(kind))
            .map(|(_, prompt)| prompt.clone())
            .or_else(|| kind.default_role_prompt().map(str::to_string))
    }
}

/// Role prompt override loaded from `config/agents/`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RolePromptFile {
    /// Agent name
    pub agent: String,
    /// Replacement system prompt
    pub system_prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_llm_defaults() {
        let config: LlmProviderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.provider, LlmProviderType::OpenAI);
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, Some(0.7));
        assert_eq!(config.max_tokens, Some(200));
    }

    #[test]
    fn test_role_prompt_override() {
        let mut config = AgentsConfig::default();
        config
            .prompts
            .insert("budget_analyst".to_string(), "Be frugal.".to_string());

        assert_eq!(config.role_prompt(AgentKind::BudgetAnalyst).as_deref(), Some("Be frugal."));
        assert_eq!(
            config.role_prompt(AgentKind::Accommodation).as_deref(),
            AgentKind::Accommodation.default_role_prompt()
        );
        assert_eq!(config.role_prompt(AgentKind::Weather), None);
    }

    #[test]
    fn test_disabled_agents() {
        let config = AgentsConfig {
            disabled: vec!["Transportation".to_string()],
            ..Default::default()
        };
        assert!(!config.is_enabled(AgentKind::Transportation));
        assert!(config.is_enabled(AgentKind::TripPlanner));
    }
}
