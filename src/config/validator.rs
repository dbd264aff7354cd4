use std::collections::BTreeMap;
use thiserror::Error;

use crate::agents::domain::AgentKind;
use crate::config::{EndpointConfig, ServerSettings, Settings};

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Unknown agent '{name}' in {field}")]
    UnknownAgent { field: String, name: String },
}

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(settings: &Settings) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        errors.extend(Self::validate_server(&settings.server));
        errors.extend(Self::validate_llm(settings));
        errors.extend(Self::validate_agents(settings));

        let tools = &settings.tools;
        for (name, endpoint) in [
            ("serpapi", &tools.serpapi),
            ("weather", &tools.weather),
            ("web_search", &tools.web_search),
        ] {
            errors.extend(Self::validate_endpoint(&format!("tools.{}", name), endpoint));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_server(server: &ServerSettings) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if server.host.is_empty() {
            errors.push(ValidationError::MissingField("server.host".to_string()));
        }

        if server.port == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "server.port".to_string(),
                reason: "Port must be greater than 0".to_string(),
            });
        }

        errors
    }

    fn validate_llm(settings: &Settings) -> Vec<ValidationError> {
        let llm = &settings.llm;
        let mut errors = Vec::new();

        if llm.model.trim().is_empty() {
            errors.push(ValidationError::MissingField("llm.model".to_string()));
        }

        if llm.timeout_seconds == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "llm.timeout_seconds".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if let Some(url) = &llm.base_url {
            if !is_http_url(url) {
                errors.push(ValidationError::InvalidValue {
                    field: "llm.base_url".to_string(),
                    reason: format!("'{}' is not an http(s) URL", url),
                });
            }
        }

        if let Some(temperature) = llm.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                errors.push(ValidationError::InvalidValue {
                    field: "llm.temperature".to_string(),
                    reason: "Temperature must be between 0 and 2".to_string(),
                });
            }
        }

        errors
    }

    fn validate_agents(settings: &Settings) -> Vec<ValidationError> {
        let agents = &settings.agents;
        let mut errors = Vec::new();

        for name in &agents.disabled {
            if name.parse::<AgentKind>().is_err() {
                errors.push(ValidationError::UnknownAgent {
                    field: "agents.disabled".to_string(),
                    name: name.clone(),
                });
            }
        }

        let mut spellings: BTreeMap<AgentKind, Vec<&str>> = BTreeMap::new();
        for name in agents.prompts.keys() {
            match name.parse::<AgentKind>() {
                Ok(kind) if kind.is_prompted() => spellings.entry(kind).or_default().push(name),
                Ok(_) => errors.push(ValidationError::InvalidValue {
                    field: format!("agents.prompts.{}", name),
                    reason: "This agent does not use a role prompt".to_string(),
                }),
                Err(_) => errors.push(ValidationError::UnknownAgent {
                    field: "agents.prompts".to_string(),
                    name: name.clone(),
                }),
            }
        }

        // one override per agent, however it is spelled
        for (kind, mut names) in spellings {
            if names.len() > 1 {
                names.sort_unstable();
                errors.push(ValidationError::InvalidValue {
                    field: format!("agents.prompts.{}", kind.name()),
                    reason: format!("Configured more than once as {}", names.join(", ")),
                });
            }
        }

        if agents.synthesis_max_tokens == 0 {
            errors.push(ValidationError::InvalidValue {
                field: "agents.synthesis_max_tokens".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        errors
    }

    fn validate_endpoint(field: &str, endpoint: &EndpointConfig) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if !is_http_url(&endpoint.base_url) {
            errors.push(ValidationError::InvalidValue {
                field: format!("{}.base_url", field),
                reason: format!("'{}' is not an http(s) URL", endpoint.base_url),
            });
        }

        if endpoint.api_key_env.is_empty() {
            errors.push(ValidationError::MissingField(format!("{}.api_key_env", field)));
        }

        if endpoint.timeout_seconds == 0 {
            errors.push(ValidationError::InvalidValue {
                field: format!("{}.timeout_seconds", field),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        errors
    }
}

fn is_http_url(url: &str) -> bool {
    reqwest::Url::parse(url)
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host().is_some())
        .unwrap_or(false)
}
