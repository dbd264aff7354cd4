use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod validator;

use crate::agents::config::{AgentsConfig, LlmProviderConfig, RolePromptFile};
use crate::cli::Cli;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub llm: LlmProviderConfig,
    #[serde(default)]
    pub agents: AgentsConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// External data tool endpoints
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    pub serpapi: EndpointConfig,
    pub weather: EndpointConfig,
    pub web_search: EndpointConfig,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            serpapi: EndpointConfig::new("https://serpapi.com", "SERPAPI_API_KEY"),
            weather: EndpointConfig::new(
                "https://api.openweathermap.org/data/2.5",
                "OPENWEATHER_API_KEY",
            ),
            web_search: EndpointConfig::new("https://google.serper.dev", "SERPER_API_KEY"),
        }
    }
}

/// Base URL, key variable and timeout for one HTTP API
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointConfig {
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    #[serde(default = "default_tool_timeout")]
    pub timeout_seconds: u64,
}

impl EndpointConfig {
    pub fn new(base_url: &str, api_key_env: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key_env: api_key_env.to_string(),
            timeout_seconds: default_tool_timeout(),
        }
    }
}

fn default_tool_timeout() -> u64 {
    30
}

impl Settings {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::from_root(".")
    }

    /// Create settings from CLI arguments (includes config file and CLI overrides)
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let config_path = &cli.config;
        let root = config_path
            .parent()
            .and_then(|p| p.to_str())
            .filter(|p| !p.is_empty())
            .unwrap_or(".");

        let mut settings = Self::load(Config::builder().add_source(
            File::from(config_path.clone()).required(false),
        ))?;

        // CLI > env vars > config file
        settings.apply_cli_overrides(cli);

        settings.finish(root)
    }

    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("wayfarer");
        let settings = Self::load(
            Config::builder().add_source(File::from(config_path).required(false)),
        )?;
        settings.finish(root)
    }

    fn load(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, anyhow::Error> {
        let tools = ToolsConfig::default();
        let s = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("tools.serpapi.base_url", tools.serpapi.base_url)?
            .set_default("tools.serpapi.api_key_env", tools.serpapi.api_key_env)?
            .set_default("tools.weather.base_url", tools.weather.base_url)?
            .set_default("tools.weather.api_key_env", tools.weather.api_key_env)?
            .set_default("tools.web_search.base_url", tools.web_search.base_url)?
            .set_default("tools.web_search.api_key_env", tools.web_search.api_key_env)?
            .build()?;

        Ok(s.try_deserialize()?)
    }

    /// Load prompt override files and validate
    fn finish(mut self, root: &str) -> Result<Self, anyhow::Error> {
        self.load_role_prompts_from_dir(&format!("{}/config/agents", root))?;

        validator::ConfigValidator::validate(&self).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })?;

        Ok(self)
    }

    /// Apply CLI argument overrides to settings
    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(model) = &cli.model {
            self.llm.model = model.clone();
        }
    }

    fn load_role_prompts_from_dir(&mut self, path: &str) -> Result<(), anyhow::Error> {
        let pattern = format!("{}/*", path);
        for entry in glob::glob(&pattern)? {
            match entry {
                Ok(path) => {
                    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
                        if matches!(ext, "json" | "yaml" | "yml" | "toml") {
                            let content = std::fs::read_to_string(&path)?;
                            let prompt: RolePromptFile = match ext {
                                "json" => serde_json::from_str(&content)?,
                                "toml" => toml::from_str(&content)?,
                                _ => serde_yaml::from_str(&content)?,
                            };
                            tracing::debug!(agent = %prompt.agent, file = %path.display(), "role prompt override");
                            self.agents.prompts.insert(prompt.agent, prompt.system_prompt);
                        }
                    }
                }
                Err(e) => tracing::warn!("Failed to read glob entry: {}", e),
            }
        }
        Ok(())
    }
}
