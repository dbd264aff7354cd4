//! HTTP plumbing shared by the keyed data APIs

use secrecy::SecretString;
use std::time::Duration;

use crate::agents::error::{ToolError, ToolResult};
use crate::config::EndpointConfig;

/// Client, base URL and API key for one external API
pub struct ApiEndpoint {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<SecretString>,
    api_key_env: String,
}

impl ApiEndpoint {
    /// A missing key is reported on first use, not here.
    pub fn connect(config: &EndpointConfig, api_key: Option<SecretString>) -> ToolResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ToolError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            api_key_env: config.api_key_env.clone(),
        })
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn api_key(&self) -> ToolResult<&SecretString> {
        self.api_key.as_ref().ok_or_else(|| {
            ToolError::Configuration(format!("Environment variable {} not set", self.api_key_env))
        })
    }
}

impl EndpointConfig {
    /// Key from the configured environment variable, warning when it is unset
    pub fn env_api_key(&self) -> Option<SecretString> {
        let api_key = std::env::var(&self.api_key_env).ok().map(SecretString::from);
        if api_key.is_none() {
            tracing::warn!(var = %self.api_key_env, base_url = %self.base_url, "API key not set, calls will fail");
        }
        api_key
    }
}
