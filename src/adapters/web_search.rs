//! Serper web search client

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{json, Value};

use super::endpoint::ApiEndpoint;
use crate::agents::error::ToolResult;
use crate::config::EndpointConfig;
use crate::domain::WebSearchPort;

/// Organic results included in the digest
const TOP_RESULTS: usize = 4;

const NO_RESULTS: &str = "Sorry, no results found. Please check your SERPER API key.";

pub struct SerperClient {
    endpoint: ApiEndpoint,
}

impl SerperClient {
    pub fn new(config: &EndpointConfig) -> ToolResult<Self> {
        Self::with_api_key(config, config.env_api_key())
    }

    pub fn with_api_key(config: &EndpointConfig, api_key: Option<SecretString>) -> ToolResult<Self> {
        Ok(Self {
            endpoint: ApiEndpoint::connect(config, api_key)?,
        })
    }

    async fn fetch(&self, query: &str) -> ToolResult<Value> {
        let api_key = self.endpoint.api_key()?;

        let response = self
            .endpoint
            .client()
            .post(self.endpoint.url("search"))
            .header("X-API-KEY", api_key.expose_secret())
            .json(&json!({ "q": query }))
            .send()
            .await?;

        Ok(response.json().await?)
    }
}

/// Title/link/snippet blocks for the top organic results.
///
/// Results missing any of the three fields are skipped.
pub fn format_results(data: &Value) -> String {
    let Some(organic) = data.get("organic").and_then(Value::as_array) else {
        return NO_RESULTS.to_string();
    };

    organic
        .iter()
        .take(TOP_RESULTS)
        .filter_map(|result| {
            let title = result.get("title")?.as_str()?;
            let link = result.get("link")?.as_str()?;
            let snippet = result.get("snippet")?.as_str()?;
            Some(format!(
                "Title: {}\nLink: {}\nSnippet: {}\n-----------------",
                title, link, snippet
            ))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[async_trait]
impl WebSearchPort for SerperClient {
    async fn search(&self, query: &str) -> String {
        tracing::debug!(query, "web search");
        match self.fetch(query).await {
            Ok(data) => format_results(&data),
            Err(e) => format!("Error fetching search results: {}", e),
        }
    }
}
