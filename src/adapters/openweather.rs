//! OpenWeatherMap current-weather client

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use super::endpoint::ApiEndpoint;
use crate::agents::error::ToolResult;
use crate::config::EndpointConfig;
use crate::domain::WeatherPort;

pub struct OpenWeatherClient {
    endpoint: ApiEndpoint,
}

impl OpenWeatherClient {
    pub fn new(config: &EndpointConfig) -> ToolResult<Self> {
        Self::with_api_key(config, config.env_api_key())
    }

    pub fn with_api_key(config: &EndpointConfig, api_key: Option<SecretString>) -> ToolResult<Self> {
        Ok(Self {
            endpoint: ApiEndpoint::connect(config, api_key)?,
        })
    }

    async fn fetch(&self, city: &str) -> ToolResult<Value> {
        let api_key = self.endpoint.api_key()?;

        let response = self
            .endpoint
            .client()
            .get(self.endpoint.url("weather"))
            .query(&[
                ("q", city),
                ("appid", api_key.expose_secret()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        Ok(response.json().await?)
    }
}

/// One-line report, or None when the payload lacks the expected fields
fn describe(city: &str, data: &Value) -> Option<String> {
    let main = data.get("main")?;
    let temp = main.get("temp").filter(|t| t.is_number())?;
    let description = data
        .get("weather")?
        .get(0)?
        .get("description")?
        .as_str()?;
    Some(format!(
        "Current weather in {}: {}, {}°C.",
        city, description, temp
    ))
}

#[async_trait]
impl WeatherPort for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> String {
        if city.is_empty() {
            return "No city provided.".to_string();
        }

        match self.fetch(city).await {
            Ok(data) => describe(city, &data).unwrap_or_else(|| {
                tracing::warn!(city, "unexpected weather payload");
                format!("Could not fetch weather for {}. Response: {}", city, data)
            }),
            Err(e) => {
                tracing::warn!(city, error = %e, "weather lookup failed");
                format!("Error calling weather API: {}", e)
            }
        }
    }
}
