//! Shared doubles for the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wayfarer::adapters::api_handler::ApiState;
use wayfarer::adapters::health_handler::HealthHandler;
use wayfarer::adapters::tool_handler::TravelToolHandler;
use wayfarer::agents::domain::Message;
use wayfarer::agents::error::{LlmError, LlmResult, ToolResult};
use wayfarer::agents::llm::{CompletionRequest, CompletionResponse, FinishReason, LlmProvider};
use wayfarer::agents::{AgentsConfig, TravelAgentHandler};
use wayfarer::domain::{
    FlightOption, FlightQuery, HotelProperty, HotelQuery, SearchPort, WeatherPort, WebSearchPort,
};

/// Provider answering from a fixed script
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Content of every message sent, one entry per request
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    fn name(&self) -> &str {
        "scripted"
    }

    fn model(&self) -> &str {
        "scripted-model"
    }

    async fn complete(&self, request: CompletionRequest) -> LlmResult<CompletionResponse> {
        let joined = request
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        self.prompts.lock().unwrap().push(joined);

        let content = self.responses.lock().unwrap().pop_front().ok_or_else(|| LlmError::Api {
            status: 500,
            message: "script exhausted".to_string(),
        })?;

        Ok(CompletionResponse {
            message: Message::assistant(content),
            finish_reason: FinishReason::Stop,
            usage: None,
        })
    }
}

pub struct FixtureSearch;

#[async_trait]
impl SearchPort for FixtureSearch {
    async fn find_flights(&self, _query: &FlightQuery) -> ToolResult<Vec<FlightOption>> {
        Ok(serde_json::from_value(json!([{
            "flights": [{
                "airline": "TAP Air Portugal",
                "departure_airport": { "id": "BOS", "time": "2025-06-01 18:05" },
                "arrival_airport": { "id": "LIS", "time": "2025-06-02 05:50" },
                "duration": 405
            }],
            "price": 612
        }]))?)
    }

    async fn find_hotels(&self, _query: &HotelQuery) -> ToolResult<Vec<HotelProperty>> {
        Ok(serde_json::from_value(json!([{
            "name": "Memmo Alfama",
            "rate_per_night": { "lowest": "$180" }
        }]))?)
    }
}

pub struct FixtureWeather;

#[async_trait]
impl WeatherPort for FixtureWeather {
    async fn current_weather(&self, city: &str) -> String {
        format!("Current weather in {}: clear sky, 21°C.", city)
    }
}

pub struct FixtureWebSearch;

#[async_trait]
impl WebSearchPort for FixtureWebSearch {
    async fn search(&self, query: &str) -> String {
        format!("Title: {}\nLink: https://search.test\nSnippet: fixture\n-----------------", query)
    }
}

/// Full application over the fixtures and a scripted provider
pub fn app(llm: Arc<ScriptedProvider>) -> axum::Router {
    let search = Arc::new(FixtureSearch);
    let weather = Arc::new(FixtureWeather);

    let travel = Arc::new(
        TravelAgentHandler::new(llm, search.clone(), weather.clone(), &AgentsConfig::default())
            .unwrap(),
    );
    let health = Arc::new(HealthHandler::new("scripted", travel.roster()));
    let tools = Arc::new(TravelToolHandler::new(search, weather, Arc::new(FixtureWebSearch)));

    wayfarer::create_app(ApiState { travel, tools }, health)
}
