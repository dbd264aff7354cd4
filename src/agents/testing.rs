//! Test doubles for the completion service and the data tools

use async_trait::async_trait;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::agents::domain::Message;
use crate::agents::error::{LlmError, LlmResult, ToolError, ToolResult};
use crate::agents::llm::{CompletionRequest, CompletionResponse, FinishReason, LlmProvider};
use crate::domain::{
    FlightOption, FlightQuery, HotelProperty, HotelQuery, SearchPort, WeatherPort, WebSearchPort,
};

/// Provider answering from a fixed script and recording every request
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<String>>,
    fail_on: Option<String>,
    error: Option<String>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedProvider {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            fail_on: None,
            error: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with an API error carrying `message`
    pub fn failing(message: &str) -> Self {
        let mut provider = Self::new(Vec::<String>::new());
        provider.error = Some(message.to_string());
        provider
    }

    /// Fail calls whose messages contain `needle`; other calls follow the script
    pub fn fail_when(mut self, needle: &str) -> Self {
        self.fail_on = Some(needle.to_string());
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
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
        self.requests.lock().unwrap().push(request.clone());

        let matches_failure = self.fail_on.as_deref().map_or(false, |needle| {
            request.messages.iter().any(|m| m.content.contains(needle))
        });
        if let Some(message) = &self.error {
            return Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            });
        }
        if matches_failure {
            return Err(LlmError::Api {
                status: 503,
                message: "upstream unavailable".to_string(),
            });
        }

        let content = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| LlmError::InvalidRequest("script exhausted".to_string()))?;

        Ok(CompletionResponse {
            message: Message::assistant(content),
            finish_reason: FinishReason::Stop,
            usage: None,
        })
    }
}

/// Search backend returning canned results and recording queries
#[derive(Default)]
pub struct StubSearch {
    flights: Vec<FlightOption>,
    hotels: Vec<HotelProperty>,
    error: Option<String>,
    flight_queries: Mutex<Vec<FlightQuery>>,
    hotel_queries: Mutex<Vec<HotelQuery>>,
}

impl StubSearch {
    pub fn new(flights: Vec<FlightOption>, hotels: Vec<HotelProperty>) -> Self {
        Self {
            flights,
            hotels,
            ..Default::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn flight_queries(&self) -> Vec<FlightQuery> {
        self.flight_queries.lock().unwrap().clone()
    }

    pub fn hotel_queries(&self) -> Vec<HotelQuery> {
        self.hotel_queries.lock().unwrap().clone()
    }

    fn check(&self) -> ToolResult<()> {
        match &self.error {
            Some(message) => Err(ToolError::Api {
                status: 401,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SearchPort for StubSearch {
    async fn find_flights(&self, query: &FlightQuery) -> ToolResult<Vec<FlightOption>> {
        self.flight_queries.lock().unwrap().push(query.clone());
        self.check()?;
        Ok(self.flights.clone())
    }

    async fn find_hotels(&self, query: &HotelQuery) -> ToolResult<Vec<HotelProperty>> {
        self.hotel_queries.lock().unwrap().push(query.clone());
        self.check()?;
        Ok(self.hotels.clone())
    }
}

/// Weather lookup answering "clear sky, 21°C" for any city
#[derive(Default)]
pub struct StubWeather {
    cities: Mutex<Vec<String>>,
}

impl StubWeather {
    pub fn cities(&self) -> Vec<String> {
        self.cities.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherPort for StubWeather {
    async fn current_weather(&self, city: &str) -> String {
        self.cities.lock().unwrap().push(city.to_string());
        if city.is_empty() {
            return "No city provided.".to_string();
        }
        format!("Current weather in {}: clear sky, 21°C.", city)
    }
}

/// Web search echoing the query
#[derive(Default)]
pub struct StubWebSearch;

#[async_trait]
impl WebSearchPort for StubWebSearch {
    async fn search(&self, query: &str) -> String {
        format!("Title: {}\nLink: https://search.test\nSnippet: stub\n-----------------", query)
    }
}

pub fn sample_flights() -> Vec<FlightOption> {
    serde_json::from_value(json!([
        {
            "flights": [{
                "airline": "TAP Air Portugal",
                "departure_airport": { "id": "BOS", "time": "2025-06-01 18:05" },
                "arrival_airport": { "id": "LIS", "time": "2025-06-02 05:50" },
                "duration": 405,
                "airplane": "Airbus A330neo",
                "airline_logo": "https://logos.test/tp.png"
            }],
            "price": 612
        },
        {
            "flights": [{
                "airline": "Delta",
                "departure_airport": { "id": "BOS", "time": "2025-06-01 21:30" },
                "arrival_airport": { "id": "LIS", "time": "2025-06-02 09:25" },
                "duration": 415
            }],
            "price": 701
        }
    ]))
    .unwrap()
}

pub fn sample_hotels() -> Vec<HotelProperty> {
    serde_json::from_value(json!([
        {
            "name": "Memmo Alfama",
            "description": "Boutique hotel with river views",
            "rate_per_night": { "lowest": "$180" },
            "images": [{ "thumbnail": "https://img.test/memmo.jpg" }]
        }
    ]))
    .unwrap()
}
