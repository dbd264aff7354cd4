use crate::adapters::calculator::Calculator;
use crate::agents::error::ToolError;
use crate::domain::{
    FlightQuery, HotelQuery, SearchPort, Tool, ToolPort, WeatherPort, WebSearchPort,
};
use async_trait::async_trait;
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

#[derive(Deserialize, JsonSchema)]
struct FlightsInput {
    /// Flight search parameters
    params: FlightQuery,
}

#[derive(Deserialize, JsonSchema)]
struct HotelsInput {
    /// Hotel search parameters
    params: HotelQuery,
}

#[derive(Deserialize, JsonSchema)]
struct WeatherInput {
    /// City name
    city: String,
    /// Accepted for compatibility, current conditions only
    #[serde(default)]
    #[allow(dead_code)]
    date_str: Option<String>,
}

#[derive(Deserialize, JsonSchema)]
struct SearchInput {
    query: String,
}

#[derive(Deserialize, JsonSchema)]
struct CalculateInput {
    /// Arithmetic expression such as `200*7`
    operation: String,
}

/// Registry of the travel tools callable over `/api/tools`
pub struct TravelToolHandler {
    search: Arc<dyn SearchPort>,
    weather: Arc<dyn WeatherPort>,
    web: Arc<dyn WebSearchPort>,
    calculator: Calculator,
}

impl TravelToolHandler {
    pub fn new(
        search: Arc<dyn SearchPort>,
        weather: Arc<dyn WeatherPort>,
        web: Arc<dyn WebSearchPort>,
    ) -> Self {
        Self {
            search,
            weather,
            web,
            calculator: Calculator::new(),
        }
    }
}

/// Search tools take `{"params": {...}}`; a bare parameter object is accepted too.
fn search_params<T: DeserializeOwned>(args: Value) -> anyhow::Result<T> {
    let params = match args {
        Value::Object(mut map) if map.contains_key("params") => map.remove("params").unwrap_or_default(),
        other => other,
    };
    parse_args(params)
}

fn parse_args<T: DeserializeOwned>(args: Value) -> anyhow::Result<T> {
    serde_json::from_value(args)
        .map_err(|e| ToolError::InvalidInput(format!("Invalid tool arguments: {}", e)).into())
}

fn tool<T: JsonSchema>(name: &str, description: &str) -> anyhow::Result<Tool> {
    Ok(Tool {
        name: name.to_string(),
        description: description.to_string(),
        input_schema: serde_json::to_value(schema_for!(T))?,
    })
}

#[async_trait]
impl ToolPort for TravelToolHandler {
    async fn execute_tool(&self, name: &str, args: Value) -> anyhow::Result<Value> {
        tracing::info!(tool = name, "executing tool");
        match name {
            "flights_finder" => {
                let query: FlightQuery = search_params(args)?;
                let flights = self.search.find_flights(&query).await?;
                Ok(serde_json::to_value(flights)?)
            }
            "hotels_finder" => {
                let query: HotelQuery = search_params(args)?;
                let hotels = self.search.find_hotels(&query).await?;
                Ok(serde_json::to_value(hotels)?)
            }
            "weather_finder" => {
                let input: WeatherInput = parse_args(args)?;
                let report = self.weather.current_weather(&input.city).await;
                Ok(json!({ "result": report }))
            }
            "search_internet" => {
                let input: SearchInput = parse_args(args)?;
                let digest = self.web.search(&input.query).await;
                Ok(json!({ "result": digest }))
            }
            "calculate" => {
                let input: CalculateInput = parse_args(args)?;
                Ok(json!({ "result": self.calculator.calculate(&input.operation) }))
            }
            _ => Err(anyhow::anyhow!("Tool not found: {}", name)),
        }
    }

    async fn list_tools(&self) -> anyhow::Result<Vec<Tool>> {
        Ok(vec![
            tool::<FlightsInput>(
                "flights_finder",
                "Find flights using the Google Flights engine.",
            )?,
            tool::<HotelsInput>(
                "hotels_finder",
                "Find hotels using the Google Hotels engine.",
            )?,
            tool::<WeatherInput>(
                "weather_finder",
                "Get the current weather for a given city.",
            )?,
            tool::<SearchInput>(
                "search_internet",
                "Search the internet about a given topic and return relevant results.",
            )?,
            tool::<CalculateInput>(
                "calculate",
                "Evaluate an arithmetic expression such as `200*7` or `5000/2*10`.",
            )?,
        ])
    }
}
