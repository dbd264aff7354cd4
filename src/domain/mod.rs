use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod travel;

pub use travel::*;

use crate::agents::error::ToolResult;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Tool {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Tool registry exposed over the HTTP tool endpoints
#[async_trait]
pub trait ToolPort: Send + Sync {
    async fn execute_tool(&self, name: &str, args: Value) -> anyhow::Result<Value>;
    async fn list_tools(&self) -> anyhow::Result<Vec<Tool>>;
}

/// Flight and hotel search backend
#[async_trait]
pub trait SearchPort: Send + Sync {
    /// Best flight options for a round trip
    async fn find_flights(&self, query: &FlightQuery) -> ToolResult<Vec<FlightOption>>;

    /// Hotel properties, at most five
    async fn find_hotels(&self, query: &HotelQuery) -> ToolResult<Vec<HotelProperty>>;
}

/// Current-weather lookup.
///
/// Failures are reported inside the returned text, never as an error.
#[async_trait]
pub trait WeatherPort: Send + Sync {
    async fn current_weather(&self, city: &str) -> String;
}

/// Free-text web search returning a plain-text digest
#[async_trait]
pub trait WebSearchPort: Send + Sync {
    async fn search(&self, query: &str) -> String;
}
