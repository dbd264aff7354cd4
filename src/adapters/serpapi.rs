//! SerpAPI client for the Google Flights and Google Hotels engines

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use super::endpoint::ApiEndpoint;
use crate::agents::error::{ToolError, ToolResult};
use crate::config::EndpointConfig;
use crate::domain::{FlightOption, FlightQuery, HotelProperty, HotelQuery, SearchPort};

/// Hotels returned per search
const MAX_HOTELS: usize = 5;

pub struct SerpApiClient {
    endpoint: ApiEndpoint,
}

impl SerpApiClient {
    /// Create a client, reading the API key from the configured variable.
    pub fn new(config: &EndpointConfig) -> ToolResult<Self> {
        Self::with_api_key(config, config.env_api_key())
    }

    pub fn with_api_key(config: &EndpointConfig, api_key: Option<SecretString>) -> ToolResult<Self> {
        Ok(Self {
            endpoint: ApiEndpoint::connect(config, api_key)?,
        })
    }

    /// GET `/search.json` with the common locale parameters
    async fn search(&self, engine: &str, mut params: Vec<(&str, String)>) -> ToolResult<Value> {
        let api_key = self.endpoint.api_key()?;

        params.extend([
            ("engine", engine.to_string()),
            ("hl", "en".to_string()),
            ("gl", "us".to_string()),
            ("currency", "USD".to_string()),
        ]);
        tracing::debug!(engine, ?params, "calling SerpAPI");
        params.push(("api_key", api_key.expose_secret().to_string()));

        let response = self
            .endpoint
            .client()
            .get(self.endpoint.url("search.json"))
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        let body: Value = response.json().await?;
        let error = body.get("error").and_then(Value::as_str);

        if !status.is_success() {
            return Err(ToolError::Api {
                status: status.as_u16(),
                message: error.map(str::to_string).unwrap_or_else(|| body.to_string()),
            });
        }
        // an empty search is a 200 carrying {"error": "... hasn't returned any results ..."}
        if let Some(message) = error {
            tracing::warn!(engine, error = message, "SerpAPI returned no results");
        }

        Ok(body)
    }
}

fn take_array(body: &mut Value, key: &str) -> Value {
    match body.get_mut(key).map(Value::take) {
        Some(array @ Value::Array(_)) => array,
        _ => Value::Array(Vec::new()),
    }
}

#[async_trait]
impl SearchPort for SerpApiClient {
    async fn find_flights(&self, query: &FlightQuery) -> ToolResult<Vec<FlightOption>> {
        let params = vec![
            ("departure_id", query.departure_airport.clone()),
            ("arrival_id", query.arrival_airport.clone()),
            ("outbound_date", query.outbound_date.clone()),
            ("return_date", query.return_date.clone()),
            ("adults", query.adults.to_string()),
            ("children", query.children.to_string()),
            ("infants_in_seat", query.infants_in_seat.to_string()),
            ("infants_on_lap", query.infants_on_lap.to_string()),
        ];

        let mut body = self.search("google_flights", params).await?;
        let flights: Vec<FlightOption> = serde_json::from_value(take_array(&mut body, "best_flights"))?;
        tracing::debug!(count = flights.len(), "flight options received");
        Ok(flights)
    }

    async fn find_hotels(&self, query: &HotelQuery) -> ToolResult<Vec<HotelProperty>> {
        let mut params = vec![
            ("q", query.q.clone()),
            ("check_in_date", query.check_in_date.clone()),
            ("check_out_date", query.check_out_date.clone()),
            ("adults", query.adults.to_string()),
            ("children", query.children.to_string()),
            ("rooms", query.rooms.to_string()),
        ];
        if let Some(class) = &query.hotel_class {
            params.push(("hotel_class", class.clone()));
        }

        let mut body = self.search("google_hotels", params).await?;
        let mut hotels: Vec<HotelProperty> = serde_json::from_value(take_array(&mut body, "properties"))?;
        hotels.truncate(MAX_HOTELS);
        tracing::debug!(count = hotels.len(), "hotel properties received");
        Ok(hotels)
    }
}
