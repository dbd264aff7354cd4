//! Flight and hotel search records
//!
//! Query types double as tool argument schemas. Result types cover only the
//! part of the search payload the trip planner renders; every field is
//! optional because the upstream shape varies between results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

fn one() -> u32 {
    1
}

/// Round-trip flight search parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlightQuery {
    /// Departure airport code (IATA)
    #[serde(default)]
    pub departure_airport: String,
    /// Arrival airport code (IATA)
    #[serde(default)]
    pub arrival_airport: String,
    /// Outbound date YYYY-MM-DD
    #[serde(default)]
    pub outbound_date: String,
    /// Return date YYYY-MM-DD
    #[serde(default)]
    pub return_date: String,
    /// Number of adults
    #[serde(default = "one")]
    pub adults: u32,
    /// Number of children
    #[serde(default)]
    pub children: u32,
    /// Infants in seat
    #[serde(default)]
    pub infants_in_seat: u32,
    /// Infants on lap
    #[serde(default)]
    pub infants_on_lap: u32,
}

/// Hotel search parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HotelQuery {
    /// City or location for the hotel search
    pub q: String,
    /// Check-in date YYYY-MM-DD
    #[serde(default)]
    pub check_in_date: String,
    /// Check-out date YYYY-MM-DD
    #[serde(default)]
    pub check_out_date: String,
    /// Number of adults. Default 1.
    #[serde(default = "one")]
    pub adults: u32,
    /// Number of children. Default 0.
    #[serde(default)]
    pub children: u32,
    /// Number of rooms. Default 1.
    #[serde(default = "one")]
    pub rooms: u32,
    /// Filter by hotel class, e.g. 3,4,5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hotel_class: Option<String>,
}

/// One entry of the `best_flights` list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightOption {
    #[serde(default)]
    pub flights: Vec<FlightSegment>,
    /// Usually a number, sometimes a preformatted string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_logo: Option<String>,
}

impl FlightOption {
    /// Price as displayed, `N/A` when absent
    pub fn price_label(&self) -> String {
        match &self.price {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "N/A".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// A single leg of a flight option
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlightSegment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline: Option<String>,
    #[serde(default)]
    pub departure_airport: AirportTime,
    #[serde(default)]
    pub arrival_airport: AirportTime,
    /// Minutes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airplane: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airline_logo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AirportTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// One entry of the `properties` list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelProperty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate_per_night: Option<RatePerNight>,
    #[serde(default)]
    pub images: Vec<HotelImage>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatePerNight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HotelImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}
