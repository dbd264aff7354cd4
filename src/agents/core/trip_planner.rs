//! Trip planner: IATA lookup, flight and hotel search, HTML output

use std::sync::Arc;

use super::render;
use crate::agents::domain::Message;
use crate::agents::error::{AgentError, AgentResult};
use crate::agents::llm::LlmProvider;
use crate::agents::memory::ConversationState;
use crate::domain::{FlightQuery, HotelQuery, SearchPort};

/// Searches flights and hotels for the trip described by the session facts.
///
/// The incoming messages are not used for data fetching; everything comes
/// from the trip facts.
pub struct TripPlannerAgent {
    llm: Arc<dyn LlmProvider>,
    search: Arc<dyn SearchPort>,
}

/// Trip parameters read from the session facts
#[derive(Debug, Clone, PartialEq)]
struct TripParams {
    departure_city: String,
    arrival_city: String,
    outbound_date: String,
    return_date: String,
    adults: u32,
    children: u32,
}

impl TripParams {
    fn from_state(state: &ConversationState) -> AgentResult<Self> {
        Ok(Self {
            departure_city: state.trip_fact("departure_city").to_string(),
            arrival_city: state.trip_fact("arrival_city").to_string(),
            outbound_date: state.trip_fact("outbound_date").to_string(),
            return_date: state.trip_fact("return_date").to_string(),
            adults: parse_count(state, "adults", 1)?,
            children: parse_count(state, "children", 0)?,
        })
    }
}

/// Unset or empty counts take the default; anything else must be a number
fn parse_count(state: &ConversationState, key: &str, default: u32) -> AgentResult<u32> {
    let raw = state.trip_fact(key).trim();
    if raw.is_empty() {
        return Ok(default);
    }
    raw.parse().map_err(|_| {
        AgentError::Validation(format!("trip fact '{}' is not a number: {}", key, raw))
    })
}

impl TripPlannerAgent {
    pub fn new(llm: Arc<dyn LlmProvider>, search: Arc<dyn SearchPort>) -> Self {
        Self { llm, search }
    }

    /// Ask the completion service for a city's airport code
    pub async fn iata_code(&self, city: &str) -> AgentResult<String> {
        let prompt = format!(
            "Please provide only the IATA airport code for the city: {}.",
            city
        );
        let code = self.llm.complete_text(vec![Message::user(prompt)], None).await?;
        Ok(code.trim().to_string())
    }

    pub async fn invoke(&self, state: &ConversationState) -> AgentResult<String> {
        let trip = TripParams::from_state(state)?;

        let departure_iata = self.iata_code(&trip.departure_city).await?;
        let arrival_iata = self.iata_code(&trip.arrival_city).await?;

        let flight_query = FlightQuery {
            departure_airport: departure_iata,
            arrival_airport: arrival_iata,
            outbound_date: trip.outbound_date.clone(),
            return_date: trip.return_date.clone(),
            adults: trip.adults,
            children: trip.children,
            infants_in_seat: 0,
            infants_on_lap: 0,
        };
        tracing::debug!(?flight_query, "searching flights");
        let flights = self.search.find_flights(&flight_query).await?;

        let hotel_query = HotelQuery {
            q: trip.arrival_city.clone(),
            check_in_date: trip.outbound_date.clone(),
            check_out_date: trip.return_date.clone(),
            adults: trip.adults,
            children: trip.children,
            rooms: 1,
            hotel_class: None,
        };
        tracing::debug!(?hotel_query, "searching hotels");
        let hotels = self.search.find_hotels(&hotel_query).await?;

        tracing::info!(
            flights = flights.len(),
            hotels = hotels.len(),
            "trip search complete"
        );

        render::format_trip_html(&flights, &hotels, &trip.departure_city, &trip.arrival_city)
    }
}
