//! HTML rendering of flight and hotel search results

use serde::Serialize;
use tera::{Context, Tera};

use crate::agents::error::AgentResult;
use crate::domain::{FlightOption, HotelProperty};

/// Options shown per list
const MAX_OPTIONS: usize = 3;

const NO_FLIGHTS: &str = "<p>No flight data found.</p>";
const NO_HOTELS: &str = "<p>No hotel data found.</p>";

const FLIGHTS_TEMPLATE: &str = r#"<h2>Flights from {{ departure }} to {{ arrival }}</h2>{% for card in cards %}
<div style="border:1px solid #ddd; padding:10px; margin:10px 0;">
  <h3>Option {{ card.index }}: {{ card.airline }}</h3>
  <ul>
    <li><strong>Departure:</strong> {{ card.departure_time }}</li>
    <li><strong>Arrival:</strong> {{ card.arrival_time }}</li>
    <li><strong>Duration:</strong> {{ card.duration }}</li>
    <li><strong>Aircraft:</strong> {{ card.airplane }}</li>
    <li><strong>Price:</strong> ${{ card.price }}</li>
    <li><strong>Airline Logo:</strong> {% if card.logo %}<img src="{{ card.logo }}" alt="Airline Logo" width="60">{% else %}N/A{% endif %}</li>
  </ul>
</div>{% endfor %}"#;

const HOTELS_TEMPLATE: &str = r#"<h2>Hotels in {{ arrival }}</h2>{% for card in cards %}
<div style="border:1px solid #ddd; padding:10px; margin:10px 0;">
  <h3>Option {{ card.index }}: {{ card.name }}</h3>
  <ul>
    <li><strong>Description:</strong> {{ card.description }}</li>
    <li><strong>Rate per Night:</strong> {{ card.rate }}</li>
    <li><strong>Hotel Image:</strong> {% if card.thumbnail %}<img src="{{ card.thumbnail }}" alt="Hotel Image" width="100">{% else %}No image{% endif %}</li>
  </ul>
</div>{% endfor %}"#;

#[derive(Serialize)]
struct FlightCard {
    index: usize,
    airline: String,
    departure_time: String,
    arrival_time: String,
    duration: String,
    airplane: String,
    price: String,
    logo: Option<String>,
}

#[derive(Serialize)]
struct HotelCard {
    index: usize,
    name: String,
    description: String,
    rate: String,
    thumbnail: Option<String>,
}

/// `{h}h {m}m` from a duration in minutes
pub fn format_duration(minutes: u64) -> String {
    format!("{}h {}m", minutes / 60, minutes % 60)
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Top flight options as HTML cards.
///
/// Options without segments are skipped but keep their position in the
/// numbering.
pub fn format_flights_html(
    flights: &[FlightOption],
    departure_city: &str,
    arrival_city: &str,
) -> AgentResult<String> {
    if flights.is_empty() {
        return Ok(NO_FLIGHTS.to_string());
    }

    let cards: Vec<FlightCard> = flights
        .iter()
        .take(MAX_OPTIONS)
        .enumerate()
        .filter_map(|(i, option)| {
            let segment = option.flights.first()?;
            Some(FlightCard {
                index: i + 1,
                airline: segment
                    .airline
                    .clone()
                    .unwrap_or_else(|| "Unknown Airline".to_string()),
                departure_time: segment.departure_airport.time.clone().unwrap_or_default(),
                arrival_time: segment.arrival_airport.time.clone().unwrap_or_default(),
                duration: format_duration(segment.duration.unwrap_or(0)),
                airplane: segment.airplane.clone().unwrap_or_default(),
                price: option.price_label(),
                logo: non_empty(&segment.airline_logo).or_else(|| non_empty(&option.airline_logo)),
            })
        })
        .collect();

    let mut context = Context::new();
    context.insert("departure", departure_city);
    context.insert("arrival", arrival_city);
    context.insert("cards", &cards);

    Ok(Tera::one_off(FLIGHTS_TEMPLATE, &context, false)?)
}

/// Top hotels as HTML cards
pub fn format_hotels_html(hotels: &[HotelProperty], arrival_city: &str) -> AgentResult<String> {
    if hotels.is_empty() {
        return Ok(NO_HOTELS.to_string());
    }

    let cards: Vec<HotelCard> = hotels
        .iter()
        .take(MAX_OPTIONS)
        .enumerate()
        .map(|(i, hotel)| HotelCard {
            index: i + 1,
            name: hotel
                .name
                .clone()
                .unwrap_or_else(|| "Unknown Hotel".to_string()),
            description: hotel.description.clone().unwrap_or_default(),
            rate: hotel
                .rate_per_night
                .as_ref()
                .and_then(|r| r.lowest.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            thumbnail: hotel.images.first().and_then(|img| non_empty(&img.thumbnail)),
        })
        .collect();

    let mut context = Context::new();
    context.insert("arrival", arrival_city);
    context.insert("cards", &cards);

    Ok(Tera::one_off(HOTELS_TEMPLATE, &context, false)?)
}

/// Combined trip result wrapped in a single `<div>`
pub fn format_trip_html(
    flights: &[FlightOption],
    hotels: &[HotelProperty],
    departure_city: &str,
    arrival_city: &str,
) -> AgentResult<String> {
    let flights_html = format_flights_html(flights, departure_city, arrival_city)?;
    let hotels_html = format_hotels_html(hotels, arrival_city)?;
    Ok(format!("<div>{}{}</div>", flights_html, hotels_html))
}
