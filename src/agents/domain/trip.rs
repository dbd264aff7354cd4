//! Structured trip request accepted by the direct trip-planning entry point

use serde::{Deserialize, Serialize};

/// Trip parameters supplied by the booking form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Departure city or airport as typed by the user
    pub departure_airport: String,
    /// Arrival city or airport as typed by the user
    pub arrival_airport: String,
    pub outbound_date: String,
    pub return_date: String,
    pub adults: u32,
    pub children: u32,
    /// Free-text note stored alongside the trip facts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl TripRequest {
    /// Trip facts written into the session before the planner runs.
    ///
    /// Counts are stored as plain strings like every other fact.
    pub fn trip_facts(&self) -> Vec<(&'static str, String)> {
        let mut facts = vec![
            ("departure_city", self.departure_airport.clone()),
            ("arrival_city", self.arrival_airport.clone()),
            ("outbound_date", self.outbound_date.clone()),
            ("return_date", self.return_date.clone()),
            ("adults", self.adults.to_string()),
            ("children", self.children.to_string()),
        ];
        if let Some(info) = self.additional_info.as_deref().filter(|s| !s.is_empty()) {
            facts.push(("additional_info", info.to_string()));
        }
        facts
    }

    /// One-line description of the trip used as the planner's user message
    pub fn to_prompt(&self) -> String {
        format!(
            "Departure city: {}, Arrival city: {}, Outbound: {}, Return: {}, Adults: {}, Children: {}. Additional: {}",
            self.departure_airport,
            self.arrival_airport,
            self.outbound_date,
            self.return_date,
            self.adults,
            self.children,
            self.additional_info.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(additional_info: Option<&str>) -> TripRequest {
        TripRequest {
            departure_airport: "Boston".to_string(),
            arrival_airport: "Lisbon".to_string(),
            outbound_date: "2025-06-01".to_string(),
            return_date: "2025-06-10".to_string(),
            adults: 2,
            children: 1,
            additional_info: additional_info.map(str::to_string),
        }
    }

    #[test]
    fn test_trip_facts_without_note() {
        let facts = request(None).trip_facts();
        let keys: Vec<_> = facts.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            keys,
            vec!["departure_city", "arrival_city", "outbound_date", "return_date", "adults", "children"]
        );
        assert!(facts.contains(&("adults", "2".to_string())));
    }

    #[test]
    fn test_trip_facts_with_note() {
        let facts = request(Some("window seats")).trip_facts();
        assert_eq!(facts.last(), Some(&("additional_info", "window seats".to_string())));
    }

    #[test]
    fn test_prompt_mentions_every_field() {
        let prompt = request(None).to_prompt();
        assert!(prompt.starts_with("Departure city: Boston, Arrival city: Lisbon"));
        assert!(prompt.ends_with("Additional: "));
    }
}
