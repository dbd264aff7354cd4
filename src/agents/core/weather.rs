//! Weather specialist: city extraction and weather lookup, no completion call

use regex::Regex;
use std::sync::Arc;

use crate::agents::domain::Message;
use crate::agents::error::{AgentError, AgentResult};
use crate::agents::memory::ConversationState;
use crate::domain::WeatherPort;

/// Words that end a captured city name
const STOP_WORDS: &[&str] = &[
    "and", "or", "but", "for", "on", "at", "in", "this", "next", "today", "tomorrow", "tonight",
    "during", "with", "then", "please", "like",
];

/// Trip fact the lookup result is stored under
pub const WEATHER_FACT: &str = "weather_info";

pub struct WeatherAgent {
    weather: Arc<dyn WeatherPort>,
    city_pattern: Regex,
}

impl WeatherAgent {
    pub fn new(weather: Arc<dyn WeatherPort>) -> AgentResult<Self> {
        let city_pattern = Regex::new(r"(?i)weather.*\bin\s+([a-z][a-z\s]*)")
            .map_err(|e| AgentError::Internal(format!("Invalid city pattern: {}", e)))?;
        Ok(Self {
            weather,
            city_pattern,
        })
    }

    /// City named after the last `in` following `weather`, title-cased
    pub fn extract_city(&self, text: &str) -> Option<String> {
        let captured = self.city_pattern.captures(text)?.get(1)?.as_str();

        let words: Vec<String> = captured
            .split_whitespace()
            .take_while(|w| !STOP_WORDS.contains(&w.to_lowercase().as_str()))
            .map(title_case)
            .collect();

        if words.is_empty() {
            None
        } else {
            Some(words.join(" "))
        }
    }

    /// Look up the weather and remember it as a trip fact
    pub async fn invoke(
        &self,
        messages: &[Message],
        state: &mut ConversationState,
    ) -> AgentResult<String> {
        let content = messages.last().map(|m| m.content.as_str()).unwrap_or("");
        let user_line = content
            .rsplit_once("User: ")
            .map(|(_, line)| line)
            .unwrap_or(content);

        let city = self
            .extract_city(user_line)
            .unwrap_or_else(|| state.trip_fact("arrival_city").to_string());
        tracing::debug!(%city, "weather lookup");

        let report = self.weather.current_weather(&city).await;
        state.merge_trip_facts([(WEATHER_FACT, report.as_str())]);
        Ok(report)
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::testing::StubWeather;

    fn agent(weather: Arc<StubWeather>) -> WeatherAgent {
        WeatherAgent::new(weather).unwrap()
    }

    #[test]
    fn test_extract_city() {
        let agent = agent(Arc::new(StubWeather::default()));
        assert_eq!(
            agent
                .extract_city("What's the weather in Paris and do you have any flight deals?")
                .as_deref(),
            Some("Paris")
        );
        assert_eq!(
            agent.extract_city("weather in new york tomorrow").as_deref(),
            Some("New York")
        );
        assert_eq!(
            agent.extract_city("WEATHER IN SAN FRANCISCO").as_deref(),
            Some("San Francisco")
        );
        assert_eq!(agent.extract_city("will it rain?"), None);
        assert_eq!(agent.extract_city("weather in Berlin").as_deref(), Some("Berlin"));
        assert_eq!(agent.extract_city("weather in 2025"), None);
    }

    #[test]
    fn test_extract_city_takes_last_in() {
        let agent = agent(Arc::new(StubWeather::default()));
        assert_eq!(
            agent.extract_city("weather in the morning in Rome").as_deref(),
            Some("Rome")
        );
        assert_eq!(
            agent.extract_city("weather in early May in Paris").as_deref(),
            Some("Paris")
        );
    }

    #[tokio::test]
    async fn test_uses_last_user_line() {
        let weather = Arc::new(StubWeather::default());
        let agent = agent(weather.clone());
        let mut state = ConversationState::new();
        state.merge_trip_facts([("arrival_city", "Lisbon")]);

        let out = agent
            .invoke(
                &[Message::user(
                    "Known trip data: arrival_city:Lisbon\nUser: How is the weather in Rome?",
                )],
                &mut state,
            )
            .await
            .unwrap();

        assert_eq!(out, "Current weather in Rome: clear sky, 21°C.");
        assert_eq!(weather.cities(), vec!["Rome".to_string()]);
        assert_eq!(state.trip_fact(WEATHER_FACT), out);
    }

    #[tokio::test]
    async fn test_falls_back_to_arrival_city() {
        let weather = Arc::new(StubWeather::default());
        let agent = agent(weather.clone());
        let mut state = ConversationState::new();
        state.merge_trip_facts([("arrival_city", "Lisbon")]);

        agent
            .invoke(&[Message::user("User: do I need an umbrella?")], &mut state)
            .await
            .unwrap();
        assert_eq!(weather.cities(), vec!["Lisbon".to_string()]);
    }

    #[tokio::test]
    async fn test_no_city_at_all() {
        let weather = Arc::new(StubWeather::default());
        let agent = agent(weather.clone());
        let mut state = ConversationState::new();

        let out = agent
            .invoke(&[Message::user("rain?")], &mut state)
            .await
            .unwrap();
        assert_eq!(out, "No city provided.");
        assert_eq!(state.trip_fact(WEATHER_FACT), "No city provided.");
    }
}
