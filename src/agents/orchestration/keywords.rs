//! Keyword-based agent selection

use std::collections::BTreeSet;

use crate::agents::domain::AgentKind;

/// Trigger substrings per agent, matched case-insensitively
pub const KEYWORD_TABLE: &[(AgentKind, &[&str])] = &[
    (AgentKind::TripPlanner, &["flight", "plane", "airfare", "tickets"]),
    (AgentKind::Weather, &["weather", "umbrella", "rain"]),
    (
        AgentKind::DestinationResearch,
        &["destination", "culture", "attractions"],
    ),
    (AgentKind::Accommodation, &["hotel", "accommodation"]),
    (AgentKind::Transportation, &["transport", "car rental", "train"]),
    (AgentKind::ItineraryPlanner, &["itinerary"]),
    (AgentKind::BudgetAnalyst, &["budget", "cost", "price"]),
];

/// Agents whose keywords appear anywhere in `text`.
///
/// Never empty: with no match the trip planner is selected.
pub fn select_agents(text: &str) -> BTreeSet<AgentKind> {
    let lowered = text.to_lowercase();

    let mut selected: BTreeSet<AgentKind> = KEYWORD_TABLE
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(kind, _)| *kind)
        .collect();

    if selected.is_empty() {
        selected.insert(AgentKind::TripPlanner);
    }
    selected
}
