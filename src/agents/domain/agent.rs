//! Specialist agent identifiers

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The seven routable specialists.
///
/// The derived ordering is the order in which the router invokes a selected
/// set, so per-agent outputs appear in a stable order in the synthesis prompt.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AgentKind {
    /// Flight and hotel search, formatted as HTML
    TripPlanner,
    /// Current weather for a city
    Weather,
    DestinationResearch,
    Accommodation,
    Transportation,
    ItineraryPlanner,
    BudgetAnalyst,
}

impl AgentKind {
    pub const ALL: [AgentKind; 7] = [
        AgentKind::TripPlanner,
        AgentKind::Weather,
        AgentKind::DestinationResearch,
        AgentKind::Accommodation,
        AgentKind::Transportation,
        AgentKind::ItineraryPlanner,
        AgentKind::BudgetAnalyst,
    ];

    /// Name used in routing output, error strings and configuration keys
    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::TripPlanner => "TripPlanner",
            AgentKind::Weather => "Weather",
            AgentKind::DestinationResearch => "DestinationResearch",
            AgentKind::Accommodation => "Accommodation",
            AgentKind::Transportation => "Transportation",
            AgentKind::ItineraryPlanner => "ItineraryPlanner",
            AgentKind::BudgetAnalyst => "BudgetAnalyst",
        }
    }

    /// Built-in role prompt for the agents that use the prompted shape.
    ///
    /// Trip planner and weather bypass the prompted shape and have none.
    pub fn default_role_prompt(&self) -> Option<&'static str> {
        match self {
            AgentKind::TripPlanner | AgentKind::Weather => None,
            AgentKind::DestinationResearch => Some(
                "You are the Destination Research Agent. Provide in-depth info if asked.",
            ),
            AgentKind::Accommodation => {
                Some("You are the Accommodation Agent. Provide advanced hotel info if asked.")
            }
            AgentKind::Transportation => Some(
                "You are the Transportation Agent. Provide local transport or flight details.",
            ),
            AgentKind::ItineraryPlanner => Some(
                "You are the Itinerary Planner Agent. Create day-by-day plans if asked.",
            ),
            AgentKind::BudgetAnalyst => {
                Some("You are the Budget Analyst Agent. Provide cost breakdowns if asked.")
            }
        }
    }

    /// Whether this agent is a plain role prompt over the completion service
    pub fn is_prompted(&self) -> bool {
        self.default_role_prompt().is_some()
    }
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AgentKind {
    type Err = String;

    /// Accepts the display name case-insensitively, with or without
    /// underscores (`BudgetAnalyst`, `budget_analyst`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_').collect();
        AgentKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| format!("unknown agent '{}'", s))
    }
}
