//! Specialist agent implementations
//!
//! Provides the seven routable specialists:
//! - PromptedAgent: role prompt + one completion (five specialists)
//! - TripPlannerAgent: flight and hotel search rendered as HTML
//! - WeatherAgent: current weather for a city named in the message

mod prompted;
pub mod render;
mod trip_planner;
mod weather;

pub use prompted::PromptedAgent;
pub use trip_planner::TripPlannerAgent;
pub use weather::{WeatherAgent, WEATHER_FACT};

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::agents::config::AgentsConfig;
use crate::agents::domain::{AgentKind, Message};
use crate::agents::error::{AgentError, AgentResult};
use crate::agents::llm::LlmProvider;
use crate::agents::memory::ConversationState;
use crate::domain::{SearchPort, WeatherPort};

/// A routable specialist, dispatched by variant
pub enum SpecialistAgent {
    Prompted(PromptedAgent),
    TripPlanner(TripPlannerAgent),
    Weather(WeatherAgent),
}

impl SpecialistAgent {
    pub fn kind(&self) -> AgentKind {
        match self {
            SpecialistAgent::Prompted(agent) => agent.kind(),
            SpecialistAgent::TripPlanner(_) => AgentKind::TripPlanner,
            SpecialistAgent::Weather(_) => AgentKind::Weather,
        }
    }

    /// Run the agent against the caller's session.
    ///
    /// `thread_id` is accepted for every agent but no agent reads it.
    pub async fn invoke(
        &self,
        messages: &[Message],
        thread_id: &str,
        state: &mut ConversationState,
    ) -> AgentResult<String> {
        tracing::debug!(agent = %self.kind(), thread_id, "invoking agent");
        match self {
            SpecialistAgent::Prompted(agent) => agent.invoke(messages).await,
            SpecialistAgent::TripPlanner(agent) => agent.invoke(state).await,
            SpecialistAgent::Weather(agent) => agent.invoke(messages, state).await,
        }
    }
}

/// Registered specialists keyed by kind
#[derive(Default)]
pub struct AgentRoster {
    agents: BTreeMap<AgentKind, SpecialistAgent>,
}

impl AgentRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent, replacing any previous one of the same kind
    pub fn insert(&mut self, agent: SpecialistAgent) {
        self.agents.insert(agent.kind(), agent);
    }

    pub fn get(&self, kind: AgentKind) -> Option<&SpecialistAgent> {
        self.agents.get(&kind)
    }

    pub fn kinds(&self) -> Vec<AgentKind> {
        self.agents.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

/// Build the roster of every enabled specialist
pub fn build_roster(
    llm: Arc<dyn LlmProvider>,
    search: Arc<dyn SearchPort>,
    weather: Arc<dyn WeatherPort>,
    config: &AgentsConfig,
) -> AgentResult<AgentRoster> {
    let mut roster = AgentRoster::new();

    for kind in AgentKind::ALL {
        if !config.is_enabled(kind) {
            tracing::info!(agent = %kind, "agent disabled by configuration");
            continue;
        }

        let agent = match kind {
            AgentKind::TripPlanner => {
                SpecialistAgent::TripPlanner(TripPlannerAgent::new(llm.clone(), search.clone()))
            }
            AgentKind::Weather => SpecialistAgent::Weather(WeatherAgent::new(weather.clone())?),
            _ => {
                let role_prompt = config.role_prompt(kind).ok_or_else(|| {
                    AgentError::Configuration(format!("No role prompt for agent {}", kind))
                })?;
                SpecialistAgent::Prompted(PromptedAgent::new(kind, role_prompt, llm.clone()))
            }
        };
        roster.insert(agent);
    }

    Ok(roster)
}
