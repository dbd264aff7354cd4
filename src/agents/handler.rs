//! Travel agent handler implementing TravelPort

use std::sync::Arc;

use async_trait::async_trait;

use crate::agents::config::AgentsConfig;
use crate::agents::core::{build_roster, AgentRoster, SpecialistAgent, TripPlannerAgent};
use crate::agents::domain::{Message, TravelPort, TripRequest};
use crate::agents::error::AgentResult;
use crate::agents::llm::LlmProvider;
use crate::agents::memory::{SessionSnapshot, SessionStore};
use crate::agents::orchestration::Router;
use crate::domain::{SearchPort, WeatherPort};

/// Owns the completion provider, the specialists and the session store
pub struct TravelAgentHandler {
    router: Router,
    /// Direct entry point, available even when routing has it disabled
    trip_planner: SpecialistAgent,
    roster: Arc<AgentRoster>,
    sessions: SessionStore,
}

impl TravelAgentHandler {
    /// Build the roster, router and direct trip planner over shared collaborators
    pub fn new(
        llm: Arc<dyn LlmProvider>,
        search: Arc<dyn SearchPort>,
        weather: Arc<dyn WeatherPort>,
        config: &AgentsConfig,
    ) -> AgentResult<Self> {
        let roster = Arc::new(build_roster(
            llm.clone(),
            search.clone(),
            weather,
            config,
        )?);
        tracing::info!(agents = roster.len(), "agent roster built");

        Ok(Self {
            router: Router::new(roster.clone(), llm.clone(), config.synthesis_max_tokens),
            trip_planner: SpecialistAgent::TripPlanner(TripPlannerAgent::new(llm, search)),
            roster,
            sessions: SessionStore::new(),
        })
    }

    pub fn roster(&self) -> &AgentRoster {
        &self.roster
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn thread_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[async_trait]
impl TravelPort for TravelAgentHandler {
    async fn plan_trip(&self, session_id: &str, request: TripRequest) -> AgentResult<String> {
        let thread_id = Self::thread_id();
        tracing::info!(session_id, thread_id = %thread_id, "planning trip");

        let session = self.sessions.session(session_id).await;
        let mut state = session.lock().await;

        state.merge_trip_facts(request.trip_facts());
        let messages = [Message::user(request.to_prompt())];
        let html = self
            .trip_planner
            .invoke(&messages, &thread_id, &mut state)
            .await?;

        state.record_assistant_message(&html);
        Ok(html)
    }

    async fn chat(&self, session_id: &str, query: &str) -> AgentResult<String> {
        let thread_id = Self::thread_id();
        tracing::info!(session_id, thread_id = %thread_id, "chat request");

        let session = self.sessions.session(session_id).await;
        let mut state = session.lock().await;
        self.router.invoke(query, &thread_id, &mut state).await
    }

    async fn session(&self, session_id: &str) -> Option<SessionSnapshot> {
        self.sessions.get(session_id).await
    }

    async fn end_session(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).await
    }
}
