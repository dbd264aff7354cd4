//! Domain types for the travel agent system
//!
//! Core abstractions that define the agent system's domain model.

mod agent;
mod message;
mod trip;

pub use agent::*;
pub use message::*;
pub use trip::*;

use async_trait::async_trait;

use crate::agents::error::AgentResult;
use crate::agents::memory::SessionSnapshot;

/// Port trait for the travel assistant, consumed by the HTTP layer
#[async_trait]
pub trait TravelPort: Send + Sync {
    /// Merge the trip into the session's facts and run the trip planner directly
    async fn plan_trip(&self, session_id: &str, request: TripRequest) -> AgentResult<String>;

    /// Route a free-text message through the keyword router
    async fn chat(&self, session_id: &str, query: &str) -> AgentResult<String>;

    /// Snapshot of a session's facts and history
    async fn session(&self, session_id: &str) -> Option<SessionSnapshot>;

    /// Drop a session. Returns false when it did not exist.
    async fn end_session(&self, session_id: &str) -> bool;
}
