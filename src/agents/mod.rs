//! Travel agent system
//!
//! A keyword router in front of seven LLM-backed specialists:
//! - Trip planner (flight and hotel search rendered as HTML)
//! - Weather (current conditions for a named city)
//! - Destination research, accommodation, transportation, itinerary and
//!   budget (role prompts over one completion call)
//!
//! ## Architecture
//!
//! - `domain/` - Core types (Message, AgentKind, TripRequest, TravelPort)
//! - `llm/` - LLM provider implementations
//! - `core/` - Specialist agents and HTML rendering
//! - `orchestration/` - Keyword selection and the router/aggregator
//! - `memory/` - Per-session conversation state

pub mod config;
pub mod core;
pub mod domain;
pub mod error;
pub mod handler;
pub mod llm;
pub mod memory;
pub mod orchestration;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::*;
pub use domain::*;
pub use error::*;
pub use handler::TravelAgentHandler;
