//! # Wayfarer - multi-agent travel assistant
//!
//! Wayfarer answers travel questions with a keyword router in front of LLM
//! specialists, and plans trips by searching flights and hotels and
//! rendering the results as HTML.
//!
//! ## Features
//!
//! - **Keyword routing**: one message can reach several specialists, whose
//!   answers are merged by a final synthesis call
//! - **Trip planning**: IATA lookup, SerpAPI flight and hotel search, HTML cards
//! - **Weather**: current conditions from OpenWeatherMap
//! - **Sessions**: trip facts and history kept per client session
//! - **Tools**: flight, hotel, weather, web search and calculator tools over HTTP
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wayfarer::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let settings = Settings::new()?;
//!
//!     // Server will start on configured host:port
//!     println!("{}:{}", settings.server.host, settings.server.port);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! Wayfarer follows Hexagonal Architecture:
//! - **Domain**: Ports and search records
//! - **Agents**: Specialists, routing and conversation state
//! - **Adapters**: HTTP handlers and external API clients
//! - **Config**: Configuration management

pub mod adapters;
pub mod agents;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::api_handler::{self, ApiState};
use crate::adapters::health_handler::HealthHandler;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `api_state` - Travel assistant and tool registry behind the handlers
/// * `health_handler` - Health check handler
///
/// # Returns
///
/// Configured Axum Router
pub fn create_app(api_state: ApiState, health_handler: Arc<HealthHandler>) -> Router {
    let health_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }));

    // API routes for tool testing
    let tools_router = Router::new()
        .route("/tools", get(api_handler::list_tools))
        .route("/tools/:name/test", post(api_handler::test_tool));

    let app_router = Router::new()
        .route("/", get(api_handler::welcome))
        .route("/main-agent", post(api_handler::main_agent))
        .route("/chat", post(api_handler::chat))
        .route(
            "/sessions/:id",
            get(api_handler::get_session).delete(api_handler::delete_session),
        )
        .nest("/api", tools_router)
        .with_state(api_state);

    health_router.merge(app_router).layer(
        tower_http::cors::CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
    )
}
