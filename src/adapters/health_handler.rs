use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::agents::core::AgentRoster;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthChecks {
    pub llm_provider: String,
    /// Specialists available to the router
    pub agents: Vec<String>,
}

pub struct HealthHandler {
    provider: String,
    agents: Vec<String>,
    start_time: std::time::Instant,
}

impl HealthHandler {
    pub fn new(provider: impl Into<String>, roster: &AgentRoster) -> Self {
        Self {
            provider: provider.into(),
            agents: roster.kinds().iter().map(|k| k.name().to_string()).collect(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Basic health check - returns 200 if server is running
    pub async fn health(&self) -> impl IntoResponse {
        let status = HealthStatus {
            status: "healthy".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            checks: HealthChecks {
                llm_provider: self.provider.clone(),
                agents: self.agents.clone(),
            },
        };

        (StatusCode::OK, Json(status))
    }

    /// Liveness check - returns 200 if server is alive
    pub async fn live(&self) -> impl IntoResponse {
        (StatusCode::OK, Json(serde_json::json!({
            "status": "alive",
            "message": "Server is alive"
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use crate::agents::config::AgentsConfig;
    use crate::agents::core::build_roster;
    use crate::agents::testing::{ScriptedProvider, StubSearch, StubWeather};

    fn handler() -> HealthHandler {
        let roster = build_roster(
            Arc::new(ScriptedProvider::new(Vec::<String>::new())),
            Arc::new(StubSearch::empty()),
            Arc::new(StubWeather::default()),
            &AgentsConfig::default(),
        )
        .unwrap();
        HealthHandler::new("scripted", &roster)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = handler().health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: HealthStatus = serde_json::from_slice(&body).unwrap();
        assert_eq!(status.status, "healthy");
        assert_eq!(status.checks.llm_provider, "scripted");
        assert_eq!(status.checks.agents.len(), 7);
    }

    #[tokio::test]
    async fn test_live_endpoint() {
        let response = handler().live().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
