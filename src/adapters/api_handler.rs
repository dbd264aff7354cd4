//! HTTP handlers for the travel assistant
//!
//! Trip planning and chat go through [`TravelPort`]; the tool endpoints expose
//! the [`ToolPort`] registry for manual testing.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::agents::domain::{TravelPort, TripRequest};
use crate::agents::error::AgentError;
use crate::agents::memory::DEFAULT_SESSION;
use crate::domain::{Tool, ToolPort};

pub const WELCOME_MESSAGE: &str = "Welcome to AI Travel Agent API with Chatbot and Multi-Agents!";

/// Shared application state for API handlers
#[derive(Clone)]
pub struct ApiState {
    pub travel: Arc<dyn TravelPort>,
    pub tools: Arc<dyn ToolPort>,
}

// ============================================================================
// Errors
// ============================================================================

/// Failure surfaced to HTTP clients as `{"error": "..."}`
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Body of `POST /main-agent`
#[derive(Debug, Deserialize)]
pub struct MainAgentRequest {
    #[serde(flatten)]
    pub trip: TripRequest,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Body of `POST /chat`
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AgentReply {
    pub result: String,
    pub session_id: String,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

fn session_or_default(session_id: Option<String>) -> String {
    session_id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION.to_string())
}

// ============================================================================
// Assistant Endpoints
// ============================================================================

/// GET / - Welcome message
pub async fn welcome() -> impl IntoResponse {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// POST /main-agent - Plan a trip from structured form input
pub async fn main_agent(
    State(state): State<ApiState>,
    Json(request): Json<MainAgentRequest>,
) -> Result<Json<AgentReply>, ApiError> {
    let session_id = session_or_default(request.session_id);
    tracing::info!(
        session = %session_id,
        from = %request.trip.departure_airport,
        to = %request.trip.arrival_airport,
        "trip planning request"
    );

    let result = state.travel.plan_trip(&session_id, request.trip).await?;
    Ok(Json(AgentReply { result, session_id }))
}

/// POST /chat - Route a free-text message to the specialists
pub async fn chat(
    State(state): State<ApiState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<AgentReply>, ApiError> {
    let session_id = session_or_default(request.session_id);
    tracing::info!(session = %session_id, "chat request");

    let result = state.travel.chat(&session_id, &request.query).await?;
    Ok(Json(AgentReply { result, session_id }))
}

// ============================================================================
// Session Endpoints
// ============================================================================

/// GET /sessions/:id - Trip facts and history of a session
pub async fn get_session(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.travel.session(&id).await {
        Some(snapshot) => Ok(Json(snapshot)),
        None => Err(ApiError::NotFound(format!("Session not found: {}", id))),
    }
}

/// DELETE /sessions/:id - Forget a session
pub async fn delete_session(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if state.travel.end_session(&id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Session not found: {}", id)))
    }
}

// ============================================================================
// Tool Endpoints
// ============================================================================

/// GET /api/tools - List all tools
pub async fn list_tools(State(state): State<ApiState>) -> impl IntoResponse {
    match state.tools.list_tools().await {
        Ok(tools) => (StatusCode::OK, Json(ApiResponse::success(tools))),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<Vec<Tool>>::error(e.to_string())),
        ),
    }
}

/// Request body for the tool test endpoint
#[derive(Deserialize)]
pub struct TestRequest {
    #[serde(default)]
    pub args: Value,
}

/// Response for the tool test endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TestResult {
    pub output: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub execution_time_ms: u64,
}

/// POST /api/tools/:name/test - Execute a tool with test inputs
pub async fn test_tool(
    State(state): State<ApiState>,
    Path(name): Path<String>,
    Json(req): Json<TestRequest>,
) -> impl IntoResponse {
    let known = match state.tools.list_tools().await {
        Ok(tools) => tools.iter().any(|t| t.name == name),
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<TestResult>::error(e.to_string())),
            );
        }
    };
    if !known {
        return (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<TestResult>::error("Tool not found")),
        );
    }

    let start = std::time::Instant::now();
    let (output, error) = match state.tools.execute_tool(&name, req.args).await {
        Ok(output) => (output, None),
        Err(e) => (Value::Null, Some(format!("{:#}", e))),
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success(TestResult {
            output,
            error,
            execution_time_ms: start.elapsed().as_millis() as u64,
        })),
    )
}
