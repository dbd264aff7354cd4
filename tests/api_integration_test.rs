mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::{app, ScriptedProvider};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::util::ServiceExt;

async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method(method);
    let body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn trip(session_id: Option<&str>) -> Value {
    let mut body = json!({
        "departure_airport": "Boston",
        "arrival_airport": "Lisbon",
        "outbound_date": "2025-06-01",
        "return_date": "2025-06-10",
        "adults": 2,
        "children": 1,
        "additional_info": "window seats"
    });
    if let Some(id) = session_id {
        body["session_id"] = json!(id);
    }
    body
}

#[tokio::test]
async fn test_welcome() {
    let app = app(Arc::new(ScriptedProvider::new(&[])));

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Welcome to AI Travel Agent API with Chatbot and Multi-Agents!"
    );
}

#[tokio::test]
async fn test_main_agent_plans_trip() {
    let llm = Arc::new(ScriptedProvider::new(&["BOS", "LIS"]));
    let app = app(llm.clone());

    let (status, body) = send(&app, "POST", "/main-agent", Some(trip(Some("trip-1")))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session_id"], "trip-1");

    let html = body["result"].as_str().unwrap();
    assert!(html.starts_with("<div>"));
    assert!(html.contains("TAP Air Portugal"));
    assert!(html.contains("Memmo Alfama"));

    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[0].ends_with("Please provide only the IATA airport code for the city: Boston."));
    assert!(prompts[1].ends_with("Please provide only the IATA airport code for the city: Lisbon."));

    let (status, session) = send(&app, "GET", "/sessions/trip-1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["trip_facts"]["arrival_city"], "Lisbon");
    assert_eq!(session["trip_facts"]["adults"], "2");
    assert_eq!(session["trip_facts"]["additional_info"], "window seats");
    assert_eq!(session["history"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_main_agent_defaults_session() {
    let app = app(Arc::new(ScriptedProvider::new(&["BOS", "LIS"])));

    let (status, body) = send(&app, "POST", "/main-agent", Some(trip(None))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["session_id"], "default");
}

#[tokio::test]
async fn test_main_agent_failure_is_500() {
    // empty script: the first IATA lookup fails
    let app = app(Arc::new(ScriptedProvider::new(&[])));

    let (status, body) = send(&app, "POST", "/main-agent", Some(trip(Some("s")))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("script exhausted"));
}

#[tokio::test]
async fn test_chat_weather() {
    let llm = Arc::new(ScriptedProvider::new(&["It is sunny in Rome today."]));
    let app = app(llm.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "query": "What's the weather in Rome?", "session_id": "chat-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"], "It is sunny in Rome today.");
    assert_eq!(body["session_id"], "chat-1");

    // the weather specialist needs no completion, only the synthesis call is made
    let prompts = llm.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Weather says:\nCurrent weather in Rome: clear sky, 21°C."));

    let (_, session) = send(&app, "GET", "/sessions/chat-1", None).await;
    assert_eq!(
        session["trip_facts"]["weather_info"],
        "Current weather in Rome: clear sky, 21°C."
    );
    assert_eq!(
        session["history"],
        json!(["User: What's the weather in Rome?", "Assistant: It is sunny in Rome today."])
    );
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let llm = Arc::new(ScriptedProvider::new(&["BOS", "LIS", "Noted."]));
    let app = app(llm.clone());

    send(&app, "POST", "/main-agent", Some(trip(Some("a")))).await;
    let (status, _) = send(
        &app,
        "POST",
        "/chat",
        Some(json!({ "query": "Any rain expected?", "session_id": "b" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // session b has no arrival city, so the weather lookup got an empty city
    let prompts = llm.prompts();
    assert!(prompts[2].contains("Use known trip data: weather_info:"));
    assert!(!prompts[2].contains("Lisbon"));
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = app(Arc::new(ScriptedProvider::new(&["BOS", "LIS"])));

    let (status, body) = send(&app, "GET", "/sessions/missing", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("missing"));

    send(&app, "POST", "/main-agent", Some(trip(Some("gone")))).await;
    let (status, _) = send(&app, "DELETE", "/sessions/gone", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, "DELETE", "/sessions/gone", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_tool_endpoints() {
    let app = app(Arc::new(ScriptedProvider::new(&[])));

    let (status, body) = send(&app, "GET", "/api/tools", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);

    let (status, body) = send(
        &app,
        "POST",
        "/api/tools/calculate/test",
        Some(json!({ "args": { "operation": "(180 * 9) + 612" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["output"]["result"], "2232");

    let (status, body) = send(
        &app,
        "POST",
        "/api/tools/hotels_finder/test",
        Some(json!({ "args": { "params": { "q": "Lisbon" } } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["output"][0]["name"], "Memmo Alfama");

    let (status, body) = send(
        &app,
        "POST",
        "/api/tools/calculate/test",
        Some(json!({ "args": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["error"].as_str().unwrap().contains("Invalid tool arguments"));

    let (status, _) = send(&app, "POST", "/api/tools/browser/test", Some(json!({ "args": {} }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = app(Arc::new(ScriptedProvider::new(&[])));

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["agents"].as_array().unwrap().len(), 7);

    let (status, body) = send(&app, "GET", "/health/live", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}
