use portfolio_chatbot::config::Config;
use portfolio_chatbot::message::{ApiInfo, ChatResponse, HealthResponse};
use portfolio_chatbot::routes::create_router;
use portfolio_chatbot::state::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> Router {
    let state = Arc::new(AppState::new(Config::default()));
    create_router().with_state(state)
}

fn chat_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> axum::body::Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_chat_endpoint() {
    let response = app()
        .oneshot(chat_request(r#"{"message": "hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(chat_resp.reply.contains("Hola"));
    assert_eq!(chat_resp.message_id.len(), 8);
    assert!(chat_resp.message_id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[tokio::test]
async fn test_chat_response_field_names() {
    let response = app()
        .oneshot(chat_request(r#"{"message": "xyz123"}"#))
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(json["reply"].as_str().unwrap().contains("xyz123"));
    assert!(json["messageId"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_empty_message_is_rejected() {
    for body in [
        r#"{"message": ""}"#,
        r#"{"message": "   "}"#,
        r#"{"message": null}"#,
        r#"{}"#,
    ] {
        let response = app().oneshot(chat_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body}");

        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Message is required" }));
    }
}

#[tokio::test]
async fn test_chat_accepts_capitalized_message_key() {
    let response = app()
        .oneshot(chat_request(r#"{"Message": "hola"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat_resp: ChatResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert!(chat_resp.reply.contains("Hola"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let health: HealthResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "1.0.0");
}

#[tokio::test]
async fn test_root_banner() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
    assert_eq!(text, "🤖 Chatbot API is running! Endpoints: /health, /api/chat");
}

#[tokio::test]
async fn test_api_info_endpoint() {
    let config = Config {
        author: "Ana".to_string(),
        ..Config::default()
    };
    let app = create_router().with_state(Arc::new(AppState::new(config)));

    let response = app
        .oneshot(Request::builder().uri("/api/info").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let info: ApiInfo = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(info.name, "Chatbot API");
    assert_eq!(info.version, "1.0.0");
    assert_eq!(info.description, "API simple para chatbot de portfolio");
    assert_eq!(info.author, "Ana");
    assert_eq!(info.endpoints.len(), 3);
    assert!(info.endpoints[1].starts_with("/api/chat"));
}
