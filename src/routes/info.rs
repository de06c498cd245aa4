use axum::{Json, extract::State};
use chrono::Utc;

use crate::{
    message::{ApiInfo, HealthResponse},
    state::SharedState,
};

pub const API_NAME: &str = "Chatbot API";
pub const API_DESCRIPTION: &str = "API simple para chatbot de portfolio";
pub const ROOT_BANNER: &str = "🤖 Chatbot API is running! Endpoints: /health, /api/chat";

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn root_handler() -> &'static str {
    ROOT_BANNER
}

pub async fn api_info_handler(State(state): State<SharedState>) -> Json<ApiInfo> {
    let endpoints = [
        "/health - Health check",
        "/api/chat - Chatbot principal",
        "/api/info - Información de la API",
    ];

    Json(ApiInfo {
        name: API_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: API_DESCRIPTION.to_string(),
        endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        author: state.config.author.clone(),
        timestamp: Utc::now(),
    })
}
