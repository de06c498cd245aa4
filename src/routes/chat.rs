use axum::Json;
use chrono::Utc;
use tracing::debug;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::{detect_intent, generate_reply},
};

pub async fn chat_handler(Json(payload): Json<ChatRequest>) -> Result<Json<ChatResponse>, AppError> {
    let Some(message) = payload.non_blank_message() else {
        debug!("rejecting chat request with empty message");
        return Err(AppError::BadRequest("Message is required".to_string()));
    };

    let intent = detect_intent(message);
    debug!(?intent, len = message.len(), "classified chat message");

    let reply = generate_reply(intent, message, Utc::now());
    Ok(Json(ChatResponse::new(reply)))
}
