//! Chat route handler.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::state::AppState;

/// Request body for the chat assistant.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Assistant reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

/// `POST /api/chat` - domain-restricted assistant. Blank or off-topic
/// messages get the fixed refusal; in-domain messages are answered by the
/// generator or fail with its error.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    let reply = state.chat().reply_to(&request.message).await?;
    Ok(Json(ChatResponse { reply }))
}
