// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Completion proxy routes.
//!
//! One shared handler serves both endpoint paths the frontend calls.

use crate::error::{AppError, Result};
use crate::services::CompletionPayload;
use crate::AppState;
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

const DEFAULT_TEMPERATURE: f64 = 0.7;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/generate-recipe", post(generate))
        .route("/api/openai-proxy", post(generate))
}

/// Successful proxy response: the first choice's message text.
#[derive(Serialize)]
pub struct CompletionResponse {
    pub content: String,
}

/// Validate a completion request and forward it upstream.
///
/// The request body is arbitrary JSON; a body that fails to parse is
/// treated as empty so the `messages` check below produces the 400.
async fn generate(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CompletionResponse>> {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let messages = match body.get("messages") {
        Some(Value::Array(messages)) => messages.clone(),
        _ => {
            return Err(AppError::BadRequest(
                "messages array is required".to_string(),
            ))
        }
    };

    let temperature = body
        .get("temperature")
        .and_then(Value::as_f64)
        .unwrap_or(DEFAULT_TEMPERATURE);
    let model = body
        .get("model")
        .and_then(Value::as_str)
        .unwrap_or(&state.config.openai_model)
        .to_string();

    tracing::debug!(
        model = %model,
        message_count = messages.len(),
        "Forwarding completion request"
    );

    let payload = CompletionPayload {
        model,
        messages,
        temperature,
    };

    let content = state.completion.chat_completion(&payload).await?;

    Ok(Json(CompletionResponse { content }))
}
