// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chat-completion API client.
//!
//! Handles:
//! - Forwarding validated completion requests with the server credential
//! - Relaying upstream failures (status and body untouched)
//! - Unwrapping the first choice's message text

use crate::error::AppError;
use async_trait::async_trait;
use serde::Serialize;

/// Request body forwarded to the chat-completion endpoint.
///
/// Message entries are relayed verbatim; the upstream owns their schema.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionPayload {
    pub model: String,
    pub messages: Vec<serde_json::Value>,
    pub temperature: f64,
}

/// Boundary to the upstream chat-completion API.
///
/// The proxy handler depends on this trait so tests can stub the upstream.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Send a chat-completion request and return the first choice's
    /// message text.
    async fn chat_completion(&self, payload: &CompletionPayload) -> Result<String, AppError>;
}

/// OpenAI-compatible chat-completion client.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    /// Create a new client.
    ///
    /// A missing credential is reported per-request, so the server can
    /// start (and serve everything else) without one.
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl CompletionBackend for OpenAiClient {
    async fn chat_completion(&self, payload: &CompletionPayload) -> Result<String, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(AppError::MissingCredential("OPENAI_API_KEY"))?;

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Completion request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::UpstreamStatus { status, body });
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::InvalidUpstream(format!("JSON parse error: {}", e)))?;

        data.pointer("/choices/0/message/content")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AppError::InvalidUpstream("missing choices[0].message.content".to_string())
            })
    }
}
