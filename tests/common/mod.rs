// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use recipebox_api::config::Config;
use recipebox_api::db::FirestoreDb;
use recipebox_api::error::AppError;
use recipebox_api::middleware::auth::create_jwt;
use recipebox_api::routes::create_router;
use recipebox_api::services::{CompletionBackend, CompletionPayload, IdentityClient};
use recipebox_api::AppState;
use std::sync::Arc;

/// Canned upstream behaviors for completion proxy tests.
#[allow(dead_code)]
pub enum StubCompletion {
    /// 2xx upstream reply with this first-choice message text
    Content(String),
    /// Non-2xx upstream reply (status, body)
    UpstreamFailure(u16, String),
    /// 2xx upstream reply with no usable message text
    MalformedSuccess,
}

#[async_trait]
impl CompletionBackend for StubCompletion {
    async fn chat_completion(&self, _payload: &CompletionPayload) -> Result<String, AppError> {
        match self {
            StubCompletion::Content(content) => Ok(content.clone()),
            StubCompletion::UpstreamFailure(status, body) => Err(AppError::UpstreamStatus {
                status: *status,
                body: body.clone(),
            }),
            StubCompletion::MalformedSuccess => Err(AppError::InvalidUpstream(
                "missing choices[0].message.content".to_string(),
            )),
        }
    }
}

/// Create a test app with offline mock dependencies.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_completion(Arc::new(StubCompletion::Content("stub".to_string())))
}

/// Create a test app with a specific completion backend.
#[allow(dead_code)]
pub fn create_test_app_with_completion(
    completion: Arc<dyn CompletionBackend>,
) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let db = FirestoreDb::new_mock();
    let identity = IdentityClient::new_mock();

    let state = Arc::new(AppState {
        config,
        db,
        completion,
        identity,
    });

    (create_router(state.clone()), state)
}

/// Mint a session JWT the way the login handler does.
#[allow(dead_code)]
pub fn create_test_jwt(uid: &str, signing_key: &[u8]) -> String {
    create_jwt(uid, Some("test@example.com"), Some("Test User"), signing_key)
        .expect("JWT creation should succeed")
}
