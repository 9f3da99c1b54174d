// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account and session routes.

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::{create_jwt, AuthUser, SESSION_COOKIE};
use crate::models::{SessionUser, UserProfileDocument};
use crate::services::IdentityUser;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
}

/// Session-scoped routes; the auth middleware is applied in routes/mod.rs.
pub fn session_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/me", get(get_me))
}

/// Payload for creating an account.
///
/// Fields default to empty so a missing field fails validation (400)
/// instead of body deserialization.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
    pub name: Option<String>,
}

/// Payload for logging in.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

/// Create an account, bootstrap its profile, and start a session.
async fn register(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> Result<(CookieJar, Json<SessionUser>)> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let account = state
        .identity
        .sign_up(&request.email, &request.password)
        .await?;

    tracing::info!(uid = %account.local_id, "Account created");

    // Attach the display name to the account when one was given
    if let Some(name) = request.name.as_deref().filter(|n| !n.is_empty()) {
        state
            .identity
            .set_display_name(&account.id_token, name)
            .await?;
    }

    // Bootstrap the profile so first login lands on sane defaults
    let display_name = request.name.clone().unwrap_or_default();
    let profile =
        UserProfileDocument::initial(&account.local_id, &display_name, chrono::Utc::now());
    state.db.set_user_profile(&profile).await?;

    start_session(&state, jar, &account, request.name.as_deref())
}

/// Sign in and start a session.
async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<SessionUser>)> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let account = state
        .identity
        .sign_in(&request.email, &request.password)
        .await?;

    tracing::info!(uid = %account.local_id, "User logged in");

    let name = account.display_name.clone();
    start_session(&state, jar, &account, name.as_deref())
}

/// Issue the session JWT and set it as a cookie.
fn start_session(
    state: &Arc<AppState>,
    jar: CookieJar,
    account: &IdentityUser,
    name: Option<&str>,
) -> Result<(CookieJar, Json<SessionUser>)> {
    let jwt = create_jwt(
        &account.local_id,
        account.email.as_deref(),
        name,
        &state.config.jwt_signing_key,
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("JWT creation failed: {}", e)))?;

    let cookie = Cookie::build((SESSION_COOKIE, jwt))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.frontend_url.starts_with("https://"))
        .build();

    let user = SessionUser {
        uid: account.local_id.clone(),
        email: account.email.clone(),
        display_name: name.map(|s| s.to_string()),
    };

    Ok((jar.add(cookie), Json(user)))
}

/// End the session by removing the cookie.
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let removal = Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (jar.remove(removal), StatusCode::NO_CONTENT)
}

/// Current session identity.
async fn get_me(Extension(user): Extension<AuthUser>) -> Json<SessionUser> {
    Json(SessionUser {
        uid: user.uid,
        email: user.email,
        display_name: user.name,
    })
}
