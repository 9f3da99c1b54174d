// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile routes for authenticated users.

use axum::{
    extract::{Extension, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::{ProfileResponse, UpdateProfileRequest, UserProfileDocument};
use crate::AppState;

/// Profile routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/profile", get(get_profile).put(update_profile))
}

/// Get the current user's profile, creating it with defaults when absent.
async fn get_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>> {
    let profile = fetch_or_create(&state, &user).await?;
    Ok(Json(ProfileResponse::from(profile)))
}

/// Merge-update the current user's profile.
async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>> {
    let mut profile = fetch_or_create(&state, &user).await?;

    profile.apply_update(request, chrono::Utc::now());
    state.db.set_user_profile(&profile).await?;

    tracing::debug!(uid = %user.uid, "Profile updated");

    Ok(Json(ProfileResponse::from(profile)))
}

/// Profiles are created lazily on first access.
async fn fetch_or_create(state: &Arc<AppState>, user: &AuthUser) -> Result<UserProfileDocument> {
    if let Some(profile) = state.db.get_user_profile(&user.uid).await? {
        return Ok(profile);
    }

    let display_name = user.name.clone().unwrap_or_default();
    let profile = UserProfileDocument::initial(&user.uid, &display_name, chrono::Utc::now());
    state.db.set_user_profile(&profile).await?;

    tracing::info!(uid = %user.uid, "Profile created on first access");

    Ok(profile)
}
