// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipe CRUD routes for authenticated users.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::{RecipeDocument, RecipeResponse, SaveRecipeRequest, UpdateRecipeRequest};
use crate::AppState;

/// Recipe routes (require authentication via JWT).
/// The auth middleware is applied in routes/mod.rs for these routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/recipes", get(list_recipes).post(save_recipe))
        .route(
            "/api/recipes/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
}

/// Save a new recipe for the current user.
///
/// Required fields are checked before anything touches the store.
async fn save_recipe(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<SaveRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>)> {
    request
        .validate()
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let document = RecipeDocument::from_request(request, &user.uid, chrono::Utc::now());
    let stored = state.db.create_recipe(&document).await?;

    tracing::info!(
        uid = %user.uid,
        recipe_id = %stored.id.as_deref().unwrap_or(""),
        "Recipe saved"
    );

    Ok((StatusCode::CREATED, Json(RecipeResponse::from(stored))))
}

/// List all recipes owned by the current user.
async fn list_recipes(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<RecipeResponse>>> {
    let documents = state.db.get_recipes_for_user(&user.uid).await?;

    Ok(Json(
        documents.into_iter().map(RecipeResponse::from).collect(),
    ))
}

/// Get one recipe by id.
async fn get_recipe(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(recipe_id): Path<String>,
) -> Result<Json<RecipeResponse>> {
    let document = fetch_owned(&state, &user, &recipe_id).await?;
    Ok(Json(RecipeResponse::from(document)))
}

/// Partially update a recipe: only fields present in the request change.
async fn update_recipe(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(recipe_id): Path<String>,
    Json(request): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>> {
    let mut document = fetch_owned(&state, &user, &recipe_id).await?;

    document.apply_update(request, chrono::Utc::now());
    state.db.set_recipe(&recipe_id, &document).await?;

    tracing::info!(uid = %user.uid, recipe_id = %recipe_id, "Recipe updated");

    Ok(Json(RecipeResponse::from(document)))
}

/// Delete a recipe.
async fn delete_recipe(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(recipe_id): Path<String>,
) -> Result<StatusCode> {
    fetch_owned(&state, &user, &recipe_id).await?;
    state.db.delete_recipe(&recipe_id).await?;

    tracing::info!(uid = %user.uid, recipe_id = %recipe_id, "Recipe deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Fetch a recipe, surfacing another user's document as not-found.
async fn fetch_owned(
    state: &Arc<AppState>,
    user: &AuthUser,
    recipe_id: &str,
) -> Result<RecipeDocument> {
    let document = state
        .db
        .get_recipe(recipe_id)
        .await?
        .filter(|doc| doc.user_id == user.uid)
        .ok_or_else(|| AppError::NotFound(format!("Recipe {} not found", recipe_id)))?;

    Ok(document)
}
