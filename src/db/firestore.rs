// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Recipes (saved recipe documents, store-assigned ids)
//! - User profiles (one document per account, keyed by user id)

use crate::config::Config;
use crate::error::AppError;
use crate::models::{RecipeDocument, UserProfileDocument};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
    recipes_collection: String,
    user_profiles_collection: String,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(config).await;
        }

        let client = firestore::FirestoreDb::new(&config.gcp_project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = %config.gcp_project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
            recipes_collection: config.recipes_collection.clone(),
            user_profiles_collection: config.user_profiles_collection.clone(),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(config: &Config) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(config.gcp_project_id.clone());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = %config.gcp_project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
            recipes_collection: config.recipes_collection.clone(),
            user_profiles_collection: config.user_profiles_collection.clone(),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            client: None,
            recipes_collection: crate::db::collections::RECIPES.to_string(),
            user_profiles_collection: crate::db::collections::USER_PROFILES.to_string(),
        }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── Recipe Operations ───────────────────────────────────────

    /// Get a recipe by its document id.
    pub async fn get_recipe(&self, recipe_id: &str) -> Result<Option<RecipeDocument>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(&self.recipes_collection)
            .obj()
            .one(recipe_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Store a new recipe with a store-assigned document id.
    ///
    /// Returns the created document, id populated.
    pub async fn create_recipe(&self, recipe: &RecipeDocument) -> Result<RecipeDocument, AppError> {
        self.get_client()?
            .fluent()
            .insert()
            .into(&self.recipes_collection)
            .generate_document_id()
            .object(recipe)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Write a recipe back under its existing document id.
    pub async fn set_recipe(
        &self,
        recipe_id: &str,
        recipe: &RecipeDocument,
    ) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(&self.recipes_collection)
            .document_id(recipe_id)
            .object(recipe)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    /// Get all recipes owned by a user.
    pub async fn get_recipes_for_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<RecipeDocument>, AppError> {
        let user_id = user_id.to_string();
        self.get_client()?
            .fluent()
            .select()
            .from(self.recipes_collection.as_str())
            .filter(move |q| q.field("user_id").eq(user_id.clone()))
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Delete a recipe by its document id.
    pub async fn delete_recipe(&self, recipe_id: &str) -> Result<(), AppError> {
        self.get_client()?
            .fluent()
            .delete()
            .from(self.recipes_collection.as_str())
            .document_id(recipe_id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── User Profile Operations ─────────────────────────────────

    /// Get a user profile by user id.
    pub async fn get_user_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<UserProfileDocument>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(&self.user_profiles_collection)
            .obj()
            .one(user_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create or overwrite a user profile, keyed by user id.
    pub async fn set_user_profile(&self, profile: &UserProfileDocument) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(&self.user_profiles_collection)
            .document_id(&profile.user_id)
            .object(profile)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
