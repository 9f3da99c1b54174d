//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; nothing is re-read per request.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Environment Variables (non-sensitive) ---
    /// Frontend URL for CORS and cookie scoping
    pub frontend_url: String,
    /// GCP project ID (Firestore)
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Base URL of the chat-completion API
    pub openai_base_url: String,
    /// Model forwarded upstream when the request does not name one
    pub openai_model: String,
    /// Firestore collection holding saved recipes
    pub recipes_collection: String,
    /// Firestore collection holding user profiles
    pub user_profiles_collection: String,

    // --- Secrets ---
    /// Bearer credential for the chat-completion API.
    /// Absence is reported per-request (500), not at startup, so the
    /// rest of the API stays usable without it.
    pub openai_api_key: Option<String>,
    /// Firebase Identity Toolkit web API key
    pub firebase_api_key: String,
    /// JWT signing key for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            gcp_project_id: "test-project".to_string(),
            port: 8080,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            recipes_collection: "recipes".to_string(),
            user_profiles_collection: "userProfiles".to_string(),
            openai_api_key: Some("test_openai_key".to_string()),
            firebase_api_key: "test_firebase_key".to_string(),
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Secrets are injected as environment variables by the deployment
    /// platform; for local development a `.env` file works too.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            recipes_collection: env::var("COLLECTION_RECIPES")
                .unwrap_or_else(|_| crate::db::collections::RECIPES.to_string()),
            user_profiles_collection: env::var("COLLECTION_USER_PROFILES")
                .unwrap_or_else(|_| crate::db::collections::USER_PROFILES.to_string()),

            openai_api_key: env::var("OPENAI_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            firebase_api_key: env::var("FIREBASE_API_KEY")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("FIREBASE_API_KEY"))?,
            jwt_signing_key: env::var("JWT_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("JWT_SIGNING_KEY"))?
                .into_bytes(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
