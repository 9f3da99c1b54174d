// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Identity Toolkit REST client (account creation and sign-in).
//!
//! The identity service owns accounts; this client only wraps the
//! password endpoints the API needs:
//! - accounts:signUp
//! - accounts:signInWithPassword
//! - accounts:update (display name)

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Identity Toolkit client.
#[derive(Clone)]
pub struct IdentityClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl IdentityClient {
    /// Create a client against the live Identity Toolkit API.
    ///
    /// For local development with emulator, set FIREBASE_AUTH_EMULATOR_HOST.
    pub fn new(api_key: &str) -> Self {
        let base_url = match std::env::var("FIREBASE_AUTH_EMULATOR_HOST") {
            Ok(host) => {
                tracing::info!(host = %host, "Using Identity Toolkit emulator");
                format!("http://{}/identitytoolkit.googleapis.com/v1", host)
            }
            Err(_) => "https://identitytoolkit.googleapis.com/v1".to_string(),
        };

        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key: Some(api_key.to_string()),
        }
    }

    /// Create a mock identity client for testing (offline mode).
    ///
    /// All identity operations will return an error if called.
    pub fn new_mock() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: "http://127.0.0.1:9099/identitytoolkit.googleapis.com/v1".to_string(),
            api_key: None,
        }
    }

    /// Create a new account with email and password.
    pub async fn sign_up(&self, email: &str, password: &str) -> Result<IdentityUser, AppError> {
        self.post(
            "accounts:signUp",
            serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )
        .await
    }

    /// Sign in with email and password.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<IdentityUser, AppError> {
        self.post(
            "accounts:signInWithPassword",
            serde_json::json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }),
        )
        .await
    }

    /// Set the display name on the account that owns `id_token`.
    pub async fn set_display_name(
        &self,
        id_token: &str,
        display_name: &str,
    ) -> Result<(), AppError> {
        let _: serde_json::Value = self
            .post(
                "accounts:update",
                serde_json::json!({
                    "idToken": id_token,
                    "displayName": display_name,
                    "returnSecureToken": false,
                }),
            )
            .await?;
        Ok(())
    }

    /// POST a JSON body to an Identity Toolkit method.
    async fn post<T: DeserializeOwned>(
        &self,
        method: &str,
        body: serde_json::Value,
    ) -> Result<T, AppError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::IdentityApi("Identity service not configured (offline mode)".to_string())
        })?;

        let url = format!("{}/{}?key={}", self.base_url, method, api_key);
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::IdentityApi(format!("Request failed: {}", e)))?;

        self.check_response_json(response).await
    }

    /// Check response status, mapping Identity Toolkit error codes to
    /// application errors, and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let code = parse_error_code(&body);

            return Err(match code.as_str() {
                "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS"
                | "USER_DISABLED" => AppError::InvalidCredentials,
                "EMAIL_EXISTS" => {
                    AppError::BadRequest("An account with this email already exists".to_string())
                }
                "INVALID_EMAIL" => AppError::BadRequest("Invalid email address".to_string()),
                code if code.starts_with("WEAK_PASSWORD") => {
                    AppError::BadRequest("Password is too weak".to_string())
                }
                _ => AppError::IdentityApi(format!("HTTP {}: {}", status, code)),
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::IdentityApi(format!("JSON parse error: {}", e)))
    }
}

/// Pull the error code out of an Identity Toolkit error body
/// (`{"error": {"message": "EMAIL_EXISTS", ...}}`).
fn parse_error_code(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}

/// Account record returned by signUp/signInWithPassword.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityUser {
    /// Identity-service user id
    pub local_id: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Short-lived token for follow-up account operations
    pub id_token: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
