//! Session identity model for the API.

use serde::{Deserialize, Serialize};

/// Identity principal as surfaced by the API.
///
/// Accounts live in the identity service; recipes and profiles reference
/// them by `uid` only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Identity-service user id
    pub uid: String,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name, when the account has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
