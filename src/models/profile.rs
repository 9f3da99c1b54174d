// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User profile model for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time_utils::format_utc_rfc3339;

/// Per-account preferences document, keyed by user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileDocument {
    /// Owning user id (also the document id)
    pub user_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub dietary_preferences: Vec<String>,
    pub cuisine_preferences: Vec<String>,
    pub skill_level: String,
    pub dark_mode: bool,
    pub saved_ingredients: Vec<String>,
    pub default_servings: u32,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl UserProfileDocument {
    /// Initial profile, created lazily the first time an account touches
    /// its profile.
    pub fn initial(user_id: &str, display_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.to_string(),
            display_name: display_name.to_string(),
            avatar_url: None,
            dietary_preferences: Vec::new(),
            cuisine_preferences: Vec::new(),
            skill_level: "Any".to_string(),
            dark_mode: false,
            saved_ingredients: Vec::new(),
            default_servings: 2,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge-update: only fields present in the request change.
    pub fn apply_update(&mut self, update: UpdateProfileRequest, now: DateTime<Utc>) {
        if let Some(display_name) = update.display_name {
            self.display_name = display_name;
        }
        if let Some(avatar_url) = update.avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        if let Some(dietary_preferences) = update.dietary_preferences {
            self.dietary_preferences = dietary_preferences;
        }
        if let Some(cuisine_preferences) = update.cuisine_preferences {
            self.cuisine_preferences = cuisine_preferences;
        }
        if let Some(skill_level) = update.skill_level {
            self.skill_level = skill_level;
        }
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(saved_ingredients) = update.saved_ingredients {
            self.saved_ingredients = saved_ingredients;
        }
        if let Some(default_servings) = update.default_servings {
            self.default_servings = default_servings;
        }
        self.updated_at = now;
    }
}

/// Payload for merge-updating a profile.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub dietary_preferences: Option<Vec<String>>,
    pub cuisine_preferences: Option<Vec<String>>,
    pub skill_level: Option<String>,
    pub dark_mode: Option<bool>,
    pub saved_ingredients: Option<Vec<String>>,
    pub default_servings: Option<u32>,
}

/// Profile as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user_id: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub dietary_preferences: Vec<String>,
    pub cuisine_preferences: Vec<String>,
    pub skill_level: String,
    pub dark_mode: bool,
    pub saved_ingredients: Vec<String>,
    pub default_servings: u32,
    /// ISO-8601 creation time
    pub created_at: String,
    /// ISO-8601 last-update time
    pub updated_at: String,
}

impl From<UserProfileDocument> for ProfileResponse {
    fn from(doc: UserProfileDocument) -> Self {
        Self {
            user_id: doc.user_id,
            display_name: doc.display_name,
            avatar_url: doc.avatar_url,
            dietary_preferences: doc.dietary_preferences,
            cuisine_preferences: doc.cuisine_preferences,
            skill_level: doc.skill_level,
            dark_mode: doc.dark_mode,
            saved_ingredients: doc.saved_ingredients,
            default_servings: doc.default_servings,
            created_at: format_utc_rfc3339(doc.created_at),
            updated_at: format_utc_rfc3339(doc.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_profile_defaults() {
        let now = chrono::DateTime::from_timestamp(1_704_103_200, 0).unwrap();
        let profile = UserProfileDocument::initial("user-1", "Alex", now);

        assert_eq!(profile.skill_level, "Any");
        assert_eq!(profile.default_servings, 2);
        assert!(!profile.dark_mode);
        assert!(profile.saved_ingredients.is_empty());
    }

    #[test]
    fn test_apply_update_merges_only_provided_fields() {
        let now = chrono::DateTime::from_timestamp(1_704_103_200, 0).unwrap();
        let mut profile = UserProfileDocument::initial("user-1", "Alex", now);
        let later = now + chrono::Duration::minutes(5);

        profile.apply_update(
            UpdateProfileRequest {
                dark_mode: Some(true),
                saved_ingredients: Some(vec!["garlic".to_string()]),
                ..UpdateProfileRequest::default()
            },
            later,
        );

        assert!(profile.dark_mode);
        assert_eq!(profile.saved_ingredients, vec!["garlic".to_string()]);
        assert_eq!(profile.display_name, "Alex");
        assert_eq!(profile.default_servings, 2);
        assert_eq!(profile.created_at, now);
        assert_eq!(profile.updated_at, later);
    }

    #[test]
    fn test_clearing_saved_ingredients() {
        let now = chrono::DateTime::from_timestamp(1_704_103_200, 0).unwrap();
        let mut profile = UserProfileDocument::initial("user-1", "Alex", now);
        profile.saved_ingredients = vec!["garlic".to_string(), "basil".to_string()];

        profile.apply_update(
            UpdateProfileRequest {
                saved_ingredients: Some(Vec::new()),
                ..UpdateProfileRequest::default()
            },
            now,
        );

        assert!(profile.saved_ingredients.is_empty());
    }
}
