// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipe models for storage and API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::time_utils::format_utc_rfc3339;

/// Display-formatted nutritional breakdown attached to a recipe.
///
/// Stored as an array of `"Key: value"` display entries; only the four
/// known keys survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<String>,
}

impl Macros {
    /// Serialize to display entries, e.g. `"Calories: 200"`.
    ///
    /// Unset fields produce no entry.
    pub fn to_entries(&self) -> Vec<String> {
        let mut entries = Vec::new();
        if let Some(calories) = &self.calories {
            entries.push(format!("Calories: {}", calories));
        }
        if let Some(protein) = &self.protein {
            entries.push(format!("Protein: {}", protein));
        }
        if let Some(carbs) = &self.carbs {
            entries.push(format!("Carbs: {}", carbs));
        }
        if let Some(fat) = &self.fat {
            entries.push(format!("Fat: {}", fat));
        }
        entries
    }

    /// Parse display entries back into the structured form.
    ///
    /// Each entry splits on its first colon; keys match case-insensitively
    /// and unknown keys are silently dropped. Returns `None` when nothing
    /// matched.
    pub fn from_entries(entries: &[String]) -> Option<Self> {
        let mut macros = Macros::default();
        for entry in entries {
            let Some((key, value)) = entry.split_once(':') else {
                continue;
            };
            let value = value.trim().to_string();
            match key.trim().to_lowercase().as_str() {
                "calories" => macros.calories = Some(value),
                "protein" => macros.protein = Some(value),
                "carbs" => macros.carbs = Some(value),
                "fat" => macros.fat = Some(value),
                _ => {}
            }
        }
        if macros == Macros::default() {
            None
        } else {
            Some(macros)
        }
    }
}

/// Stored recipe record in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeDocument {
    /// Store-assigned document id (never written as a field)
    #[serde(alias = "_firestore_id", skip_serializing, default)]
    pub id: Option<String>,
    /// Owning user id
    pub user_id: String,
    /// Recipe title
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ingredient list, one display line per entry
    pub ingredients: Vec<String>,
    /// Instruction text
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Macros as display entries ("Calories: 200")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
    /// Server-assigned, stored as a native Firestore timestamp
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl RecipeDocument {
    /// Build a new stored document from a validated save request.
    ///
    /// Timestamps come from the server clock, never from the client.
    pub fn from_request(request: SaveRecipeRequest, user_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            user_id: user_id.to_string(),
            title: request.title,
            description: request.description,
            ingredients: request.ingredients,
            instructions: request.instructions,
            prep_time: request.prep_time,
            cook_time: request.cook_time,
            total_time: request.total_time,
            servings: request.servings,
            difficulty: request.difficulty,
            macros: request
                .macros
                .map(|m| m.to_entries())
                .filter(|entries| !entries.is_empty()),
            reasoning: request.reasoning,
            tips: request.tips,
            tags: request.tags,
            user_rating: request.user_rating,
            user_notes: request.user_notes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a partial update into the stored document.
    ///
    /// Only fields present in the request change; `updated_at` is bumped.
    pub fn apply_update(&mut self, update: UpdateRecipeRequest, now: DateTime<Utc>) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = update.instructions {
            self.instructions = instructions;
        }
        if let Some(prep_time) = update.prep_time {
            self.prep_time = Some(prep_time);
        }
        if let Some(cook_time) = update.cook_time {
            self.cook_time = Some(cook_time);
        }
        if let Some(total_time) = update.total_time {
            self.total_time = Some(total_time);
        }
        if let Some(servings) = update.servings {
            self.servings = Some(servings);
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = Some(difficulty);
        }
        if let Some(macros) = update.macros {
            let entries = macros.to_entries();
            self.macros = if entries.is_empty() {
                None
            } else {
                Some(entries)
            };
        }
        if let Some(reasoning) = update.reasoning {
            self.reasoning = Some(reasoning);
        }
        if let Some(tips) = update.tips {
            self.tips = Some(tips);
        }
        if let Some(tags) = update.tags {
            self.tags = Some(tags);
        }
        if let Some(user_rating) = update.user_rating {
            self.user_rating = Some(user_rating);
        }
        if let Some(user_notes) = update.user_notes {
            self.user_notes = Some(user_notes);
        }
        self.updated_at = now;
    }
}

/// Payload for saving a new recipe.
///
/// The required fields default to empty so that a missing field fails
/// validation (400) instead of body deserialization.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SaveRecipeRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "at least one ingredient is required"))]
    pub ingredients: Vec<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "instructions are required"))]
    pub instructions: String,
    pub description: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
    pub servings: Option<String>,
    pub difficulty: Option<String>,
    pub macros: Option<Macros>,
    pub reasoning: Option<String>,
    pub tips: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub user_rating: Option<u8>,
    pub user_notes: Option<String>,
}

/// Payload for partially updating a stored recipe.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecipeRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub prep_time: Option<String>,
    pub cook_time: Option<String>,
    pub total_time: Option<String>,
    pub servings: Option<String>,
    pub difficulty: Option<String>,
    pub macros: Option<Macros>,
    pub reasoning: Option<String>,
    pub tips: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub user_rating: Option<u8>,
    pub user_notes: Option<String>,
}

/// Saved recipe as returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub servings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macros: Option<Macros>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    pub tips: Vec<String>,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_rating: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
    /// ISO-8601 creation time
    pub created_at: String,
    /// ISO-8601 last-update time
    pub updated_at: String,
}

impl From<RecipeDocument> for RecipeResponse {
    /// Convert a stored document to the API shape: macros entries parse
    /// back into the structured object, native timestamps become
    /// ISO-8601 strings.
    fn from(doc: RecipeDocument) -> Self {
        Self {
            id: doc.id.unwrap_or_default(),
            user_id: doc.user_id,
            title: doc.title,
            description: doc.description,
            ingredients: doc.ingredients,
            instructions: doc.instructions,
            prep_time: doc.prep_time,
            cook_time: doc.cook_time,
            total_time: doc.total_time,
            servings: doc.servings,
            difficulty: doc.difficulty,
            macros: doc
                .macros
                .as_deref()
                .and_then(Macros::from_entries),
            reasoning: doc.reasoning,
            tips: doc.tips.unwrap_or_default(),
            tags: doc.tags.unwrap_or_default(),
            user_rating: doc.user_rating,
            user_notes: doc.user_notes,
            created_at: format_utc_rfc3339(doc.created_at),
            updated_at: format_utc_rfc3339(doc.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_macros_round_trip() {
        let entries = strings(&["Calories: 200", "Protein: 10g"]);
        let macros = Macros::from_entries(&entries).expect("entries should parse");

        assert_eq!(macros.calories.as_deref(), Some("200"));
        assert_eq!(macros.protein.as_deref(), Some("10g"));
        assert_eq!(macros.carbs, None);
        assert_eq!(macros.fat, None);

        let mut round_tripped = macros.to_entries();
        let mut expected = entries.clone();
        round_tripped.sort();
        expected.sort();
        assert_eq!(round_tripped, expected);
    }

    #[test]
    fn test_macros_unknown_keys_dropped() {
        let entries = strings(&["Fiber: 5g", "Fat: 12g", "Sodium: 300mg"]);
        let macros = Macros::from_entries(&entries).unwrap();

        assert_eq!(macros.fat.as_deref(), Some("12g"));
        assert_eq!(macros.to_entries(), strings(&["Fat: 12g"]));
    }

    #[test]
    fn test_macros_split_on_first_colon_only() {
        let entries = strings(&["Carbs: 30g: approx"]);
        let macros = Macros::from_entries(&entries).unwrap();
        assert_eq!(macros.carbs.as_deref(), Some("30g: approx"));
    }

    #[test]
    fn test_macros_case_insensitive_keys() {
        let entries = strings(&["calories: 150", "PROTEIN: 8g"]);
        let macros = Macros::from_entries(&entries).unwrap();
        assert_eq!(macros.calories.as_deref(), Some("150"));
        assert_eq!(macros.protein.as_deref(), Some("8g"));
    }

    #[test]
    fn test_macros_nothing_recognized_is_none() {
        assert_eq!(Macros::from_entries(&strings(&["Fiber: 5g"])), None);
        assert_eq!(Macros::from_entries(&[]), None);
        assert_eq!(Macros::from_entries(&strings(&["no delimiter here"])), None);
    }

    fn sample_document() -> RecipeDocument {
        let now = chrono::DateTime::from_timestamp(1_704_103_200, 0).unwrap();
        RecipeDocument::from_request(
            SaveRecipeRequest {
                title: "Garlic Pasta".to_string(),
                ingredients: strings(&["200g spaghetti", "3 cloves garlic"]),
                instructions: "Boil pasta. Fry garlic. Combine.".to_string(),
                description: None,
                prep_time: Some("5 min".to_string()),
                cook_time: None,
                total_time: None,
                servings: Some("2".to_string()),
                difficulty: None,
                macros: Some(Macros {
                    calories: Some("450".to_string()),
                    ..Macros::default()
                }),
                reasoning: None,
                tips: None,
                tags: Some(strings(&["pasta"])),
                user_rating: None,
                user_notes: None,
            },
            "user-1",
            now,
        )
    }

    #[test]
    fn test_document_from_request_sets_owner_and_timestamps() {
        let doc = sample_document();
        assert_eq!(doc.user_id, "user-1");
        assert_eq!(doc.macros, Some(strings(&["Calories: 450"])));
        assert_eq!(doc.created_at, doc.updated_at);
        assert!(doc.id.is_none());
    }

    #[test]
    fn test_apply_update_merges_only_provided_fields() {
        let mut doc = sample_document();
        let created_at = doc.created_at;
        let later = created_at + chrono::Duration::hours(1);

        doc.apply_update(
            UpdateRecipeRequest {
                title: Some("Garlic Butter Pasta".to_string()),
                user_rating: Some(5),
                ..UpdateRecipeRequest::default()
            },
            later,
        );

        assert_eq!(doc.title, "Garlic Butter Pasta");
        assert_eq!(doc.user_rating, Some(5));
        // Untouched fields survive the merge
        assert_eq!(doc.servings.as_deref(), Some("2"));
        assert_eq!(doc.created_at, created_at);
        assert_eq!(doc.updated_at, later);
    }

    #[test]
    fn test_response_parses_macros_and_formats_timestamps() {
        let mut doc = sample_document();
        doc.id = Some("abc123".to_string());
        let response = RecipeResponse::from(doc);

        assert_eq!(response.id, "abc123");
        assert_eq!(
            response.macros,
            Some(Macros {
                calories: Some("450".to_string()),
                ..Macros::default()
            })
        );
        assert_eq!(response.tips, Vec::<String>::new());
        assert_eq!(response.created_at, "2024-01-01T10:00:00Z");
    }
}
