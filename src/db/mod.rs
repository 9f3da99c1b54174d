//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Default collection names (overridable via environment).
pub mod collections {
    pub const RECIPES: &str = "recipes";
    pub const USER_PROFILES: &str = "userProfiles";
}
