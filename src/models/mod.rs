// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod profile;
pub mod recipe;
pub mod user;

pub use profile::{ProfileResponse, UpdateProfileRequest, UserProfileDocument};
pub use recipe::{
    Macros, RecipeDocument, RecipeResponse, SaveRecipeRequest, UpdateRecipeRequest,
};
pub use user::SessionUser;
