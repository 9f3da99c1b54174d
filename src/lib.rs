// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Recipebox API: data-access and proxy backend for the recipe generator
//!
//! This crate provides the backend API that proxies chat-completion
//! requests to the upstream model provider and persists recipes and
//! user profiles in Firestore.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use db::FirestoreDb;
use services::{CompletionBackend, IdentityClient};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub completion: Arc<dyn CompletionBackend>,
    pub identity: IdentityClient,
}
