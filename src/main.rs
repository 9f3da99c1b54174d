// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Recipebox API Server
//!
//! Backend for the recipe generator: proxies chat-completion requests to
//! the upstream model provider and persists recipes and user profiles in
//! Firestore.

use recipebox_api::{
    config::Config,
    db::FirestoreDb,
    services::{CompletionBackend, IdentityClient, OpenAiClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Recipebox API");

    if config.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set; completion proxy will return 500");
    }

    // Initialize Firestore database
    let db = FirestoreDb::new(&config)
        .await
        .expect("Failed to connect to Firestore");

    // Upstream chat-completion client
    let completion: Arc<dyn CompletionBackend> = Arc::new(OpenAiClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
    ));

    // Identity Toolkit client (accounts)
    let identity = IdentityClient::new(&config.firebase_api_key);

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        completion,
        identity,
    });

    // Build router
    let app = recipebox_api::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("recipebox_api=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
