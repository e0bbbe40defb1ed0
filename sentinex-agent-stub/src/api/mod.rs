//! API Module
//!
//! HTTP API layer of the stub agent.
//! Each submodule handles endpoints for one agent service.

pub mod chat;
pub mod error;
pub mod health;
pub mod launchpad;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::scenario::Scenario;

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub scenario: Arc<Scenario>,
}

/// Create the main API router with all endpoints
pub fn create_router(scenario: Scenario) -> Router {
    let state = AppState {
        scenario: Arc::new(scenario),
    };

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Analysis endpoints
        .route("/sentimentAnalysis", post(launchpad::sentiment_analysis))
        .route("/launchpadChat", post(launchpad::launchpad_chat))
        // EVM deployment
        .route("/deployContract", post(launchpad::deploy_contract))
        .route("/mintTokens", post(launchpad::mint_tokens))
        // SNIP-20 token service
        .route("/deploy", post(launchpad::deploy_snip20))
        .route("/transfer", post(launchpad::transfer))
        // Social and chat
        .route("/postTweet", post(launchpad::post_tweet))
        .route("/chat", post(chat::chat))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
