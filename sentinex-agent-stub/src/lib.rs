//! Sentinex Agent Stub
//!
//! Local stand-in for the agent services the launchpad talks to. Every
//! endpoint answers with canned data shaped like the real services, and the
//! scenario switches let a developer rehearse the failure paths.

pub mod api;
pub mod scenario;

pub use api::create_router;
pub use scenario::Scenario;

use anyhow::Context;
use tokio::net::TcpListener;

/// Bind address from SENTINEX_STUB_BIND_ADDR (default: 127.0.0.1:5001)
pub fn bind_addr() -> String {
    std::env::var("SENTINEX_STUB_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:5001".to_string())
}

/// Binds the listener and serves the stub until the server stops
pub async fn serve(addr: &str, scenario: Scenario) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(scenario))
        .await
        .context("Failed to start server")
}
