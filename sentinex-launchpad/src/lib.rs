//! Sentinex Launchpad
//!
//! Drives the social launchpad flow: analyze the market and the user's token
//! request, deploy the contract, mint to the owner and announce the launch.
//!
//! Architecture:
//! - Configuration: endpoint URLs and launch policy, from environment or defaults
//! - Network presets: explorer links and mint policy per deployment target
//! - Repositories: trait-based access to the agent endpoints
//! - Services: transcript store, step tracker, pipeline orchestrator, chat
//!
//! All state is in memory and lives as long as the service objects.

pub mod config;
pub mod messages;
pub mod network;
pub mod repository;
pub mod service;

pub use config::LaunchpadConfig;
pub use network::{NetworkKind, NetworkProfile};
pub use service::{
    ChatOutcome, ChatService, LaunchReport, LaunchSettings, LaunchpadOrchestrator, NullSink,
    RunOutcome, StepTracker, TranscriptSink, TranscriptStore,
};
