//! Service layer
//!
//! Services hold the in-memory launchpad state and drive the remote calls
//! through the repository layer:
//! - Transcript store: append-only chat log with a notification sink
//! - Step tracker: progress over the four fixed pipeline steps
//! - Orchestrator: runs the launch pipeline for one prompt at a time
//! - Chat: single request/reply exchanges with the DeFi agent

mod busy;
mod chat;
mod orchestrator;
mod tracker;
mod transcript;

pub use chat::{ChatOutcome, ChatService};
pub use orchestrator::{LaunchReport, LaunchSettings, LaunchpadOrchestrator, RunOutcome};
pub use tracker::StepTracker;
pub use transcript::{NullSink, TranscriptSink, TranscriptStore};
