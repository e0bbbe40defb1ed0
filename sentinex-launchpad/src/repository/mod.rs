//! Repository layer
//!
//! Repositories are stateless adapters over the agent HTTP endpoints. They
//! expose one method per remote call without any business logic.
//!
//! All repositories are trait-based to enable testing and mocking.

mod agent;

pub use agent::{ChatRepository, HttpAgentRepository, LaunchpadRepository};
