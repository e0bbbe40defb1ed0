//! Data Transfer Objects for the agent HTTP endpoints
//!
//! These are the JSON request and response bodies exchanged with the external
//! services. They are kept separate from the domain types so that the wire
//! shapes (camelCase keys, bare-string responses) stay in one place.

pub mod chat;
pub mod launchpad;
