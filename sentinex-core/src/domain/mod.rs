//! Core domain types
//!
//! These types are shared between the launchpad library (which produces them)
//! and the CLI (which renders them).

pub mod reply;
pub mod step;
pub mod token;
pub mod transcript;
