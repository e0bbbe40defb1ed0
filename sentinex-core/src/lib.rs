//! Sentinex Core
//!
//! Core types for the Sentinex launchpad assistant.
//!
//! This crate contains:
//! - Domain types: transcript entries, pipeline steps, token descriptors, chat replies
//! - DTOs: request and response bodies of the agent HTTP endpoints
//! - Formatting helpers shared by the launchpad and the CLI

pub mod domain;
pub mod dto;
pub mod format;
