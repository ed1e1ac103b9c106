//! Test utilities shared across the gh2jira workspace
//!
//! This crate provides common testing infrastructure:
//! - Temporary configuration files ([`ConfigFileGuard`])
//! - Canned GitHub API payloads ([`fixtures`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;
pub mod fixtures;

// Re-export commonly used items
pub use config::ConfigFileGuard;
