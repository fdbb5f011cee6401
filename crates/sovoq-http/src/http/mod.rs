//! HTTP components for the queue client:
//! - Request/response envelopes for the remote REST API
//! - Environment-derived configuration
//! - The authenticated client and command-level operations
//! - The clap CLI and its dispatch

pub mod cli;
pub mod client;
pub mod common;
pub mod config;
