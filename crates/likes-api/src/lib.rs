//! # Likes API
//!
//! HTTP client for the Free Fire Likes API.
//! This crate provides a typed interface over the four service endpoints
//! (`/health`, `/generate-api-key`, `/send-likes`, `/get-token`) and keeps
//! the issued API key for the lifetime of the client.

pub mod client;
pub mod errors;

// Re-export common types for convenience
pub use client::*;
pub use errors::*;

// Re-export core types that API consumers will need
pub use likes_core::{ApiKeyInfo, HealthStatus, SendLikesRequest, TokenInfo, KNOWN_REGIONS};
