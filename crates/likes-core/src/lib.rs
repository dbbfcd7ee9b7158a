//! # Likes Core
//!
//! Core domain types for the Free Fire Likes API client.
//!
//! This crate contains pure data handling with no I/O dependencies:
//! - Wire payload models
//! - The `success` envelope check shared by every endpoint
//! - Known region codes
//! - Error definitions

pub mod errors;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use errors::{LikesError, Result};
pub use models::{
    extract_data, rejection_message, ApiKeyInfo, HealthStatus, SendLikesRequest, TokenInfo,
    DEFAULT_REJECTION_MESSAGE, KNOWN_REGIONS,
};
pub use utils::{is_known_region, mask_key};
