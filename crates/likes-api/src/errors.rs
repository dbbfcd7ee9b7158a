use thiserror::Error;

/// Errors surfaced by every client operation
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or HTTP-layer failure
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Well-formed response with `success: false`; displays the server message as-is
    #[error("{message}")]
    RemoteRejected { message: String },

    /// An authenticated call was attempted before an API key was available
    #[error("API key not configured. Generate one first.")]
    NotAuthenticated,
}

impl ApiError {
    /// Failures a caller can report and move past without aborting a session
    pub fn is_soft_failure(&self) -> bool {
        matches!(
            self,
            ApiError::NotAuthenticated | ApiError::RemoteRejected { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Invalid API key: {0}")]
    InvalidApiKey(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("HTTP error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] likes_core::LikesError),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;
