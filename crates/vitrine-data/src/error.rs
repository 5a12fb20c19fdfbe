//! Error type for Storefront API operations.

/// Error type for query execution.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),

    /// The backend answered 200 but reported query errors.
    #[error("Backend error: {0}")]
    Backend(String),
}
