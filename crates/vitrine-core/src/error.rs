//! Error taxonomy for page rendering.

/// Error type for page loading and streaming.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The requested locale segment does not match the negotiated locale.
    #[error("page not found")]
    NotFound,

    #[error("shell not sent before slots")]
    ShellNotSent,

    #[error("streaming error: {0}")]
    Stream(String),

    /// The immediate query failed; the whole request fails with it.
    #[error("query failed: {0}")]
    Query(#[from] anyhow::Error),
}

impl PageError {
    /// HTTP status this error maps to at the route boundary.
    pub fn status(&self) -> http::StatusCode {
        match self {
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::ShellNotSent | Self::Stream(_) | Self::Query(_) => {
                http::StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
