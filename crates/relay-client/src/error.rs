/// Client-specific result type
pub type Result<T> = std::result::Result<T, PeerClientError>;

/// Errors from the peer client
///
/// `Http` and `Parse` stay distinct so logs can tell an unreachable peer
/// from one that answered garbage; callers mapping these onto their own
/// response collapse both to a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum PeerClientError {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success body did not decode as an error envelope
    #[error("failed to parse error envelope: {0}")]
    Parse(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}
