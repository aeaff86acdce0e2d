use std::time::Duration;

use relay_config::PeerConfig;
use relay_core::ErrorEnvelope;
use url::Url;

use crate::error::{PeerClientError, Result};

/// Outcome of a peer call, decided strictly on the transport status
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeerReply {
    /// 2xx. The body is never read: success replies are not required to
    /// carry an envelope, so any envelope a peer does include is
    /// unreachable through this client.
    Success,
    /// Non-2xx, with the envelope the peer wrote
    Failure(ErrorEnvelope),
}

/// Typed client for a peer's work endpoint
#[derive(Debug, Clone)]
pub struct PeerClient {
    base_url: Url,
    http: reqwest::Client,
}

impl PeerClient {
    /// Build a client from peer configuration
    ///
    /// The configured timeout, when present, bounds the whole outbound
    /// call; without one a hung peer hangs the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the client cannot be built
    pub fn new(config: &PeerConfig) -> Result<Self> {
        let base_url = Url::parse(&config.url)
            .map_err(|e| PeerClientError::Config(format!("invalid peer URL: {e}")))?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http = builder.build()?;

        Ok(Self { base_url, http })
    }

    /// Base URL this client points at
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Call the peer's work endpoint
    ///
    /// Branches on the transport status before touching the body: 2xx
    /// resolves to [`PeerReply::Success`] with the body dropped unread,
    /// anything else is deserialized as an [`ErrorEnvelope`].
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails at the transport level
    /// (connection refused, timeout) or a non-success body does not decode
    /// as an envelope
    pub async fn fetch_compute(&self) -> Result<PeerReply> {
        let url = make_url(&self.base_url, "/compute");
        let response = self.http.get(url.as_str()).send().await?;

        if response.status().is_success() {
            return Ok(PeerReply::Success);
        }

        let envelope: ErrorEnvelope = response
            .json()
            .await
            .map_err(|e| PeerClientError::Parse(e.to_string()))?;

        Ok(PeerReply::Failure(envelope))
    }
}

fn make_url(base_url: &Url, path: &str) -> Url {
    let mut url = base_url.clone();
    url.set_path(path);
    url
}
