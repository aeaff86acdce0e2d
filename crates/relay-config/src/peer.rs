use serde::Deserialize;

/// Peer instance called by the relay endpoint
///
/// `timeout` bounds the whole outbound call in seconds. It is optional,
/// but any deployment that cares about a hung peer should set it.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeerConfig {
    /// Base URL of the peer, e.g. `http://localhost:3001`
    pub url: String,
    /// Request timeout in seconds
    #[serde(default)]
    pub timeout: Option<u64>,
}
