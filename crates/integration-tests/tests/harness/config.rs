//! Config builder for tests

use relay_config::{ComputeConfig, Config, HealthConfig, PeerConfig};

/// Builder for test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Name the service; shows up in envelope `content`
    pub fn with_service_name(mut self, name: &str) -> Self {
        self.config.service.name = name.to_owned();
        self
    }

    /// Set the work endpoint operands
    pub fn with_operands(mut self, numerator: i64, denominator: i64) -> Self {
        self.config.compute = ComputeConfig {
            numerator,
            denominator,
        };
        self
    }

    /// Point the relay endpoint at a peer
    pub fn with_peer(mut self, url: &str) -> Self {
        self.config.peer = Some(PeerConfig {
            url: url.to_owned(),
            timeout: None,
        });
        self
    }

    /// Point at a peer with a request timeout in seconds
    pub fn with_peer_timeout(mut self, url: &str, timeout: u64) -> Self {
        self.config.peer = Some(PeerConfig {
            url: url.to_owned(),
            timeout: Some(timeout),
        });
        self
    }

    /// Replace the health endpoint configuration
    pub fn with_health(mut self, health: HealthConfig) -> Self {
        self.config.server.health = health;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
