use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, TOML parsing fails,
    /// or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let config: Self = toml::from_str(&raw).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the peer URL is invalid, the peer timeout is
    /// zero, or the health path is not an absolute route path
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_peer()?;
        self.validate_health()?;
        Ok(())
    }

    fn validate_peer(&self) -> anyhow::Result<()> {
        let Some(ref peer) = self.peer else {
            return Ok(());
        };

        url::Url::parse(&peer.url).map_err(|e| anyhow::anyhow!("invalid peer.url '{}': {e}", peer.url))?;

        if peer.timeout == Some(0) {
            anyhow::bail!("peer.timeout must be greater than 0 when set");
        }

        Ok(())
    }

    fn validate_health(&self) -> anyhow::Result<()> {
        if self.server.health.enabled && !self.server.health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/'");
        }

        Ok(())
    }
}
