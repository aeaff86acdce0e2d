#![allow(clippy::must_use_candidate)]

pub mod compute;
pub mod health;
mod loader;
pub mod peer;
pub mod server;
pub mod service;
pub mod telemetry;

use serde::Deserialize;

pub use compute::ComputeConfig;
pub use health::HealthConfig;
pub use peer::PeerConfig;
pub use server::ServerConfig;
pub use service::ServiceConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level relay configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Service identity
    #[serde(default)]
    pub service: ServiceConfig,
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Operands for the work endpoint
    #[serde(default)]
    pub compute: ComputeConfig,
    /// Peer to call from the relay endpoint
    #[serde(default)]
    pub peer: Option<PeerConfig>,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
