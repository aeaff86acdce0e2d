use std::path::PathBuf;

use clap::Parser;

/// Relay fault-propagation demo service
#[derive(Debug, Parser)]
#[command(name = "relay", about = "Service demonstrating centralized fault handling between peers")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "relay.toml", env = "RELAY_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "RELAY_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
