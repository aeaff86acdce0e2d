//! Logging for relay
//!
//! The `tracing` ecosystem end to end: `RUST_LOG`-style filtering with a
//! text or JSON formatter chosen by configuration. There is no exporter
//! side; this service's contract treats log emission as a collaborator,
//! so the subscriber stays local.

use relay_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global subscriber
///
/// `RUST_LOG` wins when set; `log_filter` is the fallback directive.
/// Call once at startup: the global subscriber rejects a second install.
pub fn init(config: Option<&TelemetryConfig>, log_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_filter));

    let format = config.map_or(LogFormat::Text, |telemetry| telemetry.log_format);

    match format {
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_file(false)
                .with_line_number(false);
            tracing_subscriber::registry().with(filter).with(fmt_layer).init();
        }
    }
}
