use serde::Deserialize;

/// Identity of this service instance
///
/// The name appears in every error envelope's `content` field so callers
/// can tell which side of a chain produced a failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    #[serde(default = "default_name")]
    pub name: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { name: default_name() }
    }
}

fn default_name() -> String {
    "relay".to_string()
}
