use serde::Deserialize;

/// Operands for the work endpoint's division
///
/// The stock values divide by zero on purpose: the endpoint exists to
/// exercise the fault pipeline, and a zero denominator is the original
/// failure it demonstrates. Point these at sane values to get a healthy
/// peer instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComputeConfig {
    #[serde(default = "default_numerator")]
    pub numerator: i64,
    #[serde(default)]
    pub denominator: i64,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            numerator: default_numerator(),
            denominator: 0,
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_numerator() -> i64 {
    2
}
