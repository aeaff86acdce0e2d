use serde::{Deserialize, Serialize};

/// Structured error body exchanged between services
///
/// The field names and casing (`content`, `message`, `statusCode`) are the
/// wire contract; the calling side's deserializer depends on them exactly.
/// `status_code` is set by whichever mapper built the envelope and is never
/// inferred by the receiver. Callers re-surface it as their own transport
/// status, which is why it is a `u16` rather than a free integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    /// Which service produced this response, and from which fault handler
    pub content: String,
    /// Human-readable detail, typically including backtrace text
    pub message: String,
    /// Application-defined code, finer-grained than the transport status
    pub status_code: u16,
}
