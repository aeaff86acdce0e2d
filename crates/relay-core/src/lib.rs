//! Core fault and envelope types for relay
//!
//! Everything here is framework-free: the server crate turns these values
//! into actual HTTP responses, the client crate reads them back off the
//! wire.

pub mod classify;
pub mod envelope;
pub mod fault;
pub mod respond;

pub use classify::{Classification, classify};
pub use envelope::ErrorEnvelope;
pub use fault::Fault;
pub use respond::respond_to;
