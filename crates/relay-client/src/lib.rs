#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Typed HTTP client for a peer relay instance
//!
//! Owns the caller side of the envelope contract: branch on the transport
//! status first, and only then decide whether a body is worth reading

mod client;
pub mod error;

pub use client::{PeerClient, PeerReply};
pub use error::{PeerClientError, Result};
