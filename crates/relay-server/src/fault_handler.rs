//! Centralized fault handling for the request pipeline
//!
//! One layer wraps every route: a handler that returns a [`Fault`] has it
//! carried out through the response extensions, where this middleware
//! classifies it, maps it, and writes the envelope response. No fault
//! crosses the layer boundary and nothing is re-raised; every request
//! ends in a written response.

use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use relay_core::{Fault, classify, respond_to};

/// Fault wrapper returned by route handlers
///
/// Exists so `?` works in handlers (via `From<Fault>`) while [`Fault`]
/// itself stays framework-free. Converting into a response parks the
/// fault in the extensions for the layer to consume; the placeholder 500
/// only reaches the wire if the layer was never installed.
#[derive(Debug)]
pub struct Faulted(pub Fault);

impl From<Fault> for Faulted {
    fn from(fault: Fault) -> Self {
        Self(fault)
    }
}

impl IntoResponse for Faulted {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(self.0);
        response
    }
}

/// Fault handling middleware
///
/// Delegates to the wrapped pipeline; when the response comes back
/// carrying a fault, replaces it wholesale with the classified envelope
/// response. Holds no per-request state; the service name is captured
/// once at layer construction.
pub async fn fault_handler_middleware(service: String, request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let Some(fault) = response.extensions_mut().remove::<Fault>() else {
        return response;
    };

    let classification = classify(&fault);
    tracing::error!(
        kind = fault.kind(),
        classification = ?classification,
        message = fault.message(),
        "request fault handled"
    );

    let (status, envelope) = respond_to(&service, classification, &fault);
    (status, Json(envelope)).into_response()
}
