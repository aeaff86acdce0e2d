//! Demo endpoints: the fault-raising work endpoint and the caller endpoint

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use http::StatusCode;
use relay_client::{PeerClient, PeerReply};
use relay_config::ComputeConfig;
use relay_core::Fault;

use crate::fault_handler::Faulted;

/// Router for the work endpoint
pub(crate) fn compute_router(config: ComputeConfig) -> Router {
    Router::new().route("/compute", get(compute_handler)).with_state(config)
}

/// Router for the caller endpoint
pub(crate) fn relay_router(peer: PeerClient) -> Router {
    Router::new().route("/relay", get(relay_handler)).with_state(peer)
}

/// Liveness probe handler
pub(crate) async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Work endpoint: divides the configured operands
///
/// The stock configuration divides by zero on purpose, raising the
/// arithmetic fault into the middleware.
async fn compute_handler(State(config): State<ComputeConfig>) -> Result<String, Faulted> {
    let quotient = config
        .numerator
        .checked_div(config.denominator)
        .ok_or_else(Fault::divide_by_zero)?;

    Ok(format!("quotient is {quotient}"))
}

/// Caller endpoint: relays the outcome of a peer call
///
/// Success is decided on the transport status alone, so the peer's body is
/// never read on that path. A failing peer's envelope is re-surfaced with
/// its own `statusCode` as our transport status. Transport failures and
/// unreadable envelopes both collapse to a bare 500: in either case the
/// peer left nothing worth forwarding.
async fn relay_handler(State(peer): State<PeerClient>) -> Response {
    match peer.fetch_compute().await {
        Ok(PeerReply::Success) => (StatusCode::OK, "request processed successfully").into_response(),
        Ok(PeerReply::Failure(envelope)) => {
            let status =
                StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(envelope)).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "peer call failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
