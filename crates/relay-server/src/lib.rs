//! HTTP server assembly for relay
//!
//! Builds the axum router from configuration and owns the serve loop. The
//! listener, routing, and shutdown are framework plumbing; the part that
//! matters is that every route sits behind the fault-handling layer.

mod fault_handler;
mod routes;

use std::net::SocketAddr;

use axum::Router;
use relay_client::PeerClient;
use relay_config::Config;
use tower_http::trace::TraceLayer;

pub use fault_handler::{Faulted, fault_handler_middleware};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// The relay endpoint is only registered when a peer is configured;
    /// the work and health endpoints are always present (health unless
    /// disabled).
    ///
    /// # Errors
    ///
    /// Returns an error if the peer client cannot be constructed
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(routes::health_handler));
        }

        app = app.merge(routes::compute_router(config.compute));

        if let Some(ref peer_config) = config.peer {
            let peer = PeerClient::new(peer_config)?;
            app = app.merge(routes::relay_router(peer));
        }

        // Layers, innermost first

        // Fault handling sits closest to the handlers so nothing below it
        // can leak a fault past the pipeline
        let service = config.service.name.clone();
        app = app.layer(axum::middleware::from_fn(move |request, next| {
            let service = service.clone();
            async move { fault_handler::fault_handler_middleware(service, request, next).await }
        }));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered, then drains
    /// in-flight requests.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "relay listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
