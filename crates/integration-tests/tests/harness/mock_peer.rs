//! Canned peer for caller-side tests
//!
//! Serves `GET /compute` with a fixed status and body, optionally after a
//! delay, so the relay endpoint's branching can be driven precisely,
//! including shapes a real instance would never produce (success bodies,
//! garbage error bodies, hung responses).

use std::net::SocketAddr;
use std::time::Duration;

use axum::routing::get;
use axum::Router;
use http::StatusCode;
use tokio_util::sync::CancellationToken;

/// Mock peer that returns a predictable `/compute` response
pub struct MockPeer {
    addr: SocketAddr,
    shutdown: CancellationToken,
}

impl MockPeer {
    /// Start a mock peer answering with `status` and `body`
    pub async fn start(status: u16, body: &'static str) -> anyhow::Result<Self> {
        Self::start_inner(status, body, None).await
    }

    /// Start a mock peer that sleeps before answering
    pub async fn start_with_delay(status: u16, body: &'static str, delay: Duration) -> anyhow::Result<Self> {
        Self::start_inner(status, body, Some(delay)).await
    }

    async fn start_inner(status: u16, body: &'static str, delay: Option<Duration>) -> anyhow::Result<Self> {
        let status = StatusCode::from_u16(status)?;

        let app = Router::new().route(
            "/compute",
            get(move || async move {
                if let Some(delay) = delay {
                    tokio::time::sleep(delay).await;
                }
                (status, body)
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown })
    }

    /// Base URL for configuring this mock as the peer
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockPeer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
