use std::net::SocketAddr;

use anyhow::Context;
use bytes::Bytes;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Owns the listening socket. Bound explicitly at startup, released when the
/// serving future is dropped on shutdown.
pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    pub async fn bind(addr: &str) -> anyhow::Result<Self> {
        let inner = TcpListener::bind(addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;
        Ok(Self { inner })
    }

    /// The actual bound address (useful when binding port 0).
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.inner.local_addr()?)
    }

    /// Accepts and serves connections one at a time: the next accept does
    /// not happen until the current connection is closed. Per-connection
    /// errors are logged and never stop the loop.
    pub async fn serve(self, response: Bytes) -> anyhow::Result<()> {
        info!("Listening on {}", self.local_addr()?);

        loop {
            let (socket, peer) = self.inner.accept().await?;
            info!("Accepted connection from {}", peer);

            let mut conn = Connection::new(socket, response.clone());
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        }
    }
}

pub async fn run(cfg: &Config, response: Bytes) -> anyhow::Result<()> {
    let listener = Listener::bind(&cfg.listen_addr).await?;
    listener.serve(response).await
}
