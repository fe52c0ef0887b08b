//! TCP transport implementation.
//!
//! Line-delimited JSON-RPC over raw TCP sockets. Every connection gets its
//! own MCP session; the shared `McpServer` holds no per-session state, so
//! sessions never interfere with each other.

use rmcp::ServiceExt;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::McpServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Bind and serve until the process is stopped.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Ready - listening on {} (JSON-RPC over TCP)", addr);

        loop {
            match listener.accept().await {
                Ok((stream, peer_addr)) => {
                    info!("Connection from {}", peer_addr);

                    // Small JSON-RPC frames; don't let Nagle batch them.
                    if let Err(e) = stream.set_nodelay(true) {
                        warn!("Could not set TCP_NODELAY for {}: {}", peer_addr, e);
                    }

                    let session_server = server.clone();
                    tokio::spawn(async move {
                        Self::serve_session(session_server, stream, peer_addr).await;
                    });
                }
                Err(e) => {
                    warn!("Accept failed: {}", e);
                    // Back off briefly so a persistent accept error cannot spin.
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                }
            }
        }
    }

    /// Drive one client session to completion.
    async fn serve_session(
        server: McpServer,
        stream: tokio::net::TcpStream,
        peer_addr: std::net::SocketAddr,
    ) {
        let service = match server.serve(stream).await {
            Ok(s) => {
                info!("Session with {} established", peer_addr);
                s
            }
            Err(e) => {
                warn!("MCP handshake with {} failed: {}", peer_addr, e);
                return;
            }
        };

        match service.waiting().await {
            Ok(_) => info!("Session with {} closed", peer_addr),
            Err(e) => warn!("Session with {} ended with error: {}", peer_addr, e),
        }
    }
}
