//! Local web server for the output directory.
//!
//! Serves the generated pages on `127.0.0.1`. If the requested port is taken
//! the next ports are tried.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

use crate::error_handling::ServerError;

/// Router serving the files of `dir`; `/` maps to `index.html`.
pub fn static_router(dir: &Path) -> Router {
    Router::new().fallback_service(ServeDir::new(dir))
}

/// A bound, not yet running, static file server.
#[derive(Debug)]
pub struct StaticServer {
    listener: TcpListener,
    port: u16,
    dir: PathBuf,
}

impl StaticServer {
    /// Binds `127.0.0.1:port`, moving on to the next port while the current
    /// one is in use, for at most `max_attempts` ports.
    ///
    /// # Errors
    ///
    /// - `ServerError::NoAvailablePort` if every probed port is taken
    /// - `ServerError::Bind` for any other bind failure
    pub async fn bind(
        dir: impl Into<PathBuf>,
        port: u16,
        max_attempts: u16,
    ) -> Result<Self, ServerError> {
        let last = port.saturating_add(max_attempts.max(1) - 1);
        for candidate in port..=last {
            match TcpListener::bind(("127.0.0.1", candidate)).await {
                Ok(listener) => {
                    let port = listener
                        .local_addr()
                        .map(|addr| addr.port())
                        .unwrap_or(candidate);
                    if port != candidate {
                        log::debug!("Requested port {} resolved to {}", candidate, port);
                    }
                    return Ok(Self {
                        listener,
                        port,
                        dir: dir.into(),
                    });
                }
                Err(e) if e.kind() == ErrorKind::AddrInUse => {
                    log::debug!("Port {} is in use, trying the next one", candidate);
                }
                Err(e) => {
                    return Err(ServerError::Bind {
                        port: candidate,
                        source: e,
                    })
                }
            }
        }
        Err(ServerError::NoAvailablePort { first: port, last })
    }

    /// Port actually bound.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Browser URL of a file in the served directory.
    pub fn url(&self, file: &str) -> String {
        format!("http://localhost:{}/{}", self.port, file)
    }

    /// Serves until `shutdown` completes.
    pub async fn serve_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        log::info!(
            "Serving {} on http://127.0.0.1:{}/",
            self.dir.display(),
            self.port
        );
        axum::serve(self.listener, static_router(&self.dir))
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(ServerError::Serve)
    }
}

/// Completes on Ctrl+C.
pub async fn ctrl_c_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_bind_skips_port_in_use() {
        let dir = TempDir::new().expect("temp dir");
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let taken = occupied.local_addr().expect("addr").port();
        if taken == u16::MAX {
            return;
        }

        match StaticServer::bind(dir.path(), taken, 10).await {
            Ok(server) => assert_ne!(server.port(), taken),
            // Every following port may happen to be taken on a busy machine
            Err(ServerError::NoAvailablePort { first, .. }) => assert_eq!(first, taken),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    #[tokio::test]
    async fn test_bind_single_attempt_on_taken_port_fails() {
        let dir = TempDir::new().expect("temp dir");
        let occupied = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let taken = occupied.local_addr().expect("addr").port();

        let result = StaticServer::bind(dir.path(), taken, 1).await;
        match result {
            Err(ServerError::NoAvailablePort { first, last }) => {
                assert_eq!(first, taken);
                assert_eq!(last, taken);
            }
            other => panic!("expected NoAvailablePort, got {:?}", other.map(|s| s.port())),
        }
    }

    #[tokio::test]
    async fn test_serves_files_from_directory() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("index.html"), "<h1>index</h1>").expect("write");
        std::fs::write(dir.path().join("map.html"), "<h1>map</h1>").expect("write");

        let server = StaticServer::bind(dir.path(), 0, 1).await.expect("bind");
        let port = server.port();
        assert_ne!(port, 0);
        assert_eq!(server.url("map.html"), format!("http://localhost:{}/map.html", port));

        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_until(async move {
            let _ = stop_rx.await;
        }));

        let client = reqwest::Client::new();
        let map = client
            .get(format!("http://127.0.0.1:{}/map.html", port))
            .send()
            .await
            .expect("request");
        assert_eq!(map.status().as_u16(), 200);
        assert_eq!(map.text().await.expect("body"), "<h1>map</h1>");

        let index = client
            .get(format!("http://127.0.0.1:{}/", port))
            .send()
            .await
            .expect("request");
        assert_eq!(index.text().await.expect("body"), "<h1>index</h1>");

        let missing = client
            .get(format!("http://127.0.0.1:{}/nope.html", port))
            .send()
            .await
            .expect("request");
        assert_eq!(missing.status().as_u16(), 404);

        let _ = stop_tx.send(());
        handle.await.expect("join").expect("serve");
    }
}
