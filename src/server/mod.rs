pub mod error;
pub mod health;
pub mod router;
pub mod shutdown;

use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use crate::app::Application;
use crate::server::error::ServerError;
use crate::server::router::build_router;
use crate::server::shutdown::ShutdownManager;

pub use error::ErrorResponse;

pub struct Server {
    pub addr: SocketAddr,
    /// Populated by bind(), consumed by run().
    listener: Option<TcpListener>,
    app: Arc<Application>,
    shutdown: Arc<ShutdownManager>,
}

impl Server {
    pub fn new(app: Application) -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 0)), // Determined at bind time
            listener: None,
            app: Arc::new(app),
            shutdown: Arc::new(ShutdownManager::new()),
        }
    }

    /// Bind the listener. Port 0 picks an ephemeral port; the actual
    /// address is returned and stored in `addr`.
    pub async fn bind(&mut self, addr: SocketAddr) -> Result<SocketAddr, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;
        let actual_addr = listener.local_addr()?;
        self.addr = actual_addr;
        self.listener = Some(listener);
        tracing::info!("Server bound to {}", actual_addr);
        Ok(actual_addr)
    }

    pub fn router(&self) -> Router {
        build_router(self.app.clone())
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Serve until shutdown is signalled.
    ///
    /// Consumes self to take ownership of the bound listener.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        tracing::info!(title = %self.app.title(), "Serving on http://{}", self.addr);

        let app = build_router(self.app.clone());
        let shutdown = self.shutdown.clone();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { shutdown.wait_for_shutdown().await })
            .into_future()
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownManager>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
