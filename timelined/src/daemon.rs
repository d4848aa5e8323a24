//! Daemon: Main runtime orchestrator.
//!
//! # Lifecycle
//!
//! 1. Load configuration
//! 2. Read the event log and build the immutable event store
//! 3. Start API server
//! 4. Serve until SIGINT, then shut down gracefully
//!
//! The store is fully built before the listener is bound, so every request
//! sees the same complete snapshot.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info};

use timeline_eventlog::load_event_file;
use timeline_store::EventStore;

use crate::api::{create_router, ApiState};
use crate::config::Config;
use crate::error::{DaemonError, DaemonResult};

// =============================================================================
// Daemon
// =============================================================================

/// The timeline daemon.
pub struct Daemon {
    /// Configuration
    config: Config,
    /// Event store, shared read-only with every handler
    store: Arc<EventStore>,
}

impl Daemon {
    /// Create a daemon over an already built store.
    pub fn new(config: Config, store: Arc<EventStore>) -> Self {
        Self { config, store }
    }

    /// Read the configured event log and build the store.
    ///
    /// Any malformed record, bad timestamp or duplicate event ID aborts the load.
    pub async fn load(config: Config) -> DaemonResult<Self> {
        info!(path = %config.events.path.display(), "Loading event log");

        let events = load_event_file(&config.events.path).await?;
        let store = EventStore::build(events)?;

        info!(
            users = store.user_count(),
            events = store.event_count(),
            "Event store ready"
        );

        Ok(Self::new(config, Arc::new(store)))
    }

    /// The shared event store.
    pub fn store(&self) -> &Arc<EventStore> {
        &self.store
    }

    /// Run the daemon.
    ///
    /// This method blocks until shutdown is requested (SIGINT).
    pub async fn run(self) -> DaemonResult<()> {
        info!(
            version = env!("CARGO_PKG_VERSION"),
            environment = %self.config.environment,
            "Starting timeline daemon"
        );

        let listener = self.bind().await?;
        let api_addr = listener.local_addr()?;
        info!(%api_addr, "API server listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Shutdown complete");

        Ok(())
    }

    /// Start the API server in a background task and return its address.
    pub async fn start_api_server(&self) -> DaemonResult<SocketAddr> {
        let listener = self.bind().await?;
        let local_addr = listener.local_addr()?;
        let router = self.router();

        // Spawn the server task
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                error!(error = %e, "API server error");
            }
        });

        Ok(local_addr)
    }

    fn router(&self) -> axum::Router {
        create_router(Arc::new(ApiState::new(Arc::clone(&self.store))))
    }

    async fn bind(&self) -> DaemonResult<TcpListener> {
        let addr = self.config.bind_addr();

        TcpListener::bind(&addr).await.map_err(|e| {
            error!(%addr, error = %e, "Failed to bind API listener");
            DaemonError::Server(e)
        })
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}

// =============================================================================
// Tests
// =============================================================================
