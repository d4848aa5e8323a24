//! Timeline Daemon Library
//!
//! Serves a user's activity timeline from a preloaded event log.
//!
//! # Architecture
//!
//! ```text
//! Event log → Event Store (built once, Arc-shared)
//!                  ↑
//! HTTP API → Timeline Query → Windower → Paginator
//! ```
//!
//! # Components
//!
//! - **Daemon**: Loads the event log, builds the store, runs the API server
//! - **Timeline Query**: Resolves (user, event, limit, page) to a slice of events
//! - **API**: HTTP endpoints
//! - **Config**: Environment-based configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use timelined::{Config, Daemon};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Config::from_env().expect("Failed to load config");
//!     let daemon = Daemon::load(config).await.expect("Failed to load events");
//!     daemon.run().await.expect("Daemon error");
//! }
//! ```

#![warn(clippy::all)]

pub mod api;
pub mod config;
pub mod daemon;
pub mod error;
pub mod query;

// Re-exports for convenience
pub use api::{create_router, ApiState};
pub use config::{ApiConfig, Config, Environment, EventsConfig};
pub use daemon::Daemon;
pub use error::{DaemonError, DaemonResult, QueryError, QueryResult};
pub use query::TimelineQuery;
