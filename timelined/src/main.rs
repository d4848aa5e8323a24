//! Timeline Daemon
//!
//! Loads the event log and serves user timelines over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Start with default configuration
//! cargo run -p timelined
//!
//! # Start with a custom event log and port
//! TIMELINE_EVENTS_FILE=/data/events.json TIMELINE_API_PORT=8081 cargo run -p timelined
//! ```
//!
//! # Environment Variables
//!
//! - `TIMELINE_ENV`: Environment (test, development, production)
//! - `TIMELINE_API_HOST`: API host (default: 0.0.0.0)
//! - `TIMELINE_API_PORT`: API port (default: 8888)
//! - `TIMELINE_EVENTS_FILE`: Event log path (default: testdata/events-sample.json)

use timelined::{Config, Daemon};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("timelined=info".parse()?))
        .init();

    // Load configuration
    let config = Config::from_env()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = %config.environment,
        api_host = %config.api.host,
        api_port = config.api.port,
        events_file = %config.events.path.display(),
        "Timeline Daemon"
    );

    // Build the store, then serve
    let daemon = Daemon::load(config).await?;
    daemon.run().await?;

    Ok(())
}
