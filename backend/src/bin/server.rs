//! DreamBerd Mathematics HTTP server binary.
//!
//! Binds the fixed port and serves evaluations until Ctrl-C.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin maths-server
//! curl -d '{"value1":5,"value2":3,"operation":"+"}' http://localhost:8080/
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log filter (default: info)

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use dreamberd_maths::config::ServerConfig;
use dreamberd_maths::http::{bind, create_router, serve};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting DreamBerd Mathematics server");

    let config = ServerConfig::default();
    let app = create_router(&config);
    let listener = bind(&config).await?;

    serve(listener, app, shutdown_signal()).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "Unable to listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
