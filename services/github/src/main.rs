//! Mock release-distribution API server for installer tests.
//!
//! Fakes the releases-latest metadata endpoint and the binary-download
//! endpoints of a GitHub-style API, and can be switched into failure modes
//! that exercise an installer's timeout, retry, parsing, and integrity
//! handling.
//!
//! # Usage
//!
//! ```bash
//! # Serve real responses on the default port
//! cargo run -p relmock-github
//!
//! # Simulate a rate-limited API on port 9090
//! cargo run -p relmock-github -- --port 9090 --mode rate_limit
//! ```
//!
//! `MOCK_SERVER_HOST` sets the hostname baked into download URLs and
//! `DATA_DIR` the directory payload files are served from.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use relmock_core::tracing::init_tracing;
use relmock_github::config::MockConfig;
use relmock_github::mode::SimulationMode;
use relmock_github::release::ReleaseDescriptor;
use relmock_github::router::build_router;
use relmock_github::state::{AppState, DEFAULT_STALL};

#[derive(Parser)]
#[command(about = "Mock release-distribution API for installer tests")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Scenario to simulate; `normal` serves real responses
    #[arg(long, value_enum, default_value_t = SimulationMode::Normal)]
    mode: SimulationMode,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let config = MockConfig::from_env();

    let state = AppState {
        mode: args.mode,
        release: Arc::new(ReleaseDescriptor::latest(&config.host, args.port)),
        data_dir: Arc::new(config.data_dir),
        stall: DEFAULT_STALL,
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", args.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, mode = %args.mode, "mock release server listening");
    info!("  GET /repos/{{owner}}/{{repo}}/releases/latest");
    info!("  GET /releases/download/{{tag}}/{{filename}}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("mock release server stopped");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM. axum then stops accepting connections and
/// lets in-flight requests drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        _ = terminate => {},
    }
}
