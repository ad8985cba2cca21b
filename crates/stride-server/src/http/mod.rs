//! HTTP server exposing the agent.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | [`handlers::status`] |
//! | POST | `/` | [`handlers::submit_goal`] |
//! | POST | `/next-step` | [`handlers::next_step`] |
//!
//! Successful responses are plain text; failures are JSON built by
//! [`errors::ApiError`].

pub mod errors;
pub mod handlers;

use std::future::Future;

use anyhow::{Context, Result};
use axum::{routing::get, routing::post, Router};
use log::{info, warn};
use stride_core::Agent;
use tokio::net::TcpListener;

/// Build the router for an agent.
pub fn router(agent: Agent) -> Router {
    Router::new()
        .route("/", get(handlers::status).post(handlers::submit_goal))
        .route("/next-step", post(handlers::next_step))
        .with_state(agent)
}

/// Serve `agent` on `listener` until `shutdown` resolves.
pub async fn run_http_server<F>(listener: TcpListener, agent: Agent, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .context("Failed to read listener address")?;
    info!("Listening on http://{addr}");

    axum::serve(listener, router(agent))
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
