//! Stride server application
//!
//! Serves the plan agent over HTTP and ships a smoke-test client for checking
//! a deployed instance end to end.

mod args;
mod http;
mod smoke;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use http::{run_http_server, shutdown_signal};
use log::info;
use smoke::SmokeOutcome;
use stride_core::AgentBuilder;
use tokio::net::TcpListener;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        host,
        port,
        command,
    } = Args::parse();

    match command {
        Some(Serve) | None => {
            let agent = AgentBuilder::new().build();
            let listener = TcpListener::bind((host.as_str(), port))
                .await
                .with_context(|| format!("Failed to bind {host}:{port}"))?;

            info!("Stride agent started");
            run_http_server(listener, agent, shutdown_signal()).await?;
            Ok(ExitCode::SUCCESS)
        }
        // The smoke client reports its own progress and failures on stdout
        Some(Smoke(smoke_args)) => match smoke::run(&smoke_args.into_config()).await {
            Ok(SmokeOutcome::Completed { calls }) => {
                info!("Plan completed after {calls} step calls");
                Ok(ExitCode::SUCCESS)
            }
            Ok(SmokeOutcome::Exhausted) => Ok(ExitCode::FAILURE),
            Err(e) => {
                println!("  - FAILED: {e:#}");
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
