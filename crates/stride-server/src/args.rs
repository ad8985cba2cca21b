use std::time::Duration;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::smoke::SmokeConfig;

/// Step-by-step plan agent served over HTTP
///
/// Clients POST a goal to `/`, then POST to `/next-step` to work through the
/// generated plan one step at a time. Running without a subcommand starts the
/// server. `--host` and `--port` go before the subcommand.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Address to bind the server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (the default)
    Serve,
    /// Run an end-to-end check against a running service
    Smoke(SmokeArgs),
}

#[derive(ClapArgs)]
pub struct SmokeArgs {
    /// Base URL of the service, e.g. http://localhost:8080
    #[arg(long, env = "STRIDE_BASE_URL")]
    pub base_url: String,

    /// Goal to submit
    #[arg(long, default_value = "Automated test")]
    pub goal: String,

    /// Maximum number of /next-step calls before giving up
    #[arg(long, default_value_t = 5)]
    pub attempts: u32,

    /// Pause before each /next-step call, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub delay_ms: u64,
}

impl SmokeArgs {
    pub fn into_config(self) -> SmokeConfig {
        SmokeConfig {
            base_url: self.base_url,
            goal: self.goal,
            attempts: self.attempts,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}
