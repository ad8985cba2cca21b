//! End-to-end smoke test against a running agent service.
//!
//! Submits a goal, then calls `/next-step` until the plan reports completion
//! or the attempt budget runs out, pausing between calls.

use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use serde_json::json;
use stride_core::PLAN_COMPLETE;

/// Settings for one smoke run.
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    pub base_url: String,
    pub goal: String,
    pub attempts: u32,
    pub delay: Duration,
}

/// How a smoke run ended when no request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmokeOutcome {
    /// The plan completed after this many `/next-step` calls
    Completed { calls: u32 },
    /// Every attempt succeeded but the plan never completed
    Exhausted,
}

impl SmokeConfig {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

/// Runs the smoke test, printing progress to stdout.
///
/// # Errors
///
/// Returns an error if a request cannot be sent or the service answers with
/// a non-success status.
pub async fn run(config: &SmokeConfig) -> Result<SmokeOutcome> {
    let client = Client::new();
    println!("--- Starting test for service at {} ---", config.base_url);

    println!("\nStep 1: Sending goal...");
    let body = client
        .post(config.url("/"))
        .json(&json!({ "goal": config.goal }))
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .context("Could not send goal")?
        .text()
        .await
        .context("Could not read goal response")?;
    println!("  - SUCCESS: Server responded with: {body}");

    println!("\nStep 2: Advancing plan...");
    for call in 1..=config.attempts {
        tokio::time::sleep(config.delay).await;
        debug!("Advancing plan, attempt {call} of {}", config.attempts);

        let body = client
            .post(config.url("/next-step"))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .context("Could not advance step")?
            .text()
            .await
            .context("Could not read step response")?;
        println!("  - SUCCESS: Server responded with: {body}");

        if body.contains(PLAN_COMPLETE) {
            println!("\n--- TEST COMPLETE: Agent finished its plan. ---");
            return Ok(SmokeOutcome::Completed { calls: call });
        }
    }

    println!("\n--- TEST FAILED: Agent did not complete its plan in time. ---");
    Ok(SmokeOutcome::Exhausted)
}
