use std::sync::{Arc, Barrier};

use stride_core::{Agent, AgentBuilder, FixedPlanner, Goal, StepExecutor};

/// Executor that meets its gate twice per step: once on entry and once
/// before returning, so a test can act while the step is running.
pub struct GatedExecutor {
    pub gate: Arc<Barrier>,
}

impl StepExecutor for GatedExecutor {
    fn run(&self, _step: &str) -> anyhow::Result<bool> {
        self.gate.wait();
        self.gate.wait();
        Ok(true)
    }
}

/// Meet the gate from async test code without blocking a runtime worker.
pub async fn meet(gate: &Arc<Barrier>) {
    let gate = Arc::clone(gate);
    tokio::task::spawn_blocking(move || {
        gate.wait();
    })
    .await
    .expect("Failed to meet gate");
}

/// Helper function to create a test agent whose steps wait on `gate`
pub fn create_gated_agent(steps: &[&str], gate: Arc<Barrier>) -> Agent {
    AgentBuilder::new()
        .with_planner(FixedPlanner::new(steps.iter().copied()))
        .with_executor(GatedExecutor { gate })
        .build()
}

pub fn goal(text: &str) -> Goal {
    Goal::new(text).expect("Failed to create goal")
}
