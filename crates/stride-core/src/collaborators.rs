//! Planning and execution capabilities the agent depends on.
//!
//! Both traits are synchronous; the agent runs them on the blocking thread
//! pool, so implementations are free to block for as long as a step takes.

use log::{debug, info};

/// Turns a goal into an ordered list of step descriptions.
pub trait Planner: Send + Sync + 'static {
    /// Produce the steps for `goal`. An empty list is treated as a fault.
    fn create_plan(&self, goal: &str) -> anyhow::Result<Vec<String>>;
}

/// Attempts one step and reports whether it succeeded.
pub trait StepExecutor: Send + Sync + 'static {
    /// `Ok(false)` is an ordinary tool failure; `Err` is an unexpected fault.
    fn run(&self, step: &str) -> anyhow::Result<bool>;
}

/// Planner that returns the same steps for every goal.
#[derive(Debug, Clone)]
pub struct FixedPlanner {
    steps: Vec<String>,
}

impl FixedPlanner {
    /// The deployment plan used when nothing else is configured.
    pub const DEFAULT_STEPS: [&'static str; 4] = [
        "Step 1: Containerize the agent application.",
        "Step 2: Deploy the container to Cloud Run.",
        "Step 3: Configure the Cloud Run service to use a GPU.",
        "Step 4: Verify the deployment is successful.",
    ];

    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for FixedPlanner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEPS)
    }
}

impl Planner for FixedPlanner {
    fn create_plan(&self, goal: &str) -> anyhow::Result<Vec<String>> {
        info!("Creating plan for goal: {goal}");
        Ok(self.steps.clone())
    }
}

/// Executor that pretends every step succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedExecutor;

impl StepExecutor for SimulatedExecutor {
    fn run(&self, step: &str) -> anyhow::Result<bool> {
        debug!("Tool used: executing '{step}'");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_planner_ignores_goal() {
        let planner = FixedPlanner::default();
        let first = planner.create_plan("demo").unwrap();
        let second = planner.create_plan("something else entirely").unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
        assert_eq!(first[0], "Step 1: Containerize the agent application.");
        assert_eq!(first[3], "Step 4: Verify the deployment is successful.");
    }

    #[test]
    fn test_custom_fixed_planner() {
        let planner = FixedPlanner::new(["a", "b"]);
        assert_eq!(planner.create_plan("x").unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn test_simulated_executor_always_succeeds() {
        let executor = SimulatedExecutor;
        for step in FixedPlanner::DEFAULT_STEPS {
            assert!(executor.run(step).unwrap());
        }
    }
}
