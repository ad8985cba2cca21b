//! Builder for creating and configuring Agent instances.

use std::sync::Arc;

use super::Agent;
use crate::{
    collaborators::{FixedPlanner, Planner, SimulatedExecutor, StepExecutor},
    store::PlanStore,
};

/// Builder for creating and configuring Agent instances.
///
/// Unset parts fall back to an empty [`PlanStore`], the [`FixedPlanner`]
/// deployment plan and the [`SimulatedExecutor`].
#[derive(Default)]
pub struct AgentBuilder {
    store: Option<Arc<PlanStore>>,
    planner: Option<Arc<dyn Planner>>,
    executor: Option<Arc<dyn StepExecutor>>,
}

impl AgentBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares an existing store instead of creating a fresh one.
    pub fn with_store(mut self, store: Arc<PlanStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the planner used to turn goals into steps.
    pub fn with_planner<P: Planner>(mut self, planner: P) -> Self {
        self.planner = Some(Arc::new(planner));
        self
    }

    /// Sets the executor used to run steps.
    pub fn with_executor<E: StepExecutor>(mut self, executor: E) -> Self {
        self.executor = Some(Arc::new(executor));
        self
    }

    /// Builds the configured agent.
    pub fn build(self) -> Agent {
        Agent::new(
            self.store.unwrap_or_default(),
            self.planner.unwrap_or_else(|| Arc::new(FixedPlanner::default())),
            self.executor.unwrap_or_else(|| Arc::new(SimulatedExecutor)),
        )
    }
}
