//! Goal submission and status operations for the Agent.

use std::sync::Arc;

use log::info;
use serde_json::Value;
use tokio::task;

use super::Agent;
use crate::{
    error::{CollaboratorResultExt, Result},
    models::{Plan, PlanCreated, PlanState, StatusSummary},
    params::Goal,
};

impl Agent {
    /// Plans `goal` and installs the result, discarding any previous plan and
    /// its progress.
    ///
    /// # Errors
    ///
    /// - `AgentError::Collaborator` if the planner fails
    /// - `AgentError::InvalidState` if the planner returns no steps
    /// - `AgentError::Join` if the planner panics
    pub async fn submit_goal(&self, goal: &Goal) -> Result<PlanCreated> {
        let planner = Arc::clone(&self.planner);
        let text = goal.as_str().to_owned();

        let steps = task::spawn_blocking(move || planner.create_plan(&text))
            .await?
            .collaborator_context("Planner failed")?;

        let plan = self.store.replace(steps).await?;
        info!(
            "Plan {} created with {} steps. Current step is: {}",
            plan.revision(),
            plan.step_count(),
            plan.current_step()
        );
        Ok(PlanCreated::from(&plan))
    }

    /// Validates a decoded request body and submits its goal.
    ///
    /// Validation happens before any planning; a rejected body leaves the
    /// store untouched.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::InvalidGoal` for a missing, non-string or
    /// over-long goal, otherwise the errors of [`Agent::submit_goal`].
    pub async fn submit_goal_body(&self, body: Option<&Value>) -> Result<PlanCreated> {
        let goal = Goal::from_body(body)?;
        self.submit_goal(&goal).await
    }

    /// What the agent is currently working on.
    pub async fn status(&self) -> StatusSummary {
        StatusSummary::from(self.store.get().await.as_ref())
    }

    pub async fn current_plan(&self) -> Option<Plan> {
        self.store.get().await
    }

    pub async fn state(&self) -> PlanState {
        PlanState::of(self.store.get().await.as_ref())
    }
}
