//! Step execution operations for the Agent.

use std::sync::Arc;

use log::{info, warn};
use tokio::task;

use super::Agent;
use crate::{
    error::{AgentError, CollaboratorResultExt, Result},
    models::AdvanceOutcome,
};

impl Agent {
    /// Runs the current step and moves the plan forward if it succeeded.
    ///
    /// A failed step leaves the plan where it is, so calling `advance` again
    /// retries the same step. Success on the last step reports
    /// [`AdvanceOutcome::Completed`] without changing anything, which means
    /// repeated calls keep re-running the last step.
    ///
    /// # Errors
    ///
    /// - `AgentError::NoPlan` if no goal has been submitted
    /// - `AgentError::Conflict` if the plan changed while the step ran
    /// - `AgentError::Collaborator` / `AgentError::Join` if the executor
    ///   errors or panics
    pub async fn advance(&self) -> Result<AdvanceOutcome> {
        let plan = self.store.get().await.ok_or(AgentError::NoPlan)?;
        let cursor = plan.cursor();
        let step = plan.current_step().to_string();

        let executor = Arc::clone(&self.executor);
        let to_run = step.clone();
        let succeeded = task::spawn_blocking(move || executor.run(&to_run))
            .await?
            .collaborator_context("Step executor failed")?;

        if !succeeded {
            warn!("Tool failed on step: {step}");
            return Ok(AdvanceOutcome::ToolFailed { step });
        }

        if plan.is_at_last_step() {
            self.store.confirm(cursor).await?;
            info!("Plan {} complete", plan.revision());
            return Ok(AdvanceOutcome::Completed { step });
        }

        let plan = self.store.advance_index(cursor).await?;
        info!(
            "Plan {} advanced to step {} of {}",
            plan.revision(),
            plan.current_index() + 1,
            plan.step_count()
        );
        Ok(AdvanceOutcome::Advanced {
            index: plan.current_index(),
            step: plan.current_step().to_string(),
        })
    }
}
