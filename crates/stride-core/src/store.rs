//! In-memory holder of the single active plan.

use tokio::sync::Mutex;

use crate::{
    error::{AgentError, Result},
    models::{Cursor, Plan},
};

#[derive(Debug, Default)]
struct Slot {
    plan: Option<Plan>,
    /// Revision handed to the most recently installed plan
    revision: u64,
}

/// Lock-guarded storage for at most one [`Plan`].
///
/// Every method holds the lock for its whole body, so `get`, `replace` and
/// `advance_index` never observe each other half-done.
#[derive(Debug, Default)]
pub struct PlanStore {
    slot: Mutex<Slot>,
}

impl PlanStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the current plan.
    pub async fn get(&self) -> Option<Plan> {
        self.slot.lock().await.plan.clone()
    }

    /// Installs a new plan at its first step, discarding the old one.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::InvalidState` if `steps` is empty; the store is
    /// left untouched in that case.
    pub async fn replace(&self, steps: Vec<String>) -> Result<Plan> {
        let mut slot = self.slot.lock().await;
        let plan = Plan::new(slot.revision + 1, steps)?;
        slot.revision = plan.revision();
        slot.plan = Some(plan.clone());
        Ok(plan)
    }

    /// Checks that the plan is still where `expected` saw it.
    ///
    /// # Errors
    ///
    /// - `AgentError::InvalidState` if there is no plan
    /// - `AgentError::Conflict` if the plan was replaced or advanced
    pub async fn confirm(&self, expected: Cursor) -> Result<Plan> {
        let slot = self.slot.lock().await;
        let plan = slot
            .plan
            .as_ref()
            .ok_or_else(|| AgentError::invalid_state("no plan to confirm"))?;

        if plan.cursor() != expected {
            return Err(AgentError::Conflict {
                step: plan.current_step().to_string(),
            });
        }
        Ok(plan.clone())
    }

    /// Moves the plan one step forward, provided it has not changed since
    /// `expected` was observed.
    ///
    /// # Errors
    ///
    /// - `AgentError::InvalidState` if there is no plan or it is on its last step
    /// - `AgentError::Conflict` if the plan was replaced or already advanced
    pub async fn advance_index(&self, expected: Cursor) -> Result<Plan> {
        let mut slot = self.slot.lock().await;
        let plan = slot
            .plan
            .as_mut()
            .ok_or_else(|| AgentError::invalid_state("no plan to advance"))?;

        if plan.cursor() != expected {
            return Err(AgentError::Conflict {
                step: plan.current_step().to_string(),
            });
        }

        plan.step_forward()?;
        Ok(plan.clone())
    }
}
