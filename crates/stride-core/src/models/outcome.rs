//! Results returned by agent operations.

use serde::Serialize;

use super::Plan;

/// Summary returned after a goal has been turned into a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCreated {
    /// Description of the first step
    pub step: String,
    /// Number of steps in the new plan
    pub total_steps: usize,
}

impl From<&Plan> for PlanCreated {
    fn from(plan: &Plan) -> Self {
        Self {
            step: plan.current_step().to_string(),
            total_steps: plan.step_count(),
        }
    }
}

/// Read-only view of what the agent is doing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatusSummary {
    /// Waiting for a goal
    Idle,
    /// Working through a plan
    Working { index: usize, step: String },
}

impl From<Option<&Plan>> for StatusSummary {
    fn from(plan: Option<&Plan>) -> Self {
        match plan {
            None => StatusSummary::Idle,
            Some(plan) => StatusSummary::Working {
                index: plan.current_index(),
                step: plan.current_step().to_string(),
            },
        }
    }
}

/// Result of running the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AdvanceOutcome {
    /// The step succeeded and the plan moved to `step` at `index`
    Advanced { index: usize, step: String },
    /// The last step succeeded; the plan stays parked on it
    Completed { step: String },
    /// The executor reported failure; the plan did not move
    ToolFailed { step: String },
}

impl AdvanceOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, AdvanceOutcome::Completed { .. })
    }
}
