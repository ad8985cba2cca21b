//! Derived plan states.

use serde::Serialize;

use super::Plan;

/// Classification of a store's contents, computed on read and never stored.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanState {
    /// No plan has been installed
    Idle,

    /// A plan exists and its current step is not the last one
    InProgress,

    /// A plan exists and its index has reached the last step
    Completed,
}

impl PlanState {
    /// Classify an optional plan snapshot.
    pub fn of(plan: Option<&Plan>) -> Self {
        plan.map_or(PlanState::Idle, Plan::state)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlanState::Idle => "idle",
            PlanState::InProgress => "in_progress",
            PlanState::Completed => "completed",
        }
    }
}
