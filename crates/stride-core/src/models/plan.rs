//! Plan model definition and related functionality.

use serde::Serialize;

use super::PlanState;
use crate::error::{AgentError, Result};

/// Position of a plan as observed at one point in time.
///
/// A cursor is taken before a step runs and handed back when committing the
/// advance, so the store can tell whether the plan moved underneath.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Revision of the plan the cursor was taken from
    pub revision: u64,
    /// Index of the step that was current
    pub index: usize,
}

/// An ordered, non-empty list of steps and the position of the step in
/// progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Store-assigned revision, unique per installed plan
    revision: u64,

    /// Step descriptions in execution order
    steps: Vec<String>,

    /// Zero-based index of the step in progress
    current_index: usize,
}

impl Plan {
    /// Creates a plan positioned at its first step.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::InvalidState` if `steps` is empty.
    pub(crate) fn new(revision: u64, steps: Vec<String>) -> Result<Self> {
        if steps.is_empty() {
            return Err(AgentError::invalid_state("a plan needs at least one step"));
        }
        Ok(Self {
            revision,
            steps,
            current_index: 0,
        })
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Description of the step in progress.
    pub fn current_step(&self) -> &str {
        &self.steps[self.current_index]
    }

    /// Number of steps in the plan.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn is_at_last_step(&self) -> bool {
        self.current_index == self.last_index()
    }

    pub fn cursor(&self) -> Cursor {
        Cursor {
            revision: self.revision,
            index: self.current_index,
        }
    }

    /// Derived classification of this plan.
    pub fn state(&self) -> PlanState {
        if self.is_at_last_step() {
            PlanState::Completed
        } else {
            PlanState::InProgress
        }
    }

    /// Moves to the next step.
    ///
    /// # Errors
    ///
    /// Returns `AgentError::InvalidState` when already at the last step.
    pub(crate) fn step_forward(&mut self) -> Result<()> {
        if self.is_at_last_step() {
            return Err(AgentError::invalid_state(format!(
                "cannot advance past the last step ({} of {})",
                self.current_index + 1,
                self.steps.len()
            )));
        }
        self.current_index += 1;
        Ok(())
    }
}
