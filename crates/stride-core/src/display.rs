//! Plain-text formatting for operation results.
//!
//! These strings are what HTTP clients read, so they are kept stable:
//!
//! | Value | Text |
//! |---|---|
//! | [`StatusSummary::Idle`] | `Agent is ready for a goal.` |
//! | [`StatusSummary::Working`] | `Agent is working on a plan. Current step is: <step>` |
//! | [`PlanCreated`] | `Plan created. Current step is: <step>` |
//! | [`AdvanceOutcome::Advanced`] | `Tool succeeded. New step is: <step>` |
//! | [`AdvanceOutcome::Completed`] | `Plan complete! All steps have been executed.` |
//! | [`AdvanceOutcome::ToolFailed`] | `Tool failed on step: <step>` |

use std::fmt;

use crate::models::{AdvanceOutcome, PlanCreated, StatusSummary};

/// Marker that clients look for to detect the end of a plan.
pub const PLAN_COMPLETE: &str = "Plan complete!";

impl fmt::Display for StatusSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusSummary::Idle => write!(f, "Agent is ready for a goal."),
            StatusSummary::Working { step, .. } => {
                write!(f, "Agent is working on a plan. Current step is: {step}")
            }
        }
    }
}

impl fmt::Display for PlanCreated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plan created. Current step is: {}", self.step)
    }
}

impl fmt::Display for AdvanceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvanceOutcome::Advanced { step, .. } => {
                write!(f, "Tool succeeded. New step is: {step}")
            }
            AdvanceOutcome::Completed { .. } => {
                write!(f, "{PLAN_COMPLETE} All steps have been executed.")
            }
            AdvanceOutcome::ToolFailed { step } => write!(f, "Tool failed on step: {step}"),
        }
    }
}
