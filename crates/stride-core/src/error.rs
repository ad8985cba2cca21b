//! Error types for the agent library.

use std::fmt;

use thiserror::Error;

/// Reasons a submitted goal is rejected before any planning happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalRejection {
    /// No `goal` field, or no usable request body at all
    Missing,
    /// `goal` is present but is not a string
    WrongType,
    /// `goal` is longer than [`crate::params::MAX_GOAL_CHARS`]
    TooLong,
}

impl fmt::Display for GoalRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            GoalRejection::Missing => "Missing 'goal' in request body.",
            GoalRejection::WrongType => "Invalid type: 'goal' must be a string.",
            GoalRejection::TooLong => "Invalid length: 'goal' cannot exceed 200 characters.",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for GoalRejection {}

/// Comprehensive error type for all agent operations.
#[derive(Error, Debug)]
pub enum AgentError {
    /// The goal failed validation; the reason is safe to show to users
    #[error("{reason}")]
    InvalidGoal { reason: GoalRejection },
    /// An advance was requested while no plan is installed
    #[error("No plan has been set.")]
    NoPlan,
    /// The store was asked to do something its current contents do not allow
    #[error("Invalid plan state: {message}")]
    InvalidState { message: String },
    /// The plan was replaced or advanced while a step was executing
    #[error("Plan changed while executing step: {step}")]
    Conflict { step: String },
    /// A planner or step executor failed unexpectedly
    #[error("{context}: {source:#}")]
    Collaborator {
        context: String,
        #[source]
        source: anyhow::Error,
    },
    /// A blocking collaborator task panicked or was cancelled
    #[error("Task join error: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Builder for collaborator errors with context.
pub struct CollaboratorErrorBuilder {
    context: String,
}

impl CollaboratorErrorBuilder {
    /// Create a new builder with a context message.
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: anyhow::Error) -> AgentError {
        AgentError::Collaborator {
            context: self.context,
            source,
        }
    }
}

impl AgentError {
    /// Creates a builder for collaborator errors.
    pub fn collaborator(context: impl Into<String>) -> CollaboratorErrorBuilder {
        CollaboratorErrorBuilder::new(context)
    }

    /// Creates an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        AgentError::InvalidState {
            message: message.into(),
        }
    }

    /// Whether the error is an unexpected fault rather than a condition the
    /// caller can act on.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            AgentError::InvalidState { .. } | AgentError::Collaborator { .. } | AgentError::Join(_)
        )
    }
}

impl From<GoalRejection> for AgentError {
    fn from(reason: GoalRejection) -> Self {
        AgentError::InvalidGoal { reason }
    }
}

/// Extension trait for mapping collaborator results with context.
pub trait CollaboratorResultExt<T> {
    /// Map collaborator failures with a context message.
    fn collaborator_context(self, context: &str) -> Result<T>;
}

impl<T> CollaboratorResultExt<T> for anyhow::Result<T> {
    fn collaborator_context(self, context: &str) -> Result<T> {
        self.map_err(|e| AgentError::collaborator(context).with_source(e))
    }
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_goal_rejection_messages() {
        assert_eq!(
            AgentError::from(GoalRejection::Missing).to_string(),
            "Missing 'goal' in request body."
        );
        assert_eq!(
            AgentError::from(GoalRejection::WrongType).to_string(),
            "Invalid type: 'goal' must be a string."
        );
        assert_eq!(
            AgentError::from(GoalRejection::TooLong).to_string(),
            "Invalid length: 'goal' cannot exceed 200 characters."
        );
    }

    #[test]
    fn test_collaborator_context_keeps_source_chain() {
        let result: anyhow::Result<()> = Err(anyhow!("disk full").context("writing image"));
        let err = result.collaborator_context("Executor failed").unwrap_err();

        assert!(err.is_internal());
        let message = err.to_string();
        assert!(message.starts_with("Executor failed: "));
        assert!(message.contains("writing image"));
        assert!(message.contains("disk full"));
    }

    #[test]
    fn test_user_facing_errors_are_not_internal() {
        assert!(!AgentError::NoPlan.is_internal());
        assert!(!AgentError::from(GoalRejection::TooLong).is_internal());
        assert!(!AgentError::Conflict {
            step: "Step 1".to_string()
        }
        .is_internal());
        assert!(AgentError::invalid_state("empty plan").is_internal());
    }
}
