//! Parameter structures for agent operations.
//!
//! A [`Goal`] can only be constructed through validation, so every value that
//! reaches the planner is already known to be present, textual and within
//! [`MAX_GOAL_CHARS`]. Interface layers either hand over raw text
//! ([`Goal::new`]) or the decoded request body ([`Goal::from_body`]).

use serde::Serialize;
use serde_json::Value;

use crate::error::GoalRejection;

/// Longest goal accepted, counted in characters rather than bytes.
pub const MAX_GOAL_CHARS: usize = 200;

/// A validated goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Goal(String);

impl Goal {
    /// Validates free text as a goal.
    pub fn new(text: impl Into<String>) -> Result<Self, GoalRejection> {
        let text = text.into();
        if text.chars().count() > MAX_GOAL_CHARS {
            return Err(GoalRejection::TooLong);
        }
        Ok(Self(text))
    }

    /// Extracts and validates the `goal` field of a request body.
    ///
    /// `None` stands for a body that was absent or not valid JSON. Anything
    /// other than an object carrying a `goal` key counts as missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    /// use stride_core::{GoalRejection, params::Goal};
    ///
    /// let goal = Goal::from_body(Some(&json!({"goal": "demo"}))).unwrap();
    /// assert_eq!(goal.as_str(), "demo");
    ///
    /// let err = Goal::from_body(Some(&json!({"goal": 12345}))).unwrap_err();
    /// assert_eq!(err, GoalRejection::WrongType);
    /// ```
    pub fn from_body(body: Option<&Value>) -> Result<Self, GoalRejection> {
        let field = body
            .and_then(Value::as_object)
            .and_then(|object| object.get("goal"))
            .ok_or(GoalRejection::Missing)?;

        match field {
            Value::String(text) => Self::new(text.as_str()),
            _ => Err(GoalRejection::WrongType),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
