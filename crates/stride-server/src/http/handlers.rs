//! HTTP route handlers for the agent.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
};
use log::debug;
use serde_json::Value;
use stride_core::{AdvanceOutcome, Agent, GoalRejection};

use super::errors::ApiError;

/// GET / - what the agent is working on.
pub async fn status(State(agent): State<Agent>) -> String {
    agent.status().await.to_string()
}

/// POST / - plan a goal from a `{"goal": "..."}` body.
///
/// The body is decoded leniently: anything that is not valid JSON is treated
/// the same as a body without a goal. A body over the server's size limit
/// cannot hold an acceptable goal and is rejected as too long.
pub async fn submit_goal(
    State(agent): State<Agent>,
    body: Result<Bytes, BytesRejection>,
) -> Result<String, ApiError> {
    let body = match body {
        Ok(bytes) => bytes,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            debug!("Request body over size limit: {rejection}");
            return Err(ApiError::InvalidGoal(GoalRejection::TooLong));
        }
        Err(rejection) => {
            debug!("Request body unreadable: {rejection}");
            return Err(ApiError::InvalidGoal(GoalRejection::Missing));
        }
    };

    let body: Option<Value> = match serde_json::from_slice(&body) {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Request body is not JSON: {e}");
            None
        }
    };

    let created = agent.submit_goal_body(body.as_ref()).await?;
    Ok(created.to_string())
}

/// POST /next-step - run the current step and move on.
pub async fn next_step(State(agent): State<Agent>) -> Result<String, ApiError> {
    match agent.advance().await? {
        AdvanceOutcome::ToolFailed { step } => Err(ApiError::ToolFailed { step }),
        outcome => Ok(outcome.to_string()),
    }
}
