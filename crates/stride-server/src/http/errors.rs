//! Error handling utilities for the HTTP server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, error};
use serde::Serialize;
use stride_core::{AgentError, GoalRejection};
use thiserror::Error;

/// Stable code returned for every unexpected fault.
pub const INTERNAL_ERROR_CODE: &str = "E500";

/// Message returned for every unexpected fault.
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidGoal(GoalRejection),

    #[error("No plan has been set.")]
    NoPlan,

    #[error("Tool failed on step: {step}")]
    ToolFailed { step: String },

    #[error("Plan changed while executing step: {step}")]
    Conflict { step: String },

    /// Details are logged when this is created and never sent to the client
    #[error("An internal server error occurred.")]
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct InternalErrorBody {
    error_code: &'static str,
    message: &'static str,
}

impl From<AgentError> for ApiError {
    fn from(err: AgentError) -> Self {
        if err.is_internal() {
            error!("An internal error occurred: {err}");
            error!("Error details: {err:?}");
            return ApiError::Internal;
        }

        match err {
            AgentError::InvalidGoal { reason } => {
                debug!("Rejected goal: {reason}");
                ApiError::InvalidGoal(reason)
            }
            AgentError::NoPlan => ApiError::NoPlan,
            AgentError::Conflict { step } => ApiError::Conflict { step },
            AgentError::InvalidState { .. }
            | AgentError::Collaborator { .. }
            | AgentError::Join(_) => ApiError::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidGoal(_) => StatusCode::BAD_REQUEST,
            ApiError::NoPlan => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::ToolFailed { .. } | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if let ApiError::Internal = self {
            let body = InternalErrorBody {
                error_code: INTERNAL_ERROR_CODE,
                message: INTERNAL_ERROR_MESSAGE,
            };
            return (status, Json(body)).into_response();
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    use super::*;

    async fn body_json(error: ApiError) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status_codes_and_bodies() {
        let (status, body) = body_json(ApiError::InvalidGoal(GoalRejection::WrongType)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid type: 'goal' must be a string."}));

        let (status, body) = body_json(ApiError::NoPlan).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "No plan has been set."}));

        let (status, body) = body_json(ApiError::ToolFailed {
            step: "Step 2".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Tool failed on step: Step 2"}));

        let (status, body) = body_json(ApiError::Conflict {
            step: "Step 3".to_string(),
        })
        .await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(
            body,
            json!({"error": "Plan changed while executing step: Step 3"})
        );
    }

    #[tokio::test]
    async fn test_internal_errors_are_opaque() {
        let err = AgentError::collaborator("Planner failed")
            .with_source(anyhow!("secret connection string leaked"));
        let api_error = ApiError::from(err);

        let (status, body) = body_json(api_error).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({"error_code": "E500", "message": "An internal server error occurred."})
        );
        assert!(!body.to_string().contains("secret"));
    }

    #[test]
    fn test_agent_error_mapping() {
        assert!(matches!(
            ApiError::from(AgentError::from(GoalRejection::Missing)),
            ApiError::InvalidGoal(GoalRejection::Missing)
        ));
        assert!(matches!(ApiError::from(AgentError::NoPlan), ApiError::NoPlan));
        assert!(matches!(
            ApiError::from(AgentError::Conflict {
                step: "Step 2".to_string()
            }),
            ApiError::Conflict { .. }
        ));
        assert!(matches!(
            ApiError::from(AgentError::invalid_state("empty plan")),
            ApiError::Internal
        ));
    }
}
