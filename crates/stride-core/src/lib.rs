//! Core library for the stride step-by-step agent.
//!
//! A client hands the agent a goal; a [`Planner`] turns it into an ordered
//! list of steps, and the client then walks the plan one step at a time, each
//! step attempted by a [`StepExecutor`]. This crate holds that state machine
//! and nothing about transport.
//!
//! # Layout
//!
//! - [`agent`]: the [`Agent`] controller and its builder
//! - [`store`]: the lock-guarded [`PlanStore`] holding at most one plan
//! - [`models`]: [`Plan`] and the result types of each operation
//! - [`params`]: goal validation
//! - [`collaborators`]: the planner/executor traits and reference impls
//! - [`display`]: the plain-text rendering of results
//! - [`error`]: [`AgentError`] and the crate [`Result`] alias
//!
//! # Quick Start
//!
//! ```rust
//! use stride_core::{AdvanceOutcome, AgentBuilder, FixedPlanner, params::Goal};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let agent = AgentBuilder::new()
//!     .with_planner(FixedPlanner::new(["write", "review"]))
//!     .build();
//!
//! let created = agent.submit_goal(&Goal::new("ship it")?).await?;
//! println!("{created}"); // Plan created. Current step is: write
//!
//! let outcome = agent.advance().await?;
//! assert_eq!(outcome.to_string(), "Tool succeeded. New step is: review");
//!
//! let outcome = agent.advance().await?;
//! assert!(matches!(outcome, AdvanceOutcome::Completed { .. }));
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod collaborators;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;

// Re-export commonly used types
pub use agent::{Agent, AgentBuilder};
pub use collaborators::{FixedPlanner, Planner, SimulatedExecutor, StepExecutor};
pub use display::PLAN_COMPLETE;
pub use error::{AgentError, GoalRejection, Result};
pub use models::{AdvanceOutcome, Cursor, Plan, PlanCreated, PlanState, StatusSummary};
pub use params::{Goal, MAX_GOAL_CHARS};
pub use store::PlanStore;
