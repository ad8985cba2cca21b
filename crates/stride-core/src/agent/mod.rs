//! The plan state machine.
//!
//! [`Agent`] ties a [`PlanStore`] to a [`Planner`] and a [`StepExecutor`]:
//!
//! ```text
//! submit_goal ──▶ Planner ──▶ PlanStore::replace      (index reset to 0)
//! advance     ──▶ StepExecutor ──▶ PlanStore::advance_index
//! status      ──▶ PlanStore::get
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: wiring collaborators and the store into an [`Agent`]
//! - [`plan_ops`]: goal submission and status
//! - [`step_ops`]: running the current step and moving forward
//!
//! Collaborators run on the blocking thread pool without the store lock held,
//! so a slow step never blocks status reads. The index update afterwards is a
//! compare-and-advance against the cursor taken before the step ran; a plan
//! that moved in the meantime yields [`AgentError::Conflict`] instead of a
//! second increment.
//!
//! # Example
//!
//! ```rust
//! use stride_core::{AdvanceOutcome, AgentBuilder, params::Goal};
//!
//! # async fn example() -> stride_core::Result<()> {
//! let agent = AgentBuilder::new().build();
//!
//! let created = agent.submit_goal(&Goal::new("demo")?).await?;
//! assert_eq!(created.total_steps, 4);
//!
//! let outcome = agent.advance().await?;
//! assert!(matches!(outcome, AdvanceOutcome::Advanced { index: 1, .. }));
//! # Ok(())
//! # }
//! ```
//!
//! [`AgentError::Conflict`]: crate::error::AgentError::Conflict

use std::sync::Arc;

use crate::{
    collaborators::{Planner, StepExecutor},
    store::PlanStore,
};

pub mod builder;
pub mod plan_ops;
pub mod step_ops;


pub use builder::AgentBuilder;

/// Controller over a single plan store.
#[derive(Clone)]
pub struct Agent {
    pub(crate) store: Arc<PlanStore>,
    pub(crate) planner: Arc<dyn Planner>,
    pub(crate) executor: Arc<dyn StepExecutor>,
}

impl Agent {
    pub(crate) fn new(
        store: Arc<PlanStore>,
        planner: Arc<dyn Planner>,
        executor: Arc<dyn StepExecutor>,
    ) -> Self {
        Self {
            store,
            planner,
            executor,
        }
    }
}
