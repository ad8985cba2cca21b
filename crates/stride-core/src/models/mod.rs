//! Data models for plans and the results of operating on them.
//!
//! A [`Plan`] is an ordered, non-empty list of step descriptions plus the
//! index of the step in progress. Its fields are private so the index can
//! only move through the store, which keeps `current_index` within bounds.
//!
//! Plan states ([`PlanState`]) are derived on read:
//!
//! - **Idle**: no plan installed
//! - **InProgress**: current step is not the last one
//! - **Completed**: current step is the last one
//!
//! Text formatting for the outcome types lives in [`crate::display`].

pub mod outcome;
pub mod plan;
pub mod state;


pub use outcome::{AdvanceOutcome, PlanCreated, StatusSummary};
pub use plan::{Cursor, Plan};
pub use state::PlanState;
