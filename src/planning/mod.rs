//! End-to-end relief planning.
//!
//! Builds the shortest-path graph for a [`ReliefNetwork`](crate::models::ReliefNetwork),
//! computes all-pairs distances once, and runs the allocator over them.

mod config;
mod planner;

pub use config::{PlanConfig, SourcePolicy};
pub use planner::{plan, plan_with, ReliefPlan};
