//! Supply-to-demand allocation over a distance matrix.
//!
//! - [`SupplyAllocator`] — Greedy largest-demand-first allocation
//! - [`SourceSelection`] — Policy choosing which sources serve a sink ([`FirstFit`], [`NearestFirst`])
//! - [`PriorityQueue`] — Binary heap ranked by a plain comparison function
//! - [`AllocationOutcome`] — Transfer log, final supply, and unmet demand

mod allocator;
mod outcome;
mod queue;
mod strategy;

pub use allocator::SupplyAllocator;
pub use outcome::AllocationOutcome;
pub use queue::{by_remaining_demand, PriorityQueue};
pub use strategy::{FirstFit, NearestFirst, SourceSelection};
