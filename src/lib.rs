//! # u-relief
//!
//! Relief supply allocation library: shortest travel distances over a
//! weighted location network, and greedy distribution of scarce supply to
//! the locations with the largest outstanding demand.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Location, Edge, ReliefNetwork, AllocationRecord)
//! - [`distance`] — Dijkstra shortest-path graph and all-pairs distance matrix
//! - [`allocation`] — Priority-ordered supply allocator and source selection policies
//! - [`planning`] — End-to-end pipeline from network to allocation log
//! - [`error`] — Validation errors

pub mod allocation;
pub mod distance;
pub mod error;
pub mod models;
pub mod planning;

pub use error::{ReliefError, Result};
