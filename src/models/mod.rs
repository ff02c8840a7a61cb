//! Domain model types for relief supply allocation.
//!
//! Provides locations with supply and demand, undirected weighted edges, the
//! validated network that ties them together, and the records produced by
//! an allocation run.

mod location;
mod network;
mod record;

pub use location::{Edge, Location};
pub use network::ReliefNetwork;
pub use record::{AllocationRecord, PendingDemand};
