//! Allocation records and pending demand entries.

use serde::{Deserialize, Serialize};

use crate::distance::UNREACHABLE;

/// One transfer decided by the allocator.
///
/// Records are appended in the order transfers are decided; that order is
/// the only ordering the log carries.
///
/// # Examples
///
/// ```
/// use u_relief::models::AllocationRecord;
///
/// let r = AllocationRecord { source: 0, sink: 1, units: 7, distance: 4 };
/// let names = ["Depot", "Village"];
/// assert_eq!(
///     r.describe(&names),
///     "Supplied 7 units from Depot to Village via distance 4"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRecord {
    /// Location the units were taken from.
    pub source: usize,
    /// Location the units were sent to.
    pub sink: usize,
    /// Units moved.
    pub units: u32,
    /// Shortest-path distance from source to sink ([`UNREACHABLE`] if none).
    pub distance: u64,
}

impl AllocationRecord {
    /// Returns `true` if a path exists between source and sink.
    pub fn is_reachable(&self) -> bool {
        self.distance != UNREACHABLE
    }

    /// Renders this record using location names.
    ///
    /// # Panics
    ///
    /// Panics if `names` does not cover both endpoints.
    pub fn describe<S: AsRef<str>>(&self, names: &[S]) -> String {
        let distance = if self.is_reachable() {
            self.distance.to_string()
        } else {
            "unreachable".to_string()
        };
        format!(
            "Supplied {} units from {} to {} via distance {}",
            self.units,
            names[self.source].as_ref(),
            names[self.sink].as_ref(),
            distance
        )
    }
}

/// A sink waiting for supply, keyed by how much it still needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDemand {
    /// Location index of the sink.
    pub location: usize,
    /// Units still outstanding.
    pub remaining: u32,
}

impl PendingDemand {
    /// Creates a new pending entry.
    pub fn new(location: usize, remaining: u32) -> Self {
        Self {
            location,
            remaining,
        }
    }
}
