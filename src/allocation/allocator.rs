//! Greedy priority-ordered supply allocation.
//!
//! # Algorithm
//!
//! 1. Queue every location with its demand, largest demand first.
//! 2. While the queue is non-empty and any supply remains, pop the sink with
//!    the largest outstanding demand and drain the sources the selection
//!    policy offers, in order, until the sink is satisfied.
//! 3. A sink left short is queued again with its reduced demand.
//!
//! Each pop either satisfies its sink or leaves every offered source empty,
//! so the loop runs at most `V` rounds per distinct supply state.

use tracing::{debug, trace};

use super::outcome::AllocationOutcome;
use super::queue::{by_remaining_demand, PriorityQueue};
use super::strategy::{FirstFit, SourceSelection};
use crate::distance::DistanceMatrix;
use crate::error::{ReliefError, Result};
use crate::models::{AllocationRecord, PendingDemand};

/// Distributes supply to demand over a precomputed distance matrix.
///
/// The allocator owns its supply snapshot and is consumed by
/// [`distribute`](Self::distribute); run a fresh instance to allocate again.
///
/// # Examples
///
/// ```
/// use u_relief::allocation::SupplyAllocator;
/// use u_relief::distance::ShortestPathGraph;
///
/// let mut g = ShortestPathGraph::new(2);
/// g.add_edge(0, 1, 4).unwrap();
/// let dm = g.all_pairs_distances();
///
/// let demand = [0, 7];
/// let outcome = SupplyAllocator::new(&dm, vec![10, 0], &demand)
///     .unwrap()
///     .distribute();
///
/// assert_eq!(outcome.records().len(), 1);
/// assert_eq!(outcome.records()[0].units, 7);
/// assert_eq!(outcome.records()[0].distance, 4);
/// assert_eq!(outcome.final_supply(), &[3, 0]);
/// ```
pub struct SupplyAllocator<'a, S = FirstFit> {
    distances: &'a DistanceMatrix,
    supply: Vec<u32>,
    demand: &'a [u32],
    strategy: S,
}

impl<'a> SupplyAllocator<'a, FirstFit> {
    /// Creates an allocator using [`FirstFit`] source selection.
    ///
    /// Returns an error if the matrix is empty or `supply`/`demand` lengths
    /// differ from the matrix size.
    pub fn new(distances: &'a DistanceMatrix, supply: Vec<u32>, demand: &'a [u32]) -> Result<Self> {
        let expected = distances.size();
        if expected == 0 {
            return Err(ReliefError::EmptyNetwork);
        }
        for (field, found) in [("supply", supply.len()), ("demand", demand.len())] {
            if found != expected {
                return Err(ReliefError::LengthMismatch {
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(Self {
            distances,
            supply,
            demand,
            strategy: FirstFit,
        })
    }
}

impl<'a, S: SourceSelection> SupplyAllocator<'a, S> {
    /// Replaces the source selection policy.
    pub fn with_strategy<T: SourceSelection>(self, strategy: T) -> SupplyAllocator<'a, T> {
        SupplyAllocator {
            distances: self.distances,
            supply: self.supply,
            demand: self.demand,
            strategy,
        }
    }

    /// Runs the allocation to completion.
    pub fn distribute(self) -> AllocationOutcome {
        let initial_supply = self.supply.clone();
        let mut supply = self.supply;
        let mut available: u64 = supply.iter().map(|&s| u64::from(s)).sum();

        let mut queue = PriorityQueue::new(by_remaining_demand);
        for (location, &demand) in self.demand.iter().enumerate() {
            queue.push(PendingDemand::new(location, demand));
        }

        debug!(
            strategy = self.strategy.name(),
            locations = supply.len(),
            available,
            "allocation started"
        );

        let mut records = Vec::new();
        let mut unmet = Vec::new();

        while available > 0 {
            let Some(pending) = queue.pop() else {
                break;
            };
            if pending.remaining == 0 {
                continue;
            }

            let sink = pending.location;
            let mut supplied = 0u32;
            for source in self.strategy.candidates(sink, &supply, self.distances) {
                if supply[source] == 0 {
                    continue;
                }
                let units = supply[source].min(pending.remaining - supplied);
                supply[source] -= units;
                available -= u64::from(units);
                supplied += units;

                let record = AllocationRecord {
                    source,
                    sink,
                    units,
                    distance: self.distances.get(source, sink),
                };
                trace!(source, sink, units, distance = record.distance, "transfer");
                records.push(record);

                if supplied == pending.remaining {
                    break;
                }
            }

            if supplied < pending.remaining {
                let left = PendingDemand::new(sink, pending.remaining - supplied);
                // Nothing offered means nothing ever will be: supply only shrinks.
                if supplied == 0 {
                    unmet.push(left);
                } else {
                    queue.push(left);
                }
            }
        }

        unmet.extend(queue.into_vec().into_iter().filter(|p| p.remaining > 0));
        unmet.sort_by_key(|p| p.location);

        let outcome = AllocationOutcome::new(initial_supply, supply, records, unmet);
        debug!(
            transfers = outcome.records().len(),
            transferred = outcome.total_transferred(),
            unmet_sinks = outcome.unmet().len(),
            unmet_units = outcome.unmet_total(),
            "allocation finished"
        );
        outcome
    }
}
