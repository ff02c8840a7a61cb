//! Result of one allocation run.

use serde::{Deserialize, Serialize};

use crate::models::{AllocationRecord, PendingDemand};

/// Everything an allocation run produced.
///
/// Holds the transfer log in decision order, supply before and after the
/// run, and the demand left unmet when the run stopped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationOutcome {
    initial_supply: Vec<u32>,
    final_supply: Vec<u32>,
    records: Vec<AllocationRecord>,
    unmet: Vec<PendingDemand>,
}

impl AllocationOutcome {
    pub(crate) fn new(
        initial_supply: Vec<u32>,
        final_supply: Vec<u32>,
        records: Vec<AllocationRecord>,
        unmet: Vec<PendingDemand>,
    ) -> Self {
        Self {
            initial_supply,
            final_supply,
            records,
            unmet,
        }
    }

    /// Transfers in the order they were decided.
    pub fn records(&self) -> &[AllocationRecord] {
        &self.records
    }

    /// Supply per location before the run.
    pub fn initial_supply(&self) -> &[u32] {
        &self.initial_supply
    }

    /// Supply per location after the run.
    pub fn final_supply(&self) -> &[u32] {
        &self.final_supply
    }

    /// Sinks still short of supply, sorted by location index.
    pub fn unmet(&self) -> &[PendingDemand] {
        &self.unmet
    }

    /// Sum of all outstanding demand.
    pub fn unmet_total(&self) -> u64 {
        self.unmet.iter().map(|p| u64::from(p.remaining)).sum()
    }

    /// Returns `true` if every sink received its full demand.
    pub fn is_fully_satisfied(&self) -> bool {
        self.unmet.is_empty()
    }

    /// Units moved across all transfers.
    pub fn total_transferred(&self) -> u64 {
        self.records.iter().map(|r| u64::from(r.units)).sum()
    }

    /// Units sent out of `location`.
    pub fn transferred_from(&self, location: usize) -> u64 {
        self.records
            .iter()
            .filter(|r| r.source == location)
            .map(|r| u64::from(r.units))
            .sum()
    }

    /// Units delivered to `location`.
    pub fn transferred_to(&self, location: usize) -> u64 {
        self.records
            .iter()
            .filter(|r| r.sink == location)
            .map(|r| u64::from(r.units))
            .sum()
    }

    /// Renders every record using location names.
    pub fn describe<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        self.records.iter().map(|r| r.describe(names)).collect()
    }

    /// Serializes this outcome to JSON.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
