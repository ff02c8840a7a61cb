//! Graph → distance matrix → allocation pipeline.

use tracing::debug;

use super::config::{PlanConfig, SourcePolicy};
use crate::allocation::{AllocationOutcome, NearestFirst, SupplyAllocator};
use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::ReliefNetwork;

/// Distances and allocation computed for one network.
#[derive(Debug, Clone)]
pub struct ReliefPlan {
    names: Vec<String>,
    distances: DistanceMatrix,
    outcome: AllocationOutcome,
}

impl ReliefPlan {
    /// Location names, in index order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All-pairs shortest distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Allocation result.
    pub fn outcome(&self) -> &AllocationOutcome {
        &self.outcome
    }

    /// One human-readable line per transfer, in decision order.
    pub fn log_lines(&self) -> Vec<String> {
        self.outcome.describe(&self.names)
    }

    /// Splits the plan into its matrix and outcome.
    pub fn into_parts(self) -> (DistanceMatrix, AllocationOutcome) {
        (self.distances, self.outcome)
    }
}

/// Plans a network with the default configuration (first-fit sources).
///
/// # Examples
///
/// ```
/// use u_relief::models::ReliefNetwork;
/// use u_relief::planning::plan;
///
/// let network = ReliefNetwork::from_parts(
///     vec!["Depot", "Village"],
///     vec![(0, 1, 4)],
///     vec![10, 0],
///     vec![0, 7],
/// )
/// .unwrap();
///
/// let plan = plan(&network).unwrap();
/// assert_eq!(
///     plan.log_lines(),
///     vec!["Supplied 7 units from Depot to Village via distance 4"]
/// );
/// assert_eq!(plan.outcome().final_supply(), &[3, 0]);
/// ```
pub fn plan(network: &ReliefNetwork) -> Result<ReliefPlan> {
    plan_with(network, &PlanConfig::default())
}

/// Plans a network with the given configuration.
pub fn plan_with(network: &ReliefNetwork, config: &PlanConfig) -> Result<ReliefPlan> {
    let distances = network.graph().all_pairs_distances();
    debug!(
        locations = network.len(),
        reachable_pairs = distances.reachable_pairs().len(),
        total_supply = network.total_supply(),
        total_demand = network.total_demand(),
        "network prepared"
    );

    let demands = network.demands();
    let allocator = SupplyAllocator::new(&distances, network.supplies(), &demands)?;
    let outcome = match config.policy() {
        SourcePolicy::FirstFit => allocator.distribute(),
        SourcePolicy::NearestFirst => allocator.with_strategy(NearestFirst).distribute(),
    };

    Ok(ReliefPlan {
        names: network.names().into_iter().map(String::from).collect(),
        distances,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::UNREACHABLE;
    use crate::models::PendingDemand;

    fn flood_region() -> ReliefNetwork {
        // Camp -5- Bridge -3- Town, Farm isolated.
        ReliefNetwork::from_parts(
            vec!["Camp", "Bridge", "Town", "Farm"],
            vec![(0, 1, 5), (1, 2, 3)],
            vec![12, 4, 0, 0],
            vec![0, 0, 9, 5],
        )
        .expect("valid")
    }

    #[test]
    fn test_distances_from_network() {
        let plan = plan(&flood_region()).expect("valid");
        let dm = plan.distances();
        assert_eq!(dm.get(0, 2), 8);
        assert_eq!(dm.get(2, 0), 8);
        assert_eq!(dm.get(0, 0), 0);
        assert_eq!(dm.get(0, 3), UNREACHABLE);
    }

    #[test]
    fn test_first_fit_plan() {
        let plan = plan(&flood_region()).expect("valid");
        assert_eq!(
            plan.log_lines(),
            vec![
                "Supplied 9 units from Camp to Town via distance 8",
                "Supplied 3 units from Camp to Farm via distance unreachable",
                "Supplied 2 units from Bridge to Farm via distance unreachable",
            ]
        );
        assert_eq!(plan.outcome().final_supply(), &[0, 2, 0, 0]);
        assert!(plan.outcome().is_fully_satisfied());
    }

    #[test]
    fn test_nearest_first_plan() {
        let config = PlanConfig::default().with_policy(SourcePolicy::NearestFirst);
        let plan = plan_with(&flood_region(), &config).expect("valid");
        assert_eq!(
            plan.log_lines(),
            vec![
                "Supplied 4 units from Bridge to Town via distance 3",
                "Supplied 5 units from Camp to Town via distance 8",
            ]
        );
        assert_eq!(plan.outcome().final_supply(), &[7, 0, 0, 0]);
        assert_eq!(plan.outcome().unmet(), &[PendingDemand::new(3, 5)]);
    }

    #[test]
    fn test_into_parts() {
        let (dm, outcome) = plan(&flood_region()).expect("valid").into_parts();
        assert_eq!(dm.size(), 4);
        assert_eq!(outcome.total_transferred(), 14);
    }
}
