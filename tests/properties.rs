use proptest::prelude::*;

use u_relief::allocation::{NearestFirst, SupplyAllocator};
use u_relief::distance::{ShortestPathGraph, UNREACHABLE};
use u_relief::models::AllocationRecord;

/// Random graph: node count plus edges over those nodes.
fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>)> {
    (1usize..9).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u32..50);
        (Just(n), prop::collection::vec(edge, 0..20))
    })
}

/// Random graph with per-node supply and demand.
fn scenario_strategy(
) -> impl Strategy<Value = (usize, Vec<(usize, usize, u32)>, Vec<u32>, Vec<u32>)> {
    graph_strategy().prop_flat_map(|(n, edges)| {
        (
            Just(n),
            Just(edges),
            prop::collection::vec(0u32..30, n),
            prop::collection::vec(0u32..30, n),
        )
    })
}

fn build(n: usize, edges: &[(usize, usize, u32)]) -> ShortestPathGraph {
    let mut g = ShortestPathGraph::new(n);
    for &(u, v, w) in edges {
        g.add_edge(u, v, w).expect("in range");
    }
    g
}

fn check_bounds(records: &[AllocationRecord], supply: &[u32], demand: &[u32]) {
    for i in 0..supply.len() {
        let out: u64 = records
            .iter()
            .filter(|r| r.source == i)
            .map(|r| u64::from(r.units))
            .sum();
        let into: u64 = records
            .iter()
            .filter(|r| r.sink == i)
            .map(|r| u64::from(r.units))
            .sum();
        assert!(out <= u64::from(supply[i]));
        assert!(into <= u64::from(demand[i]));
    }
}

proptest! {
    #[test]
    fn prop_zero_diagonal_and_symmetry((n, edges) in graph_strategy()) {
        let dm = build(n, &edges).all_pairs_distances();
        prop_assert!(dm.is_symmetric());
        for i in 0..n {
            prop_assert_eq!(dm.get(i, i), 0);
        }
    }

    #[test]
    fn prop_triangle_inequality((n, edges) in graph_strategy()) {
        let dm = build(n, &edges).all_pairs_distances();
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let (ij, jk) = (dm.get(i, j), dm.get(j, k));
                    if ij != UNREACHABLE && jk != UNREACHABLE {
                        prop_assert!(dm.get(i, k) <= ij + jk);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_edges_bound_distances((n, edges) in graph_strategy()) {
        let dm = build(n, &edges).all_pairs_distances();
        for &(u, v, w) in &edges {
            prop_assert!(dm.get(u, v) <= u64::from(w));
        }
    }

    #[test]
    fn prop_first_fit_conserves_supply((n, edges, supply, demand) in scenario_strategy()) {
        let dm = build(n, &edges).all_pairs_distances();
        let o = SupplyAllocator::new(&dm, supply.clone(), &demand)
            .expect("sizes match")
            .distribute();

        let before: u64 = supply.iter().map(|&s| u64::from(s)).sum();
        let after: u64 = o.final_supply().iter().map(|&s| u64::from(s)).sum();
        prop_assert_eq!(before - after, o.total_transferred());
        prop_assert!(o.records().iter().all(|r| r.units > 0));
        check_bounds(o.records(), &supply, &demand);

        // Either every sink is served or supply ran out.
        prop_assert!(o.is_fully_satisfied() || after == 0);
        let total_demand: u64 = demand.iter().map(|&d| u64::from(d)).sum();
        prop_assert_eq!(o.total_transferred(), before.min(total_demand));
    }

    #[test]
    fn prop_nearest_first_terminates_and_stays_bounded(
        (n, edges, supply, demand) in scenario_strategy()
    ) {
        let dm = build(n, &edges).all_pairs_distances();
        let o = SupplyAllocator::new(&dm, supply.clone(), &demand)
            .expect("sizes match")
            .with_strategy(NearestFirst)
            .distribute();

        let before: u64 = supply.iter().map(|&s| u64::from(s)).sum();
        let after: u64 = o.final_supply().iter().map(|&s| u64::from(s)).sum();
        prop_assert_eq!(before - after, o.total_transferred());
        prop_assert!(o.records().iter().all(|r| r.is_reachable()));
        check_bounds(o.records(), &supply, &demand);

        let total_demand: u64 = demand.iter().map(|&d| u64::from(d)).sum();
        prop_assert_eq!(o.total_transferred() + o.unmet_total(), total_demand);
    }

    #[test]
    fn prop_records_carry_matrix_distance((n, edges, supply, demand) in scenario_strategy()) {
        let dm = build(n, &edges).all_pairs_distances();
        let o = SupplyAllocator::new(&dm, supply, &demand)
            .expect("sizes match")
            .distribute();
        for r in o.records() {
            prop_assert_eq!(r.distance, dm.get(r.source, r.sink));
        }
    }
}
