//! Source selection policies.
//!
//! A policy decides which locations may serve a sink and in what order they
//! are drained.
//!
//! - [`FirstFit`] — every location with supply, by ascending index
//! - [`NearestFirst`] — reachable locations with supply, by ascending distance

use crate::distance::{DistanceMatrix, UNREACHABLE};

/// Chooses candidate sources for a sink.
///
/// The allocator drains candidates in the returned order until the sink is
/// satisfied or the list runs out. Candidates should have positive supply;
/// any that don't are skipped.
pub trait SourceSelection {
    /// Short identifier used in log output.
    fn name(&self) -> &str;

    /// Candidate source indices for `sink`, in drain order.
    fn candidates(&self, sink: usize, supply: &[u32], distances: &DistanceMatrix) -> Vec<usize>;
}

/// Drains sources in index order, ignoring distance.
///
/// Distance is recorded on each transfer but never influences the choice.
///
/// # Examples
///
/// ```
/// use u_relief::allocation::{FirstFit, SourceSelection};
/// use u_relief::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::new(3);
/// assert_eq!(FirstFit.candidates(2, &[4, 0, 1], &dm), vec![0, 2]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl SourceSelection for FirstFit {
    fn name(&self) -> &str {
        "first_fit"
    }

    fn candidates(&self, _sink: usize, supply: &[u32], _distances: &DistanceMatrix) -> Vec<usize> {
        supply
            .iter()
            .enumerate()
            .filter(|&(_, &s)| s > 0)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Drains the closest sources first; ties go to the lower index.
///
/// Sources with no path to the sink are never used.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestFirst;

impl SourceSelection for NearestFirst {
    fn name(&self) -> &str {
        "nearest_first"
    }

    fn candidates(&self, sink: usize, supply: &[u32], distances: &DistanceMatrix) -> Vec<usize> {
        let mut found: Vec<usize> = supply
            .iter()
            .enumerate()
            .filter(|&(i, &s)| s > 0 && distances.get(i, sink) != UNREACHABLE)
            .map(|(i, _)| i)
            .collect();
        found.sort_by_key(|&i| (distances.get(i, sink), i));
        found
    }
}
