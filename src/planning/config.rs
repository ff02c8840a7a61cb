//! Planning configuration.

use serde::{Deserialize, Serialize};

/// Which source selection policy the planner uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcePolicy {
    /// Sources in index order, distance ignored.
    #[default]
    FirstFit,
    /// Reachable sources by ascending distance.
    NearestFirst,
}

/// Options for [`plan_with`](super::plan_with).
///
/// # Examples
///
/// ```
/// use u_relief::planning::{PlanConfig, SourcePolicy};
///
/// let config = PlanConfig::default().with_policy(SourcePolicy::NearestFirst);
/// assert_eq!(config.policy(), SourcePolicy::NearestFirst);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlanConfig {
    policy: SourcePolicy,
}

impl PlanConfig {
    /// Sets the source selection policy.
    pub fn with_policy(mut self, policy: SourcePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Source selection policy.
    pub fn policy(&self) -> SourcePolicy {
        self.policy
    }
}
