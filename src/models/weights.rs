use serde::{Deserialize, Serialize};

/// One income-quintile × family-structure group, compared across the raw
/// and enhanced CPS weight calibrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRebalancingGroup {
    pub label: String,
    pub raw_cps_poverty_rate: f64,
    pub enhanced_cps_poverty_rate: f64,
    pub raw_cps_child_share: f64,
    pub enhanced_cps_child_share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightRebalancing {
    pub groups: Vec<WeightRebalancingGroup>,
}
