use serde::{Deserialize, Serialize};

use crate::models::WeightRebalancing;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightGroupRow {
    pub label: String,
    pub raw_cps_poverty_rate: f64,
    pub enhanced_cps_poverty_rate: f64,
    pub raw_cps_child_share: f64,
    pub enhanced_cps_child_share: f64,
    /// How the re-weighting shifted this group's share of all children.
    pub child_share_delta: f64,
}

pub fn build_rows(rebalancing: &WeightRebalancing) -> Vec<WeightGroupRow> {
    rebalancing
        .groups
        .iter()
        .map(|g| WeightGroupRow {
            label: g.label.clone(),
            raw_cps_poverty_rate: g.raw_cps_poverty_rate,
            enhanced_cps_poverty_rate: g.enhanced_cps_poverty_rate,
            raw_cps_child_share: g.raw_cps_child_share,
            enhanced_cps_child_share: g.enhanced_cps_child_share,
            child_share_delta: g.enhanced_cps_child_share - g.raw_cps_child_share,
        })
        .collect()
}
