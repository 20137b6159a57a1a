use serde::{Deserialize, Serialize};

use crate::models::DemographicGroup;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicRow {
    pub group: String,
    pub pe_rate: f64,
    pub census_rate: Option<f64>,
    pub total_children: f64,
}

/// Direct projection: no filtering, no reordering. Input order is the
/// display order.
pub fn build_rows(groups: &[DemographicGroup]) -> Vec<DemographicRow> {
    groups
        .iter()
        .map(|g| DemographicRow {
            group: g.group.clone(),
            pe_rate: g.pe_rate,
            census_rate: g.census_rate,
            total_children: g.total_children,
        })
        .collect()
}
