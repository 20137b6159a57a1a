use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemographicGroup {
    pub group: String,
    pub pe_rate: f64,
    #[serde(default)]
    pub census_rate: Option<f64>, // no published benchmark for some groups
    pub total_children: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Demographics {
    pub by_age: Vec<DemographicGroup>,
    pub by_race: Vec<DemographicGroup>,
}
