use serde::{Deserialize, Serialize};

/// Effect of removing one program from SPM net income and recomputing poverty.
/// `rate_without - rate_with` is the poverty-rate reduction attributable to
/// the program; the sign is not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramEffect {
    pub program: String,
    pub label: String,
    pub children_lifted: f64,
    pub total_lifted: f64,
    pub rate_with: f64,
    pub rate_without: f64,
    #[serde(rename = "total_benefit_B")]
    pub total_benefit_b: f64, // billions USD
    #[serde(rename = "census_children_lifted_M", default)]
    pub census_children_lifted_m: Option<f64>, // Census benchmark, millions
}
