use serde::{Deserialize, Serialize};

use crate::models::demographics::Demographics;
use crate::models::programs::ProgramEffect;
use crate::models::states::StateResult;
use crate::models::tax_gap::TaxGapDecile;
use crate::models::waterfall::Waterfall;
use crate::models::weights::WeightRebalancing;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionMetadata {
    pub generated_at: String,
    pub policyengine_us_version: String,
    pub raw_cps_dataset: String,
    pub enhanced_cps_dataset: String,
    pub total_runtime_seconds: f64,
}

/// The aggregate root, constructed once per successful fetch and never
/// mutated in place. A refresh fully replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionData {
    /// Sentinel marker present when the payload is placeholder/sample data
    /// rather than a production run. Display concern only: the rest of the
    /// record is still valid and fully rendered.
    #[serde(rename = "_WARNING", alias = "__WARNING", default)]
    pub warning: Option<String>,
    pub waterfall: Waterfall,
    #[serde(default)]
    pub program_effects: Option<Vec<ProgramEffect>>,
    #[serde(default)]
    pub demographics: Option<Demographics>,
    pub weight_rebalancing: WeightRebalancing,
    pub tax_gap_by_decile: Vec<TaxGapDecile>,
    pub state_results: Vec<StateResult>,
    pub metadata: DecompositionMetadata,
}
