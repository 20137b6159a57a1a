pub mod decomposition;
pub mod demographics;
pub mod programs;
pub mod states;
pub mod tax_gap;
pub mod waterfall;
pub mod weights;

pub use decomposition::{DecompositionData, DecompositionMetadata};
pub use demographics::{DemographicGroup, Demographics};
pub use programs::ProgramEffect;
pub use states::StateResult;
pub use tax_gap::TaxGapDecile;
pub use waterfall::{Waterfall, WaterfallDelta, WaterfallStep};
pub use weights::{WeightRebalancing, WeightRebalancingGroup};
