use serde::{Deserialize, Serialize};

/// A child poverty rate at one stage of the decomposition pipeline.
/// Step order is semantically meaningful: each step builds on the previous.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterfallStep {
    pub label: String,
    pub value: f64, // decimal fraction
}

/// The signed change between two consecutive steps, with its cause.
/// Valid data satisfies `deltas.len() == steps.len() - 1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterfallDelta {
    pub from: String,
    pub to: String,
    pub delta: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waterfall {
    pub steps: Vec<WaterfallStep>,
    pub deltas: Vec<WaterfallDelta>,
}
