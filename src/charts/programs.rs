use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::ProgramEffect;

/// Combined EITC + refundable CTC record. Surfaced as a callout rather than
/// a bar to avoid double-counting against its constituent credits.
pub const COMBINED_CREDITS_ID: &str = "refundable_credits";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgramRow {
    pub program: String,
    pub label: String,
    pub children_lifted: f64,
    pub total_lifted: f64,
    pub rate_with: f64,
    pub rate_without: f64,
    pub rate_reduction: f64,
    pub total_benefit_b: f64,
    /// Census benchmark converted from millions to an absolute count;
    /// absent when no benchmark is published for the program.
    pub census_children_lifted: Option<f64>,
}

/// Derive chart rows for the program-effects bar chart, sorted descending by
/// `children_lifted` so the largest-impact program comes first. Ties keep
/// insertion order.
pub fn build_rows(effects: &[ProgramEffect]) -> Vec<ProgramRow> {
    let mut rows: Vec<ProgramRow> = effects
        .iter()
        .filter(|effect| effect.program != COMBINED_CREDITS_ID)
        .map(|effect| ProgramRow {
            program: effect.program.clone(),
            label: effect.label.clone(),
            children_lifted: effect.children_lifted,
            total_lifted: effect.total_lifted,
            rate_with: effect.rate_with,
            rate_without: effect.rate_without,
            rate_reduction: effect.rate_without - effect.rate_with,
            total_benefit_b: effect.total_benefit_b,
            census_children_lifted: effect.census_children_lifted_m.map(|m| m * 1e6),
        })
        .collect();

    rows.sort_by(|a, b| {
        b.children_lifted
            .partial_cmp(&a.children_lifted)
            .unwrap_or(Ordering::Equal)
    });
    rows
}

/// The combined refundable-credits record, if present.
pub fn combined_credits_callout(effects: &[ProgramEffect]) -> Option<&ProgramEffect> {
    effects
        .iter()
        .find(|effect| effect.program == COMBINED_CREDITS_ID)
}
