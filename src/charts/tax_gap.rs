use serde::{Deserialize, Serialize};

use crate::models::TaxGapDecile;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxGapRow {
    pub label: String,
    pub decile: u8,
    pub mean_income: f64,
    pub pe_federal_tax: f64,
    pub reported_federal_tax: f64,
    pub gap: f64,
}

/// Projection with a synthesized `"D{decile}"` label. Caller-supplied decile
/// order is preserved even when deciles are non-contiguous or unsorted
/// (sample data omits deciles 3-9).
pub fn build_rows(deciles: &[TaxGapDecile]) -> Vec<TaxGapRow> {
    deciles
        .iter()
        .map(|d| TaxGapRow {
            label: format!("D{}", d.decile),
            decile: d.decile,
            mean_income: d.mean_income,
            pe_federal_tax: d.pe_federal_tax,
            reported_federal_tax: d.reported_federal_tax,
            gap: d.gap,
        })
        .collect()
}
