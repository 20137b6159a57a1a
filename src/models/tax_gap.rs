use serde::{Deserialize, Serialize};

/// Mean PE-computed vs CPS-reported federal tax for one income decile.
/// Valid data satisfies `gap == pe_federal_tax - reported_federal_tax`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxGapDecile {
    pub decile: u8, // 1..=10
    pub mean_income: f64,
    pub pe_federal_tax: f64,
    pub reported_federal_tax: f64,
    pub gap: f64,
}
