pub mod demographics;
pub mod programs;
pub mod states;
pub mod tax_gap;
pub mod waterfall;
pub mod weights;
