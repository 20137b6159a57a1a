pub mod charts;
pub mod fetch;
pub mod format;
pub mod models;
pub mod render;
