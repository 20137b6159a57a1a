use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateResult {
    pub state: String, // two-letter code
    pub reported_child_poverty: f64,
    pub computed_child_poverty: f64,
    pub total_children: f64,
}
