use serde::{Deserialize, Serialize};

use crate::models::StateResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePoint {
    pub state: String,
    pub x: f64, // reported child poverty
    pub y: f64, // PE-computed child poverty
    pub total_children: f64,
}

/// Scatter points plus a shared display domain for both axes, so the 45°
/// equal-rate diagonal is meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateScatter {
    pub points: Vec<StatePoint>,
    pub min_val: f64,
    pub max_val: f64,
}

/// Pad the domain below by 0.02 and above by 0.04, clamped to `[0, 1]`
/// since rates are fractions. An empty input yields the full range.
pub fn build_scatter(states: &[StateResult]) -> StateScatter {
    let points: Vec<StatePoint> = states
        .iter()
        .map(|s| StatePoint {
            state: s.state.clone(),
            x: s.reported_child_poverty,
            y: s.computed_child_poverty,
            total_children: s.total_children,
        })
        .collect();

    if points.is_empty() {
        return StateScatter {
            points,
            min_val: 0.0,
            max_val: 1.0,
        };
    }

    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for p in &points {
        lo = lo.min(p.x).min(p.y);
        hi = hi.max(p.x).max(p.y);
    }

    StateScatter {
        min_val: (lo - 0.02).max(0.0),
        max_val: (hi + 0.04).min(1.0),
        points,
    }
}
