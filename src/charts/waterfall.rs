use serde::{Deserialize, Serialize};

use crate::models::Waterfall;

/// One bar of the waterfall chart. Stacking `base` (invisible) beneath
/// `value` (visible) reproduces the absolute poverty rate at this step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterfallRow {
    pub label: String,
    pub short_label: String,
    pub base: f64,
    pub value: f64,
    pub rate: f64,
    pub delta: f64,
    pub explanation: String,
}

/// Fixed short-label substitution table, keyed by exact match on the label
/// stem (year marker stripped). Labels outside this set pass through.
const SHORT_LABELS: [(&str, &str); 5] = [
    ("Census published", "Census\npublished"),
    ("Raw CPS reported", "Raw CPS\nreported"),
    ("Raw CPS PE-computed", "Raw CPS\nPE-computed"),
    ("Enhanced CPS reported", "Enhanced CPS\nreported"),
    ("Enhanced CPS PE-computed", "Enhanced CPS\nPE-computed"),
];

fn short_label(label: &str) -> String {
    let stem = label.strip_suffix(" (2024)").unwrap_or(label);
    for (full, short) in SHORT_LABELS {
        if stem == full {
            return short.to_string();
        }
    }
    stem.to_string()
}

/// Derive chart rows from the waterfall. Endpoint rows (first and last) are
/// full bars from zero; interior rows float on the previous step's rate and
/// show just the increment. The first row's delta is defined as `0` with the
/// explanation `"Starting point"`; a missing delta record (invalid data)
/// falls back to `0` and an empty explanation.
pub fn build_rows(waterfall: &Waterfall) -> Vec<WaterfallRow> {
    let steps = &waterfall.steps;
    let deltas = &waterfall.deltas;
    let last = steps.len().saturating_sub(1);

    steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            let (base, value) = if i == 0 || i == last {
                (0.0, step.value)
            } else {
                let increment = deltas.get(i - 1).map(|d| d.delta).unwrap_or(0.0);
                (steps[i - 1].value, increment)
            };

            let (delta, explanation) = if i == 0 {
                (0.0, "Starting point".to_string())
            } else {
                match deltas.get(i - 1) {
                    Some(d) => (d.delta, d.explanation.clone()),
                    None => (0.0, String::new()),
                }
            };

            WaterfallRow {
                label: step.label.clone(),
                short_label: short_label(&step.label),
                base,
                value,
                rate: step.value,
                delta,
                explanation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{WaterfallDelta, WaterfallStep};

    fn sample_waterfall() -> Waterfall {
        let labels = [
            "Census published (2024)",
            "Raw CPS reported (2024)",
            "Raw CPS PE-computed (2024)",
            "Enhanced CPS reported (2024)",
            "Enhanced CPS PE-computed (2024)",
        ];
        let values = [0.134, 0.1354, 0.139, 0.1844, 0.2258];
        let steps: Vec<WaterfallStep> = labels
            .iter()
            .zip(values)
            .map(|(label, value)| WaterfallStep {
                label: label.to_string(),
                value,
            })
            .collect();
        let deltas: Vec<WaterfallDelta> = steps
            .windows(2)
            .map(|pair| WaterfallDelta {
                from: pair[0].label.clone(),
                to: pair[1].label.clone(),
                delta: pair[1].value - pair[0].value,
                explanation: format!("{} to {}", pair[0].label, pair[1].label),
            })
            .collect();
        Waterfall { steps, deltas }
    }

    #[test]
    fn endpoints_are_full_bars_from_zero() {
        let rows = build_rows(&sample_waterfall());
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].base, 0.0);
        assert_eq!(rows[0].value, 0.134);
        assert_eq!(rows[4].base, 0.0);
        assert_eq!(rows[4].value, 0.2258);
    }

    #[test]
    fn interior_rows_float_on_previous_rate() {
        let waterfall = sample_waterfall();
        let rows = build_rows(&waterfall);
        for i in 1..rows.len() - 1 {
            assert_eq!(rows[i].base, waterfall.steps[i - 1].value);
            assert!((rows[i].base + rows[i].value - rows[i].rate).abs() < 1e-9);
        }
    }

    #[test]
    fn first_step_plus_deltas_reaches_last_step() {
        let waterfall = sample_waterfall();
        let total: f64 = waterfall.deltas.iter().map(|d| d.delta).sum();
        assert!((total - 0.0918).abs() < 1e-9);
        assert!((waterfall.steps[0].value + total - 0.2258).abs() < 1e-9);
    }

    #[test]
    fn first_row_is_the_starting_point() {
        let rows = build_rows(&sample_waterfall());
        assert_eq!(rows[0].delta, 0.0);
        assert_eq!(rows[0].explanation, "Starting point");
    }

    #[test]
    fn interior_rows_carry_delta_and_explanation() {
        let waterfall = sample_waterfall();
        let rows = build_rows(&waterfall);
        for i in 1..rows.len() {
            assert_eq!(rows[i].delta, waterfall.deltas[i - 1].delta);
            assert_eq!(rows[i].explanation, waterfall.deltas[i - 1].explanation);
        }
    }

    #[test]
    fn missing_deltas_fall_back_to_zero_and_empty() {
        let mut waterfall = sample_waterfall();
        waterfall.deltas.clear();
        let rows = build_rows(&waterfall);
        assert_eq!(rows[2].value, 0.0);
        assert_eq!(rows[2].delta, 0.0);
        assert_eq!(rows[2].explanation, "");
    }

    #[test]
    fn short_labels_strip_year_and_break_known_stems() {
        assert_eq!(short_label("Census published (2024)"), "Census\npublished");
        assert_eq!(
            short_label("Enhanced CPS PE-computed (2024)"),
            "Enhanced CPS\nPE-computed"
        );
        assert_eq!(short_label("Raw CPS reported (2024)"), "Raw CPS\nreported");
    }

    #[test]
    fn unknown_labels_pass_through() {
        assert_eq!(short_label("Some other estimate"), "Some other estimate");
    }
}
