//! Text rendering of the dashboard sections. Presentation only: everything
//! here is derived from the chart-row builders and formatters.

use crate::charts;
use crate::fetch::FetchState;
use crate::format::{format_compact, format_currency, format_percent, format_pp};
use crate::models::{DecompositionData, DecompositionMetadata};

pub fn render_state(state: &FetchState) -> String {
    match state {
        FetchState::Loading => "Loading decomposition data...\n".to_string(),
        FetchState::Error(message) => format!("Error: {message}\n"),
        FetchState::Success(data) => render_dashboard(data),
    }
}

pub fn render_dashboard(data: &DecompositionData) -> String {
    let mut out = String::new();

    if let Some(warning) = &data.warning {
        out.push_str(&format!("!! {warning}\n\n"));
    }

    render_waterfall(&mut out, data);
    render_programs(&mut out, data);
    render_demographics(&mut out, data);
    render_weights(&mut out, data);
    render_tax_gap(&mut out, data);
    render_states(&mut out, data);
    render_metadata(&mut out, &data.metadata);

    out
}

fn section(out: &mut String, title: &str) {
    out.push_str(&format!("{title}\n{}\n", "-".repeat(title.len())));
}

fn render_waterfall(out: &mut String, data: &DecompositionData) {
    section(out, "Child poverty rate waterfall");
    for row in charts::waterfall::build_rows(&data.waterfall) {
        let label = row.short_label.replace('\n', " ");
        out.push_str(&format!(
            "  {label:26} {:>7}  {:>8}  {}\n",
            format_percent(row.rate, 1),
            format_pp(row.delta, 1),
            row.explanation
        ));
    }
    out.push('\n');
}

fn render_programs(out: &mut String, data: &DecompositionData) {
    let Some(effects) = &data.program_effects else {
        return;
    };
    section(out, "Children lifted out of poverty by program");
    for row in charts::programs::build_rows(effects) {
        let census = row
            .census_children_lifted
            .map(format_compact)
            .unwrap_or_else(|| "—".to_string());
        out.push_str(&format!(
            "  {:22} {:>7}  (Census: {census:>5})  ${:.1}B  {} → {}\n",
            row.label,
            format_compact(row.children_lifted),
            row.total_benefit_b,
            format_percent(row.rate_without, 1),
            format_percent(row.rate_with, 1),
        ));
    }
    if let Some(combined) = charts::programs::combined_credits_callout(effects) {
        out.push_str(&format!(
            "  Combined {}: {} children lifted\n",
            combined.label,
            format_compact(combined.children_lifted)
        ));
    }
    out.push('\n');
}

fn render_demographics(out: &mut String, data: &DecompositionData) {
    let Some(demographics) = &data.demographics else {
        return;
    };
    section(out, "Child poverty by demographic group");
    for (heading, groups) in [
        ("By age", &demographics.by_age),
        ("By race/ethnicity", &demographics.by_race),
    ] {
        out.push_str(&format!("  {heading}:\n"));
        for row in charts::demographics::build_rows(groups) {
            let census = row
                .census_rate
                .map(|rate| format_percent(rate, 1))
                .unwrap_or_else(|| "—".to_string());
            out.push_str(&format!(
                "    {:22} PE {:>6}  Census {census:>6}  {} children\n",
                row.group,
                format_percent(row.pe_rate, 1),
                format_compact(row.total_children)
            ));
        }
    }
    out.push('\n');
}

fn render_weights(out: &mut String, data: &DecompositionData) {
    section(out, "Weight rebalancing (raw vs enhanced CPS)");
    for row in charts::weights::build_rows(&data.weight_rebalancing) {
        out.push_str(&format!(
            "  {:22} poverty {} → {}  child share {} → {} ({})\n",
            row.label,
            format_percent(row.raw_cps_poverty_rate, 1),
            format_percent(row.enhanced_cps_poverty_rate, 1),
            format_percent(row.raw_cps_child_share, 1),
            format_percent(row.enhanced_cps_child_share, 1),
            format_pp(row.child_share_delta, 1),
        ));
    }
    out.push('\n');
}

fn render_tax_gap(out: &mut String, data: &DecompositionData) {
    section(out, "Federal tax gap by income decile");
    for row in charts::tax_gap::build_rows(&data.tax_gap_by_decile) {
        out.push_str(&format!(
            "  {:4} income {:>10}  PE tax {:>10}  reported {:>10}  gap {:>10}\n",
            row.label,
            format_currency(row.mean_income),
            format_currency(row.pe_federal_tax),
            format_currency(row.reported_federal_tax),
            format_currency(row.gap),
        ));
    }
    out.push('\n');
}

fn render_states(out: &mut String, data: &DecompositionData) {
    section(out, "State-level child poverty (reported vs computed)");
    let scatter = charts::states::build_scatter(&data.state_results);
    out.push_str(&format!(
        "  {} states, axis range {} – {}\n",
        scatter.points.len(),
        format_percent(scatter.min_val, 1),
        format_percent(scatter.max_val, 1)
    ));
    for point in &scatter.points {
        out.push_str(&format!(
            "  {:2}  reported {:>6}  computed {:>6}  {} children\n",
            point.state,
            format_percent(point.x, 1),
            format_percent(point.y, 1),
            format_compact(point.total_children)
        ));
    }
    out.push('\n');
}

fn render_metadata(out: &mut String, metadata: &DecompositionMetadata) {
    let generated = chrono::DateTime::parse_from_rfc3339(&metadata.generated_at)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|_| metadata.generated_at.clone());
    out.push_str(&format!(
        "Generated {generated} | policyengine-us {} | {} vs {} | pipeline ran {:.1}s\n",
        metadata.policyengine_us_version,
        metadata.raw_cps_dataset,
        metadata.enhanced_cps_dataset,
        metadata.total_runtime_seconds
    ));
}
