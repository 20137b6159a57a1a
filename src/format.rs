//! Display formatters. Pure, stateless, total over finite inputs — callers
//! must supply well-formed numbers.

/// Format a decimal fraction as a percentage, e.g. `0.134` → `"13.4%"`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value * 100.0)
}

/// Format a signed fraction as percentage points with an explicit sign,
/// e.g. `0.0414` → `"+4.1 pp"`, `-0.0037` → `"-0.4 pp"`.
pub fn format_pp(value: f64, decimals: usize) -> String {
    format!("{:+.*} pp", decimals, value * 100.0)
}

/// Format a dollar amount with thousands separators and no fractional
/// digits, e.g. `1724.0` → `"$1,724"`, `-1993.0` → `"-$1,993"`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round() as i64;
    let grouped = group_thousands(rounded.unsigned_abs());
    if rounded < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Compact magnitude formatting: `71555680.0` → `"71.6M"`, `999.0` → `"999"`.
/// Thresholds use the absolute value so negative numbers scale identically.
pub fn format_compact(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if abs >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if abs >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{}", value.round() as i64)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_scales_and_fixes_decimals() {
        assert_eq!(format_percent(0.134, 1), "13.4%");
        assert_eq!(format_percent(1.0, 1), "100.0%");
        assert_eq!(format_percent(0.0, 2), "0.00%");
    }

    #[test]
    fn percent_keeps_leading_minus_for_negative_fractions() {
        assert_eq!(format_percent(-0.05, 1), "-5.0%");
    }

    #[test]
    fn pp_forces_plus_sign_for_zero_or_positive() {
        assert_eq!(format_pp(0.0414, 1), "+4.1 pp");
        assert_eq!(format_pp(-0.0037, 1), "-0.4 pp");
        assert_eq!(format_pp(0.0, 1), "+0.0 pp");
    }

    #[test]
    fn currency_groups_thousands_with_no_fractional_digits() {
        assert_eq!(format_currency(1724.0), "$1,724");
        assert_eq!(format_currency(-1993.0), "-$1,993");
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(285417.6), "$285,418");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
    }

    #[test]
    fn compact_uses_magnitude_thresholds() {
        assert_eq!(format_compact(71555680.0), "71.6M");
        assert_eq!(format_compact(999.0), "999");
        assert_eq!(format_compact(1500.0), "1.5K");
        assert_eq!(format_compact(2_500_000_000.0), "2.5B");
    }

    #[test]
    fn compact_preserves_sign_for_large_negatives() {
        assert_eq!(format_compact(-2_500_000_000.0), "-2.5B");
        assert_eq!(format_compact(-1500.0), "-1.5K");
    }
}
