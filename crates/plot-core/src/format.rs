// File: crates/plot-core/src/format.rs
// Summary: Tick label formatting with floating-point noise cleanup.

use crate::theme::AxisFormat;

/// Format a tick value for display under `policy`.
///
/// With `auto_clean` off this is plain fixed-point at `max_decimals`.
/// Otherwise values that are integers up to float noise print without a
/// decimal point (`1999.9999999999` -> `2000`), large magnitudes switch to
/// scientific notation, and the remaining values get a precision chosen by
/// magnitude with trailing zeros trimmed.
pub fn format_tick(value: f64, policy: &AxisFormat) -> String {
    let max_decimals = policy.max_decimals as usize;
    if !policy.auto_clean {
        return format!("{:.*}", max_decimals, value);
    }

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞".to_string() } else { "-∞".to_string() };
    }

    let abs = value.abs();
    if abs >= policy.scientific_threshold {
        return format!("{:.*e}", max_decimals, value);
    }

    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 * abs.max(1.0) {
        return integer_text(rounded);
    }

    let decimals = if abs >= 1000.0 {
        0
    } else if abs >= 100.0 {
        1
    } else if abs >= 10.0 || abs >= 1.0 {
        2
    } else {
        max_decimals.min(3)
    };

    let formatted = format!("{:.*}", decimals, value);
    if policy.show_trailing_zeros {
        return formatted;
    }
    let trimmed = trim_trailing_zeros(&formatted);
    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}

fn integer_text(rounded: f64) -> String {
    if rounded == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    format!("{:.0}", rounded)
}

fn trim_trailing_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
