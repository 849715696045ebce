//! Engineering-notation formatting for reports.

/// SI prefixes from tera down to femto, largest first.
const PREFIXES: [(f64, &str); 10] = [
    (1e12, "T"),
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "u"),
    (1e-9, "n"),
    (1e-12, "p"),
    (1e-15, "f"),
];

/// Format a value with the appropriate SI prefix.
///
/// Values outside the tera..femto range, zero and non-finite values are
/// printed without a prefix.
pub fn format_value(value: f64) -> String {
    let abs_value = value.abs();

    if abs_value == 0.0 || !abs_value.is_finite() {
        return format!("{:.4}", value);
    }

    match PREFIXES.iter().find(|(scale, _)| abs_value >= *scale) {
        Some((scale, suffix)) if abs_value < 1e15 => format!("{:.4}{}", value / scale, suffix),
        _ => format!("{:.4e}", value),
    }
}
