pub(crate) fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Editor field coercion: blank, non-numeric and non-finite text all read as 0.
pub(crate) fn coerce_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }
    text.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Rounds halves toward positive infinity, matching the controller's decoder.
pub(crate) fn round_half_up(v: f64) -> i64 {
    let v = finite_or_zero(v);
    (v + 0.5).floor() as i64
}

/// Index selector that only accepts whole numbers; anything else maps to `-1`, which
/// no selector table contains.
pub(crate) fn exact_index(v: f64) -> i64 {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 9.0e15 {
        v as i64
    } else {
        -1
    }
}
