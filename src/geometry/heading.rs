use std::f64::consts::{PI, TAU};

/// Reduces `heading` into `(-pi, pi]`.
///
/// Values already in range come back bit-identical. Others take one euclidean remainder
/// plus at most two corrective shifts, so the reduction terminates for any input.
/// Non-finite headings read as `0.0`.
pub fn normalize_heading(heading: f64) -> f64 {
    if !heading.is_finite() {
        return 0.0;
    }
    if heading > -PI && heading <= PI {
        return heading;
    }

    let mut h = heading.rem_euclid(TAU);
    for _ in 0..2 {
        if h > PI {
            h -= TAU;
        } else if h <= -PI {
            h += TAU;
        } else {
            break;
        }
    }
    h
}

/// Signed turn from `from` to `to` along the shorter arc.
pub fn shortest_angle_delta(from: f64, to: f64) -> f64 {
    normalize_heading(to - from)
}
