/// Restrict `x` to `[0, 1]`.
///
/// NaN maps to `0.0` so a degenerate ratio can never leak into opacity or scale.
pub fn clamp_unit(x: f64) -> f64 {
    if x.is_nan() {
        return 0.0;
    }
    x.clamp(0.0, 1.0)
}

/// Cubic ease `x*x*(3-2x)`. Input must already be in `[0, 1]`.
pub fn smoothstep(x: f64) -> f64 {
    x * x * (3.0 - 2.0 * x)
}

/// Linear interpolation from `a` to `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `num / den` clamped to `[0, 1]`; a non-positive denominator yields `0.0`.
pub fn unit_ratio(num: f64, den: f64) -> f64 {
    if den <= 0.0 || !den.is_finite() {
        return 0.0;
    }
    clamp_unit(num / den)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
