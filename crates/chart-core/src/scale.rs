// File: crates/chart-core/src/scale.rs
// Summary: Value rounding helpers used by the axis policy.

/// Round `value` up to the next multiple of `step`.
#[inline]
pub fn round_up_to(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}

/// Round `value` down to the previous multiple of `step`.
#[inline]
pub fn round_down_to(value: f64, step: f64) -> f64 {
    (value / step).floor() * step
}

/// Smallest power of two `>= value`, never below 1.
/// Non-positive and sub-unit inputs map to 1.
pub fn pow2_ceiling(value: f64) -> f64 {
    if !(value > 1.0) {
        return 1.0;
    }
    let exp = value.log2().ceil();
    // log2 can land a hair below an exact power for large inputs
    let candidate = exp.exp2();
    if candidate < value { (exp + 1.0).exp2() } else { candidate }
}
