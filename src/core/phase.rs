use std::f64::consts::{PI, TAU};

/// Normalize to the range [-PI, PI).
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    (x + PI).rem_euclid(TAU) - PI
}

#[inline]
pub fn angle_diff_pm_pi(a: f64, b: f64) -> f64 {
    wrap_pm_pi(a - b)
}
