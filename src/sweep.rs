//! Sample generation for the sweep variables.

use crate::error::{MechError, MechResult};

/// `count` evenly spaced values over `[start, stop]`, both endpoints included.
///
/// The last value is `stop` exactly.
pub fn linspace(start: f64, stop: f64, count: usize) -> MechResult<Vec<f64>> {
    if count < 2 {
        return Err(MechError::domain("samples", count as f64, "at least two samples are required"));
    }
    let last = (count - 1) as f64;
    Ok((0..count)
        .map(|i| {
            if i == count - 1 {
                stop
            } else {
                start + (stop - start) * (i as f64 / last)
            }
        })
        .collect())
}

/// `(cos 2θ, sin 2θ)` for an angle given in degrees.
///
/// Exact when 2θ is a multiple of 90°, so harmonics vanish exactly at 0°, 45° and 90°.
pub fn double_angle_harmonics(theta_deg: f64) -> (f64, f64) {
    let phi = 2.0 * theta_deg;
    let quadrant = phi / 90.0;
    if quadrant.fract() == 0.0 {
        match (quadrant as i64).rem_euclid(4) {
            0 => (1.0, 0.0),
            1 => (0.0, 1.0),
            2 => (-1.0, 0.0),
            _ => (0.0, -1.0),
        }
    } else {
        let (sin, cos) = phi.to_radians().sin_cos();
        (cos, sin)
    }
}
