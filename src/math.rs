//! Dot product and enclosed angle of two polar vectors.
use core::f64::consts::PI;

use libm::{acos, cos, fabs};

use crate::vector::Vector2D;

/// `|u| |v| cos(|angle(u) - angle(v)|)`.
///
/// The absolute value does not change the result, cosine being even, but is
/// kept so results match the reference readout bit for bit.
pub fn dot_product(u: Vector2D, v: Vector2D) -> f64 {
    let angle_diff = fabs(u.angle - v.angle);
    let dot = u.length * v.length * cos(angle_diff);
    // 0 * inf
    if dot.is_nan() && (u.length == 0. || v.length == 0.) {
        return 0.;
    }
    log::trace!("Dot product of {:?} and {:?}: {}", u, v, dot);
    dot
}

/// Angle between `u` and `v` in radians, within `[0, π]`.
///
/// Zero whenever either vector has zero length.
pub fn angle_between(u: Vector2D, v: Vector2D) -> f64 {
    let magnitudes = u.length * v.length;
    // The product alone is NaN for 0 * inf
    if u.length == 0. || v.length == 0. || magnitudes == 0. {
        log::trace!("Degenerate angle, zero length vector");
        return 0.;
    }
    let ratio = dot_product(u, v) / magnitudes;
    // Both terms overflow to infinity for huge lengths
    let ratio = if ratio.is_finite() {
        ratio
    } else {
        log::trace!("Non-finite cosine ratio {}, using angles only", ratio);
        cos(fabs(u.angle - v.angle))
    };
    // Rounding can push exactly (anti)parallel ratios just outside acos' domain
    acos(ratio.clamp(-1., 1.))
}

pub fn angle_between_degrees(u: Vector2D, v: Vector2D) -> f64 {
    angle_between(u, v) * (180. / PI)
}
