//! Slider ranges, preset configurations, and the numeric readout.
use core::f64::consts::{FRAC_PI_2, PI};
use core::fmt;

use libm::round;

use crate::math::{angle_between_degrees, dot_product};
use crate::vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    // Block construction so range invariants can be upheld
    _private: (),
}

/// Vector length, in plane units
pub const LENGTH_RANGE: SliderRange = SliderRange {
    min: 1.,
    max: 10.,
    step: 0.5,
    _private: (),
};

/// Vector angle, in degrees
pub const ANGLE_RANGE_DEGREES: SliderRange = SliderRange {
    min: 0.,
    max: 360.,
    step: 1.,
    _private: (),
};

impl SliderRange {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        if !(min <= max) {
            log::error!("Invalid slider range ordering");
            panic!();
        }
        if !(step > 0.) {
            log::error!("Invalid slider step");
            panic!();
        }
        SliderRange {
            min,
            max,
            step,
            _private: (),
        }
    }

    /// Clamp into range, then snap to the nearest step counted from `min`.
    ///
    /// NaN collapses to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            log::warn!("Slider received NaN, using {}", self.min);
            return self.min;
        }
        let clamped = value.clamp(self.min, self.max);
        if clamped != value {
            log::warn!("Slider value {} clamped to {}", value, clamped);
        }
        let snapped = self.min + round((clamped - self.min) / self.step) * self.step;
        if snapped > self.max {
            snapped - self.step
        } else {
            snapped
        }
    }
}

/// One-click configurations. Each puts `u` on the positive x axis and turns `v`
/// relative to it, leaving both lengths alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Parallel,
    Perpendicular,
    Opposite,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Parallel, Preset::Perpendicular, Preset::Opposite];

    pub fn apply(self, u: Vector2D, v: Vector2D) -> (Vector2D, Vector2D) {
        let v_angle = match self {
            Preset::Parallel => 0.,
            Preset::Perpendicular => FRAC_PI_2,
            Preset::Opposite => PI,
        };
        (u.with_angle(0.), v.with_angle(v_angle))
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Parallel => "Parallel",
            Preset::Perpendicular => "Perpendicular",
            Preset::Opposite => "Opposite",
        }
    }
}

/// The two numbers shown next to the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Readout {
    pub dot: f64,
    pub angle_degrees: f64,
}

impl Readout {
    pub fn new(u: Vector2D, v: Vector2D) -> Self {
        Readout {
            dot: dot_product(u, v),
            angle_degrees: angle_between_degrees(u, v),
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "u ⋅ v = {:.2}", self.dot)?;
        write!(f, "Angle between u and v: {:.0}°", self.angle_degrees)
    }
}
