use core::f64::consts::PI;

use libm::{atan2, cos, fabs, sin, sqrt};

/// A planar vector in polar form, angle in radians.
///
/// The angle is not normalized; anything consuming it goes through the
/// trigonometric functions, which wrap implicitly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub length: f64,
    pub angle: f64,
    // Block construction so the length invariant can be upheld
    _private: (),
}

impl Vector2D {
    /// A negative `length` describes the same arrow pointing the other way,
    /// so it is stored as `|length|` with the angle turned by half a revolution.
    pub fn new(length: f64, angle: f64) -> Vector2D {
        if length.is_sign_negative() && length != 0. {
            log::warn!("Folding negative length {} into angle {}", length, angle);
        }
        Vector2D {
            length: fabs(length),
            angle: if length.is_sign_positive() || length == 0. {
                angle
            } else {
                angle + PI
            },
            _private: (),
        }
    }
    pub fn from_degrees(length: f64, degrees: f64) -> Self {
        Vector2D::new(length, degrees.to_radians())
    }
    pub fn from_components(x: f64, y: f64) -> Self {
        Vector2D {
            length: sqrt(x * x + y * y),
            angle: atan2(y, x),
            _private: (),
        }
    }
    pub fn with_length(self, length: f64) -> Self {
        Vector2D::new(length, self.angle)
    }
    pub fn with_angle(self, angle: f64) -> Self {
        Vector2D { angle, ..self }
    }
    /// Cartesian components in plane units, y pointing up.
    pub fn components(&self) -> (f64, f64) {
        (self.length * cos(self.angle), self.length * sin(self.angle))
    }
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn negative_length_flips_direction() {
        let folded = Vector2D::new(-2., 0.5);
        assert_eq!(folded.length, 2.);
        assert_abs_diff_eq!(folded.angle, 0.5 + PI);

        let (x, y) = folded.components();
        let (ox, oy) = Vector2D::new(2., 0.5).components();
        assert_abs_diff_eq!(x, -ox, epsilon = 1e-12);
        assert_abs_diff_eq!(y, -oy, epsilon = 1e-12);
    }

    #[test]
    fn components_round_trip_through_polar() {
        let v = Vector2D::from_components(3., 4.);
        assert_abs_diff_eq!(v.length, 5., epsilon = 1e-12);
        let (x, y) = v.components();
        assert_abs_diff_eq!(x, 3., epsilon = 1e-12);
        assert_abs_diff_eq!(y, 4., epsilon = 1e-12);
    }

    #[test]
    fn builders_leave_original_untouched() {
        let u = Vector2D::from_degrees(5., 90.);
        let longer = u.with_length(7.);
        let turned = u.with_angle(0.);

        assert_eq!(u.length, 5.);
        assert_abs_diff_eq!(u.angle_degrees(), 90., epsilon = 1e-12);
        assert_eq!(longer.length, 7.);
        assert_eq!(longer.angle, u.angle);
        assert_eq!(turned.length, 5.);
        assert_eq!(turned.angle, 0.);
    }

    #[test]
    fn angle_is_not_normalized() {
        let v = Vector2D::from_degrees(1., 720.);
        assert_abs_diff_eq!(v.angle, 4. * PI, epsilon = 1e-12);
    }
}
