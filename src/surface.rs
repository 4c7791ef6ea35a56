//! Drawing primitives and the [`Surface`] sink the plane is rendered onto.
//!
//! Coordinates are surface pixels with the origin at the top-left corner,
//! x growing rightward and y growing downward.
use core::f64::consts::PI;

use alloc::vec::Vec;
use libm::{cos, sin};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Point {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
    pub fn center(&self) -> Point {
        Point::new(self.width / 2., self.height / 2.)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }
    pub fn covers(&self, other: &Rect) -> bool {
        self.origin.x <= other.origin.x
            && self.origin.y <= other.origin.y
            && self.origin.x + self.size.width >= other.origin.x + other.size.width
            && self.origin.y + self.size.height >= other.origin.y + other.size.height
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        Rect::new(Point::default(), size)
    }
}

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// `#eee`
    pub const LIGHT_GRAY: Color = Color::rgb(0xEE, 0xEE, 0xEE);
    /// `#ccc`
    pub const GRAY: Color = Color::rgb(0xCC, 0xCC, 0xCC);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// The CSS `green`, not full intensity
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Pixels
    pub width: f64,
}

impl Stroke {
    pub const fn new(color: Color, width: f64) -> Self {
        Stroke { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Pixels
    pub size: f64,
    pub weight: FontWeight,
}

/// Rotation sense on screen, where y grows downward.
///
/// `Clockwise` sweeps through increasing angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcDirection {
    Clockwise,
    Anticlockwise,
}

impl ArcDirection {
    pub fn from_anticlockwise(anticlockwise: bool) -> Self {
        if anticlockwise {
            ArcDirection::Anticlockwise
        } else {
            ArcDirection::Clockwise
        }
    }
}

/// A circular arc, angles in radians measured in screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub center: Point,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub direction: ArcDirection,
}

impl Arc {
    /// Signed sweep from `start_angle`, resolved the way an HTML canvas does.
    ///
    /// Clockwise arcs sweep forward by `end - start` reduced into `[0, 2π)`,
    /// unless the raw difference already spans a full turn. Anticlockwise
    /// arcs mirror this with a non-positive sweep.
    pub fn sweep(&self) -> f64 {
        let tau = 2. * PI;
        let delta = self.end_angle - self.start_angle;
        match self.direction {
            ArcDirection::Clockwise => {
                if delta >= tau {
                    tau
                } else {
                    delta.rem_euclid_libm(tau)
                }
            }
            ArcDirection::Anticlockwise => {
                if -delta >= tau {
                    -tau
                } else {
                    -(-delta).rem_euclid_libm(tau)
                }
            }
        }
    }

    pub fn point_at(&self, angle: f64) -> Point {
        Point::new(
            self.center.x + self.radius * cos(angle),
            self.center.y + self.radius * sin(angle),
        )
    }

    /// Approximates the arc with `segments` straight pieces, both ends included.
    pub fn flatten(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        let sweep = self.sweep();
        (0..=segments)
            .map(|i| self.point_at(self.start_angle + sweep * i as f64 / segments as f64))
            .collect()
    }
}

// `f64::rem_euclid` is only available in `std`
trait RemEuclid {
    fn rem_euclid_libm(self, rhs: f64) -> f64;
}

impl RemEuclid for f64 {
    fn rem_euclid_libm(self, rhs: f64) -> f64 {
        let r = libm::fmod(self, rhs);
        if r < 0. {
            r + rhs
        } else {
            r
        }
    }
}

/// A 2D drawing sink.
///
/// The renderer issues complete primitives; implementations decide how to
/// rasterize them. Nothing is retained between calls on the renderer's side.
pub trait Surface {
    fn size(&self) -> Size;

    /// Erase `region` back to the background.
    fn clear(&mut self, region: Rect);

    /// Stroke the open polyline through `points`.
    fn stroke_path(&mut self, points: &[Point], stroke: Stroke);

    /// Fill the polygon outlined by `points`.
    fn fill_path(&mut self, points: &[Point], color: Color);

    fn stroke_arc(&mut self, arc: &Arc, stroke: Stroke);

    /// Draw `text` with its baseline starting at `position`.
    fn text(&mut self, position: Point, text: &str, style: &TextStyle);
}
