//! Draws two vectors on a scaled Cartesian grid.
//!
//! Each call to [`PlaneRenderer::render`] repaints the whole surface; no state
//! is carried between calls, so identical inputs issue identical primitives.
use core::f64::consts::PI;

use alloc::format;
use libm::{atan2, cos, fmod, sin};

use crate::surface::{
    Arc, ArcDirection, Color, FontWeight, Point, Rect, Size, Stroke, Surface, TextStyle,
};
use crate::vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub grid: Color,
    /// Axes and tick marks
    pub axis: Color,
    pub tick_label: Color,
    pub u: Color,
    pub v: Color,
    pub angle_arc: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            grid: Color::LIGHT_GRAY,
            axis: Color::GRAY,
            tick_label: Color::BLACK,
            u: Color::BLUE,
            v: Color::GREEN,
            angle_arc: Color::RED,
        }
    }
}

/// Pixel nudges applied to labels, relative to the point they annotate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelOffsets {
    pub x_positive: (f64, f64),
    pub x_negative: (f64, f64),
    pub y: (f64, f64),
    pub vector: (f64, f64),
}

impl Default for LabelOffsets {
    fn default() -> Self {
        LabelOffsets {
            x_positive: (-3., 15.),
            x_negative: (-10., 15.),
            y: (8., 3.),
            vector: (5., -5.),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineWidths {
    pub grid: f64,
    /// Axes and tick marks
    pub axis: f64,
    pub vector: f64,
    pub angle_arc: f64,
}

impl Default for LineWidths {
    fn default() -> Self {
        LineWidths {
            grid: 1.,
            axis: 2.,
            vector: 3.,
            angle_arc: 2.,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneLayout {
    /// Preferred surface size for hosts that create their own surface.
    /// Rendering always uses the size reported by the surface.
    pub canvas: Size,
    /// Pixels per unit length
    pub scale: f64,
    /// Ticks extend this far to each side of their axis
    pub tick_half_length: f64,
    /// Independent of `scale`
    pub angle_arc_radius: f64,
    pub arrow_head_length: f64,
    /// Angle between each arrowhead edge and the shaft, radians
    pub arrow_head_spread: f64,
    pub tick_font_size: f64,
    pub vector_font_size: f64,
    pub label_offsets: LabelOffsets,
    pub line_widths: LineWidths,
    pub palette: Palette,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    layout: PlaneLayout,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig::new()
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        LayoutConfig {
            layout: PlaneLayout {
                canvas: Size::new(600., 400.),
                scale: 40.,
                tick_half_length: 5.,
                angle_arc_radius: 30.,
                arrow_head_length: 10.,
                arrow_head_spread: PI / 6.,
                tick_font_size: 10.,
                vector_font_size: 12.,
                label_offsets: LabelOffsets::default(),
                line_widths: LineWidths::default(),
                palette: Palette::default(),
            },
        }
    }
    /// Realize a `PlaneRenderer` from the configuration
    pub fn realize(&mut self) -> PlaneRenderer {
        PlaneRenderer {
            layout: self.layout,
        }
    }
    pub fn set_canvas(&mut self, canvas: Size) -> &mut Self {
        if !(canvas.width >= 0. && canvas.height >= 0.) {
            log::error!("Invalid canvas size: {:?}", canvas);
            panic!();
        }
        self.layout.canvas = canvas;
        self
    }
    pub fn set_scale(&mut self, scale: f64) -> &mut Self {
        // The grid loops step by `scale`, anything else never terminates
        if !(scale > 0. && scale.is_finite()) {
            log::error!("Invalid scale: {}", scale);
            panic!();
        }
        self.layout.scale = scale;
        self
    }
    pub fn set_tick_half_length(&mut self, tick_half_length: f64) -> &mut Self {
        self.layout.tick_half_length = tick_half_length;
        self
    }
    pub fn set_angle_arc_radius(&mut self, angle_arc_radius: f64) -> &mut Self {
        self.layout.angle_arc_radius = angle_arc_radius;
        self
    }
    pub fn set_arrow_head(&mut self, length: f64, spread: f64) -> &mut Self {
        self.layout.arrow_head_length = length;
        self.layout.arrow_head_spread = spread;
        self
    }
    pub fn set_font_sizes(&mut self, tick: f64, vector: f64) -> &mut Self {
        self.layout.tick_font_size = tick;
        self.layout.vector_font_size = vector;
        self
    }
    pub fn set_label_offsets(&mut self, label_offsets: LabelOffsets) -> &mut Self {
        self.layout.label_offsets = label_offsets;
        self
    }
    pub fn set_line_widths(&mut self, line_widths: LineWidths) -> &mut Self {
        self.layout.line_widths = line_widths;
        self
    }
    pub fn set_palette(&mut self, palette: Palette) -> &mut Self {
        self.layout.palette = palette;
        self
    }
}

/// Surface point of the plane's (0, 0).
pub fn origin(size: Size) -> Point {
    size.center()
}

/// Screen position of the tip of `vector` drawn from `origin`.
// Screen y grows downward while angles grow counter-clockwise, hence the sign
pub fn project(origin: Point, vector: Vector2D, scale: f64) -> Point {
    let dx = vector.length * cos(vector.angle) * scale;
    let dy = -vector.length * sin(vector.angle) * scale;
    origin.offset(dx, dy)
}

/// Triangle for an arrowhead at `to`, pointing away from `from`.
///
/// The apex is `to` itself and comes first; the back corners sit `length`
/// behind it, `spread` to either side of the shaft.
pub fn arrow_head(from: Point, to: Point, length: f64, spread: f64) -> [Point; 3] {
    let direction = atan2(to.y - from.y, to.x - from.x);
    [
        to,
        Point::new(
            to.x - length * cos(direction - spread),
            to.y - length * sin(direction - spread),
        ),
        Point::new(
            to.x - length * cos(direction + spread),
            to.y - length * sin(direction + spread),
        ),
    ]
}

/// Sweep sense for the arc from `u` to `v`.
///
/// Compares raw angles: angles outside one turn are not reduced first, so
/// such arcs may take the long way round.
pub fn arc_direction(u: Vector2D, v: Vector2D) -> ArcDirection {
    ArcDirection::from_anticlockwise(u.angle > v.angle)
}

/// Signed tick indices along one axis: forward from the origin while inside
/// `extent`, then backward while above zero.
fn tick_steps(origin: f64, extent: f64, scale: f64) -> impl Iterator<Item = i64> {
    let forward = (0_i64..).take_while(move |&k| origin + k as f64 * scale < extent);
    let backward = (1_i64..)
        .take_while(move |&k| origin - k as f64 * scale > 0.)
        .map(|k| -k);
    forward.chain(backward)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneRenderer {
    layout: PlaneLayout,
}

impl Default for PlaneRenderer {
    fn default() -> Self {
        LayoutConfig::new().realize()
    }
}

impl PlaneRenderer {
    pub fn layout(&self) -> &PlaneLayout {
        &self.layout
    }

    pub fn render<S: Surface>(&self, surface: &mut S, u: Vector2D, v: Vector2D) {
        let size = surface.size();
        let origin = origin(size);
        log::debug!("Rendering {:?} and {:?} on {:?}", u, v, size);

        surface.clear(Rect::from(size));
        self.draw_grid(surface, size, origin);
        self.draw_axes(surface, size, origin);
        self.draw_ticks(surface, size, origin);
        self.draw_vector(surface, origin, u, "u", self.layout.palette.u);
        self.draw_vector(surface, origin, v, "v", self.layout.palette.v);
        self.draw_angle_arc(surface, origin, u, v);
    }

    fn draw_grid<S: Surface>(&self, surface: &mut S, size: Size, origin: Point) {
        let scale = self.layout.scale;
        let stroke = Stroke::new(self.layout.palette.grid, self.layout.line_widths.grid);

        let mut x = fmod(origin.x, scale);
        while x < size.width {
            surface.stroke_path(&[Point::new(x, 0.), Point::new(x, size.height)], stroke);
            x += scale;
        }
        let mut y = fmod(origin.y, scale);
        while y < size.height {
            surface.stroke_path(&[Point::new(0., y), Point::new(size.width, y)], stroke);
            y += scale;
        }
    }

    fn draw_axes<S: Surface>(&self, surface: &mut S, size: Size, origin: Point) {
        let stroke = Stroke::new(self.layout.palette.axis, self.layout.line_widths.axis);
        surface.stroke_path(
            &[Point::new(0., origin.y), Point::new(size.width, origin.y)],
            stroke,
        );
        surface.stroke_path(
            &[Point::new(origin.x, 0.), Point::new(origin.x, size.height)],
            stroke,
        );
    }

    fn draw_ticks<S: Surface>(&self, surface: &mut S, size: Size, origin: Point) {
        let PlaneLayout {
            scale,
            tick_half_length: half,
            label_offsets: offsets,
            ..
        } = self.layout;
        let stroke = Stroke::new(self.layout.palette.axis, self.layout.line_widths.axis);
        let style = TextStyle {
            color: self.layout.palette.tick_label,
            size: self.layout.tick_font_size,
            weight: FontWeight::Normal,
        };

        for step in tick_steps(origin.x, size.width, scale) {
            let x = origin.x + step as f64 * scale;
            surface.stroke_path(
                &[Point::new(x, origin.y - half), Point::new(x, origin.y + half)],
                stroke,
            );
            if step != 0 {
                let (dx, dy) = if step > 0 {
                    offsets.x_positive
                } else {
                    offsets.x_negative
                };
                surface.text(Point::new(x + dx, origin.y + dy), &format!("{}", step), &style);
            }
        }

        for step in tick_steps(origin.y, size.height, scale) {
            let y = origin.y + step as f64 * scale;
            surface.stroke_path(
                &[Point::new(origin.x - half, y), Point::new(origin.x + half, y)],
                stroke,
            );
            if step != 0 {
                // Screen-down is the negative direction
                let (dx, dy) = offsets.y;
                surface.text(Point::new(origin.x + dx, y + dy), &format!("{}", -step), &style);
            }
        }
    }

    fn draw_vector<S: Surface>(
        &self,
        surface: &mut S,
        origin: Point,
        vector: Vector2D,
        label: &str,
        color: Color,
    ) {
        let tip = project(origin, vector, self.layout.scale);
        surface.stroke_path(
            &[origin, tip],
            Stroke::new(color, self.layout.line_widths.vector),
        );
        self.draw_arrow_head(surface, origin, tip, color);

        let (dx, dy) = self.layout.label_offsets.vector;
        surface.text(
            tip.offset(dx, dy),
            label,
            &TextStyle {
                color,
                size: self.layout.vector_font_size,
                weight: FontWeight::Bold,
            },
        );
    }

    /// Filled arrowhead at `to` for any segment, vector or not.
    pub fn draw_arrow_head<S: Surface>(&self, surface: &mut S, from: Point, to: Point, color: Color) {
        let [apex, left, right] = arrow_head(
            from,
            to,
            self.layout.arrow_head_length,
            self.layout.arrow_head_spread,
        );
        surface.fill_path(&[apex, left, right, apex], color);
    }

    fn draw_angle_arc<S: Surface>(&self, surface: &mut S, origin: Point, u: Vector2D, v: Vector2D) {
        let arc = Arc {
            center: origin,
            radius: self.layout.angle_arc_radius,
            start_angle: -u.angle,
            end_angle: -v.angle,
            direction: arc_direction(u, v),
        };
        surface.stroke_arc(
            &arc,
            Stroke::new(self.layout.palette.angle_arc, self.layout.line_widths.angle_arc),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_list::{DisplayList, DrawCommand};
    use alloc::vec::Vec;
    use approx::assert_abs_diff_eq;
    use core::f64::consts::FRAC_PI_2;

    fn render(size: Size, u: Vector2D, v: Vector2D) -> DisplayList {
        let mut list = DisplayList::new(size);
        PlaneRenderer::default().render(&mut list, u, v);
        list
    }

    fn default_pair() -> (Vector2D, Vector2D) {
        (Vector2D::new(5., PI / 6.), Vector2D::new(4., PI / 3.))
    }

    fn strokes_with(list: &DisplayList, color: Color) -> Vec<&[Point]> {
        list.commands()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::StrokePath { points, stroke } if stroke.color == color => {
                    Some(points.as_slice())
                }
                _ => None,
            })
            .collect()
    }

    fn fill_with(list: &DisplayList, color: Color) -> Vec<Point> {
        list.commands()
            .iter()
            .find_map(|command| match command {
                DrawCommand::FillPath { points, color: c } if *c == color => Some(points.clone()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn rendering_is_idempotent() {
        let (u, v) = default_pair();
        let size = Size::new(600., 400.);
        let first = render(size, u, v);
        let second = render(size, u, v);
        assert_eq!(first, second);

        // Redrawing onto a used surface starts over
        let mut reused = first.clone();
        PlaneRenderer::default().render(&mut reused, u, v);
        assert_eq!(reused, first);
    }

    #[test]
    fn starts_with_full_clear() {
        let (u, v) = default_pair();
        let list = render(Size::new(600., 400.), u, v);
        assert_eq!(
            list.commands()[0],
            DrawCommand::Clear(Rect::from(Size::new(600., 400.)))
        );
    }

    #[test]
    fn grid_lines_cover_surface() {
        let (u, v) = default_pair();
        let list = render(Size::new(600., 400.), u, v);
        let grid = strokes_with(&list, Color::LIGHT_GRAY);

        let vertical: Vec<f64> = grid.iter().filter(|p| p[0].x == p[1].x).map(|p| p[0].x).collect();
        let horizontal: Vec<f64> = grid.iter().filter(|p| p[0].y == p[1].y).map(|p| p[0].y).collect();
        assert_eq!(vertical.len(), 15);
        assert_eq!(vertical[0], 20.);
        assert_eq!(vertical[14], 580.);
        assert_eq!(horizontal.len(), 10);
        assert_eq!(horizontal[0], 0.);
        assert_eq!(horizontal[9], 360.);
        for line in grid {
            let spans_height = line[0].y == 0. && line[1].y == 400.;
            let spans_width = line[0].x == 0. && line[1].x == 600.;
            assert!(spans_height || spans_width);
        }
    }

    #[test]
    fn axes_cross_at_center() {
        let (u, v) = default_pair();
        let list = render(Size::new(600., 400.), u, v);
        let axis = strokes_with(&list, Color::GRAY);
        assert_eq!(axis[0], [Point::new(0., 200.), Point::new(600., 200.)]);
        assert_eq!(axis[1], [Point::new(300., 0.), Point::new(300., 400.)]);
    }

    #[test]
    fn tick_labels_count_units() {
        let (u, v) = default_pair();
        let list = render(Size::new(600., 400.), u, v);
        let labels: Vec<(Point, &str)> = list.texts().collect();

        // 7 ticks either way along x, 4 along y, plus "u" and "v"
        assert_eq!(labels.len(), 7 * 2 + 4 * 2 + 2);
        assert!(labels.contains(&(Point::new(337., 215.), "1")));
        assert!(labels.contains(&(Point::new(10., 215.), "-7")));
        assert!(labels.contains(&(Point::new(577., 215.), "7")));
        // Screen-down is negative
        assert!(labels.contains(&(Point::new(308., 243.), "-1")));
        assert!(labels.contains(&(Point::new(308., 43.), "4")));
        assert!(!labels.iter().any(|(_, text)| *text == "0"));

        let ticks = strokes_with(&list, Color::GRAY).len() - 2;
        // The origin tick is shared by both directions on each axis
        assert_eq!(ticks, (1 + 7 + 7) + (1 + 4 + 4));
    }

    #[test]
    fn off_grid_origin_keeps_integer_labels() {
        let (u, v) = default_pair();
        let list = render(Size::new(601., 401.), u, v);
        assert!(list.texts().all(|(_, text)| !text.contains('.')));
        assert!(list.texts().any(|(p, text)| text == "1" && p.x == 300.5 + 40. - 3.));
    }

    #[test]
    fn arrow_head_apex_is_vector_tip() {
        let size = Size::new(600., 400.);
        for (u, v) in [
            default_pair(),
            (Vector2D::new(10., 4.1), Vector2D::new(1., -0.3)),
            (Vector2D::from_degrees(7.5, 360.), Vector2D::from_degrees(2.5, 181.)),
        ] {
            let list = render(size, u, v);
            let origin = origin(size);
            assert_eq!(fill_with(&list, Color::BLUE)[0], project(origin, u, 40.));
            assert_eq!(fill_with(&list, Color::GREEN)[0], project(origin, v, 40.));
        }
    }

    #[test]
    fn vectors_are_projected_with_flipped_y() {
        let origin = Point::new(300., 200.);
        let tip = project(origin, Vector2D::new(2., FRAC_PI_2), 40.);
        assert_abs_diff_eq!(tip.x, 300., epsilon = 1e-9);
        assert_abs_diff_eq!(tip.y, 120., epsilon = 1e-9);

        let tip = project(origin, Vector2D::new(1.5, PI), 40.);
        assert_abs_diff_eq!(tip.x, 240., epsilon = 1e-9);
        assert_abs_diff_eq!(tip.y, 200., epsilon = 1e-9);
    }

    #[test]
    fn vector_labels_follow_tips() {
        let (u, v) = default_pair();
        let list = render(Size::new(600., 400.), u, v);
        let origin = Point::new(300., 200.);
        let u_tip = project(origin, u, 40.);
        let v_tip = project(origin, v, 40.);
        let labels: Vec<(Point, &str)> = list.texts().collect();
        assert!(labels.contains(&(u_tip.offset(5., -5.), "u")));
        assert!(labels.contains(&(v_tip.offset(5., -5.), "v")));
    }

    #[test]
    fn arrow_head_geometry() {
        let [apex, left, right] = arrow_head(Point::new(0., 0.), Point::new(10., 0.), 10., PI / 6.);
        assert_eq!(apex, Point::new(10., 0.));
        assert_abs_diff_eq!(left.x, 10. - 10. * cos(PI / 6.), epsilon = 1e-12);
        assert_abs_diff_eq!(left.y, 5., epsilon = 1e-12);
        assert_abs_diff_eq!(right.x, left.x, epsilon = 1e-12);
        assert_abs_diff_eq!(right.y, -5., epsilon = 1e-12);
    }

    #[test]
    fn zero_length_vector_degenerates() {
        let u = Vector2D::new(0., 1.);
        let v = Vector2D::new(3., 2.);
        let list = render(Size::new(600., 400.), u, v);
        let head = fill_with(&list, Color::BLUE);
        assert_eq!(head[0], Point::new(300., 200.));
        assert!(head.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn angle_arc_uses_raw_angle_order() {
        let list = render(
            Size::new(600., 400.),
            Vector2D::new(5., 2.),
            Vector2D::new(4., 0.5),
        );
        let arc = list
            .commands()
            .iter()
            .find_map(|command| match command {
                DrawCommand::StrokeArc { arc, stroke } => Some((*arc, *stroke)),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            arc,
            (
                Arc {
                    center: Point::new(300., 200.),
                    radius: 30.,
                    start_angle: -2.,
                    end_angle: -0.5,
                    direction: ArcDirection::Anticlockwise,
                },
                Stroke::new(Color::RED, 2.)
            )
        );

        assert_eq!(
            arc_direction(Vector2D::new(1., 0.5), Vector2D::new(1., 2.)),
            ArcDirection::Clockwise
        );
        // 370 degrees is not reduced before comparing
        assert_eq!(
            arc_direction(Vector2D::from_degrees(1., 370.), Vector2D::from_degrees(1., 20.)),
            ArcDirection::Anticlockwise
        );
    }

    #[test]
    fn layout_is_configurable() {
        let renderer = LayoutConfig::new()
            .set_scale(20.)
            .set_angle_arc_radius(50.)
            .realize();
        let mut list = DisplayList::new(Size::new(200., 100.));
        renderer.render(&mut list, Vector2D::new(1., 0.), Vector2D::new(1., FRAC_PI_2));

        assert_eq!(fill_with(&list, Color::BLUE)[0], Point::new(120., 50.));
        assert!(list.commands().iter().any(|command| matches!(
            command,
            DrawCommand::StrokeArc { arc, .. } if arc.radius == 50.
        )));
    }

    #[test]
    #[should_panic]
    fn zero_scale_is_rejected() {
        LayoutConfig::new().set_scale(0.);
    }
}
