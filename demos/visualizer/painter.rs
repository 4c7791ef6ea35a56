use eframe::egui::{self, Align2, Color32, FontId, Painter, Pos2, Shape};

use dotplane::surface::{Arc, Color, Point, Rect, Size, Stroke, Surface, TextStyle};

/// Paints plane primitives into an egui region.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    region: egui::Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, region: egui::Rect) -> Self {
        PainterSurface { painter, region }
    }
    fn pos(&self, point: Point) -> Pos2 {
        self.region.min + egui::vec2(point.x as f32, point.y as f32)
    }
    fn stroke(stroke: Stroke) -> egui::Stroke {
        egui::Stroke::new(stroke.width as f32, color32(stroke.color))
    }
}

fn color32(color: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Size {
        Size::new(self.region.width() as f64, self.region.height() as f64)
    }

    fn clear(&mut self, region: Rect) {
        let min = self.pos(region.origin);
        let size = egui::vec2(region.size.width as f32, region.size.height as f32);
        self.painter
            .rect_filled(egui::Rect::from_min_size(min, size), 0.0, Color32::WHITE);
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) {
        let points = points.iter().map(|p| self.pos(*p)).collect();
        self.painter.add(Shape::line(points, Self::stroke(stroke)));
    }

    fn fill_path(&mut self, points: &[Point], color: Color) {
        let mut points: Vec<Pos2> = points.iter().map(|p| self.pos(*p)).collect();
        // egui closes polygons itself
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        self.painter.add(Shape::convex_polygon(
            points,
            color32(color),
            egui::Stroke::none(),
        ));
    }

    fn stroke_arc(&mut self, arc: &Arc, stroke: Stroke) {
        let segments = ((arc.sweep().abs() * 8.) as usize).max(4);
        let points = arc.flatten(segments).into_iter().map(|p| self.pos(p)).collect();
        self.painter.add(Shape::line(points, Self::stroke(stroke)));
    }

    fn text(&mut self, position: Point, text: &str, style: &TextStyle) {
        self.painter.text(
            self.pos(position),
            Align2::LEFT_BOTTOM,
            text,
            FontId::proportional(style.size as f32),
            color32(style.color),
        );
    }
}
