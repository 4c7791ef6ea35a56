//! A [`Surface`] that records primitives instead of rasterizing them.
use alloc::{string::String, vec::Vec};

use crate::surface::{Arc, Color, Point, Rect, Size, Stroke, Surface, TextStyle};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    StrokePath { points: Vec<Point>, stroke: Stroke },
    FillPath { points: Vec<Point>, color: Color },
    StrokeArc { arc: Arc, stroke: Stroke },
    Text { position: Point, text: String, style: TextStyle },
}

/// Two lists compare equal exactly when the same primitives were issued in the
/// same order, which is as close to pixel equality as a recorder gets.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayList {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new(size: Size) -> Self {
        DisplayList {
            size,
            commands: Vec::new(),
        }
    }
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
    pub fn len(&self) -> usize {
        self.commands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
    /// All text drawn, in order, with its position.
    pub fn texts(&self) -> impl Iterator<Item = (Point, &str)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { position, text, .. } => Some((*position, text.as_str())),
            _ => None,
        })
    }
}

impl Surface for DisplayList {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, region: Rect) {
        // Anything underneath a full clear can never show again
        if region.covers(&Rect::from(self.size)) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear(region));
    }

    fn stroke_path(&mut self, points: &[Point], stroke: Stroke) {
        self.commands.push(DrawCommand::StrokePath {
            points: points.to_vec(),
            stroke,
        });
    }

    fn fill_path(&mut self, points: &[Point], color: Color) {
        self.commands.push(DrawCommand::FillPath {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_arc(&mut self, arc: &Arc, stroke: Stroke) {
        self.commands.push(DrawCommand::StrokeArc { arc: *arc, stroke });
    }

    fn text(&mut self, position: Point, text: &str, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            position,
            text: String::from(text),
            style: *style,
        });
    }
}
