use bevy_egui::egui::{self, Align2, Color32, FontId, Painter, Pos2, Stroke};

use crate::layout::{Point, Rect};
use crate::paint::Canvas;
use crate::theme::Rgba;

/// Draws through an egui [`Painter`], offset so canvas point (0, 0) lands on
/// `origin` in screen space.
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }

    fn pos(&self, p: Point) -> Pos2 {
        Pos2::new(self.origin.x + p.x, self.origin.y + p.y)
    }
}

/// Screen position back to canvas coordinates.
pub fn to_canvas(pos: Pos2, origin: Pos2) -> Point {
    Point::new(pos.x - origin.x, pos.y - origin.y)
}

pub fn color32(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

impl Canvas for EguiCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let rect = egui::Rect::from_min_max(self.pos(rect.min), self.pos(rect.max));
        self.painter.rect_filled(rect, 0.0, color32(color));
    }

    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgba) {
        self.painter
            .line_segment([self.pos(from), self.pos(to)], Stroke::new(width, color32(color)));
    }

    fn polygon(&mut self, points: &[Point], fill: Rgba, stroke: Rgba) {
        let points = points.iter().map(|&p| self.pos(p)).collect();
        self.painter.add(egui::Shape::convex_polygon(
            points,
            color32(fill),
            Stroke::new(1.0, color32(stroke)),
        ));
    }

    fn text(&mut self, center: Point, text: &str, size: f32, color: Rgba) {
        self.painter.text(
            self.pos(center),
            Align2::CENTER_CENTER,
            text,
            FontId::monospace(size),
            color32(color),
        );
    }
}
