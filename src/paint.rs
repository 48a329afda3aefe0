//! Drawing the abacus onto any surface that implements [`Canvas`].
//!
//! [`paint`] only reads the abacus. Bead outlines come from the abacus'
//! [`Layout`](crate::layout::Layout), the same geometry used for hit-testing.

use std::fmt::Write;

use crate::abacus::{Abacus, PlaceValueMode};
use crate::bead::BeadKind;
use crate::layout::{Point, Rect};
use crate::theme::{Rgba, Theme};

/// Minimal set of drawing primitives the painter needs.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgba);

    /// Closed, filled polygon with a one pixel outline.
    fn polygon(&mut self, points: &[Point], fill: Rgba, stroke: Rgba);

    /// Bold monospace text centered on `center`.
    fn text(&mut self, center: Point, text: &str, size: f32, color: Rgba);

    fn stroke_rect(&mut self, rect: Rect, width: f32, color: Rgba) {
        let corners = [
            rect.min,
            Point::new(rect.max.x, rect.min.y),
            rect.max,
            Point::new(rect.min.x, rect.max.y),
        ];
        for i in 0..corners.len() {
            self.line(corners[i], corners[(i + 1) % corners.len()], width, color);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintOptions {
    pub font_size: f32,
    pub show_total: bool,
    pub show_rod_values: bool,
    /// Bead under the pointer, as (rod index, bead kind).
    pub hover: Option<(usize, BeadKind)>,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            font_size: 24.0,
            show_total: true,
            show_rod_values: true,
            hover: None,
        }
    }
}

const ROD_LABEL_SIZE: f32 = 20.0;
const MARKER_WIDTH: f32 = 3.0;
const MARKER_OVERHANG: f32 = 15.0;

pub fn paint(abacus: &Abacus, theme: &Theme, options: &PaintOptions, canvas: &mut impl Canvas) {
    let layout = abacus.layout();
    let rod_count = abacus.rod_count();
    let (width, height) = layout.canvas_size(rod_count);
    canvas.fill_rect(
        Rect {
            min: Point::new(0.0, 0.0),
            max: Point::new(width, height),
        },
        theme.background,
    );

    let frame = layout.frame_rect(rod_count);
    for rod in abacus.rods() {
        let x = layout.rod_x(rod.index());
        canvas.line(
            Point::new(x, frame.min.y),
            Point::new(x, frame.max.y),
            layout.rod_line_width,
            theme.rod,
        );

        for bead in rod.beads() {
            let fill = if options.hover == Some((rod.index(), bead.kind())) {
                theme.bead_hover
            } else if bead.is_active() {
                theme.bead_active
            } else {
                theme.bead
            };
            let outline = layout.bead_outline(rod.index(), bead);
            canvas.polygon(&outline, fill, theme.bead_stroke);
        }

        if options.show_rod_values {
            canvas.text(
                layout.rod_label_pos(rod.index()),
                &rod.value().to_string(),
                ROD_LABEL_SIZE.min(options.font_size),
                theme.rod_label,
            );
        }
    }

    canvas.stroke_rect(frame, layout.frame_line_width, theme.frame);
    let bar_y = layout.bar_y();
    canvas.line(
        Point::new(frame.min.x, bar_y),
        Point::new(frame.max.x, bar_y),
        layout.frame_line_width,
        theme.bar,
    );

    if let PlaceValueMode::Decimal { pivot } = abacus.mode()
        && pivot + 1 < rod_count
    {
        let x = layout.decimal_marker_x(pivot);
        canvas.line(
            Point::new(x, frame.min.y - MARKER_OVERHANG),
            Point::new(x, frame.max.y + MARKER_OVERHANG),
            MARKER_WIDTH,
            theme.decimal_marker,
        );
    }

    if options.show_total {
        canvas.text(
            layout.total_label_pos(rod_count),
            &abacus.formatted_value(),
            options.font_size,
            theme.text,
        );
    }
}

/// Builds a standalone SVG document.
pub struct SvgCanvas {
    width: f32,
    height: f32,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            body: String::new(),
        }
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            rect.min.x,
            rect.min.y,
            rect.width(),
            rect.height(),
            color.to_hex()
        );
    }

    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgba) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>",
            from.x,
            from.y,
            to.x,
            to.y,
            color.to_hex(),
            width
        );
    }

    fn polygon(&mut self, points: &[Point], fill: Rgba, stroke: Rgba) {
        let points: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
        let _ = writeln!(
            self.body,
            "<polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
            points.join(" "),
            fill.to_hex(),
            stroke.to_hex()
        );
    }

    fn text(&mut self, center: Point, text: &str, size: f32, color: Rgba) {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-family=\"monospace\" font-weight=\"bold\" font-size=\"{}\" \
             text-anchor=\"middle\" dominant-baseline=\"middle\" fill=\"{}\">{}</text>",
            center.x,
            center.y,
            size,
            color.to_hex(),
            escaped
        );
    }
}

/// Paints `abacus` into a fresh SVG document.
pub fn render_svg(abacus: &Abacus, theme: &Theme, options: &PaintOptions) -> String {
    let (width, height) = abacus.layout().canvas_size(abacus.rod_count());
    let mut canvas = SvgCanvas::new(width, height);
    paint(abacus, theme, options, &mut canvas);
    canvas.finish()
}
