//! Geometry shared by painting and hit-testing.
//!
//! Every position on the abacus surface comes from [`Layout`]. The painter
//! draws a bead at [`Layout::bead_outline`] and [`Layout::bead_contains`] tests
//! clicks against that same outline, so a click on a drawn bead always lands
//! on that bead. Coordinates are canvas-local pixels with y growing downwards.

use serde::{Deserialize, Serialize};

use crate::bead::{Bead, BeadKind, EARTH_BEADS};

/// Basic two dimensional point in canvas space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from(v: (f32, f32)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

/// Axis aligned rectangle, `min` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub left_margin: f32,
    pub frame_padding_x: f32,
    pub rod_spacing: f32,
    pub top_margin: f32,
    pub number_height: f32,
    pub bottom_margin: f32,
    pub frame_line_width: f32,
    pub rod_line_width: f32,
    pub bead_width: f32,
    pub bead_height: f32,
    pub bead_gap: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            left_margin: 10.0,
            frame_padding_x: 40.0,
            rod_spacing: 60.0,
            top_margin: 60.0,
            number_height: 20.0,
            bottom_margin: 40.0,
            frame_line_width: 10.0,
            rod_line_width: 6.0,
            bead_width: 56.0,
            bead_height: 30.0,
            bead_gap: 2.0,
        }
    }
}

impl Layout {
    /// Height of the heaven section, from the top frame to the reckoning bar.
    pub fn heaven_height(&self) -> f32 {
        self.bead_height * 2.0 + self.frame_line_width
    }

    /// Height of the earth section: four beads plus one empty slot.
    pub fn earth_height(&self) -> f32 {
        self.bead_height * (EARTH_BEADS as f32 + 1.0)
    }

    pub fn frame_height(&self) -> f32 {
        self.heaven_height() + self.earth_height() + self.frame_line_width
    }

    pub fn frame_width(&self, rod_count: usize) -> f32 {
        self.frame_padding_x * 2.0 + rod_count.saturating_sub(1) as f32 * self.rod_spacing
    }

    pub fn frame_top(&self) -> f32 {
        self.top_margin + self.number_height
    }

    pub fn bar_y(&self) -> f32 {
        self.frame_top() + self.heaven_height()
    }

    pub fn frame_rect(&self, rod_count: usize) -> Rect {
        let min = Point::new(self.left_margin, self.frame_top());
        Rect {
            min,
            max: Point::new(
                min.x + self.frame_width(rod_count),
                min.y + self.frame_height(),
            ),
        }
    }

    /// Total drawing surface needed for `rod_count` rods.
    pub fn canvas_size(&self, rod_count: usize) -> (f32, f32) {
        (
            self.frame_width(rod_count) + self.left_margin * 2.0,
            self.frame_top() + self.frame_height() + self.bottom_margin,
        )
    }

    pub fn rod_x(&self, rod_index: usize) -> f32 {
        self.left_margin + self.frame_padding_x + rod_index as f32 * self.rod_spacing
    }

    /// Vertical line between the pivot rod and the rod to its right.
    pub fn decimal_marker_x(&self, pivot: usize) -> f32 {
        self.rod_x(pivot) + self.rod_spacing / 2.0
    }

    pub fn rod_label_pos(&self, rod_index: usize) -> Point {
        Point::new(self.rod_x(rod_index), self.top_margin)
    }

    pub fn total_label_pos(&self, rod_count: usize) -> Point {
        let (w, h) = self.canvas_size(rod_count);
        Point::new(w / 2.0, h - self.bottom_margin / 2.0)
    }

    /// Center of a bead. Active beads rest against the reckoning bar,
    /// inactive ones are pushed towards the frame.
    pub fn bead_center(&self, rod_index: usize, bead: &Bead) -> Point {
        let x = self.rod_x(rod_index);
        let top = self.frame_top();
        let y = match bead.kind() {
            BeadKind::Heaven if bead.is_active() => {
                top + self.heaven_height() - self.bead_height / 2.0 - self.bead_gap
            }
            BeadKind::Heaven => top + self.bead_height / 2.0 + self.bead_gap,
            BeadKind::Earth(rank) => {
                let slot = if bead.is_active() { rank - 1 } else { rank };
                top + self.heaven_height()
                    + slot as f32 * (self.bead_height + self.bead_gap)
                    + self.bead_height / 2.0
            }
        };
        Point::new(x, y)
    }

    /// Hexagonal bead outline, clockwise on screen starting at the left tip.
    pub fn bead_outline(&self, rod_index: usize, bead: &Bead) -> [Point; 6] {
        let c = self.bead_center(rod_index, bead);
        let half_w = self.bead_width / 2.0;
        let sixth_w = self.bead_width / 6.0;
        let half_h = self.bead_height / 2.0;
        [
            Point::new(c.x - half_w, c.y),
            Point::new(c.x - sixth_w, c.y - half_h),
            Point::new(c.x + sixth_w, c.y - half_h),
            Point::new(c.x + half_w, c.y),
            Point::new(c.x + sixth_w, c.y + half_h),
            Point::new(c.x - sixth_w, c.y + half_h),
        ]
    }

    pub fn bead_contains(&self, rod_index: usize, bead: &Bead, point: Point) -> bool {
        convex_contains(&self.bead_outline(rod_index, bead), point)
    }
}

/// Point-in-convex-polygon test, boundary inclusive.
fn convex_contains(polygon: &[Point], p: Point) -> bool {
    let mut sign = 0.0_f32;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        let cross = (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x);
        if cross == 0.0 {
            continue;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if sign != cross.signum() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_matches_canvas_version() {
        let layout = Layout::default();
        assert_eq!(layout.heaven_height(), 70.0);
        assert_eq!(layout.earth_height(), 150.0);
        assert_eq!(layout.frame_height(), 230.0);
        assert_eq!(layout.frame_top(), 80.0);
        assert_eq!(layout.rod_x(0), 50.0);
        assert_eq!(layout.rod_x(2), 170.0);
        assert_eq!(layout.canvas_size(15), (20.0 + 80.0 + 14.0 * 60.0, 350.0));
    }

    #[test]
    fn heaven_bead_moves_to_the_bar_when_active() {
        let layout = Layout::default();
        let mut bead = Bead::heaven();
        assert_eq!(layout.bead_center(0, &bead), Point::new(50.0, 97.0));
        bead.toggle();
        assert_eq!(layout.bead_center(0, &bead), Point::new(50.0, 133.0));
    }

    #[test]
    fn earth_bead_slides_up_one_slot_when_active() {
        let layout = Layout::default();
        let mut bead = Bead::earth(1);
        assert_eq!(layout.bead_center(1, &bead).y, 197.0);
        bead.toggle();
        assert_eq!(layout.bead_center(1, &bead).y, 165.0);
    }

    #[test]
    fn lowest_earth_bead_stays_inside_the_frame() {
        let layout = Layout::default();
        let bead = Bead::earth(4);
        let bottom = layout.bead_outline(0, &bead)[4].y;
        assert!(bottom <= layout.frame_rect(1).max.y);
    }

    #[test]
    fn hexagon_contains_center_but_not_corners() {
        let layout = Layout::default();
        let bead = Bead::earth(2);
        let c = layout.bead_center(0, &bead);
        assert!(layout.bead_contains(0, &bead, c));
        assert!(layout.bead_contains(0, &bead, Point::new(c.x + 27.0, c.y)));
        // The bounding box corner lies outside the slanted edge.
        assert!(!layout.bead_contains(0, &bead, Point::new(c.x - 27.0, c.y - 14.0)));
        assert!(!layout.bead_contains(0, &bead, Point::new(c.x, c.y + 16.0)));
    }
}
