//! Point and stroke definitions for the pattern pad.

use serde::{Deserialize, Serialize};

/// A 2D coordinate in drawing-surface pixel space (already DPI-corrected).
///
/// Immutable once created; the sampler produces these and they are never
/// adjusted afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation between `self` and `other` at parameter `t`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// One continuous pointer-down-to-pointer-up gesture.
///
/// An ordered, non-empty point sequence: insertion order is temporal
/// order is draw order. Seeded with the first point on pointer-down,
/// extended on pointer-move, sealed when committed to history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Starts a stroke seeded with its first point (strokes are never empty).
    pub fn new(first: Point) -> Self {
        Self {
            points: vec![first],
        }
    }

    /// Appends a point to the stroke.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// All recorded points in draw order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The most recently recorded point.
    pub fn last(&self) -> Point {
        // Non-empty by construction.
        *self.points.last().unwrap_or(&Point { x: 0.0, y: 0.0 })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs, i.e. the line segments to draw.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}
