//! Pointer sampling: coordinate mapping, speed estimation, interpolation.
//!
//! Converts raw pointer-move events into a variable number of points in
//! drawing-surface pixel space. Slow motion produces up to
//! [`MAX_INTERPOLATION_STEPS`] interpolated sub-points for smoother
//! curves; fast motion collapses toward a single point to avoid lag.

use super::events::{CanvasRect, PointerEvent};
use crate::draw::Point;
use crate::util::distance;

/// Most interpolated sub-points generated between two pointer samples.
pub const MAX_INTERPOLATION_STEPS: usize = 10;

/// Speed-to-steps numerator: steps = clamp(floor(20 / speed), 1, 10).
const SPEED_FACTOR: f64 = 20.0;

/// Maps a pointer event to drawing-surface pixel space.
///
/// Per axis: `surface = (client - rect_origin) * (surface_dim / rect_dim)`.
/// The surface is allocated at css-size x scale-factor, so this folds
/// the device-pixel-ratio correction into the ratio: an event at the
/// center of the on-screen rectangle maps to the exact center of the
/// surface regardless of scale factor. Recomputed on every event since
/// the rectangle may change on resize or scroll.
pub fn surface_position(
    event: &PointerEvent,
    rect: &CanvasRect,
    surface_width: f64,
    surface_height: f64,
) -> Point {
    Point {
        x: (event.client_x - rect.left) * (surface_width / rect.width),
        y: (event.client_y - rect.top) * (surface_height / rect.height),
    }
}

/// Instantaneous pointer speed in surface pixels per millisecond.
///
/// Returns 0.0 when no time has elapsed; the step computation treats
/// that as the no-interpolation case rather than dividing by zero.
pub fn pointer_speed(from: Point, to: Point, elapsed_ms: f64) -> f64 {
    if elapsed_ms <= 0.0 {
        return 0.0;
    }
    distance(from, to) / elapsed_ms
}

/// Interpolation step count for the given speed estimate.
///
/// `clamp(floor(20 / speed), 1, 10)`: slower motion yields more
/// sub-points, faster motion fewer. Zero or negative speed falls back
/// to the minimum of one step.
pub fn interpolation_steps(speed: f64) -> usize {
    if speed <= 0.0 {
        return 1;
    }
    let steps = (SPEED_FACTOR / speed).floor();
    (steps as i64).clamp(1, MAX_INTERPOLATION_STEPS as i64) as usize
}

/// Linearly interpolated points between `start` and `end`.
///
/// Samples `t = i/steps` for `i = 1..=steps`, so the final element is
/// always the raw `end` sample itself and `start` is never repeated.
pub fn interpolate(start: Point, end: Point, steps: usize) -> Vec<Point> {
    let steps = steps.max(1);
    (1..=steps)
        .map(|i| start.lerp(end, i as f64 / steps as f64))
        .collect()
}
