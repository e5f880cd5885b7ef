//! Cairo-based symmetric rendering for the pattern pad.

use super::color::{Color, STENCIL};
use super::stroke::{Point, Stroke};
use crate::util::rotate_about;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Live brush settings read by the renderer on every draw call.
///
/// Never snapshotted into strokes: replay after changing the brush
/// intentionally repaints old strokes in the new style.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Brush {
    /// Stroke color
    pub color: Color,
    /// Line width in surface pixels
    pub width: f64,
    /// Number of rotational copies drawn per input segment (2-16)
    pub symmetry: u32,
}

fn prepare_stroke(ctx: &cairo::Context, color: Color, width: f64) {
    ctx.set_antialias(cairo::Antialias::Best);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Draws a line segment and its N-1 rotated copies about the surface center.
///
/// The rotation center is computed fresh from the current surface
/// dimensions on every call - never cached - so the symmetry stays
/// centered after any resize. For `i = 0` the rotation is the identity
/// and the original segment is drawn.
pub fn draw_symmetric_segment(
    ctx: &cairo::Context,
    surface_width: f64,
    surface_height: f64,
    brush: &Brush,
    from: Point,
    to: Point,
) {
    let center = Point::new(surface_width / 2.0, surface_height / 2.0);
    prepare_stroke(ctx, brush.color, brush.width);

    for i in 0..brush.symmetry {
        let angle = 2.0 * PI * i as f64 / brush.symmetry as f64;
        let a = rotate_about(from, center, angle);
        let b = rotate_about(to, center, angle);

        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        let _ = ctx.stroke();
    }
}

/// Clears the surface back to transparent.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.save().ok();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.restore().ok();
}

/// Clears the surface and redraws every segment of every stroke.
///
/// Replay reads the brush live, so the result is exactly what drawing
/// the same strokes right now would produce - this is what makes
/// undo/redo deterministic.
pub fn replay(
    ctx: &cairo::Context,
    surface_width: f64,
    surface_height: f64,
    brush: &Brush,
    strokes: &[Stroke],
) {
    clear_surface(ctx);
    for stroke in strokes {
        for (from, to) in stroke.segments() {
            draw_symmetric_segment(ctx, surface_width, surface_height, brush, from, to);
        }
    }
}

/// Renders the stencil guide: N radial lines plus concentric circles.
///
/// Drawn on the overlay surface only, never recorded in history. The
/// guide radius is 0.8x the minor half-dimension so it stays inside the
/// canvas.
pub fn render_stencil(
    ctx: &cairo::Context,
    surface_width: f64,
    surface_height: f64,
    symmetry: u32,
    circles: u32,
) {
    clear_surface(ctx);

    let cx = surface_width / 2.0;
    let cy = surface_height / 2.0;
    let max_radius = cx.min(cy) * 0.8;

    ctx.set_antialias(cairo::Antialias::Best);
    ctx.set_source_rgba(STENCIL.r, STENCIL.g, STENCIL.b, STENCIL.a);
    ctx.set_line_width(1.0);

    for i in 0..symmetry {
        let angle = 2.0 * PI * i as f64 / symmetry as f64;
        ctx.move_to(cx, cy);
        ctx.line_to(cx + max_radius * angle.cos(), cy + max_radius * angle.sin());
        let _ = ctx.stroke();
    }

    for i in 1..=circles {
        ctx.arc(cx, cy, max_radius * i as f64 / circles as f64, 0.0, 2.0 * PI);
        let _ = ctx.stroke();
    }
}
