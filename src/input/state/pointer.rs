//! Pointer event handlers: the gesture flow from pointer-down to commit.

use super::core::InputState;
use crate::draw::{render, DrawError};
use crate::input::events::{CanvasRect, PointerEvent};
use crate::input::sampler;
use log::trace;

impl InputState {
    /// Pointer-down: begins a gesture at the event position.
    ///
    /// Nothing is drawn yet; ink appears on the first motion event. A
    /// second pointer-down during an active gesture is ignored by the
    /// history.
    pub fn on_pointer_down(&mut self, event: &PointerEvent, rect: &CanvasRect) {
        let point = sampler::surface_position(
            event,
            rect,
            self.surface().width(),
            self.surface().height(),
        );
        trace!("pointer down at ({:.1}, {:.1})", point.x, point.y);
        self.history.begin_stroke(point);
        self.last_draw_time = Some(event.timestamp_ms);
    }

    /// Pointer motion: interpolates from the last recorded point to the
    /// event position and draws each sub-segment symmetrically.
    ///
    /// Ignored while no gesture is active (motion with the button up).
    /// Every interpolated point is recorded into the stroke, so a later
    /// replay reproduces the drawn pixels exactly.
    pub fn on_pointer_motion(
        &mut self,
        event: &PointerEvent,
        rect: &CanvasRect,
    ) -> Result<(), DrawError> {
        let Some(previous) = self.history.current_point() else {
            return Ok(());
        };
        let target = sampler::surface_position(
            event,
            rect,
            self.surface().width(),
            self.surface().height(),
        );

        let elapsed = self
            .last_draw_time
            .map(|t| event.timestamp_ms - t)
            .unwrap_or(0.0);
        let speed = sampler::pointer_speed(previous, target, elapsed);
        let steps = sampler::interpolation_steps(speed);
        trace!(
            "pointer motion: speed {:.2} px/ms, {} interpolation steps",
            speed, steps
        );

        // Acquire the context before touching the history so a surface
        // failure leaves the gesture unmodified.
        let ctx = self.surface().context()?;
        let brush = self.brush();
        let (width, height) = (self.surface().width(), self.surface().height());

        let mut from = previous;
        for point in sampler::interpolate(previous, target, steps) {
            render::draw_symmetric_segment(&ctx, width, height, &brush, from, point);
            self.history.extend_stroke(point);
            from = point;
        }
        self.last_draw_time = Some(event.timestamp_ms);
        Ok(())
    }

    /// Pointer-up: commits the in-progress stroke to the applied stack.
    pub fn on_pointer_up(&mut self) {
        self.history.commit_stroke();
        self.last_draw_time = None;
    }

    /// Pointer leaving the canvas mid-gesture: treated as pointer-up so
    /// the partial stroke is committed rather than lost.
    pub fn on_pointer_leave(&mut self) {
        self.on_pointer_up();
    }
}
