//! Pattern pad state: surfaces, brush settings, and stroke history.

use crate::draw::{render, Brush, Color, DrawError, StrokeHistory, Surface};
use log::debug;

/// Stencil guide settings.
#[derive(Debug, Clone, Copy)]
pub struct StencilSettings {
    /// Whether the guide overlay is currently shown
    pub visible: bool,
    /// Number of evenly-spaced concentric circles (1-10)
    pub circles: u32,
}

impl Default for StencilSettings {
    fn default() -> Self {
        Self {
            visible: true,
            circles: 5,
        }
    }
}

/// Main engine state owning the drawing surface, the stencil overlay,
/// the stroke history, and the live brush settings.
///
/// All drawing flows through this struct's pointer handlers and the
/// undo/redo/clear operations; nothing else mutates the surfaces, which
/// is what keeps the replay invariant (applied strokes reproduce the
/// visible drawing) intact.
pub struct InputState {
    surface: Surface,
    overlay: Surface,
    pub history: StrokeHistory,
    brush: Brush,
    stencil: StencilSettings,
    /// Timestamp of the last draw call, consumed by the next move event.
    pub(super) last_draw_time: Option<f64>,
}

impl InputState {
    /// Creates the pad for a canvas of `css_width` x `css_height` CSS
    /// pixels at the given display scale factor.
    ///
    /// Both the drawing surface and the stencil overlay are allocated at
    /// full device-pixel resolution. The stencil is rendered immediately
    /// when visible.
    pub fn new(
        css_width: f64,
        css_height: f64,
        scale_factor: f64,
        brush: Brush,
        stencil: StencilSettings,
    ) -> Result<Self, DrawError> {
        let state = Self {
            surface: Surface::new(css_width, css_height, scale_factor)?,
            overlay: Surface::new(css_width, css_height, scale_factor)?,
            history: StrokeHistory::new(),
            brush,
            stencil,
            last_draw_time: None,
        };
        state.refresh_stencil()?;
        Ok(state)
    }

    /// The drawing surface (for export and compositing).
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub(super) fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// The stencil overlay surface (composited above the drawing, never
    /// part of history or export).
    pub fn overlay(&self) -> &Surface {
        &self.overlay
    }

    pub(super) fn overlay_mut(&mut self) -> &mut Surface {
        &mut self.overlay
    }

    /// Current brush settings.
    pub fn brush(&self) -> Brush {
        self.brush
    }

    /// Current stencil settings.
    pub fn stencil(&self) -> StencilSettings {
        self.stencil
    }

    pub fn set_color(&mut self, color: Color) {
        self.brush.color = color;
    }

    /// Sets the line width, clamped to the 1-20 pixel control range.
    pub fn set_brush_width(&mut self, width: f64) {
        self.brush.width = width.clamp(1.0, 20.0);
        debug!("brush width set to {:.1}", self.brush.width);
    }

    /// Sets the symmetry count, clamped to 2-16, and refreshes the guide.
    pub fn set_symmetry(&mut self, symmetry: u32) -> Result<(), DrawError> {
        self.brush.symmetry = symmetry.clamp(2, 16);
        debug!("symmetry set to {}", self.brush.symmetry);
        self.refresh_stencil()
    }

    /// Sets the concentric-circle count, clamped to 1-10, and refreshes
    /// the guide.
    pub fn set_circles(&mut self, circles: u32) -> Result<(), DrawError> {
        self.stencil.circles = circles.clamp(1, 10);
        self.refresh_stencil()
    }

    /// Shows or hides the stencil guide.
    pub fn set_stencil_visible(&mut self, visible: bool) -> Result<(), DrawError> {
        self.stencil.visible = visible;
        self.refresh_stencil()
    }

    /// Redraws the overlay from the current guide settings.
    ///
    /// The overlay is untouched between setting changes; it never
    /// participates in stroke history.
    pub fn refresh_stencil(&self) -> Result<(), DrawError> {
        let ctx = self.overlay.context()?;
        if self.stencil.visible {
            render::render_stencil(
                &ctx,
                self.overlay.width(),
                self.overlay.height(),
                self.brush.symmetry,
                self.stencil.circles,
            );
        } else {
            render::clear_surface(&ctx);
        }
        Ok(())
    }

    /// Undoes the most recent stroke and replays the rest.
    ///
    /// No-op when nothing is applied. The context is acquired before the
    /// history mutation so a failed surface leaves state untouched.
    pub fn undo(&mut self) -> Result<(), DrawError> {
        let ctx = self.surface.context()?;
        if self.history.undo() {
            self.replay_applied(&ctx);
        }
        Ok(())
    }

    /// Re-applies the most recently undone stroke and replays.
    pub fn redo(&mut self) -> Result<(), DrawError> {
        let ctx = self.surface.context()?;
        if self.history.redo() {
            self.replay_applied(&ctx);
        }
        Ok(())
    }

    /// Empties both history stacks and erases the surface.
    ///
    /// The in-progress gesture, if any, is deliberately untouched.
    pub fn clear(&mut self) -> Result<(), DrawError> {
        let ctx = self.surface.context()?;
        self.history.clear();
        render::clear_surface(&ctx);
        Ok(())
    }

    /// Clears the surface and redraws every applied stroke with the
    /// brush settings in effect right now.
    pub fn replay_applied(&self, ctx: &cairo::Context) {
        render::replay(
            ctx,
            self.surface.width(),
            self.surface.height(),
            &self.brush,
            self.history.applied(),
        );
    }

    /// Replaces the applied strokes (session restore) and replays them.
    pub fn restore_strokes(&mut self, strokes: Vec<crate::draw::Stroke>) -> Result<(), DrawError> {
        let ctx = self.surface.context()?;
        self.history.restore(strokes);
        self.replay_applied(&ctx);
        Ok(())
    }
}
