//! Generic pointer event types at the host-UI seam.
//!
//! Whatever drives the pad (a browser shim, a native toolkit, a test)
//! maps its native events to these before handing them to the engine.

/// A raw pointer sample in client (on-screen CSS pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// X position in client coordinates
    pub client_x: f64,
    /// Y position in client coordinates
    pub client_y: f64,
    /// Wall-clock timestamp in milliseconds (monotonic within a gesture)
    pub timestamp_ms: f64,
}

impl PointerEvent {
    pub fn new(client_x: f64, client_y: f64, timestamp_ms: f64) -> Self {
        Self {
            client_x,
            client_y,
            timestamp_ms,
        }
    }
}

/// The canvas's on-screen bounding rectangle in CSS pixels.
///
/// May change on resize or scroll, so hosts supply the current value
/// with every event instead of the engine caching one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}
