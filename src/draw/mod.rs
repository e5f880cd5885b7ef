//! Rendering primitives and stroke bookkeeping (Cairo-based).
//!
//! This module defines the core drawing types of the pattern pad:
//! - [`Color`]: RGBA color with hex-string serialization
//! - [`Point`] / [`Stroke`]: the recorded geometry of one gesture
//! - [`StrokeHistory`]: undo/redo stacks over committed strokes
//! - [`Surface`]: the device-pixel raster the user draws on
//! - Symmetric rendering functions for Cairo-based output

pub mod color;
pub mod history;
pub mod render;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use history::StrokeHistory;
pub use render::{Brush, draw_symmetric_segment, render_stencil, replay};
pub use stroke::{Point, Stroke};
pub use surface::{DrawError, Surface};

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, STENCIL, WHITE};
