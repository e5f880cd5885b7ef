//! Pointer input: event types, the speed-adaptive sampler, and the
//! engine state machine that turns events into symmetric strokes.

pub mod events;
pub mod sampler;
pub mod state;

pub use events::{CanvasRect, PointerEvent};
pub use state::{InputState, StencilSettings};
