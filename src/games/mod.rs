//! Mindfulness exercises that ship alongside the pattern pad.

pub mod breathing;
pub mod grounding;

pub use breathing::{BreathPhase, BreathingPace, BreathingPacer};
pub use grounding::{GroundingError, GroundingGame, Sense};
