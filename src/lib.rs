//! Library exports for reusing zencanvas subsystems.
//!
//! Exposes the drawing engine, configuration types, and the supporting
//! modules they rely on so that external front-ends (a GUI shell, a web
//! bridge) can share the same pattern semantics as the CLI binary.

pub mod config;
pub mod draw;
pub mod export;
pub mod gallery;
pub mod games;
pub mod input;
pub mod session;
pub mod shell;
pub mod util;

pub use config::Config;
pub use input::InputState;
