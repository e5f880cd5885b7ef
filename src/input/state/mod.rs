//! Engine state machine split by concern: core state and settings in
//! `core`, pointer gesture handling in `pointer`.

mod core;
mod pointer;

#[cfg(test)]
mod tests;

pub use core::{InputState, StencilSettings};
