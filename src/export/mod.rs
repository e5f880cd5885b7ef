//! Pattern export: PNG encoding at full device-pixel resolution, a
//! single-flight manager, and pluggable delivery sinks.

pub mod file;
pub mod manager;
pub mod types;

pub use file::FileSink;
pub use manager::{ExportManager, PatternSink};
pub use types::ExportError;
