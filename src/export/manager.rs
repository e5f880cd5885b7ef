//! Export orchestration: single-flight guard around encoding and sinks.

use super::types::ExportError;
use crate::draw::Surface;
use log::{debug, warn};

/// Destination for an encoded pattern.
///
/// The file sink is the default implementation; the trait is the seam
/// for upload targets (the gallery store wraps one too).
pub trait PatternSink {
    /// Delivers an encoded PNG on behalf of `owner` and returns a
    /// location string describing where it went.
    fn submit(&mut self, owner: &str, png: &[u8]) -> Result<String, ExportError>;
}

/// Serializes export requests: at most one export is in flight at a time.
///
/// A second request while one is pending fails fast with
/// [`ExportError::Busy`] instead of queueing, so a double-tap on a save
/// button can never produce duplicate files.
#[derive(Debug, Default)]
pub struct ExportManager {
    pending: bool,
}

impl ExportManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an export is currently in flight.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Claims the in-flight slot, failing when one is already claimed.
    pub fn try_begin(&mut self) -> Result<(), ExportError> {
        if self.pending {
            warn!("Export request rejected: another export is in progress");
            return Err(ExportError::Busy);
        }
        self.pending = true;
        Ok(())
    }

    /// Releases the in-flight slot. Always called, success or failure.
    pub fn finish(&mut self) {
        self.pending = false;
    }

    /// Encodes the surface at full device-pixel resolution and hands the
    /// PNG to the sink.
    ///
    /// The slot is released before returning regardless of outcome.
    pub fn export(
        &mut self,
        surface: &Surface,
        owner: &str,
        sink: &mut dyn PatternSink,
    ) -> Result<String, ExportError> {
        self.try_begin()?;
        let result = Self::run(surface, owner, sink);
        self.finish();
        result
    }

    fn run(
        surface: &Surface,
        owner: &str,
        sink: &mut dyn PatternSink,
    ) -> Result<String, ExportError> {
        let png = surface.encode_png()?;
        debug!("Encoded pattern: {} bytes", png.len());
        sink.submit(owner, &png)
    }
}
