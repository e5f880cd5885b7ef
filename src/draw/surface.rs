//! Raster drawing surface backed by a Cairo image surface.

use thiserror::Error;

/// Errors raised while creating or using a drawing surface.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("invalid surface size {width}x{height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("drawing surface unavailable: {0}")]
    Surface(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("surface pixel data unavailable: {0}")]
    PixelAccess(String),
}

/// The addressable raster the user draws on.
///
/// Allocated at full device-pixel resolution (css-size x scale-factor)
/// so that exports stay sharp on high-density displays. All points fed
/// to the renderer are in this surface's pixel space.
pub struct Surface {
    raster: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Surface {
    /// Creates a surface for a canvas measuring `css_width` x `css_height`
    /// CSS pixels on a display with the given scale factor.
    pub fn new(css_width: f64, css_height: f64, scale_factor: f64) -> Result<Self, DrawError> {
        let width = (css_width * scale_factor).round() as i32;
        let height = (css_height * scale_factor).round() as i32;
        if width <= 0 || height <= 0 {
            return Err(DrawError::InvalidSize { width, height });
        }

        let raster = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self {
            raster,
            width,
            height,
        })
    }

    /// Surface width in device pixels.
    pub fn width(&self) -> f64 {
        self.width as f64
    }

    /// Surface height in device pixels.
    pub fn height(&self) -> f64 {
        self.height as f64
    }

    /// Acquires a drawing context.
    ///
    /// Failure here means the surface is unavailable; callers abort the
    /// operation without mutating any state.
    pub fn context(&self) -> Result<cairo::Context, DrawError> {
        Ok(cairo::Context::new(&self.raster)?)
    }

    /// Erases the whole surface back to transparent.
    pub fn clear(&self) -> Result<(), DrawError> {
        let ctx = self.context()?;
        super::render::clear_surface(&ctx);
        Ok(())
    }

    /// Encodes the current raster as PNG bytes at full device resolution.
    pub fn encode_png(&self) -> Result<Vec<u8>, DrawError> {
        let mut bytes = Vec::new();
        self.raster.write_to_png(&mut bytes)?;
        Ok(bytes)
    }

    /// Copies out the raw ARGB pixel data (flushed first).
    ///
    /// Used by replay-determinism tests to compare surface states.
    pub fn raw_pixels(&mut self) -> Result<Vec<u8>, DrawError> {
        self.raster.flush();
        let data = self
            .raster
            .data()
            .map_err(|e| DrawError::PixelAccess(e.to_string()))?;
        Ok(data.to_vec())
    }

    /// Row stride of the raster in bytes.
    pub fn stride(&self) -> usize {
        self.raster.stride() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_allocates_at_device_resolution() {
        // 400x400 CSS at scale 2 -> 800x800 device pixels.
        let surface = Surface::new(400.0, 400.0, 2.0).unwrap();
        assert_eq!(surface.width(), 800.0);
        assert_eq!(surface.height(), 800.0);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            Surface::new(0.0, 100.0, 1.0),
            Err(DrawError::InvalidSize { .. })
        ));
    }

    #[test]
    fn encode_png_produces_png_magic() {
        let surface = Surface::new(16.0, 16.0, 1.0).unwrap();
        let bytes = surface.encode_png().unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
    }

    #[test]
    fn clear_resets_pixels_to_transparent() {
        let mut surface = Surface::new(8.0, 8.0, 1.0).unwrap();
        let ctx = surface.context().unwrap();
        ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
        let _ = ctx.paint();
        drop(ctx);

        surface.clear().unwrap();
        assert!(surface.raw_pixels().unwrap().iter().all(|&b| b == 0));
    }
}
