//! Configuration type definitions.

use serde::{Deserialize, Serialize};

/// Drawing defaults applied when a new pattern pad is created.
///
/// Users can change all of these at runtime through the engine setters;
/// the config only seeds the starting values.
#[derive(Debug, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default brush color as a hex string, `#rrggbb` or `#rrggbbaa`
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Default brush width in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_brush_width")]
    pub brush_width: f64,

    /// Default rotational symmetry count (valid range: 2 - 16)
    #[serde(default = "default_symmetry")]
    pub symmetry: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            brush_width: default_brush_width(),
            symmetry: default_symmetry(),
        }
    }
}

/// Stencil guide settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct StencilConfig {
    /// Show the radial/circle guide overlay on startup
    #[serde(default = "default_show_stencil")]
    pub show: bool,

    /// Number of evenly-spaced concentric guide circles (valid range: 1 - 10)
    #[serde(default = "default_circles")]
    pub circles: u32,
}

impl Default for StencilConfig {
    fn default() -> Self {
        Self {
            show: default_show_stencil(),
            circles: default_circles(),
        }
    }
}

/// Export settings for saved pattern images.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory where exported PNGs are written
    /// Supports ~ expansion (e.g., "~/Pictures/patterns")
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Filename template for exports; `%Y`, `%m`, `%d`, `%H`, `%M`, `%S`
    /// are expanded with the local time at save
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

/// Gallery storage settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Path of the gallery index file (JSON)
    /// Supports ~ expansion; defaults next to the config file
    #[serde(default = "default_gallery_index")]
    pub index_file: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            index_file: default_gallery_index(),
        }
    }
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_brush_width() -> f64 {
    3.0
}

fn default_symmetry() -> u32 {
    8
}

fn default_show_stencil() -> bool {
    true
}

fn default_circles() -> u32 {
    5
}

fn default_save_directory() -> String {
    "~/Pictures/zencanvas".to_string()
}

fn default_filename_template() -> String {
    "mandala_%Y%m%d_%H%M%S.png".to_string()
}

fn default_gallery_index() -> String {
    "~/.config/zencanvas/gallery.json".to_string()
}
