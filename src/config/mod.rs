//! Configuration file support for zencanvas.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/zencanvas/config.toml`.
//! Settings include drawing defaults, the stencil guide, export paths,
//! and gallery storage.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

pub use types::{DrawingConfig, ExportConfig, GalleryConfig, StencilConfig};

use crate::draw::{Color, color};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root type that gets deserialized from the TOML file. All
/// fields have sensible defaults and will use those if not specified.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "#1a1a2e"
/// brush_width = 3.0
/// symmetry = 8
///
/// [stencil]
/// show = true
/// circles = 5
///
/// [export]
/// save_directory = "~/Pictures/zencanvas"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing defaults (color, brush width, symmetry)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Stencil guide settings
    #[serde(default)]
    pub stencil: StencilConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Gallery storage settings
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a
    /// warning is logged, so a hand-edited config can never put the
    /// engine outside its control ranges.
    ///
    /// Validated ranges:
    /// - `brush_width`: 1.0 - 20.0
    /// - `symmetry`: 2 - 16
    /// - `stencil.circles`: 1 - 10
    fn validate_and_clamp(&mut self) {
        // Brush width: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.brush_width) {
            log::warn!(
                "Invalid brush_width {:.1}, clamping to 1.0-20.0 range",
                self.drawing.brush_width
            );
            self.drawing.brush_width = self.drawing.brush_width.clamp(1.0, 20.0);
        }

        // Symmetry: 2 - 16
        if !(2..=16).contains(&self.drawing.symmetry) {
            log::warn!(
                "Invalid symmetry {}, clamping to 2-16 range",
                self.drawing.symmetry
            );
            self.drawing.symmetry = self.drawing.symmetry.clamp(2, 16);
        }

        // Stencil circles: 1 - 10
        if !(1..=10).contains(&self.stencil.circles) {
            log::warn!(
                "Invalid stencil circles {}, clamping to 1-10 range",
                self.stencil.circles
            );
            self.stencil.circles = self.stencil.circles.clamp(1, 10);
        }

        // Color must parse as hex
        if Color::from_hex(&self.drawing.default_color).is_none() {
            log::warn!(
                "Invalid default_color '{}', falling back to '#000000'",
                self.drawing.default_color
            );
            self.drawing.default_color = "#000000".to_string();
        }
    }

    /// The default brush color parsed from the config.
    ///
    /// `validate_and_clamp` guarantees the stored string parses, so this
    /// falls back to black only for a hand-constructed `Config`.
    pub fn default_color(&self) -> Color {
        Color::from_hex(&self.drawing.default_color).unwrap_or(color::BLACK)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/zencanvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("zencanvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the
    /// user's config directory (used by `zencanvas --init-config`).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<()> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }
}
