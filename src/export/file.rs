//! File sink: writes exported patterns as PNGs on disk.

use super::manager::PatternSink;
use super::types::ExportError;
use crate::util::expand_tilde;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for file exports.
#[derive(Debug, Clone)]
pub struct FileSink {
    /// Directory to save patterns to. Each owner gets a subdirectory.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for FileSink {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("zencanvas"),
            filename_template: "mandala_%Y%m%d_%H%M%S.png".to_string(),
        }
    }
}

impl FileSink {
    /// Builds a sink from config strings, expanding a leading `~`.
    pub fn from_config(save_directory: &str, filename_template: &str) -> Self {
        Self {
            save_directory: expand_tilde(save_directory),
            filename_template: filename_template.to_string(),
        }
    }
}

/// Generate a filename based on the template and current time.
pub fn generate_filename(template: &str) -> String {
    Local::now().format(template).to_string()
}

/// Ensure the save directory exists, creating it if necessary.
///
/// Returns the canonicalized path when resolvable.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

impl PatternSink for FileSink {
    /// Writes the PNG under `<save_directory>/<owner>/` and returns the
    /// path of the written file.
    fn submit(&mut self, owner: &str, png: &[u8]) -> Result<String, ExportError> {
        // The id only has to be safe as a single directory component;
        // its format is otherwise up to the caller.
        if owner.is_empty() || owner.contains(['/', '\\']) || owner == "." || owner == ".." {
            return Err(ExportError::Rejected(format!(
                "invalid owner id '{owner}'"
            )));
        }

        let directory = ensure_directory_exists(&self.save_directory.join(owner))?;
        let file_path = directory.join(generate_filename(&self.filename_template));

        log::info!(
            "Saving pattern to: {} ({} bytes)",
            file_path.display(),
            png.len()
        );

        fs::write(&file_path, png)?;

        // User read/write only.
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&file_path, Permissions::from_mode(0o600))?;
        }

        log::info!("Pattern saved successfully: {}", file_path.display());

        Ok(file_path.display().to_string())
    }
}
