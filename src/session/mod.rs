//! Session persistence: save and restore the applied strokes and brush
//! settings across runs as versioned JSON.
//!
//! Saves are atomic (write to a temp file, then rename) and guarded by
//! an advisory lock file so two processes sharing a session directory
//! cannot interleave writes.

use crate::draw::{Brush, Stroke};
use crate::input::InputState;
use anyhow::{Context, Result};
use chrono::Utc;
use fs2::FileExt;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

const CURRENT_VERSION: u32 = 1;

/// Captured state suitable for serialization or restoration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub strokes: Vec<Stroke>,
    pub brush: Brush,
}

impl SessionSnapshot {
    pub fn from_input_state(input: &InputState) -> Self {
        Self {
            strokes: input.history.applied().to_vec(),
            brush: input.brush(),
        }
    }

    fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SessionFile {
    version: u32,
    last_modified: String,
    #[serde(flatten)]
    snapshot: SessionSnapshot,
}

fn lock_path_for(session_path: &Path) -> PathBuf {
    session_path.with_extension("lock")
}

fn temp_path_for(session_path: &Path) -> PathBuf {
    session_path.with_extension("json.tmp")
}

/// Persist the snapshot to `session_path`.
///
/// An empty snapshot removes any existing file instead of writing one.
pub fn save_snapshot(snapshot: &SessionSnapshot, session_path: &Path) -> Result<()> {
    if let Some(parent) = session_path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!("failed to create session directory {}", parent.display())
        })?;
    }

    let lock_path = lock_path_for(session_path);
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .with_context(|| format!("failed to open session lock file {}", lock_path.display()))?;
    lock_file
        .lock_exclusive()
        .with_context(|| format!("failed to lock session file {}", lock_path.display()))?;

    let result = save_snapshot_inner(snapshot, session_path);

    lock_file.unlock().unwrap_or_else(|err| {
        warn!(
            "failed to unlock session file {}: {}",
            lock_path.display(),
            err
        )
    });

    result
}

fn save_snapshot_inner(snapshot: &SessionSnapshot, session_path: &Path) -> Result<()> {
    if snapshot.is_empty() {
        if session_path.exists() {
            debug!(
                "Removing session file {} because snapshot is empty",
                session_path.display()
            );
            fs::remove_file(session_path).with_context(|| {
                format!(
                    "failed to remove empty session file {}",
                    session_path.display()
                )
            })?;
        }
        return Ok(());
    }

    let payload = SessionFile {
        version: CURRENT_VERSION,
        last_modified: Utc::now().to_rfc3339(),
        snapshot: snapshot.clone(),
    };

    let json_bytes =
        serde_json::to_vec_pretty(&payload).context("failed to serialise session payload")?;

    let tmp_path = temp_path_for(session_path);
    fs::write(&tmp_path, &json_bytes).with_context(|| {
        format!(
            "failed to write temporary session file {}",
            tmp_path.display()
        )
    })?;
    fs::rename(&tmp_path, session_path).with_context(|| {
        format!(
            "failed to move temporary session file {} -> {}",
            tmp_path.display(),
            session_path.display()
        )
    })?;

    info!(
        "Session saved to {} ({} strokes, {} bytes)",
        session_path.display(),
        snapshot.strokes.len(),
        json_bytes.len()
    );

    Ok(())
}

/// Attempt to load a previously saved session.
///
/// Returns `Ok(None)` when no session file exists. A file written by a
/// newer version of the program is refused rather than misread.
pub fn load_snapshot(session_path: &Path) -> Result<Option<SessionSnapshot>> {
    if !session_path.exists() {
        debug!(
            "No session file present at {}, skipping load",
            session_path.display()
        );
        return Ok(None);
    }

    let lock_path = lock_path_for(session_path);
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .with_context(|| format!("failed to open session lock file {}", lock_path.display()))?;
    lock_file
        .lock_shared()
        .with_context(|| format!("failed to acquire shared lock {}", lock_path.display()))?;

    let result = load_snapshot_inner(session_path);

    lock_file.unlock().unwrap_or_else(|err| {
        warn!(
            "failed to unlock session file {}: {}",
            lock_path.display(),
            err
        )
    });

    result
}

fn load_snapshot_inner(session_path: &Path) -> Result<Option<SessionSnapshot>> {
    let json = fs::read_to_string(session_path)
        .with_context(|| format!("failed to read session file {}", session_path.display()))?;

    let payload: SessionFile = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse session file {}", session_path.display()))?;

    if payload.version > CURRENT_VERSION {
        warn!(
            "Session file {} has version {} but this build supports up to {}; refusing to load",
            session_path.display(),
            payload.version,
            CURRENT_VERSION
        );
        return Ok(None);
    }

    info!(
        "Loaded session from {} ({} strokes)",
        session_path.display(),
        payload.snapshot.strokes.len()
    );

    Ok(Some(payload.snapshot))
}

/// Applies a loaded snapshot to the engine: restores the brush settings
/// and replays the strokes onto the surface.
pub fn apply_snapshot(snapshot: SessionSnapshot, input: &mut InputState) -> Result<()> {
    input.set_color(snapshot.brush.color);
    input.set_brush_width(snapshot.brush.width);
    input.set_symmetry(snapshot.brush.symmetry)?;
    input.restore_strokes(snapshot.strokes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Point, color};

    fn snapshot_with(strokes: Vec<Stroke>) -> SessionSnapshot {
        SessionSnapshot {
            strokes,
            brush: Brush {
                color: color::BLACK,
                width: 4.0,
                symmetry: 6,
            },
        }
    }

    fn one_stroke() -> Stroke {
        let mut stroke = Stroke::new(Point::new(10.0, 10.0));
        stroke.push(Point::new(20.0, 12.0));
        stroke
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let snapshot = snapshot_with(vec![one_stroke()]);

        save_snapshot(&snapshot, &path).unwrap();
        let loaded = load_snapshot(&path).unwrap().unwrap();

        assert_eq!(loaded.strokes.len(), 1);
        assert_eq!(loaded.strokes[0].points(), snapshot.strokes[0].points());
        assert_eq!(loaded.brush.symmetry, 6);
        assert_eq!(loaded.brush.width, 4.0);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_snapshot(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn empty_snapshot_removes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        save_snapshot(&snapshot_with(vec![one_stroke()]), &path).unwrap();
        assert!(path.exists());

        save_snapshot(&snapshot_with(Vec::new()), &path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn newer_version_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r##"{"version": 99, "last_modified": "", "strokes": [], "brush": {"color": "#000000", "width": 3.0, "symmetry": 8}}"##,
        )
        .unwrap();

        assert!(load_snapshot(&path).unwrap().is_none());
    }

    #[test]
    fn apply_restores_brush_and_repaints() {
        use crate::input::{InputState, StencilSettings};

        let brush = Brush {
            color: color::WHITE,
            width: 8.0,
            symmetry: 4,
        };
        let mut input = InputState::new(
            200.0,
            200.0,
            1.0,
            Brush {
                color: color::BLACK,
                width: 3.0,
                symmetry: 8,
            },
            StencilSettings {
                visible: false,
                circles: 5,
            },
        )
        .unwrap();

        let mut stroke = Stroke::new(Point::new(40.0, 100.0));
        stroke.push(Point::new(60.0, 100.0));
        apply_snapshot(
            SessionSnapshot {
                strokes: vec![stroke],
                brush,
            },
            &mut input,
        )
        .unwrap();

        assert_eq!(input.brush().symmetry, 4);
        assert_eq!(input.brush().width, 8.0);
        assert_eq!(input.history.applied().len(), 1);
    }
}
