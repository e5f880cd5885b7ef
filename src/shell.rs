//! Application shell: screen navigation and the player profile.

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level screens the shell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Pattern,
    Grounding,
    Breathing,
    Gallery,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::Menu => "ZenCanvas",
            Screen::Pattern => "Pattern Pad",
            Screen::Grounding => "5-4-3-2-1 Grounding",
            Screen::Breathing => "Ocean Breathing",
            Screen::Gallery => "Gallery",
        }
    }
}

/// Identifies the local player, used to key gallery entries and export
/// directories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerProfile {
    pub id: String,
}

impl PlayerProfile {
    /// A fresh anonymous profile with a timestamp-derived guest id.
    pub fn guest() -> Self {
        Self {
            id: format!("guest-{}", Utc::now().timestamp_millis()),
        }
    }

    /// Loads the profile from `path`, creating and persisting a guest
    /// profile on first run.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read profile {}", path.display()))?;
            let profile: PlayerProfile = serde_json::from_str(&json)
                .with_context(|| format!("failed to parse profile {}", path.display()))?;
            return Ok(profile);
        }

        let profile = Self::guest();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create profile directory {}", parent.display()))?;
        }
        let json = serde_json::to_vec_pretty(&profile).context("failed to serialise profile")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write profile {}", path.display()))?;
        info!("Created new player profile {} at {}", profile.id, path.display());
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_ids_carry_the_prefix() {
        let profile = PlayerProfile::guest();
        assert!(profile.id.starts_with("guest-"));
        assert!(profile.id["guest-".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn first_run_creates_and_persists_a_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        let created = PlayerProfile::load_or_create(&path).unwrap();
        assert!(path.exists());

        let reloaded = PlayerProfile::load_or_create(&path).unwrap();
        assert_eq!(created, reloaded);
    }

    #[test]
    fn screen_titles_are_distinct() {
        let screens = [
            Screen::Menu,
            Screen::Pattern,
            Screen::Grounding,
            Screen::Breathing,
            Screen::Gallery,
        ];
        let mut titles: Vec<_> = screens.iter().map(|s| s.title()).collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), screens.len());
    }
}
