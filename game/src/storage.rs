use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Solved mazes, kept by the host between runs.
#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub(crate) struct Achievements {
    #[serde(default)]
    unlocked: BTreeSet<String>,
}

impl Achievements {
    pub(crate) fn load() -> Self {
        backend::try_load()
            .and_then(|s| Self::from_json(&s))
            .unwrap_or_default()
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    /// Adds `id` and writes the set back. Returns false if it could not be saved.
    pub(crate) fn unlock(&mut self, id: &str) -> bool {
        if self.unlocked.insert(id.to_string()) {
            log::info!("Unlocked achievement {id}");
        }
        let Some(json) = warn_err!(serde_json::to_string(self), "Failed to encode achievements: {}")
        else {
            return false;
        };
        backend::save(&json).is_some()
    }

    fn from_json(s: &str) -> Option<Self> {
        warn_err!(serde_json::from_str(s), "Failed to parse achievements {}: {}", s)
    }
}

#[cfg(target_arch = "wasm32")]
mod backend {
    const STORAGE_KEY: &str = "lost_maze_achievements";

    pub(super) fn save(json: &str) -> Option<()> {
        quad_storage::STORAGE.lock().ok()?.set(STORAGE_KEY, json);
        Some(())
    }

    pub(super) fn try_load() -> Option<String> {
        quad_storage::STORAGE.lock().ok()?.get(STORAGE_KEY)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::fs::{create_dir_all, read_to_string, write};
    use std::path::PathBuf;

    pub(super) fn save(json: &str) -> Option<()> {
        let path = save_path()?;
        if let Some(parent) = path.parent() {
            warn_err!(create_dir_all(parent), "Failed to create {}: {}", parent.display())?;
        }
        warn_err!(write(&path, json), "Failed to write {}: {}", path.display())
    }

    pub(super) fn try_load() -> Option<String> {
        let path = save_path()?;
        if !path.exists() {
            return None;
        }
        warn_err!(read_to_string(&path), "Failed to read {}: {}", path.display())
    }

    fn save_path() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "lostmaze", "LostMaze")?;
        Some(dirs.data_dir().join("achievements.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_stored_set() {
        let achievements = Achievements::from_json(r#"{"unlocked":["maze"]}"#).unwrap();
        assert!(achievements.contains("maze"));
        assert!(!achievements.contains("other"));
    }

    #[test]
    fn missing_field_is_empty() {
        assert_eq!(Achievements::from_json("{}"), Some(Achievements::default()));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(Achievements::from_json("not json"), None);
    }
}
