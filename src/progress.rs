//! Session progress and its persistence
//!
//! Exactly two scalars survive a session: the difficulty flag and the
//! highest-unlocked-level high-water mark. They are stored as one JSON blob
//! behind the [`ProgressStore`] trait so the core never touches ambient
//! storage directly; the wasm build writes LocalStorage, native/tests use an
//! in-memory store.

use serde::{Deserialize, Serialize};

/// Difficulty flag. Conditions level generation and is part of the level seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// The persisted blob: the whole save-game format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedProgress {
    pub difficulty: Difficulty,
    pub unlocked_levels: u32,
}

impl Default for SavedProgress {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            unlocked_levels: 1,
        }
    }
}

/// Injected read/write capability for [`SavedProgress`].
pub trait ProgressStore {
    fn load(&self) -> Option<SavedProgress>;
    fn save(&mut self, progress: &SavedProgress);
}

/// In-memory store for native builds and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Option<SavedProgress>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn saved(&self) -> Option<SavedProgress> {
        self.saved
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Option<SavedProgress> {
        self.saved
    }

    fn save(&mut self, progress: &SavedProgress) {
        self.saved = Some(*progress);
    }
}

/// LocalStorage-backed store (WASM only).
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct LocalStore;

#[cfg(target_arch = "wasm32")]
impl LocalStore {
    const STORAGE_KEY: &'static str = "neon_runner_progress";

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl ProgressStore for LocalStore {
    fn load(&self) -> Option<SavedProgress> {
        let storage = Self::storage()?;
        let json = storage.get_item(Self::STORAGE_KEY).ok()??;
        match serde_json::from_str(&json) {
            Ok(progress) => {
                log::info!("Loaded progress from LocalStorage");
                Some(progress)
            }
            Err(_) => None,
        }
    }

    fn save(&mut self, progress: &SavedProgress) {
        if let Some(storage) = Self::storage() {
            if let Ok(json) = serde_json::to_string(progress) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Progress saved");
            }
        }
    }
}

/// Live session progress. The persisted pair plus per-run counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Current level, 0-based.
    pub level_index: u32,
    /// Monotonic death counter for this run.
    pub deaths: u32,
    /// High-water mark of unlocked levels, never below 1, never decreasing.
    pub unlocked_levels: u32,
    pub difficulty: Difficulty,
}

impl Progress {
    /// Start fresh or resume from a store's saved blob.
    pub fn from_store(store: &dyn ProgressStore) -> Self {
        let saved = store.load().unwrap_or_default();
        Self {
            level_index: 0,
            deaths: 0,
            unlocked_levels: saved.unlocked_levels.max(1),
            difficulty: saved.difficulty,
        }
    }

    pub fn to_saved(&self) -> SavedProgress {
        SavedProgress {
            difficulty: self.difficulty,
            unlocked_levels: self.unlocked_levels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_progress_defaults() {
        let store = MemoryStore::new();
        let progress = Progress::from_store(&store);
        assert_eq!(progress.level_index, 0);
        assert_eq!(progress.deaths, 0);
        assert_eq!(progress.unlocked_levels, 1);
        assert_eq!(progress.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_resume_from_saved_blob() {
        let mut store = MemoryStore::new();
        store.save(&SavedProgress {
            difficulty: Difficulty::Easy,
            unlocked_levels: 7,
        });
        let progress = Progress::from_store(&store);
        assert_eq!(progress.unlocked_levels, 7);
        assert_eq!(progress.difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_corrupt_unlock_count_clamped_to_one() {
        let mut store = MemoryStore::new();
        store.save(&SavedProgress {
            difficulty: Difficulty::Hard,
            unlocked_levels: 0,
        });
        let progress = Progress::from_store(&store);
        assert_eq!(progress.unlocked_levels, 1);
    }

    #[test]
    fn test_saved_blob_round_trips_as_json() {
        let saved = SavedProgress {
            difficulty: Difficulty::Easy,
            unlocked_levels: 42,
        };
        let json = serde_json::to_string(&saved).unwrap();
        let back: SavedProgress = serde_json::from_str(&json).unwrap();
        assert_eq!(saved, back);
    }

    #[test]
    fn test_difficulty_string_round_trip() {
        assert_eq!(Difficulty::from_str("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_str("easy"), Some(Difficulty::Easy));
        assert_eq!(Difficulty::from_str("extreme"), None);
        assert_eq!(Difficulty::Hard.as_str(), "hard");
    }
}
