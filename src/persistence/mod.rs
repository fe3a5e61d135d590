//! Completion progress persistence
//!
//! Stores are best-effort: a failed read yields empty progress and a failed
//! write is logged and dropped. Nothing here can stop a match.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use crate::difficulty::Progress;

/// Key the progress JSON is stored under
pub const PROGRESS_KEY: &str = "pongGameProgress";

/// Where completion flags live between sessions
pub trait ProgressStore {
    /// Read saved progress. Missing or malformed data reads as nothing completed.
    fn load(&self) -> Progress;

    /// Write progress, ignoring failures after logging them
    fn save(&mut self, progress: &Progress);
}

/// In-memory store for tests and headless runs
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Option<String>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with raw JSON, as if written by an earlier session
    pub fn with_raw(json: impl Into<String>) -> Self {
        Self {
            data: Some(json.into()),
            saves: 0,
        }
    }

    /// Number of `save` calls so far
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> Progress {
        self.data
            .as_deref()
            .map(Progress::from_json_lenient)
            .unwrap_or_default()
    }

    fn save(&mut self, progress: &Progress) {
        self.data = Some(progress.to_json());
        self.saves += 1;
    }
}

impl<S: ProgressStore + ?Sized> ProgressStore for Box<S> {
    fn load(&self) -> Progress {
        (**self).load()
    }

    fn save(&mut self, progress: &Progress) {
        (**self).save(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    #[test]
    fn test_empty_store_reads_nothing_completed() {
        assert_eq!(MemoryStore::new().load(), Progress::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut progress = Progress::default();
        progress.mark_completed(Difficulty::Hard);
        store.save(&progress);
        assert_eq!(store.load(), progress);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_corrupt_data_reads_as_default() {
        let store = MemoryStore::with_raw("{\"easy\": tru");
        assert_eq!(store.load(), Progress::default());
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn ProgressStore> = Box::new(MemoryStore::with_raw(r#"{"easy":true}"#));
        assert!(store.load().easy);
        store.save(&Progress::default());
        assert!(!store.load().easy);
    }
}
