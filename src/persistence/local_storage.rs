//! Browser LocalStorage store

use super::{PROGRESS_KEY, ProgressStore};
use crate::difficulty::Progress;

/// Progress kept in `window.localStorage`
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
    }
}

impl ProgressStore for LocalStorageStore {
    fn load(&self) -> Progress {
        if let Some(storage) = Self::storage() {
            if let Ok(Some(json)) = storage.get_item(PROGRESS_KEY) {
                let progress = Progress::from_json_lenient(&json);
                log::info!("Loaded progress ({} completed)", progress.completed_count());
                return progress;
            }
        }

        log::info!("No saved progress, starting fresh");
        Progress::default()
    }

    fn save(&mut self, progress: &Progress) {
        let Some(storage) = Self::storage() else {
            log::warn!("LocalStorage unavailable, progress not saved");
            return;
        };
        if storage.set_item(PROGRESS_KEY, &progress.to_json()).is_err() {
            log::warn!("Failed to write progress to LocalStorage");
        } else {
            log::info!("Progress saved");
        }
    }
}
