//! JSON file store for native builds

use std::fs;
use std::path::PathBuf;

use super::ProgressStore;
use crate::difficulty::Progress;

/// Progress kept in a single JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressStore for FileStore {
    fn load(&self) -> Progress {
        match fs::read_to_string(&self.path) {
            Ok(json) => {
                let progress = Progress::from_json_lenient(&json);
                log::info!(
                    "Loaded progress from {} ({} completed)",
                    self.path.display(),
                    progress.completed_count()
                );
                progress
            }
            Err(_) => {
                log::info!("No saved progress, starting fresh");
                Progress::default()
            }
        }
    }

    fn save(&mut self, progress: &Progress) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(e) = fs::create_dir_all(parent) {
                    log::warn!("Could not create {}: {}", parent.display(), e);
                    return;
                }
            }
        }
        match fs::write(&self.path, progress.to_json()) {
            Ok(()) => log::info!("Progress saved to {}", self.path.display()),
            Err(e) => log::warn!("Could not save progress to {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::Difficulty;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("star-pong-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_missing_file_is_fresh_progress() {
        let store = FileStore::new(temp_path("missing.json"));
        assert_eq!(store.load(), Progress::default());
    }

    #[test]
    fn test_round_trip_through_disk() {
        let path = temp_path("progress.json");
        let mut store = FileStore::new(&path);
        let mut progress = Progress::default();
        progress.mark_completed(Difficulty::Easy);
        store.save(&progress);

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load(), progress);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_malformed_file_reads_false() {
        let path = temp_path("garbage.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{\"easy\": 3, \"medium\": true").unwrap();
        assert_eq!(FileStore::new(&path).load(), Progress::default());
        let _ = fs::remove_file(path);
    }
}
