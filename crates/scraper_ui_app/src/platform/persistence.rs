//! File-backed theme preference.
//!
//! The flag lives in `<state-dir>/.scraper_ui_prefs.ron`. Saves are staged in a
//! temp file next to it and renamed over the old one, so a crash mid-save
//! leaves the previous preference in place.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use scraper_ui_core::PreferenceStore;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;
use ui_logging::{ui_debug, ui_error, ui_warn};

const PREFERENCES_FILENAME: &str = ".scraper_ui_prefs.ron";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("{0} exists but is not a directory")]
    NotADirectory(PathBuf),
    #[error("could not encode preferences: {0}")]
    Encode(#[from] ron::Error),
    #[error("could not decode preferences: {0}")]
    Decode(#[from] ron::error::SpannedError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
struct Preferences {
    dark_mode: bool,
}

/// Creates `dir` and its parents when missing.
pub fn ensure_state_dir(dir: &Path) -> Result<(), PreferenceError> {
    if dir.is_dir() {
        return Ok(());
    }
    if dir.exists() {
        return Err(PreferenceError::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir)?;
    Ok(())
}

#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    dir: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCES_FILENAME)
    }

    /// `Ok(None)` when nothing has been saved yet.
    fn read(&self) -> Result<Option<Preferences>, PreferenceError> {
        let content = match fs::read_to_string(self.path()) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(ron::from_str(&content)?))
    }

    fn write(&self, preferences: Preferences) -> Result<PathBuf, PreferenceError> {
        ensure_state_dir(&self.dir)?;
        let content = ron::ser::to_string_pretty(&preferences, ron::ser::PrettyConfig::new())?;

        let mut staged = NamedTempFile::new_in(&self.dir)?;
        staged.write_all(content.as_bytes())?;
        staged.as_file().sync_all()?;

        let path = self.path();
        staged
            .persist(&path)
            .map_err(|err| PreferenceError::Io(err.error))?;
        Ok(path)
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> bool {
        match self.read() {
            Ok(Some(preferences)) => preferences.dark_mode,
            Ok(None) => false,
            Err(err) => {
                ui_warn!("Ignoring preferences at {:?}: {}", self.path(), err);
                false
            }
        }
    }

    fn save(&mut self, dark_mode: bool) {
        match self.write(Preferences { dark_mode }) {
            Ok(path) => ui_debug!("dark_mode={} saved to {:?}", dark_mode, path),
            Err(err) => ui_error!("Failed to save preferences in {:?}: {}", self.dir, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> FilePreferenceStore {
        FilePreferenceStore::new(dir.to_path_buf())
    }

    #[test]
    fn nothing_saved_means_light_mode() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        assert!(store.read().unwrap().is_none());
        assert!(!store.load());
    }

    #[test]
    fn toggled_flag_is_seen_by_a_fresh_store() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let reopened = store_in(dir.path());

        store.save(true);
        assert!(reopened.load());

        store.save(false);
        assert!(!reopened.load());
    }

    #[test]
    fn save_creates_a_nested_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("profile").join("ui");
        let mut store = store_in(&nested);

        store.save(true);

        assert!(nested.join(PREFERENCES_FILENAME).is_file());
        assert!(store.load());
    }

    #[test]
    fn save_leaves_only_the_preference_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());

        store.save(true);
        store.save(false);
        store.save(true);

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![PREFERENCES_FILENAME]);
    }

    #[test]
    fn corrupt_file_reads_as_light_mode_and_is_replaced_on_save() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(PREFERENCES_FILENAME), "(dark_mode: maybe").unwrap();
        let mut store = store_in(dir.path());

        assert!(matches!(store.read(), Err(PreferenceError::Decode(_))));
        assert!(!store.load());

        store.save(true);
        assert!(store.load());
    }

    #[test]
    fn state_dir_that_is_a_file_keeps_light_mode() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("state");
        fs::write(&blocker, "not a directory").unwrap();
        let mut store = store_in(&blocker);

        assert!(matches!(
            store.write(Preferences { dark_mode: true }),
            Err(PreferenceError::NotADirectory(_))
        ));
        store.save(true);
        assert!(!store.load());
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }

    #[test]
    fn saved_file_is_readable_ron() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        store.save(true);

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            ron::from_str::<Preferences>(&text).unwrap(),
            Preferences { dark_mode: true }
        );
    }
}
