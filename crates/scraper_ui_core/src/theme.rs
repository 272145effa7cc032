//! Dark/light theme flag and the narrow persistence seam behind it.

use std::sync::{Arc, Mutex};

/// Persists the single dark-mode flag. Implementations swallow and log their
/// own IO failures: a broken store means "light mode", never a crash.
pub trait PreferenceStore: Send {
    fn load(&self) -> bool;
    fn save(&mut self, dark_mode: bool);
}

/// In-process store. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    dark_mode: Arc<Mutex<bool>>,
}

impl MemoryPreferenceStore {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode: Arc::new(Mutex::new(dark_mode)),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> bool {
        self.dark_mode.lock().map(|flag| *flag).unwrap_or(false)
    }

    fn save(&mut self, dark_mode: bool) {
        if let Ok(mut flag) = self.dark_mode.lock() {
            *flag = dark_mode;
        }
    }
}

/// Opacity (percent) of the sun and moon icons on the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAppearance {
    pub sun_opacity: u8,
    pub moon_opacity: u8,
}

pub fn toggle_appearance(dark_mode: bool) -> ToggleAppearance {
    if dark_mode {
        ToggleAppearance {
            sun_opacity: 100,
            moon_opacity: 50,
        }
    } else {
        ToggleAppearance {
            sun_opacity: 50,
            moon_opacity: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{toggle_appearance, MemoryPreferenceStore, PreferenceStore};

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemoryPreferenceStore::new(false);
        let mut writer = store.clone();
        writer.save(true);
        assert!(store.load());
    }

    #[test]
    fn highlighted_icon_follows_mode() {
        assert_eq!(toggle_appearance(true).sun_opacity, 100);
        assert_eq!(toggle_appearance(false).moon_opacity, 100);
    }
}
