//! Durable client-side storage for the theme slot.
//!
//! One key-value slot: the key `comp_theme` maps to the identifier of the
//! palette applied last session. It is read once at startup and written once
//! per startup. Callers treat every error as "storage unavailable" and fall
//! back silently.

use std::fs;
use std::path::{Path, PathBuf};

/// File name of the single persisted slot.
const THEME_KEY: &str = "comp_theme";
/// Directory under the user config root that holds compdeck state.
const APP_DIR: &str = "compdeck";

/// Filesystem-backed slot for the persisted palette identifier.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    /// Path of the `comp_theme` file.
    slot_path: PathBuf,
}

impl ThemeStore {
    /// Open/create the default store under the user config directory
    /// (`~/.config/compdeck/comp_theme`), falling back to a local
    /// `.compdeck/` directory when no config root can be resolved.
    pub fn open_default() -> Result<Self, String> {
        let root = dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")));
        Self::open(root)
    }

    /// Open/create a store rooted under the given directory.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, String> {
        let root = root.as_ref();
        fs::create_dir_all(root)
            .map_err(|e| format!("failed to create store directory {}: {e}", root.display()))?;
        Ok(Self {
            slot_path: root.join(THEME_KEY),
        })
    }

    /// Read the persisted palette identifier, if any.
    ///
    /// A missing slot is not an error; it means "first visit".
    pub fn read(&self) -> Result<Option<String>, String> {
        match fs::read_to_string(&self.slot_path) {
            Ok(raw) => Ok(Some(raw.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!(
                "failed to read {}: {e}",
                self.slot_path.display()
            )),
        }
    }

    /// Persist a palette identifier, overwriting any previous value.
    pub fn write(&self, palette_id: &str) -> Result<(), String> {
        // Write to a sibling temporary file first so a partial write cannot
        // corrupt the slot.
        let tmp_path = self.slot_path.with_extension("tmp");
        fs::write(&tmp_path, palette_id)
            .map_err(|e| format!("failed to write {}: {e}", tmp_path.display()))?;
        fs::rename(&tmp_path, &self.slot_path)
            .map_err(|e| format!("failed to move {} into place: {e}", self.slot_path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    // Ensures the slot round-trips through disk.
    #[test]
    fn write_then_read_round_trip() {
        let dir = TestTempDir::new("store");
        let store = ThemeStore::open(dir.path()).expect("store should open");
        store.write("warm").expect("write should succeed");
        assert_eq!(store.read().expect("read"), Some("warm".to_string()));
    }

    // Ensures a fresh store reads as absent rather than erroring.
    #[test]
    fn empty_store_reads_none() {
        let dir = TestTempDir::new("store-empty");
        let store = ThemeStore::open(dir.path()).expect("store should open");
        assert_eq!(store.read().expect("read"), None);
    }

    // Ensures a second write overwrites the previous value.
    #[test]
    fn write_overwrites_previous_value() {
        let dir = TestTempDir::new("store-overwrite");
        let store = ThemeStore::open(dir.path()).expect("store should open");
        store.write("soft").expect("first write");
        store.write("cool").expect("second write");
        assert_eq!(store.read().expect("read"), Some("cool".to_string()));
    }

    // Ensures surrounding whitespace from hand-edited slots is tolerated.
    #[test]
    fn read_trims_whitespace() {
        let dir = TestTempDir::new("store-trim");
        let store = ThemeStore::open(dir.path()).expect("store should open");
        std::fs::write(dir.child(THEME_KEY), "cool\n").expect("seed slot");
        assert_eq!(store.read().expect("read"), Some("cool".to_string()));
    }
}
