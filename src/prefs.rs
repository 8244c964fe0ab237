//! Persisted view preferences.
//!
//! The last-selected group/sort pair lives in a small TOML file under the
//! user's home directory (`~/.tix/prefs.toml`):
//!
//! ```toml
//! group_by = "status"
//! sort_by = "priority"
//! ```
//!
//! A saved value overrides the compiled-in defaults only when the file
//! exists; a missing or broken file never aborts a board render.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::PrefsError;
use crate::models::{GroupBy, SortBy};

/// The last-selected view options. Defaults: group by status, sort by
/// priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPrefs {
    #[serde(default)]
    pub group_by: GroupBy,
    #[serde(default)]
    pub sort_by: SortBy,
}

impl ViewPrefs {
    /// Load saved preferences, falling back to the defaults when no file
    /// exists or when the file is unreadable or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(Some(prefs)) => prefs,
            Ok(None) => Self::default(),
            Err(err) => {
                debug!(%err, "ignoring unreadable preferences");
                Self::default()
            }
        }
    }

    /// Load saved preferences. `Ok(None)` when no file exists.
    pub fn load(path: &Path) -> Result<Option<Self>, PrefsError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(path).map_err(|source| PrefsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let prefs = toml::from_str(&raw).map_err(|source| PrefsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(prefs))
    }

    /// Write preferences, creating the parent directory as needed.
    pub fn save(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| PrefsError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(path, raw).map_err(|source| PrefsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "preferences saved");
        Ok(())
    }

    /// Delete the preferences file. Returns whether a file was removed.
    pub fn clear(path: &Path) -> Result<bool, PrefsError> {
        if !path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(path).map_err(|source| PrefsError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }

    /// Fold CLI selections into the current preferences. Returns `true` when
    /// anything changed and the result should be written back.
    pub fn apply(&mut self, group_by: Option<GroupBy>, sort_by: Option<SortBy>) -> bool {
        let mut changed = false;
        if let Some(mode) = group_by {
            if mode != self.group_by {
                self.group_by = mode;
                changed = true;
            }
        }
        if let Some(mode) = sort_by {
            if mode != self.sort_by {
                self.sort_by = mode;
                changed = true;
            }
        }
        changed
    }
}

/// Default on-disk location: `~/.tix/prefs.toml`.
pub fn prefs_path() -> Result<PathBuf, PrefsError> {
    let home = dirs::home_dir().ok_or(PrefsError::NoHomeDir)?;
    Ok(home.join(".tix").join("prefs.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tix/prefs.toml");
        let prefs = ViewPrefs {
            group_by: GroupBy::Assignee,
            sort_by: SortBy::Title,
        };
        prefs.save(&path).unwrap();
        let loaded = ViewPrefs::load(&path).unwrap().unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        assert!(ViewPrefs::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_load_or_default_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let prefs = ViewPrefs::load_or_default(&dir.path().join("prefs.toml"));
        assert_eq!(prefs.group_by, GroupBy::Status);
        assert_eq!(prefs.sort_by, SortBy::Priority);
    }

    #[test]
    fn test_load_or_default_malformed_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "group_by = \"totally-bogus\"").unwrap();
        let prefs = ViewPrefs::load_or_default(&path);
        assert_eq!(prefs, ViewPrefs::default());
    }

    #[test]
    fn test_load_malformed_file_reports_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "not even toml =").unwrap();
        let err = ViewPrefs::load(&path).unwrap_err();
        assert!(matches!(err, PrefsError::Parse { .. }));
    }

    #[test]
    fn test_partial_file_fills_missing_field_with_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "group_by = \"priority\"").unwrap();
        let prefs = ViewPrefs::load(&path).unwrap().unwrap();
        assert_eq!(prefs.group_by, GroupBy::Priority);
        assert_eq!(prefs.sort_by, SortBy::Priority);
    }

    #[test]
    fn test_apply_detects_changes() {
        let mut prefs = ViewPrefs::default();
        assert!(prefs.apply(Some(GroupBy::Priority), None));
        assert_eq!(prefs.group_by, GroupBy::Priority);
        assert_eq!(prefs.sort_by, SortBy::Priority);
    }

    #[test]
    fn test_apply_same_values_is_not_a_change() {
        let mut prefs = ViewPrefs::default();
        assert!(!prefs.apply(Some(GroupBy::Status), Some(SortBy::Priority)));
    }

    #[test]
    fn test_apply_no_selection_keeps_saved_values() {
        let mut prefs = ViewPrefs {
            group_by: GroupBy::Assignee,
            sort_by: SortBy::Title,
        };
        assert!(!prefs.apply(None, None));
        assert_eq!(prefs.group_by, GroupBy::Assignee);
        assert_eq!(prefs.sort_by, SortBy::Title);
    }

    #[test]
    fn test_clear_removes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        ViewPrefs::default().save(&path).unwrap();
        assert!(ViewPrefs::clear(&path).unwrap());
        assert!(!path.exists());
        assert!(!ViewPrefs::clear(&path).unwrap());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("deep/nested/prefs.toml");
        ViewPrefs::default().save(&path).unwrap();
        assert!(path.exists());
    }
}
