//! Persisted theme preference.
//!
//! The only state the client keeps between runs: a single `"dark"`/`"light"`
//! flag stored in a file.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Errors from the preference store.
#[derive(thiserror::Error, Debug)]
pub enum PreferenceError {
    /// Reading or writing the flag failed.
    #[error("Preference I/O error at {path}: {source}")]
    Io {
        /// File involved.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },

    /// A theme name was not recognized.
    #[error("Unknown theme '{0}' (expected 'dark' or 'light')")]
    UnknownTheme(String),
}

/// Color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Dark theme (default).
    #[default]
    Dark,
    /// Light theme.
    Light,
}

impl Theme {
    /// Stored flag value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(PreferenceError::UnknownTheme(other.to_string())),
        }
    }
}

/// File-backed theme flag.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store the flag at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the flag.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored theme.
    ///
    /// A missing file yields the default; anything other than `"dark"` in the
    /// file reads as light.
    pub fn load(&self) -> Result<Theme, PreferenceError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim() == Theme::Dark.as_str() => Ok(Theme::Dark),
            Ok(_) => Ok(Theme::Light),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Theme::default()),
            Err(source) => Err(PreferenceError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Persist `theme`, creating the parent directory if needed.
    pub fn save(&self, theme: Theme) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        std::fs::write(&self.path, theme.as_str()).map_err(|source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), %theme, "Saved theme");
        Ok(())
    }

    /// Flip and persist the theme, returning the new value.
    pub fn toggle(&self) -> Result<Theme, PreferenceError> {
        let next = self.load()?.toggled();
        self.save(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" light\n".parse::<Theme>().unwrap(), Theme::Light);
        assert!("sepia".parse::<Theme>().is_err());
    }

    #[test]
    fn test_missing_file_defaults_to_dark() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("theme"));
        assert_eq!(store.load().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_toggle_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("theme"));

        assert_eq!(store.toggle().unwrap(), Theme::Light);
        assert_eq!(store.load().unwrap(), Theme::Light);
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "light");

        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.load().unwrap(), Theme::Dark);
    }

    #[test]
    fn test_save_creates_config_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(crate::config::theme_file_under(dir.path()));
        assert!(!store.path().exists());

        store.save(Theme::Light).unwrap();
        assert!(dir.path().join("hf-papers").is_dir());
        assert_eq!(store.load().unwrap(), Theme::Light);
    }

    #[test]
    fn test_unrecognized_contents_read_as_light() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("theme"));
        std::fs::write(store.path(), "solarized").unwrap();
        assert_eq!(store.load().unwrap(), Theme::Light);
    }
}
