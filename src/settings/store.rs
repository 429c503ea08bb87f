//! Settings stores
//!
//! `SettingsStore` is the seam to whatever owns the user's settings. The TOML
//! store is the reference implementation; the memory store backs hosts that
//! keep settings themselves.

use super::settings_data::OverlaySettings;
use super::{SettingsError, SettingsResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of settings snapshots
pub trait SettingsStore {
    /// Current snapshot, or `None` while settings are not available yet
    fn load(&self) -> Option<OverlaySettings>;

    /// Persist a snapshot
    fn save(&mut self, settings: &OverlaySettings) -> SettingsResult<()>;
}

/// Settings kept in a TOML file
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store for the default file name inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(crate::constants::settings::FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file; a missing file yields the defaults
    pub fn read(&self) -> SettingsResult<OverlaySettings> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "No settings file at {}, using defaults",
                    self.path.display()
                );
                return Ok(OverlaySettings::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let parsed: OverlaySettings =
            toml::from_str(&contents).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let clamped = parsed.clamped();
        if clamped != parsed {
            log::warn!(
                "Settings in {} outside the allowed cost range, clamping",
                self.path.display()
            );
        }
        Ok(clamped)
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Option<OverlaySettings> {
        match self.read() {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Settings unavailable: {}", e);
                None
            }
        }
    }

    fn save(&mut self, settings: &OverlaySettings) -> SettingsResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let contents = toml::to_string_pretty(settings)?;

        // Sibling temp file, then rename over the target
        let temp = self.temp_path();
        fs::write(&temp, contents).map_err(|source| SettingsError::Io {
            path: temp.clone(),
            source,
        })?;
        fs::rename(&temp, &self.path).map_err(|e| SettingsError::Persist {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        log::debug!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

/// Settings held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    pub settings: Option<OverlaySettings>,
    pub save_count: usize,
}

impl MemorySettingsStore {
    /// Store that has not received settings yet
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: OverlaySettings) -> Self {
        Self {
            settings: Some(settings),
            save_count: 0,
        }
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Option<OverlaySettings> {
        self.settings
    }

    fn save(&mut self, settings: &OverlaySettings) -> SettingsResult<()> {
        self.settings = Some(*settings);
        self.save_count += 1;
        Ok(())
    }
}
