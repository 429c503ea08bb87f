//! Settings Module
//!
//! The settings snapshot driving the overlay, and the stores it is read from.

pub mod settings_data;
pub mod store;

pub use settings_data::{CostPair, OverlaySettings};
pub use store::{MemorySettingsStore, SettingsStore, TomlSettingsStore};

use std::path::PathBuf;

pub type SettingsResult<T> = Result<T, SettingsError>;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Could not persist settings to {}: {reason}", path.display())]
    Persist { path: PathBuf, reason: String },
}
