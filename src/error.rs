//! Error handling for the overlay engine
//!
//! Every condition raised by the reconciler is non-fatal to the host. The
//! engine reports skipped work as `OverlayError` values inside its reports;
//! only the file-backed settings store and catalog fixtures return `Err`.

use std::error::Error as StdError;
use std::fmt;

/// Main error type for the overlay engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    // Catalog Errors
    NotFound {
        id: String,
    },
    GroupUnavailable {
        group: String,
        missing: String,
    },

    // List Errors
    DiscoveryFailure {
        category: String,
    },

    // Settings Errors
    SettingsUnavailable {
        trigger: String,
    },
    SaveFailed {
        path: String,
        error: String,
    },
    LoadFailed {
        path: String,
        error: String,
    },

    // Configuration Errors
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    // System Errors
    IoError {
        path: String,
        error: String,
    },
    SerializationError {
        context: String,
        error: String,
    },
    DeserializationError {
        context: String,
        error: String,
    },
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::NotFound { id } => write!(f, "Catalog entry not found: {}", id),
            OverlayError::GroupUnavailable { group, missing } => {
                write!(f, "Group {} unavailable: missing entry {}", group, missing)
            }

            OverlayError::DiscoveryFailure { category } => {
                write!(f, "No entry list found for category {}", category)
            }

            OverlayError::SettingsUnavailable { trigger } => {
                write!(f, "Settings unavailable during {}", trigger)
            }
            OverlayError::SaveFailed { path, error } => {
                write!(f, "Save failed for {}: {}", path, error)
            }
            OverlayError::LoadFailed { path, error } => {
                write!(f, "Load failed for {}: {}", path, error)
            }

            OverlayError::InvalidConfig {
                field,
                value,
                reason,
            } => write!(f, "Invalid config: {} = {} ({})", field, value, reason),

            OverlayError::IoError { path, error } => write!(f, "IO error for {}: {}", path, error),
            OverlayError::SerializationError { context, error } => {
                write!(f, "Serialization error in {}: {}", context, error)
            }
            OverlayError::DeserializationError { context, error } => {
                write!(f, "Deserialization error in {}: {}", context, error)
            }
        }
    }
}

impl StdError for OverlayError {}

impl OverlayError {
    /// Whether the error only means a piece of work was skipped
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            OverlayError::NotFound { .. }
                | OverlayError::GroupUnavailable { .. }
                | OverlayError::DiscoveryFailure { .. }
                | OverlayError::SettingsUnavailable { .. }
        )
    }
}

/// Type alias for Results in the overlay engine
pub type OverlayResult<T> = Result<T, OverlayError>;

impl From<toml::de::Error> for OverlayError {
    fn from(error: toml::de::Error) -> Self {
        OverlayError::DeserializationError {
            context: "toml".to_string(),
            error: error.to_string(),
        }
    }
}

impl From<crate::settings::SettingsError> for OverlayError {
    fn from(err: crate::settings::SettingsError) -> Self {
        use crate::settings::SettingsError;
        match err {
            SettingsError::Io { path, source } => OverlayError::IoError {
                path: path.display().to_string(),
                error: source.to_string(),
            },
            SettingsError::Parse { path, source } => OverlayError::LoadFailed {
                path: path.display().to_string(),
                error: source.to_string(),
            },
            SettingsError::Serialize(e) => OverlayError::SerializationError {
                context: "settings".to_string(),
                error: e.to_string(),
            },
            SettingsError::Persist { path, reason } => OverlayError::SaveFailed {
                path: path.display().to_string(),
                error: reason,
            },
        }
    }
}

/// Convert Option to Result with context
pub trait OptionExt<T> {
    fn ok_or_overlay<F>(self, f: F) -> OverlayResult<T>
    where
        F: FnOnce() -> OverlayError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_overlay<F>(self, f: F) -> OverlayResult<T>
    where
        F: FnOnce() -> OverlayError,
    {
        self.ok_or_else(f)
    }
}
