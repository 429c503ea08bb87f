//! Diagnostics
//!
//! The engine never logs directly. It reports `OverlayEvent`s to an
//! `OverlayObserver` passed in by the caller, so verbosity is chosen by the
//! host instead of being baked into the engine.

use crate::groups::{GroupKind, MaterialMode};
use std::collections::HashSet;

/// Something the overlay did or had to skip
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEvent {
    /// A catalog id the overlay depends on has no entry
    EntryMissing { id: String, context: &'static str },
    /// A group was left untouched for this pass
    GroupSkipped { group: GroupKind, reason: String },
    /// A group now matches the snapshot
    GroupApplied {
        group: GroupKind,
        mode: MaterialMode,
        entries: usize,
    },
    /// One catalog entry was rewritten
    EntryUpdated { id: String, summary: String },
    /// An entry list was found on a container
    ListLocated { category: String, accessor: String },
    /// Every discovery strategy failed
    ListNotFound { category: String },
    /// A list entry was dropped by the synchronizer
    EntryDropped { label: String },
    /// A synchronization pass finished
    ListFiltered {
        category: String,
        kept: usize,
        dropped: usize,
    },
    /// The settings store had nothing to offer
    SettingsUnavailable { trigger: &'static str },
    /// Settings were written to the store
    SettingsPersisted,
    /// Settings could not be written
    SettingsSaveFailed { error: String },
    /// A scheduler pass finished
    PassCompleted { trigger: &'static str },
}

impl OverlayEvent {
    /// Whether the event signals skipped work
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            OverlayEvent::EntryMissing { .. }
                | OverlayEvent::GroupSkipped { .. }
                | OverlayEvent::ListNotFound { .. }
                | OverlayEvent::SettingsUnavailable { .. }
                | OverlayEvent::SettingsSaveFailed { .. }
        )
    }

    /// Per-entry detail, only worth logging when verbose
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            OverlayEvent::EntryUpdated { .. } | OverlayEvent::EntryDropped { .. }
        )
    }
}

/// Receives overlay events
pub trait OverlayObserver {
    fn record(&mut self, event: OverlayEvent);
}

/// Forwards events to the `log` facade
///
/// Missing ids are warned about once per id for the observer's lifetime.
#[derive(Debug, Default)]
pub struct LogObserver {
    pub verbose: bool,
    warned_ids: HashSet<String>,
}

impl LogObserver {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            warned_ids: HashSet::new(),
        }
    }
}

impl OverlayObserver for LogObserver {
    fn record(&mut self, event: OverlayEvent) {
        match &event {
            OverlayEvent::EntryMissing { id, context } => {
                if self.warned_ids.insert(id.clone()) {
                    log::warn!("[Overlay] Missing catalog entry '{}' ({})", id, context);
                }
            }
            OverlayEvent::GroupSkipped { group, reason } => {
                log::warn!("[Overlay] Skipping {} group: {}", group, reason);
            }
            OverlayEvent::ListNotFound { category } => {
                log::warn!(
                    "[Overlay] Could not find entry list for category {} - filtering skipped",
                    category
                );
            }
            OverlayEvent::SettingsUnavailable { trigger } => {
                log::warn!("[Overlay] Settings not available during {}, retrying later", trigger);
            }
            OverlayEvent::SettingsSaveFailed { error } => {
                log::warn!("[Overlay] Failed to save settings: {}", error);
            }
            _ if event.is_detail() => {
                if self.verbose {
                    log::debug!("[Overlay] {:?}", event);
                }
            }
            _ => {
                if self.verbose {
                    log::info!("[Overlay] {:?}", event);
                } else {
                    log::trace!("[Overlay] {:?}", event);
                }
            }
        }
    }
}

/// Keeps every event, for tests and hosts that surface diagnostics themselves
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Vec<OverlayEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &OverlayEvent> {
        self.events.iter().filter(|e| e.is_warning())
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl OverlayObserver for RecordingObserver {
    fn record(&mut self, event: OverlayEvent) {
        self.events.push(event);
    }
}

/// Install `env_logger` as the global logger
///
/// `RUST_LOG` wins when set. Otherwise overlay output is logged at `debug`
/// when `verbose` and `warn` when not. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}
