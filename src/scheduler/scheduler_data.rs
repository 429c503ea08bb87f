//! Scheduler Data - Pure DOP
//!
//! State carried between host lifecycle events. NO METHODS beyond simple
//! queries.

use crate::designators::FilterReport;
use crate::error::{OverlayError, OverlayResult};
use crate::overlay::ApplyReport;
use crate::settings::OverlaySettings;
use crate::variants::VariantIndex;
use std::fmt;

/// Host event that started a pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Early attempt while the overlay module is constructed
    ModuleInit,
    /// Deferred pass once the host finished loading
    LoadFinished,
    /// User changed settings
    SettingsChanged,
    /// Host resolved a designation category's UI
    CategoryResolved,
}

impl Trigger {
    pub fn label(self) -> &'static str {
        match self {
            Trigger::ModuleInit => "module init",
            Trigger::LoadFinished => "load finished",
            Trigger::SettingsChanged => "settings changed",
            Trigger::CategoryResolved => "category resolved",
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scheduler state
///
/// Owned by the host, usually behind `Rc<RefCell<_>>` so lifecycle callbacks
/// can share it.
#[derive(Debug)]
pub struct ApplicationScheduler<S, O> {
    pub store: S,
    pub index: VariantIndex,
    pub observer: O,
    /// Last snapshot a pass ran with
    pub settings_cached: Option<OverlaySettings>,
    /// Set once the deferred pass ran; later early attempts are skipped
    pub applied_once: bool,
}

/// What one scheduler entry point did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub trigger: Trigger,
    /// Snapshot used; `None` when the pass could not run
    pub settings: Option<OverlaySettings>,
    /// Catalog overlay result; `None` when the catalog was not touched
    pub apply: Option<ApplyReport>,
    /// List sync result; `None` when no container was available
    pub list: Option<OverlayResult<FilterReport>>,
    /// Why nothing ran, when there is a reason worth reporting
    pub skipped: Option<OverlayError>,
    /// Settings could not be persisted; the pass ran regardless
    pub save_error: Option<OverlayError>,
}

impl PassReport {
    pub fn skipped(trigger: Trigger, reason: Option<OverlayError>) -> Self {
        Self {
            trigger,
            settings: None,
            apply: None,
            list: None,
            skipped: reason,
            save_error: None,
        }
    }

    /// Settings were not available to `trigger`
    pub fn unavailable(trigger: Trigger) -> Self {
        Self::skipped(
            trigger,
            Some(OverlayError::SettingsUnavailable {
                trigger: trigger.label().to_string(),
            }),
        )
    }

    pub fn ran(&self) -> bool {
        self.settings.is_some()
    }
}
