// Ivory Overlay - Data-Oriented Programming (DOP) Architecture
//
// Rewrites a host's building catalog so bone walls and skull floors can be
// built from an alternate material, and keeps the host's designator lists in
// step with that choice.
// - *_data modules hold plain data
// - *_operations modules hold the functions transforming it
// - Traits only where the host plugs in (registry, settings store, UI lists,
//   lifecycle)

// Constants module
pub mod constants;

// Core
pub mod error;
pub mod groups;
pub mod config;
pub mod diagnostics;

// Host-facing data
pub mod catalog;
pub mod settings;

// Overlay systems
pub mod variants;
pub mod overlay;
pub mod designators;
pub mod scheduler;

#[cfg(test)]
mod test_support;

pub use catalog::{
    load_catalog_toml, BuildableEntry, CatalogData, CatalogRegistry, CostDescriptor, CostItem,
    DefId, Visibility,
};
pub use config::OverlayConfig;
pub use designators::{
    filter, locate, synchronize, BuildDesignator, Discovery, DropdownDesignator, EntryContainer,
    EntryList, FilterReport, ToolDesignator, UiEntry,
};
pub use diagnostics::{init_logging, LogObserver, OverlayEvent, OverlayObserver, RecordingObserver};
pub use error::{OptionExt, OverlayError, OverlayResult};
pub use groups::{GroupKind, MaterialMode};
pub use overlay::{apply, representation, revert, ApplyReport, Representation};
pub use scheduler::{
    create_scheduler, install, on_category_resolved, on_load_finished, on_module_init,
    on_settings_changed, on_unload, ApplicationScheduler, HostEnvironment, HostLifecycle,
    InMemoryHost, LifecycleQueue, PassReport, Trigger,
};
pub use settings::{
    MemorySettingsStore, OverlaySettings, SettingsError, SettingsResult, SettingsStore,
    TomlSettingsStore,
};
pub use variants::{build_variant_index, VariantIndex};
