//! Application Scheduler
//!
//! Decides when the overlay runs. The host fires lifecycle events in whatever
//! order it likes; every entry point runs the same idempotent pass.

pub mod host;
pub mod scheduler_data;
pub mod scheduler_operations;

pub use host::{
    CategoryCallback, HostEnvironment, HostLifecycle, InMemoryHost, LifecycleQueue,
    LoadFinishedCallback,
};
pub use scheduler_data::{ApplicationScheduler, PassReport, Trigger};
pub use scheduler_operations::{
    create_scheduler, install, on_category_resolved, on_load_finished, on_module_init,
    on_settings_changed, on_unload,
};
