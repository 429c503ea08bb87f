//! Overlay Engine
//!
//! Rewrites cost and visibility of every tracked catalog entry so that it
//! matches a settings snapshot. Each pass is a full overwrite of the tracked
//! state, so passes are idempotent and the last one wins.

pub mod overlay_data;
pub mod overlay_operations;

pub use overlay_data::{ApplyReport, Representation};
pub use overlay_operations::{apply, representation, revert};
