//! Overlay Data - Pure DOP
//!
//! Results of overlay passes. No methods beyond simple queries.

use crate::error::OverlayError;
use crate::groups::{GroupKind, MaterialMode};

/// Outcome of one `apply` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Groups brought in line with the snapshot, in pass order
    pub applied: Vec<(GroupKind, MaterialMode)>,
    /// Work that was skipped; never fatal
    pub skipped: Vec<OverlayError>,
    /// Catalog entries rewritten
    pub entries_updated: usize,
}

impl ApplyReport {
    pub fn is_applied(&self, group: GroupKind) -> bool {
        self.applied.iter().any(|(g, _)| *g == group)
    }

    /// True when nothing was skipped
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Which side of a floor-like group is currently offered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    /// Base shown, every variant hidden
    Base,
    /// Base hidden, every variant shown
    Variants,
    /// Both or neither side offered
    Inconsistent,
    /// Base entry absent from the registry
    Unavailable,
}
