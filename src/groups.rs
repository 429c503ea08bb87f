//! Overlay groups and material modes
//!
//! The set of groups is fixed: one wall and three floor-like groups, each
//! switching between the primary material and the alternate one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A group of catalog entries whose cost is driven by one setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    Wall,
    Floor,
    FineFloor,
    Pathway,
}

impl GroupKind {
    pub const ALL: [GroupKind; 4] = [
        GroupKind::Wall,
        GroupKind::Floor,
        GroupKind::FineFloor,
        GroupKind::Pathway,
    ];

    /// Groups that swap a base entry for per-material variants
    pub const FLOOR_GROUPS: [GroupKind; 3] =
        [GroupKind::Floor, GroupKind::FineFloor, GroupKind::Pathway];

    pub fn is_floor_like(self) -> bool {
        !matches!(self, GroupKind::Wall)
    }

    pub fn label(self) -> &'static str {
        match self {
            GroupKind::Wall => "wall",
            GroupKind::Floor => "floor",
            GroupKind::FineFloor => "fine-floor",
            GroupKind::Pathway => "pathway",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which material a group is currently paid with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialMode {
    /// Skulls; floor-like groups show their base entry
    #[default]
    Primary,
    /// Stone blocks; floor-like groups show their per-material variants
    Alternate,
}

impl MaterialMode {
    pub fn from_toggle(use_alternate: bool) -> Self {
        if use_alternate {
            MaterialMode::Alternate
        } else {
            MaterialMode::Primary
        }
    }

    pub fn is_alternate(self) -> bool {
        matches!(self, MaterialMode::Alternate)
    }
}

impl fmt::Display for MaterialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialMode::Primary => f.write_str("primary"),
            MaterialMode::Alternate => f.write_str("alternate"),
        }
    }
}
