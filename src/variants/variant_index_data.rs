//! Variant Index Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in variant_index_operations.rs

use crate::catalog::{CostDescriptor, DefId, Visibility};
use crate::config::OverlayConfig;
use crate::groups::GroupKind;
use std::collections::{BTreeMap, HashMap};

/// A raw-material family found in the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialFamily {
    /// Family name used as variant suffix (`Granite`)
    pub name: String,
    /// Material entry consumed by the family's variants (`BlocksGranite`)
    pub material_id: DefId,
}

/// One registered material-specific variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    pub entry_id: DefId,
    pub material_id: DefId,
    pub family: String,
}

/// A group's base entry and its registered variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIndex {
    pub group: GroupKind,
    pub base_id: DefId,
    /// False when the base entry was absent at build time
    pub available: bool,
    /// Always empty for the wall group
    pub variants: Vec<VariantRecord>,
}

/// Startup state of a tracked entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrySnapshot {
    pub id: DefId,
    pub cost: Option<CostDescriptor>,
    pub stuff_categories: Vec<String>,
    pub visibility: Visibility,
}

/// Role an entry id plays in the overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRole {
    Base(GroupKind),
    Variant(GroupKind),
    Unrelated,
}

/// Index data
#[derive(Debug, Clone)]
pub struct VariantIndex {
    /// Conventions the index was built with
    pub config: OverlayConfig,
    pub groups: BTreeMap<GroupKind, GroupIndex>,
    /// Families in registry order
    pub families: Vec<MaterialFamily>,
    /// Variant id -> group
    pub group_by_variant: HashMap<String, GroupKind>,
    /// Variant id -> material id
    pub material_by_variant: HashMap<String, DefId>,
    pub originals: Vec<EntrySnapshot>,
}
