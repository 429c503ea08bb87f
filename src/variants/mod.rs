//! Variant Index - Pure DOP
//!
//! Built once from the registry at startup, read-only afterwards. Maps each
//! raw-material family to the floor-like variants that consume it and each
//! variant back to its material.

pub mod variant_index_data;
pub mod variant_index_operations;

pub use variant_index_data::{
    EntryRole, EntrySnapshot, GroupIndex, MaterialFamily, VariantIndex, VariantRecord,
};
pub use variant_index_operations::{
    build_variant_index, classify_id, group, material_for, variants_of_family,
};
