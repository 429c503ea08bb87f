//! Variant Index Operations - Pure DOP Functions
//!
//! Building and querying the variant index. The registry is scanned once;
//! queries never touch it again.

use super::variant_index_data::{
    EntryRole, EntrySnapshot, GroupIndex, MaterialFamily, VariantIndex, VariantRecord,
};
use crate::catalog::{BuildableEntry, CatalogRegistry, DefId};
use crate::config::OverlayConfig;
use crate::groups::GroupKind;
use std::collections::{BTreeMap, HashMap};

/// Scan the registry and build the variant index
pub fn build_variant_index(registry: &dyn CatalogRegistry, config: &OverlayConfig) -> VariantIndex {
    let material_category = config.material_category.as_str();
    let families: Vec<MaterialFamily> = registry
        .all_entries_where(&|entry: &BuildableEntry| entry.has_thing_category(material_category))
        .into_iter()
        .map(|entry| MaterialFamily {
            name: config.family_of(entry.id.as_str()),
            material_id: entry.id.clone(),
        })
        .filter(|family| !family.name.is_empty())
        .collect();

    log::debug!(
        "VariantIndex: {} material families in category {}",
        families.len(),
        material_category
    );

    let mut groups = BTreeMap::new();
    let mut group_by_variant = HashMap::new();
    let mut material_by_variant = HashMap::new();
    let mut originals = Vec::new();

    for kind in GroupKind::ALL {
        let base_id = DefId::new(config.base_id(kind));
        let available = match registry.find(base_id.as_str()) {
            Some(entry) => {
                originals.push(snapshot_entry(entry));
                true
            }
            None => {
                log::warn!(
                    "VariantIndex: base entry '{}' missing, {} group unavailable",
                    base_id,
                    kind
                );
                false
            }
        };

        let mut variants = Vec::new();
        if kind.is_floor_like() {
            for family in &families {
                let variant_id = config.variant_id(kind, &family.name);
                // Not every family has art for every group
                let Some(entry) = registry.find(&variant_id) else {
                    log::debug!("VariantIndex: no {} variant for {}", kind, family.name);
                    continue;
                };

                originals.push(snapshot_entry(entry));
                group_by_variant.insert(variant_id.clone(), kind);
                material_by_variant.insert(variant_id.clone(), family.material_id.clone());
                variants.push(VariantRecord {
                    entry_id: DefId::new(variant_id),
                    material_id: family.material_id.clone(),
                    family: family.name.clone(),
                });
            }
        }

        groups.insert(
            kind,
            GroupIndex {
                group: kind,
                base_id,
                available,
                variants,
            },
        );
    }

    VariantIndex {
        config: config.clone(),
        groups,
        families,
        group_by_variant,
        material_by_variant,
        originals,
    }
}

fn snapshot_entry(entry: &BuildableEntry) -> EntrySnapshot {
    EntrySnapshot {
        id: entry.id.clone(),
        cost: entry.cost.clone(),
        stuff_categories: entry.stuff_categories.clone(),
        visibility: entry.visibility.clone(),
    }
}

/// Get a group's index
pub fn group(index: &VariantIndex, kind: GroupKind) -> Option<&GroupIndex> {
    index.groups.get(&kind)
}

/// Material consumed by a registered variant
pub fn material_for<'a>(index: &'a VariantIndex, variant_id: &str) -> Option<&'a DefId> {
    index.material_by_variant.get(variant_id)
}

/// Every registered variant of a material family, across groups
pub fn variants_of_family<'a>(index: &'a VariantIndex, family: &str) -> Vec<&'a VariantRecord> {
    index
        .groups
        .values()
        .flat_map(|g| g.variants.iter())
        .filter(|v| v.family == family)
        .collect()
}

/// Whether a name is one of the scanned material families
pub fn is_known_family(index: &VariantIndex, name: &str) -> bool {
    index.families.iter().any(|f| f.name == name)
}

/// Classify an entry id by naming convention
///
/// Bases match exactly. Variants are `<base id><family>` with a family found
/// during the scan, whether or not that family has a registered variant for
/// the group. Anything else, the wall included, is unrelated.
pub fn classify_id(index: &VariantIndex, id: &str) -> EntryRole {
    for kind in GroupKind::FLOOR_GROUPS {
        if index.config.base_id(kind) == id {
            return EntryRole::Base(kind);
        }
    }

    if let Some(&kind) = index.group_by_variant.get(id) {
        return EntryRole::Variant(kind);
    }

    for kind in GroupKind::FLOOR_GROUPS {
        if let Some(suffix) = id.strip_prefix(index.config.base_id(kind)) {
            if is_known_family(index, suffix) {
                return EntryRole::Variant(kind);
            }
        }
    }

    EntryRole::Unrelated
}
