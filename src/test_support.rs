//! Shared fixtures for unit tests

use crate::catalog::registry_operations::catalog_from_entries;
use crate::catalog::{BuildableEntry, CatalogData, CostDescriptor, Visibility};
use crate::config::OverlayConfig;
use crate::designators::{BuildDesignator, DropdownDesignator, EntryList, UiEntry};
use crate::variants::{build_variant_index, VariantIndex};

/// Wall, skull material, the three floor bases, and granite and marble
/// families with variants for every floor-like group
pub fn standard_entries() -> Vec<BuildableEntry> {
    let mut entries = vec![
        BuildableEntry::new("Skull"),
        BuildableEntry::new("BoneWall").with_cost(CostDescriptor::single("Skull", 3)),
        BuildableEntry::material("BlocksGranite", "StoneBlocks"),
        BuildableEntry::material("BlocksMarble", "StoneBlocks"),
        BuildableEntry::new("WoodPlankFloor")
            .with_cost(CostDescriptor::single("WoodLog", 3))
            .with_visibility(Visibility::shown("Floors")),
    ];

    for (base, cost) in [("SkullFloor", 3), ("SkullFloorFine", 7), ("SkullPw", 1)] {
        entries.push(
            BuildableEntry::new(base)
                .with_cost(CostDescriptor::single("Skull", cost))
                .with_visibility(Visibility::shown("Floors")),
        );
        for family in ["Granite", "Marble"] {
            entries.push(
                BuildableEntry::new(format!("{}{}", base, family))
                    .with_cost(CostDescriptor::single(format!("Blocks{}", family).as_str(), cost))
                    .with_visibility(Visibility::shown("Floors")),
            );
        }
    }
    entries
}

pub fn standard_catalog() -> CatalogData {
    catalog_from_entries(standard_entries())
}

/// Standard catalog minus the named ids
pub fn catalog_without(ids: &[&str]) -> CatalogData {
    catalog_from_entries(
        standard_entries()
            .into_iter()
            .filter(|e| !ids.contains(&e.id.as_str())),
    )
}

pub fn index_for(catalog: &CatalogData) -> VariantIndex {
    build_variant_index(catalog, &OverlayConfig::default())
}

pub fn build(id: &str) -> Box<dyn UiEntry> {
    Box::new(BuildDesignator::new(id))
}

pub fn dropdown(label: &str, ids: &[&str]) -> Box<dyn UiEntry> {
    Box::new(DropdownDesignator::new(
        label,
        ids.iter().map(|id| build(id)).collect(),
    ))
}

/// Buildable ids (or labels for entries without one) in list order
pub fn labels(list: &EntryList) -> Vec<String> {
    list.iter().map(|entry| entry.label()).collect()
}
