//! Catalog Registry Operations - Pure DOP Functions
//!
//! Functions that take catalog data and return results.
//! No methods, no self, just transformations.

use super::registry_data::CatalogData;
use super::BuildableEntry;
use std::collections::HashMap;

/// Create empty catalog data
pub fn create_catalog() -> CatalogData {
    CatalogData {
        entries: Vec::new(),
        id_to_index: HashMap::new(),
    }
}

/// Build catalog data from a list of entries
pub fn catalog_from_entries(entries: impl IntoIterator<Item = BuildableEntry>) -> CatalogData {
    let mut data = create_catalog();
    for entry in entries {
        register_entry(&mut data, entry);
    }
    data
}

/// Register an entry, replacing any entry with the same id in place
pub fn register_entry(data: &mut CatalogData, entry: BuildableEntry) {
    let key = entry.id.as_str().to_string();

    if let Some(&index) = data.id_to_index.get(&key) {
        log::debug!("Catalog: replacing entry '{}' at index {}", key, index);
        data.entries[index] = entry;
        return;
    }

    let index = data.entries.len();
    data.entries.push(entry);
    data.id_to_index.insert(key, index);
}

/// Get an entry by symbolic id
pub fn find<'a>(data: &'a CatalogData, id: &str) -> Option<&'a BuildableEntry> {
    data.id_to_index.get(id).map(|&index| &data.entries[index])
}

/// Get an entry by symbolic id for mutation
pub fn find_mut<'a>(data: &'a mut CatalogData, id: &str) -> Option<&'a mut BuildableEntry> {
    match data.id_to_index.get(id) {
        Some(&index) => data.entries.get_mut(index),
        None => None,
    }
}

/// All entries matching a predicate, in registration order
pub fn all_entries_where<'a>(
    data: &'a CatalogData,
    predicate: &dyn Fn(&BuildableEntry) -> bool,
) -> Vec<&'a BuildableEntry> {
    data.entries.iter().filter(|entry| predicate(entry)).collect()
}

/// Number of registered entries
pub fn len(data: &CatalogData) -> usize {
    data.entries.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRegistry, CostDescriptor};

    #[test]
    fn test_register_and_find() {
        let mut data = create_catalog();
        register_entry(&mut data, BuildableEntry::new("BoneWall"));
        register_entry(&mut data, BuildableEntry::material("BlocksGranite", "StoneBlocks"));

        assert_eq!(len(&data), 2);
        assert!(find(&data, "BoneWall").is_some());
        assert!(find(&data, "SkullFloor").is_none());
        assert!(data.contains("BlocksGranite"));
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut data = catalog_from_entries([
            BuildableEntry::new("BoneWall"),
            BuildableEntry::new("SkullFloor"),
        ]);
        register_entry(
            &mut data,
            BuildableEntry::new("BoneWall").with_cost(CostDescriptor::single("Skull", 4)),
        );

        assert_eq!(len(&data), 2);
        assert_eq!(data.entries[0].id.as_str(), "BoneWall");
        assert_eq!(
            find(&data, "BoneWall").and_then(|e| e.cost.clone()),
            Some(CostDescriptor::single("Skull", 4))
        );
    }

    #[test]
    fn test_find_mut_edits_shared_entry() {
        let mut data = catalog_from_entries([BuildableEntry::new("SkullPw")]);
        if let Some(entry) = find_mut(&mut data, "SkullPw") {
            entry.cost = Some(CostDescriptor::Stuff { count: 2 });
        }
        assert_eq!(
            find(&data, "SkullPw").and_then(|e| e.cost.as_ref()?.stuff_count()),
            Some(2)
        );
    }

    #[test]
    fn test_all_entries_where_keeps_order() {
        let data = catalog_from_entries([
            BuildableEntry::material("BlocksMarble", "StoneBlocks"),
            BuildableEntry::new("BoneWall"),
            BuildableEntry::material("BlocksGranite", "StoneBlocks"),
        ]);
        let ids: Vec<&str> = all_entries_where(&data, &|e| e.has_thing_category("StoneBlocks"))
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["BlocksMarble", "BlocksGranite"]);
    }
}
