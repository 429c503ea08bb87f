//! Catalog of buildable definitions
//!
//! The catalog is owned by the host. The overlay only reaches it through the
//! `CatalogRegistry` trait; `CatalogData` is the in-memory implementation used
//! by tests, fixtures and hosts without their own store.

mod entry;
pub mod fixture;
pub mod registry_data;
pub mod registry_operations;

pub use entry::{BuildableEntry, CostDescriptor, CostItem, DefId, Visibility};
pub use fixture::load_catalog_toml;
pub use registry_data::CatalogData;

/// Symbolic-id-keyed store of buildable definitions
pub trait CatalogRegistry {
    /// Look up an entry by symbolic id
    fn find(&self, id: &str) -> Option<&BuildableEntry>;

    /// Look up an entry for in-place mutation
    fn find_mut(&mut self, id: &str) -> Option<&mut BuildableEntry>;

    /// All entries matching the predicate, in registry order
    fn all_entries_where(&self, predicate: &dyn Fn(&BuildableEntry) -> bool)
        -> Vec<&BuildableEntry>;

    /// Check if an id is registered
    fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

impl CatalogRegistry for CatalogData {
    fn find(&self, id: &str) -> Option<&BuildableEntry> {
        registry_operations::find(self, id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut BuildableEntry> {
        registry_operations::find_mut(self, id)
    }

    fn all_entries_where(
        &self,
        predicate: &dyn Fn(&BuildableEntry) -> bool,
    ) -> Vec<&BuildableEntry> {
        registry_operations::all_entries_where(self, predicate)
    }
}
