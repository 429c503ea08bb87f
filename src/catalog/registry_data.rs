//! Catalog Registry Data - Pure DOP
//!
//! NO METHODS. Just data.
//! All transformations happen in registry_operations.rs

use super::BuildableEntry;
use std::collections::HashMap;

/// In-memory catalog data
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    /// All registered entries, in registration order
    pub entries: Vec<BuildableEntry>,
    /// Map from symbolic id to index in `entries`
    pub id_to_index: HashMap<String, usize>,
}
