//! Catalog fixtures
//!
//! Loads a catalog from a TOML description:
//!
//! ```toml
//! [[entry]]
//! id = "BlocksGranite"
//! thing_categories = ["StoneBlocks"]
//!
//! [[entry]]
//! id = "SkullFloor"
//! cost = { kind = "fixed", items = [{ material = "Skull", count = 3 }] }
//! visibility = { designation_category = "Floors", can_generate = true }
//! ```

use super::registry_data::CatalogData;
use super::registry_operations::{create_catalog, register_entry};
use super::BuildableEntry;
use crate::error::{OverlayError, OverlayResult};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    #[serde(default, rename = "entry")]
    entries: Vec<BuildableEntry>,
}

/// Parse a TOML catalog description into registry data
pub fn load_catalog_toml(text: &str) -> OverlayResult<CatalogData> {
    let fixture: CatalogFixture =
        toml::from_str(text).map_err(|e| OverlayError::DeserializationError {
            context: "catalog fixture".to_string(),
            error: e.to_string(),
        })?;

    let mut data = create_catalog();
    for entry in fixture.entries {
        if entry.id.as_str().is_empty() {
            return Err(OverlayError::InvalidConfig {
                field: "entry.id".to_string(),
                value: String::new(),
                reason: "catalog ids must not be empty".to_string(),
            });
        }
        register_entry(&mut data, entry);
    }

    log::debug!("Loaded catalog fixture with {} entries", data.entries.len());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogRegistry, CostDescriptor, Visibility};

    const FIXTURE: &str = r#"
        [[entry]]
        id = "BlocksGranite"
        thing_categories = ["StoneBlocks"]

        [[entry]]
        id = "BoneWall"
        cost = { kind = "fixed", items = [{ material = "Skull", count = 3 }] }

        [[entry]]
        id = "SkullFloorGranite"
        cost = { kind = "stuff", count = 2 }
        visibility = { designation_category = "Floors", can_generate = true }
    "#;

    #[test]
    fn test_load_fixture() {
        let data = load_catalog_toml(FIXTURE).expect("fixture should parse");

        assert_eq!(data.entries.len(), 3);
        let granite = data.find("BlocksGranite").expect("material registered");
        assert!(granite.has_thing_category("StoneBlocks"));
        assert_eq!(granite.cost, None);
        assert_eq!(granite.visibility, Visibility::hidden());

        let wall = data.find("BoneWall").expect("wall registered");
        assert_eq!(wall.cost, Some(CostDescriptor::single("Skull", 3)));

        let variant = data.find("SkullFloorGranite").expect("variant registered");
        assert_eq!(variant.cost, Some(CostDescriptor::Stuff { count: 2 }));
        assert!(variant.visibility.is_shown());
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = load_catalog_toml("[[entry]]\nid = \"\"\n");
        assert!(matches!(result, Err(OverlayError::InvalidConfig { .. })));
    }

    #[test]
    fn test_malformed_fixture() {
        let result = load_catalog_toml("[[entry]]\nid = 12\n");
        assert!(matches!(
            result,
            Err(OverlayError::DeserializationError { .. })
        ));
    }
}
