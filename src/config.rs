//! Overlay configuration
//!
//! Naming conventions the overlay relies on. Every field defaults to the
//! values in `constants`, so a config file only lists what a content pack
//! renames.

use crate::constants::{catalog, discovery};
use crate::error::{OverlayError, OverlayResult};
use crate::groups::GroupKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub wall_id: String,
    pub primary_material_id: String,
    pub stuff_category: String,
    pub material_category: String,
    pub family_token: String,
    pub floors_category: String,
    pub floor_base_id: String,
    pub fine_floor_base_id: String,
    pub pathway_base_id: String,

    /// Field accessors probed for the entry list, highest priority first
    pub list_field_candidates: Vec<String>,
    /// Property accessors probed after the fields
    pub list_property_candidates: Vec<String>,

    /// Log every touched entry and filtered list entry
    pub verbose_diagnostics: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            wall_id: catalog::WALL_ID.to_string(),
            primary_material_id: catalog::PRIMARY_MATERIAL_ID.to_string(),
            stuff_category: catalog::STUFF_CATEGORY.to_string(),
            material_category: catalog::MATERIAL_CATEGORY.to_string(),
            family_token: catalog::FAMILY_TOKEN.to_string(),
            floors_category: catalog::FLOORS_CATEGORY.to_string(),
            floor_base_id: catalog::FLOOR_BASE_ID.to_string(),
            fine_floor_base_id: catalog::FINE_FLOOR_BASE_ID.to_string(),
            pathway_base_id: catalog::PATHWAY_BASE_ID.to_string(),
            list_field_candidates: discovery::FIELD_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            list_property_candidates: discovery::PROPERTY_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            verbose_diagnostics: false,
        }
    }
}

impl OverlayConfig {
    /// Parse a config from TOML, filling missing fields with defaults
    pub fn from_toml_str(text: &str) -> OverlayResult<Self> {
        let config: OverlayConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Base entry id of a group (the wall id for `GroupKind::Wall`)
    pub fn base_id(&self, group: GroupKind) -> &str {
        match group {
            GroupKind::Wall => &self.wall_id,
            GroupKind::Floor => &self.floor_base_id,
            GroupKind::FineFloor => &self.fine_floor_base_id,
            GroupKind::Pathway => &self.pathway_base_id,
        }
    }

    /// Conventional variant id of a floor-like group for a material family
    pub fn variant_id(&self, group: GroupKind, family: &str) -> String {
        format!("{}{}", self.base_id(group), family)
    }

    /// Family name of a material id (`BlocksGranite` -> `Granite`)
    pub fn family_of(&self, material_id: &str) -> String {
        if self.family_token.is_empty() {
            return material_id.to_string();
        }
        material_id.replace(&self.family_token, "")
    }

    fn validate(&self) -> OverlayResult<()> {
        let required = [
            ("wall_id", &self.wall_id),
            ("primary_material_id", &self.primary_material_id),
            ("stuff_category", &self.stuff_category),
            ("material_category", &self.material_category),
            ("floors_category", &self.floors_category),
            ("floor_base_id", &self.floor_base_id),
            ("fine_floor_base_id", &self.fine_floor_base_id),
            ("pathway_base_id", &self.pathway_base_id),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(OverlayError::InvalidConfig {
                    field: field.to_string(),
                    value: value.clone(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        let bases = [
            &self.floor_base_id,
            &self.fine_floor_base_id,
            &self.pathway_base_id,
        ];
        for (i, a) in bases.iter().enumerate() {
            if bases[i + 1..].contains(a) {
                return Err(OverlayError::InvalidConfig {
                    field: "floor base ids".to_string(),
                    value: a.to_string(),
                    reason: "each floor-like group needs its own base id".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_id_composition() {
        let config = OverlayConfig::default();
        assert_eq!(
            config.variant_id(GroupKind::FineFloor, "Granite"),
            "SkullFloorFineGranite"
        );
        assert_eq!(config.variant_id(GroupKind::Pathway, "Slate"), "SkullPwSlate");
        assert_eq!(config.family_of("BlocksMarble"), "Marble");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = OverlayConfig::from_toml_str(
            "wall_id = \"IvoryWall\"\nverbose_diagnostics = true\n",
        )
        .expect("partial config should parse");
        assert_eq!(config.wall_id, "IvoryWall");
        assert_eq!(config.floor_base_id, "SkullFloor");
        assert!(config.verbose_diagnostics);
        assert_eq!(config.list_field_candidates.len(), 4);
    }

    #[test]
    fn test_duplicate_base_ids_rejected() {
        let result = OverlayConfig::from_toml_str("pathway_base_id = \"SkullFloor\"\n");
        assert!(matches!(result, Err(OverlayError::InvalidConfig { .. })));
    }
}
