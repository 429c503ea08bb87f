//! Settings Data
//!
//! One immutable snapshot of the user's toggles and costs.

use crate::constants::settings::*;
use crate::groups::{GroupKind, MaterialMode};
use serde::{Deserialize, Serialize};

/// Cost of one group under each material mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPair {
    /// Skulls per build, used in primary mode
    pub primary: u32,
    /// Stone blocks per build, used in alternate mode
    pub alternate: u32,
}

impl CostPair {
    pub const fn uniform(cost: u32) -> Self {
        Self {
            primary: cost,
            alternate: cost,
        }
    }

    pub fn for_mode(&self, mode: MaterialMode) -> u32 {
        match mode {
            MaterialMode::Primary => self.primary,
            MaterialMode::Alternate => self.alternate,
        }
    }

    fn clamped(self) -> Self {
        Self {
            primary: self.primary.clamp(MIN_COST, MAX_COST),
            alternate: self.alternate.clamp(MIN_COST, MAX_COST),
        }
    }
}

/// Settings snapshot
///
/// Every field has a default so older or partial files still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    pub use_alternate_material_for_walls: bool,
    /// Shared by the floor, fine-floor and pathway groups
    pub use_alternate_material_for_floors: bool,

    pub wall_cost: CostPair,
    pub floor_cost: CostPair,
    pub fine_floor_cost: CostPair,
    pub pathway_cost: CostPair,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            use_alternate_material_for_walls: false,
            use_alternate_material_for_floors: false,
            wall_cost: CostPair::uniform(DEFAULT_WALL_COST),
            floor_cost: CostPair::uniform(DEFAULT_FLOOR_COST),
            fine_floor_cost: CostPair::uniform(DEFAULT_FINE_FLOOR_COST),
            pathway_cost: CostPair::uniform(DEFAULT_PATHWAY_COST),
        }
    }
}

impl OverlaySettings {
    pub fn wall_mode(&self) -> MaterialMode {
        MaterialMode::from_toggle(self.use_alternate_material_for_walls)
    }

    pub fn floor_mode(&self) -> MaterialMode {
        MaterialMode::from_toggle(self.use_alternate_material_for_floors)
    }

    /// Mode currently selected for a group
    pub fn mode_for(&self, group: GroupKind) -> MaterialMode {
        match group {
            GroupKind::Wall => self.wall_mode(),
            _ => self.floor_mode(),
        }
    }

    pub fn costs_for(&self, group: GroupKind) -> CostPair {
        match group {
            GroupKind::Wall => self.wall_cost,
            GroupKind::Floor => self.floor_cost,
            GroupKind::FineFloor => self.fine_floor_cost,
            GroupKind::Pathway => self.pathway_cost,
        }
    }

    pub fn cost_for(&self, group: GroupKind, mode: MaterialMode) -> u32 {
        self.costs_for(group).for_mode(mode)
    }

    /// Cost of a group under its currently selected mode
    pub fn active_cost(&self, group: GroupKind) -> u32 {
        self.cost_for(group, self.mode_for(group))
    }

    /// Copy with every cost held to the range the settings surface allows
    pub fn clamped(&self) -> Self {
        Self {
            wall_cost: self.wall_cost.clamped(),
            floor_cost: self.floor_cost.clamped(),
            fine_floor_cost: self.fine_floor_cost.clamped(),
            pathway_cost: self.pathway_cost.clamped(),
            ..*self
        }
    }

    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = OverlaySettings::default();
        assert_eq!(settings.wall_cost, CostPair::uniform(3));
        assert_eq!(settings.floor_cost, CostPair::uniform(3));
        assert_eq!(settings.fine_floor_cost, CostPair::uniform(7));
        assert_eq!(settings.pathway_cost, CostPair::uniform(1));
        assert_eq!(settings.wall_mode(), MaterialMode::Primary);
        assert_eq!(settings.floor_mode(), MaterialMode::Primary);
    }

    #[test]
    fn test_cost_lookup_follows_mode() {
        let settings = OverlaySettings {
            use_alternate_material_for_floors: true,
            fine_floor_cost: CostPair {
                primary: 9,
                alternate: 4,
            },
            ..OverlaySettings::default()
        };
        assert_eq!(settings.active_cost(GroupKind::FineFloor), 4);
        assert_eq!(
            settings.cost_for(GroupKind::FineFloor, MaterialMode::Primary),
            9
        );
        assert_eq!(settings.mode_for(GroupKind::Wall), MaterialMode::Primary);
    }

    #[test]
    fn test_clamped() {
        let settings = OverlaySettings {
            wall_cost: CostPair {
                primary: 0,
                alternate: 45,
            },
            ..OverlaySettings::default()
        };
        let clamped = settings.clamped();
        assert_eq!(clamped.wall_cost, CostPair { primary: 1, alternate: 20 });
        assert_eq!(clamped.pathway_cost, settings.pathway_cost);
    }

    #[test]
    fn test_reset_to_defaults() {
        let mut settings = OverlaySettings {
            use_alternate_material_for_walls: true,
            pathway_cost: CostPair::uniform(12),
            ..OverlaySettings::default()
        };
        settings.reset_to_defaults();
        assert_eq!(settings, OverlaySettings::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: OverlaySettings = toml::from_str(
            "use_alternate_material_for_walls = true\n[wall_cost]\nprimary = 5\nalternate = 4\n",
        )
        .expect("partial settings should parse");
        assert!(settings.use_alternate_material_for_walls);
        assert_eq!(settings.wall_cost, CostPair { primary: 5, alternate: 4 });
        assert_eq!(settings.fine_floor_cost, CostPair::uniform(7));
    }
}
