//! Overlay constants
//!
//! Naming conventions of the shared catalog and the cost bounds of the
//! settings surface. `OverlayConfig` starts from these values.

/// Catalog identifiers used by the host content pack
pub mod catalog {
    /// Wall buildable whose cost switches between skulls and stone blocks
    pub const WALL_ID: &str = "BoneWall";

    /// Primary raw material (used when the alternate mode is off)
    pub const PRIMARY_MATERIAL_ID: &str = "Skull";

    /// Stuff category added to the wall in alternate mode
    pub const STUFF_CATEGORY: &str = "Stony";

    /// Thing category that marks a raw-material family
    pub const MATERIAL_CATEGORY: &str = "StoneBlocks";

    /// Token stripped from a material id to obtain the family name
    /// (`BlocksGranite` -> `Granite`)
    pub const FAMILY_TOKEN: &str = "Blocks";

    /// Designation category the floor-like groups are listed under
    pub const FLOORS_CATEGORY: &str = "Floors";

    pub const FLOOR_BASE_ID: &str = "SkullFloor";
    pub const FINE_FLOOR_BASE_ID: &str = "SkullFloorFine";
    pub const PATHWAY_BASE_ID: &str = "SkullPw";
}

/// Settings bounds and defaults
pub mod settings {
    /// Lowest cost the settings surface accepts
    pub const MIN_COST: u32 = 1;

    /// Highest cost the settings surface accepts
    pub const MAX_COST: u32 = 20;

    pub const DEFAULT_WALL_COST: u32 = 3;
    pub const DEFAULT_FLOOR_COST: u32 = 3;
    pub const DEFAULT_FINE_FLOOR_COST: u32 = 7;
    pub const DEFAULT_PATHWAY_COST: u32 = 1;

    /// File name used by the TOML settings store
    pub const FILENAME: &str = "ivory_overlay.toml";
}

/// Accessor names probed when looking for a category's entry list
pub mod discovery {
    /// Field-style accessors, highest priority first
    pub const FIELD_CANDIDATES: [&str; 4] = [
        "allResolvedDesignators",
        "resolvedDesignators",
        "designators",
        "allDesignators",
    ];

    /// Property-style accessors, probed after every field candidate
    pub const PROPERTY_CANDIDATES: [&str; 4] = [
        "AllResolvedDesignators",
        "ResolvedDesignators",
        "Designators",
        "AllDesignators",
    ];
}
