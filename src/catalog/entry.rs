use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbolic identifier of a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefId(pub String);

impl DefId {
    pub fn new(id: impl Into<String>) -> Self {
        DefId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DefId {
    fn from(id: &str) -> Self {
        DefId(id.to_string())
    }
}

impl From<String> for DefId {
    fn from(id: String) -> Self {
        DefId(id)
    }
}

/// One `(material, quantity)` pair of a fixed cost list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostItem {
    pub material: DefId,
    pub count: u32,
}

impl CostItem {
    pub fn new(material: impl Into<DefId>, count: u32) -> Self {
        Self {
            material: material.into(),
            count,
        }
    }
}

/// How a buildable is paid for
///
/// The two shapes are exclusive: writing one replaces the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CostDescriptor {
    /// Specific materials in fixed quantities
    Fixed { items: Vec<CostItem> },
    /// Any material of the entry's stuff categories, `count` units per build
    Stuff { count: u32 },
}

impl CostDescriptor {
    /// Fixed cost list holding exactly one pair
    pub fn single(material: impl Into<DefId>, count: u32) -> Self {
        CostDescriptor::Fixed {
            items: vec![CostItem::new(material, count)],
        }
    }

    pub fn fixed_items(&self) -> Option<&[CostItem]> {
        match self {
            CostDescriptor::Fixed { items } => Some(items),
            CostDescriptor::Stuff { .. } => None,
        }
    }

    pub fn stuff_count(&self) -> Option<u32> {
        match self {
            CostDescriptor::Stuff { count } => Some(*count),
            CostDescriptor::Fixed { .. } => None,
        }
    }
}

/// Whether an entry is offered in a designation category
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Visibility {
    pub designation_category: Option<String>,
    pub can_generate: bool,
}

impl Visibility {
    pub fn shown(category: &str) -> Self {
        Self {
            designation_category: Some(category.to_string()),
            can_generate: true,
        }
    }

    pub fn hidden() -> Self {
        Self {
            designation_category: None,
            can_generate: false,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.designation_category.is_some() && self.can_generate
    }
}

/// A catalog record: a constructible option or a raw material
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildableEntry {
    pub id: DefId,
    /// `None` for raw materials and free buildables
    #[serde(default)]
    pub cost: Option<CostDescriptor>,
    /// Stuff categories accepted by a `CostDescriptor::Stuff` cost
    #[serde(default)]
    pub stuff_categories: Vec<String>,
    /// Categories this record belongs to (`StoneBlocks` for materials)
    #[serde(default)]
    pub thing_categories: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
}

impl BuildableEntry {
    pub fn new(id: impl Into<DefId>) -> Self {
        Self {
            id: id.into(),
            cost: None,
            stuff_categories: Vec::new(),
            thing_categories: Vec::new(),
            visibility: Visibility::hidden(),
        }
    }

    /// Raw material record tagged with a thing category
    pub fn material(id: impl Into<DefId>, category: &str) -> Self {
        let mut entry = Self::new(id);
        entry.thing_categories.push(category.to_string());
        entry
    }

    pub fn with_cost(mut self, cost: CostDescriptor) -> Self {
        self.cost = Some(cost);
        self
    }

    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn has_thing_category(&self, category: &str) -> bool {
        self.thing_categories.iter().any(|c| c == category)
    }

    pub fn has_stuff_category(&self, category: &str) -> bool {
        self.stuff_categories.iter().any(|c| c == category)
    }
}
