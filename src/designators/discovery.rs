//! List discovery
//!
//! The host does not promise where a category keeps its entry list. The
//! container is probed through a fixed set of accessors: the configured field
//! names, then the configured property names, then every accessor it declares
//! with an entry-list type. Nothing outside these strategies is guessed.

use super::EntryList;
use crate::config::OverlayConfig;
use std::fmt;

/// How an accessor is reached on the host object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessStyle {
    Field,
    Property,
}

/// A named accessor on a container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Accessor {
    pub style: AccessStyle,
    pub name: String,
}

impl Accessor {
    pub fn field(name: impl Into<String>) -> Self {
        Self {
            style: AccessStyle::Field,
            name: name.into(),
        }
    }

    pub fn property(name: impl Into<String>) -> Self {
        Self {
            style: AccessStyle::Property,
            name: name.into(),
        }
    }
}

impl fmt::Display for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            AccessStyle::Field => write!(f, "field {}", self.name),
            AccessStyle::Property => write!(f, "property {}", self.name),
        }
    }
}

/// Declared type of an accessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    /// Ordered sequence of UI entries
    EntryList,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorInfo {
    pub accessor: Accessor,
    pub declared: DeclaredType,
}

/// Result of probing one accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// No such accessor
    Missing,
    /// Accessor exists but currently holds nothing
    Null,
    /// Accessor holds something other than an entry list
    Mismatched,
    /// Accessor holds an entry list
    EntryList,
}

/// Host object owning a category's designator list
pub trait EntryContainer {
    /// Designation category this container belongs to
    fn category_id(&self) -> &str;

    fn probe(&self, accessor: &Accessor) -> Probe;

    /// Every accessor the container declares, in declaration order
    fn accessors(&self) -> Vec<AccessorInfo>;

    /// Mutable access to the list behind an accessor that probed as `EntryList`
    fn entry_list_mut(&mut self, accessor: &Accessor) -> Option<&mut EntryList>;
}

/// Which strategy found the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Position in the candidate order (fields first, then properties)
    Candidate(usize),
    /// Declared-type scan over every accessor
    Scan,
}

/// A located entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListHandle {
    pub accessor: Accessor,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    Found(ListHandle),
    NotFound,
}

impl Discovery {
    pub fn handle(&self) -> Option<&ListHandle> {
        match self {
            Discovery::Found(handle) => Some(handle),
            Discovery::NotFound => None,
        }
    }
}

/// Candidate accessors in priority order
pub fn candidate_accessors(config: &OverlayConfig) -> Vec<Accessor> {
    config
        .list_field_candidates
        .iter()
        .map(Accessor::field)
        .chain(config.list_property_candidates.iter().map(Accessor::property))
        .collect()
}

/// Find the accessor holding the container's entry list
pub fn locate(container: &dyn EntryContainer, config: &OverlayConfig) -> Discovery {
    for (position, accessor) in candidate_accessors(config).into_iter().enumerate() {
        if container.probe(&accessor) == Probe::EntryList {
            return Discovery::Found(ListHandle {
                accessor,
                strategy: Strategy::Candidate(position),
            });
        }
    }

    for info in container.accessors() {
        if info.declared == DeclaredType::EntryList
            && container.probe(&info.accessor) == Probe::EntryList
        {
            return Discovery::Found(ListHandle {
                accessor: info.accessor,
                strategy: Strategy::Scan,
            });
        }
    }

    Discovery::NotFound
}

/// What a slot of a `CategoryContainer` holds
#[derive(Debug)]
pub enum SlotValue {
    /// Entry list; `None` while the host has not built it
    Entries(Option<EntryList>),
    /// Anything else, described by its type name
    Other(String),
}

#[derive(Debug)]
struct Slot {
    accessor: Accessor,
    value: SlotValue,
}

/// Container made of named slots
///
/// Hosts without their own container type can describe a category with it,
/// laying slots out however their UI code does.
#[derive(Debug)]
pub struct CategoryContainer {
    category: String,
    slots: Vec<Slot>,
}

impl CategoryContainer {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            slots: Vec::new(),
        }
    }

    pub fn with_slot(mut self, accessor: Accessor, value: SlotValue) -> Self {
        self.slots.push(Slot { accessor, value });
        self
    }

    pub fn with_entries(self, accessor: Accessor, entries: EntryList) -> Self {
        self.with_slot(accessor, SlotValue::Entries(Some(entries)))
    }

    /// Entry list behind `accessor`, if that slot holds one
    pub fn entries(&self, accessor: &Accessor) -> Option<&EntryList> {
        self.slots
            .iter()
            .find(|slot| &slot.accessor == accessor)
            .and_then(|slot| match &slot.value {
                SlotValue::Entries(list) => list.as_ref(),
                SlotValue::Other(_) => None,
            })
    }
}

impl EntryContainer for CategoryContainer {
    fn category_id(&self) -> &str {
        &self.category
    }

    fn probe(&self, accessor: &Accessor) -> Probe {
        match self.slots.iter().find(|slot| &slot.accessor == accessor) {
            None => Probe::Missing,
            Some(slot) => match &slot.value {
                SlotValue::Entries(None) => Probe::Null,
                SlotValue::Entries(Some(_)) => Probe::EntryList,
                SlotValue::Other(_) => Probe::Mismatched,
            },
        }
    }

    fn accessors(&self) -> Vec<AccessorInfo> {
        self.slots
            .iter()
            .map(|slot| AccessorInfo {
                accessor: slot.accessor.clone(),
                declared: match &slot.value {
                    SlotValue::Entries(_) => DeclaredType::EntryList,
                    SlotValue::Other(type_name) => DeclaredType::Other(type_name.clone()),
                },
            })
            .collect()
    }

    fn entry_list_mut(&mut self, accessor: &Accessor) -> Option<&mut EntryList> {
        self.slots
            .iter_mut()
            .find(|slot| &slot.accessor == accessor)
            .and_then(|slot| match &mut slot.value {
                SlotValue::Entries(list) => list.as_mut(),
                SlotValue::Other(_) => None,
            })
    }
}
