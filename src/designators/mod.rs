//! Designator lists
//!
//! The host builds one ordered list of UI entries per designation category.
//! Entries are opaque to the overlay; it only relies on the `UiEntry`
//! capabilities below.

pub mod discovery;
pub mod sync_operations;

pub use discovery::{
    candidate_accessors, locate, AccessStyle, Accessor, AccessorInfo, CategoryContainer,
    DeclaredType, Discovery, EntryContainer, ListHandle, Probe, SlotValue, Strategy,
};
pub use sync_operations::{classify_entry, filter, synchronize, FilterReport};

use crate::catalog::DefId;
use std::fmt;

/// An entry of a designator list
pub trait UiEntry: fmt::Debug {
    /// Buildable placed by this entry, if it places one
    fn buildable_id(&self) -> Option<&str>;

    /// Entries bundled behind this one, for composite "pick one of" entries
    fn nested_entries(&self) -> Option<&[Box<dyn UiEntry>]> {
        None
    }

    fn label(&self) -> String {
        self.buildable_id().unwrap_or("<unnamed>").to_string()
    }
}

/// Ordered designator list as stored by the host
pub type EntryList = Vec<Box<dyn UiEntry>>;

/// Places exactly one buildable
#[derive(Debug, Clone)]
pub struct BuildDesignator {
    pub buildable: DefId,
}

impl BuildDesignator {
    pub fn new(buildable: impl Into<DefId>) -> Self {
        Self {
            buildable: buildable.into(),
        }
    }
}

impl UiEntry for BuildDesignator {
    fn buildable_id(&self) -> Option<&str> {
        Some(self.buildable.as_str())
    }
}

/// Bundles several entries behind one control
#[derive(Debug)]
pub struct DropdownDesignator {
    pub label: String,
    pub elements: EntryList,
}

impl DropdownDesignator {
    pub fn new(label: impl Into<String>, elements: EntryList) -> Self {
        Self {
            label: label.into(),
            elements,
        }
    }
}

impl UiEntry for DropdownDesignator {
    fn buildable_id(&self) -> Option<&str> {
        None
    }

    fn nested_entries(&self) -> Option<&[Box<dyn UiEntry>]> {
        Some(&self.elements)
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}

/// Entry that places nothing (cancel, deconstruct, ...)
#[derive(Debug, Clone)]
pub struct ToolDesignator {
    pub label: String,
}

impl ToolDesignator {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl UiEntry for ToolDesignator {
    fn buildable_id(&self) -> Option<&str> {
        None
    }

    fn label(&self) -> String {
        self.label.clone()
    }
}
