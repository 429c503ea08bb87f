//! List Synchronization - Pure DOP Functions
//!
//! Keeps a category's designator list consistent with the material mode.
//! Operates on the list in place with a stable partition.

use super::discovery::{locate, Discovery};
use super::{EntryContainer, EntryList, UiEntry};
use crate::diagnostics::{OverlayEvent, OverlayObserver};
use crate::error::{OptionExt, OverlayError, OverlayResult};
use crate::groups::MaterialMode;
use crate::variants::{classify_id, EntryRole, VariantIndex};

/// Outcome of one `filter` pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub kept: usize,
    /// Labels of dropped entries, in list order
    pub dropped: Vec<String>,
}

/// Role of a list entry
///
/// Composites are variant holders as soon as any nested entry, at any depth,
/// is a variant. Otherwise they count as unrelated, even when they bundle
/// base entries.
pub fn classify_entry(entry: &dyn UiEntry, index: &VariantIndex) -> EntryRole {
    if let Some(nested) = entry.nested_entries() {
        return nested
            .iter()
            .map(|inner| classify_entry(inner.as_ref(), index))
            .find(|role| matches!(role, EntryRole::Variant(_)))
            .unwrap_or(EntryRole::Unrelated);
    }

    match entry.buildable_id() {
        Some(id) => classify_id(index, id),
        None => EntryRole::Unrelated,
    }
}

fn keeps(role: EntryRole, mode: MaterialMode) -> bool {
    match role {
        EntryRole::Unrelated => true,
        EntryRole::Base(_) => !mode.is_alternate(),
        EntryRole::Variant(_) => mode.is_alternate(),
    }
}

/// Drop every entry that does not belong to `mode`
pub fn filter(list: &mut EntryList, index: &VariantIndex, mode: MaterialMode) -> FilterReport {
    let mut report = FilterReport::default();

    list.retain(|entry| {
        let keep = keeps(classify_entry(entry.as_ref(), index), mode);
        if !keep {
            report.dropped.push(entry.label());
        }
        keep
    });

    report.kept = list.len();
    report
}

/// Locate a container's list and filter it
///
/// Returns `DiscoveryFailure` when no list could be found; the caller skips
/// list work for that container and carries on.
pub fn synchronize(
    container: &mut dyn EntryContainer,
    index: &VariantIndex,
    mode: MaterialMode,
    observer: &mut dyn OverlayObserver,
) -> OverlayResult<FilterReport> {
    let category = container.category_id().to_string();

    let handle = match locate(&*container, &index.config) {
        Discovery::Found(handle) => handle,
        Discovery::NotFound => {
            observer.record(OverlayEvent::ListNotFound {
                category: category.clone(),
            });
            return Err(OverlayError::DiscoveryFailure { category });
        }
    };

    observer.record(OverlayEvent::ListLocated {
        category: category.clone(),
        accessor: handle.accessor.to_string(),
    });

    let list = container
        .entry_list_mut(&handle.accessor)
        .ok_or_overlay(|| OverlayError::DiscoveryFailure {
            category: category.clone(),
        })?;

    let report = filter(list, index, mode);

    for label in &report.dropped {
        observer.record(OverlayEvent::EntryDropped {
            label: label.clone(),
        });
    }
    observer.record(OverlayEvent::ListFiltered {
        category,
        kept: report.kept,
        dropped: report.dropped.len(),
    });

    Ok(report)
}
