//! Overlay Operations - Pure DOP Functions
//!
//! `apply` is a function of (settings, registry state) -> registry state.
//! Every touched field is overwritten wholesale, never patched, so the
//! result does not depend on earlier passes.

use super::overlay_data::{ApplyReport, Representation};
use crate::catalog::{CatalogRegistry, CostDescriptor, Visibility};
use crate::diagnostics::{OverlayEvent, OverlayObserver};
use crate::error::OverlayError;
use crate::groups::{GroupKind, MaterialMode};
use crate::settings::OverlaySettings;
use crate::variants::{group, GroupIndex, VariantIndex};

/// Bring every tracked entry in line with `settings`
pub fn apply(
    settings: &OverlaySettings,
    index: &VariantIndex,
    registry: &mut dyn CatalogRegistry,
    observer: &mut dyn OverlayObserver,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    apply_wall(settings, index, registry, observer, &mut report);
    for kind in GroupKind::FLOOR_GROUPS {
        apply_floor_group(kind, settings, index, registry, observer, &mut report);
    }

    report
}

fn skip(
    report: &mut ApplyReport,
    observer: &mut dyn OverlayObserver,
    kind: GroupKind,
    error: OverlayError,
) {
    if let OverlayError::NotFound { id } = &error {
        observer.record(OverlayEvent::EntryMissing {
            id: id.clone(),
            context: "overlay",
        });
    }
    observer.record(OverlayEvent::GroupSkipped {
        group: kind,
        reason: error.to_string(),
    });
    report.skipped.push(error);
}

/// Available group index, or record why the group is skipped
fn available_group<'a>(
    index: &'a VariantIndex,
    kind: GroupKind,
    report: &mut ApplyReport,
    observer: &mut dyn OverlayObserver,
) -> Option<&'a GroupIndex> {
    match group(index, kind) {
        Some(g) if g.available => Some(g),
        _ => {
            skip(
                report,
                observer,
                kind,
                OverlayError::GroupUnavailable {
                    group: kind.to_string(),
                    missing: index.config.base_id(kind).to_string(),
                },
            );
            None
        }
    }
}

fn apply_wall(
    settings: &OverlaySettings,
    index: &VariantIndex,
    registry: &mut dyn CatalogRegistry,
    observer: &mut dyn OverlayObserver,
    report: &mut ApplyReport,
) {
    let Some(wall) = available_group(index, GroupKind::Wall, report, observer) else {
        return;
    };
    let config = &index.config;
    let mode = settings.wall_mode();
    let count = settings.cost_for(GroupKind::Wall, mode);

    // Primary mode pays with a specific material that has to exist
    if mode == MaterialMode::Primary && !registry.contains(&config.primary_material_id) {
        skip(
            report,
            observer,
            GroupKind::Wall,
            OverlayError::NotFound {
                id: config.primary_material_id.clone(),
            },
        );
        return;
    }

    let Some(entry) = registry.find_mut(wall.base_id.as_str()) else {
        skip(
            report,
            observer,
            GroupKind::Wall,
            OverlayError::NotFound {
                id: wall.base_id.to_string(),
            },
        );
        return;
    };

    match mode {
        MaterialMode::Alternate => {
            entry.cost = Some(CostDescriptor::Stuff { count });
            if !entry.has_stuff_category(&config.stuff_category) {
                entry.stuff_categories.push(config.stuff_category.clone());
            }
        }
        MaterialMode::Primary => {
            entry.cost = Some(CostDescriptor::single(config.primary_material_id.as_str(), count));
            entry.stuff_categories.retain(|c| c != &config.stuff_category);
        }
    }

    observer.record(OverlayEvent::EntryUpdated {
        id: wall.base_id.to_string(),
        summary: format!("{} cost {}", mode, count),
    });
    observer.record(OverlayEvent::GroupApplied {
        group: GroupKind::Wall,
        mode,
        entries: 1,
    });
    report.entries_updated += 1;
    report.applied.push((GroupKind::Wall, mode));
}

fn apply_floor_group(
    kind: GroupKind,
    settings: &OverlaySettings,
    index: &VariantIndex,
    registry: &mut dyn CatalogRegistry,
    observer: &mut dyn OverlayObserver,
    report: &mut ApplyReport,
) {
    let Some(g) = available_group(index, kind, report, observer) else {
        return;
    };
    let config = &index.config;
    let mode = settings.floor_mode();

    // All checks run before any entry is touched
    if !registry.contains(g.base_id.as_str()) {
        skip(
            report,
            observer,
            kind,
            OverlayError::NotFound {
                id: g.base_id.to_string(),
            },
        );
        return;
    }
    if mode == MaterialMode::Primary && !registry.contains(&config.primary_material_id) {
        skip(
            report,
            observer,
            kind,
            OverlayError::NotFound {
                id: config.primary_material_id.clone(),
            },
        );
        return;
    }

    // Both sides get their configured cost, visible or not
    let primary_count = settings.cost_for(kind, MaterialMode::Primary);
    let alternate_count = settings.cost_for(kind, MaterialMode::Alternate);
    let mut updated = 0;

    // The base cost names the primary material, so it is left alone while
    // that material is absent (only possible in alternate mode)
    let primary_present = registry.contains(&config.primary_material_id);

    if let Some(base) = registry.find_mut(g.base_id.as_str()) {
        if primary_present {
            base.cost = Some(CostDescriptor::single(
                config.primary_material_id.as_str(),
                primary_count,
            ));
        }
        base.visibility = match mode {
            MaterialMode::Alternate => Visibility::hidden(),
            MaterialMode::Primary => Visibility::shown(&config.floors_category),
        };
        updated += 1;
    }

    for variant in &g.variants {
        let Some(entry) = registry.find_mut(variant.entry_id.as_str()) else {
            // Only this family's variant is affected
            let error = OverlayError::NotFound {
                id: variant.entry_id.to_string(),
            };
            observer.record(OverlayEvent::EntryMissing {
                id: variant.entry_id.to_string(),
                context: "variant",
            });
            report.skipped.push(error);
            continue;
        };

        entry.cost = Some(CostDescriptor::single(
            variant.material_id.clone(),
            alternate_count,
        ));
        entry.visibility = match mode {
            MaterialMode::Alternate => Visibility::shown(&config.floors_category),
            MaterialMode::Primary => Visibility::hidden(),
        };
        observer.record(OverlayEvent::EntryUpdated {
            id: variant.entry_id.to_string(),
            summary: format!(
                "{}, {} x{}",
                if mode.is_alternate() { "shown" } else { "hidden" },
                variant.material_id,
                alternate_count
            ),
        });
        updated += 1;
    }

    observer.record(OverlayEvent::GroupApplied {
        group: kind,
        mode,
        entries: updated,
    });
    report.entries_updated += updated;
    report.applied.push((kind, mode));
}

/// Restore every tracked entry to the state captured when the index was built
///
/// Returns the number of entries restored.
pub fn revert(
    index: &VariantIndex,
    registry: &mut dyn CatalogRegistry,
    observer: &mut dyn OverlayObserver,
) -> usize {
    let mut restored = 0;
    for original in &index.originals {
        match registry.find_mut(original.id.as_str()) {
            Some(entry) => {
                entry.cost = original.cost.clone();
                entry.stuff_categories = original.stuff_categories.clone();
                entry.visibility = original.visibility.clone();
                observer.record(OverlayEvent::EntryUpdated {
                    id: original.id.to_string(),
                    summary: "restored".to_string(),
                });
                restored += 1;
            }
            None => observer.record(OverlayEvent::EntryMissing {
                id: original.id.to_string(),
                context: "revert",
            }),
        }
    }
    restored
}

/// Which side of a floor-like group the registry currently offers
pub fn representation(
    index: &VariantIndex,
    registry: &dyn CatalogRegistry,
    kind: GroupKind,
) -> Representation {
    let Some(g) = group(index, kind) else {
        return Representation::Unavailable;
    };
    let Some(base) = registry.find(g.base_id.as_str()) else {
        return Representation::Unavailable;
    };

    let base_shown = base.visibility.is_shown();
    let shown: Vec<bool> = g
        .variants
        .iter()
        .filter_map(|v| registry.find(v.entry_id.as_str()))
        .map(|e| e.visibility.is_shown())
        .collect();
    let all_shown = shown.iter().all(|s| *s);
    let none_shown = shown.iter().all(|s| !*s);

    match (base_shown, all_shown, none_shown) {
        (true, _, true) => Representation::Base,
        (false, true, _) => Representation::Variants,
        _ => Representation::Inconsistent,
    }
}
