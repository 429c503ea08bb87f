//! Scheduler Operations - Pure DOP Functions
//!
//! Entry points for each host lifecycle event. They all funnel into the same
//! idempotent pass, so the order hosts fire them in does not matter.

use super::host::{HostEnvironment, HostLifecycle};
use super::scheduler_data::{ApplicationScheduler, PassReport, Trigger};
use crate::catalog::CatalogRegistry;
use crate::designators::{synchronize, EntryContainer};
use crate::diagnostics::{OverlayEvent, OverlayObserver};
use crate::error::OverlayError;
use crate::overlay::{apply, revert};
use crate::settings::{OverlaySettings, SettingsStore};
use crate::variants::VariantIndex;
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// CONSTRUCTION
// ============================================================================

pub fn create_scheduler<S, O>(
    store: S,
    index: VariantIndex,
    observer: O,
) -> ApplicationScheduler<S, O>
where
    S: SettingsStore,
    O: OverlayObserver,
{
    ApplicationScheduler {
        store,
        index,
        observer,
        settings_cached: None,
        applied_once: false,
    }
}

// ============================================================================
// LIFECYCLE ENTRY POINTS
// ============================================================================

/// Early attempt while the module is constructed
///
/// Settings may not be readable yet; the pass is then left to the deferred
/// trigger. Does nothing once the deferred pass has run.
pub fn on_module_init<S, O>(
    scheduler: &mut ApplicationScheduler<S, O>,
    env: &mut dyn HostEnvironment,
) -> PassReport
where
    S: SettingsStore,
    O: OverlayObserver,
{
    let trigger = Trigger::ModuleInit;
    if scheduler.applied_once {
        log::trace!("[Scheduler] Deferred pass already ran, skipping early attempt");
        return PassReport::skipped(trigger, None);
    }

    match scheduler.store.load() {
        Some(settings) => run_pass(scheduler, trigger, settings, env),
        None => {
            scheduler.observer.record(OverlayEvent::SettingsUnavailable {
                trigger: trigger.label(),
            });
            PassReport::unavailable(trigger)
        }
    }
}

/// Deferred pass after the host finished loading
///
/// Always runs. Falls back to default settings when the store still has none.
pub fn on_load_finished<S, O>(
    scheduler: &mut ApplicationScheduler<S, O>,
    env: &mut dyn HostEnvironment,
) -> PassReport
where
    S: SettingsStore,
    O: OverlayObserver,
{
    let trigger = Trigger::LoadFinished;
    let settings = match scheduler.store.load() {
        Some(settings) => settings,
        None => {
            scheduler.observer.record(OverlayEvent::SettingsUnavailable {
                trigger: trigger.label(),
            });
            OverlaySettings::default()
        }
    };

    let report = run_pass(scheduler, trigger, settings, env);
    scheduler.applied_once = true;
    report
}

/// User changed settings: persist, then re-apply
///
/// Returns `None` when `settings` matches the cached snapshot.
pub fn on_settings_changed<S, O>(
    scheduler: &mut ApplicationScheduler<S, O>,
    settings: OverlaySettings,
    env: &mut dyn HostEnvironment,
) -> Option<PassReport>
where
    S: SettingsStore,
    O: OverlayObserver,
{
    if scheduler.settings_cached == Some(settings) {
        log::trace!("[Scheduler] Settings unchanged, nothing to do");
        return None;
    }

    let save_error = match scheduler.store.save(&settings) {
        Ok(()) => {
            scheduler.observer.record(OverlayEvent::SettingsPersisted);
            None
        }
        Err(e) => {
            let error = OverlayError::from(e);
            scheduler.observer.record(OverlayEvent::SettingsSaveFailed {
                error: error.to_string(),
            });
            Some(error)
        }
    };

    let mut report = run_pass(scheduler, Trigger::SettingsChanged, settings, env);
    report.save_error = save_error;
    Some(report)
}

/// Best-effort list filter while the host resolves category UIs
///
/// Only the floors category is touched, and only once a snapshot is cached.
pub fn on_category_resolved<S, O>(
    scheduler: &mut ApplicationScheduler<S, O>,
    container: &mut dyn EntryContainer,
) -> PassReport
where
    S: SettingsStore,
    O: OverlayObserver,
{
    let trigger = Trigger::CategoryResolved;
    if container.category_id() != scheduler.index.config.floors_category {
        return PassReport::skipped(trigger, None);
    }

    let Some(settings) = scheduler.settings_cached else {
        scheduler.observer.record(OverlayEvent::SettingsUnavailable {
            trigger: trigger.label(),
        });
        return PassReport::unavailable(trigger);
    };

    let list = synchronize(
        container,
        &scheduler.index,
        settings.floor_mode(),
        &mut scheduler.observer,
    );

    PassReport {
        trigger,
        settings: Some(settings),
        apply: None,
        list: Some(list),
        skipped: None,
        save_error: None,
    }
}

/// Restore every tracked entry to its startup state
pub fn on_unload<S, O>(
    scheduler: &mut ApplicationScheduler<S, O>,
    registry: &mut dyn CatalogRegistry,
) -> usize
where
    S: SettingsStore,
    O: OverlayObserver,
{
    let restored = revert(&scheduler.index, registry, &mut scheduler.observer);
    scheduler.settings_cached = None;
    scheduler.applied_once = false;
    log::info!("[Scheduler] Overlay removed, {} entries restored", restored);
    restored
}

// ============================================================================
// PASS
// ============================================================================

/// Catalog overlay, then floors list sync when the host has that container
fn run_pass<S, O>(
    scheduler: &mut ApplicationScheduler<S, O>,
    trigger: Trigger,
    settings: OverlaySettings,
    env: &mut dyn HostEnvironment,
) -> PassReport
where
    S: SettingsStore,
    O: OverlayObserver,
{
    scheduler.settings_cached = Some(settings);

    let applied = apply(
        &settings,
        &scheduler.index,
        env.registry_mut(),
        &mut scheduler.observer,
    );

    let floors = scheduler.index.config.floors_category.clone();
    let list = env.category_container(&floors).map(|container| {
        synchronize(
            container,
            &scheduler.index,
            settings.floor_mode(),
            &mut scheduler.observer,
        )
    });

    scheduler.observer.record(OverlayEvent::PassCompleted {
        trigger: trigger.label(),
    });

    PassReport {
        trigger,
        settings: Some(settings),
        apply: Some(applied),
        list,
        skipped: None,
        save_error: None,
    }
}

// ============================================================================
// WIRING
// ============================================================================

/// Register the deferred pass and the floors category hook
pub fn install<S, O>(
    scheduler: &Rc<RefCell<ApplicationScheduler<S, O>>>,
    lifecycle: &mut dyn HostLifecycle,
) where
    S: SettingsStore + 'static,
    O: OverlayObserver + 'static,
{
    let deferred = Rc::clone(scheduler);
    lifecycle.on_load_finished(Box::new(move |env: &mut dyn HostEnvironment| {
        let mut scheduler = deferred.borrow_mut();
        on_load_finished(&mut *scheduler, env);
    }));

    let floors = scheduler.borrow().index.config.floors_category.clone();
    let resolved = Rc::clone(scheduler);
    lifecycle.on_category_resolved(
        &floors,
        Box::new(move |container: &mut dyn EntryContainer| {
            let mut scheduler = resolved.borrow_mut();
            on_category_resolved(&mut *scheduler, container);
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CostDescriptor, Visibility};
    use crate::designators::{Accessor, CategoryContainer, EntryList};
    use crate::diagnostics::RecordingObserver;
    use crate::error::OverlayError;
    use crate::groups::GroupKind;
    use crate::overlay::{representation, Representation};
    use crate::scheduler::host::{InMemoryHost, LifecycleQueue};
    use crate::settings::{MemorySettingsStore, SettingsError, SettingsResult};
    use crate::test_support::*;
    use std::path::PathBuf;

    type TestScheduler = ApplicationScheduler<MemorySettingsStore, RecordingObserver>;

    fn list_accessor() -> Accessor {
        Accessor::field("designators")
    }

    fn floors_container() -> CategoryContainer {
        let list: EntryList = vec![
            build("SkullFloor"),
            build("SkullFloorGranite"),
            build("SkullFloorMarble"),
            build("WoodPlankFloor"),
        ];
        CategoryContainer::new("Floors").with_entries(list_accessor(), list)
    }

    fn scheduler_with(store: MemorySettingsStore, host: &InMemoryHost) -> TestScheduler {
        create_scheduler(store, index_for(&host.catalog), RecordingObserver::new())
    }

    fn floors_on() -> OverlaySettings {
        OverlaySettings {
            use_alternate_material_for_floors: true,
            ..OverlaySettings::default()
        }
    }

    fn floor_labels(host: &InMemoryHost) -> Vec<String> {
        let container = host.container("Floors").expect("floors container");
        labels(container.entries(&list_accessor()).expect("floors list"))
    }

    #[test]
    fn test_module_init_without_settings_defers() {
        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler = scheduler_with(MemorySettingsStore::empty(), &host);

        let report = on_module_init(&mut scheduler, &mut host);

        assert!(!report.ran());
        assert_eq!(
            report.skipped,
            Some(OverlayError::SettingsUnavailable {
                trigger: "module init".to_string()
            })
        );
        assert_eq!(scheduler.settings_cached, None);
        assert_eq!(
            scheduler.observer.events,
            vec![OverlayEvent::SettingsUnavailable {
                trigger: "module init"
            }]
        );
    }

    #[test]
    fn test_module_init_with_settings_applies() {
        let mut host = InMemoryHost::new(standard_catalog()).with_container(floors_container());
        let mut scheduler = scheduler_with(MemorySettingsStore::with_settings(floors_on()), &host);

        let report = on_module_init(&mut scheduler, &mut host);

        assert!(report.ran());
        assert_eq!(scheduler.settings_cached, Some(floors_on()));
        assert_eq!(
            representation(&scheduler.index, &host.catalog, GroupKind::Floor),
            Representation::Variants
        );
        assert_eq!(
            floor_labels(&host),
            vec!["SkullFloorGranite", "SkullFloorMarble", "WoodPlankFloor"]
        );
    }

    #[test]
    fn test_load_finished_falls_back_to_defaults() {
        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler = scheduler_with(MemorySettingsStore::empty(), &host);

        let report = on_load_finished(&mut scheduler, &mut host);

        assert!(report.ran());
        assert!(scheduler.applied_once);
        assert_eq!(scheduler.settings_cached, Some(OverlaySettings::default()));
        assert!(report.list.is_none());
        assert_eq!(scheduler.observer.warnings().count(), 1);
    }

    #[test]
    fn test_settings_change_persists_then_applies() {
        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler =
            scheduler_with(MemorySettingsStore::with_settings(OverlaySettings::default()), &host);
        on_load_finished(&mut scheduler, &mut host);

        let mut settings = OverlaySettings::default();
        settings.use_alternate_material_for_walls = true;
        settings.wall_cost.alternate = 4;

        let report = on_settings_changed(&mut scheduler, settings, &mut host).expect("pass ran");

        assert_eq!(scheduler.store.save_count, 1);
        assert_eq!(scheduler.store.settings, Some(settings));
        assert!(report.apply.expect("catalog touched").is_applied(GroupKind::Wall));
        let wall = host.catalog.find("BoneWall").expect("wall present");
        assert_eq!(wall.cost, Some(CostDescriptor::Stuff { count: 4 }));
        assert!(scheduler
            .observer
            .events
            .contains(&OverlayEvent::SettingsPersisted));
    }

    #[test]
    fn test_unchanged_settings_are_a_no_op() {
        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler = scheduler_with(MemorySettingsStore::with_settings(floors_on()), &host);
        on_load_finished(&mut scheduler, &mut host);

        assert_eq!(on_settings_changed(&mut scheduler, floors_on(), &mut host), None);
        assert_eq!(scheduler.store.save_count, 0);
    }

    #[test]
    fn test_save_failure_does_not_abort_pass() {
        #[derive(Debug)]
        struct ReadOnlyStore;

        impl SettingsStore for ReadOnlyStore {
            fn load(&self) -> Option<OverlaySettings> {
                Some(OverlaySettings::default())
            }

            fn save(&mut self, _settings: &OverlaySettings) -> SettingsResult<()> {
                Err(SettingsError::Persist {
                    path: PathBuf::from("/read-only/ivory_overlay.toml"),
                    reason: "read-only".to_string(),
                })
            }
        }

        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler =
            create_scheduler(ReadOnlyStore, index_for(&host.catalog), RecordingObserver::new());

        let report = on_settings_changed(&mut scheduler, floors_on(), &mut host).expect("pass ran");

        assert!(report.ran());
        assert_eq!(scheduler.settings_cached, Some(floors_on()));
        assert_eq!(
            report.save_error,
            Some(OverlayError::SaveFailed {
                path: "/read-only/ivory_overlay.toml".to_string(),
                error: "read-only".to_string(),
            })
        );
        assert!(scheduler
            .observer
            .events
            .iter()
            .any(|e| matches!(e, OverlayEvent::SettingsSaveFailed { .. })));
    }

    #[test]
    fn test_costs_above_editor_range_are_applied_and_stored_as_given() {
        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler =
            scheduler_with(MemorySettingsStore::with_settings(OverlaySettings::default()), &host);

        let mut settings = OverlaySettings::default();
        settings.use_alternate_material_for_walls = true;
        settings.wall_cost.alternate = 25;

        let report = on_settings_changed(&mut scheduler, settings, &mut host).expect("pass ran");

        assert_eq!(report.settings, Some(settings));
        let wall = host.catalog.find("BoneWall").expect("wall present");
        assert_eq!(wall.cost, Some(CostDescriptor::Stuff { count: 25 }));
        assert_eq!(
            scheduler.store.settings.map(|s| s.wall_cost.alternate),
            Some(25)
        );
    }

    #[test]
    fn test_module_init_after_deferred_pass_is_skipped() {
        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler = scheduler_with(MemorySettingsStore::with_settings(floors_on()), &host);
        on_load_finished(&mut scheduler, &mut host);
        scheduler.observer.clear();

        let report = on_module_init(&mut scheduler, &mut host);

        assert!(!report.ran());
        assert_eq!(report.skipped, None);
        assert!(scheduler.observer.events.is_empty());
    }

    #[test]
    fn test_category_resolved_needs_cached_settings() {
        let host = InMemoryHost::new(standard_catalog());
        let mut scheduler = scheduler_with(MemorySettingsStore::empty(), &host);
        let mut container = floors_container();

        let report = on_category_resolved(&mut scheduler, &mut container);

        assert!(!report.ran());
        assert_eq!(container.entries(&list_accessor()).map(|l| l.len()), Some(4));
    }

    #[test]
    fn test_category_resolved_filters_floors_only() {
        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler = scheduler_with(MemorySettingsStore::empty(), &host);
        on_load_finished(&mut scheduler, &mut host);

        let mut other = CategoryContainer::new("Structure")
            .with_entries(list_accessor(), vec![build("SkullFloorGranite")]);
        assert!(!on_category_resolved(&mut scheduler, &mut other).ran());
        assert_eq!(other.entries(&list_accessor()).map(|l| l.len()), Some(1));

        let mut floors = floors_container();
        let report = on_category_resolved(&mut scheduler, &mut floors);
        let filtered = report.list.expect("list sync ran").expect("list found");
        assert_eq!(filtered.dropped, vec!["SkullFloorGranite", "SkullFloorMarble"]);
        assert!(report.apply.is_none());
    }

    #[test]
    fn test_missing_floors_list_still_applies_catalog() {
        let mut host = InMemoryHost::new(standard_catalog())
            .with_container(CategoryContainer::new("Floors"));
        let mut scheduler = scheduler_with(MemorySettingsStore::with_settings(floors_on()), &host);

        let report = on_load_finished(&mut scheduler, &mut host);

        assert_eq!(
            report.list,
            Some(Err(OverlayError::DiscoveryFailure {
                category: "Floors".to_string()
            }))
        );
        assert!(report.apply.expect("catalog touched").is_applied(GroupKind::Floor));
    }

    #[test]
    fn test_repeated_triggers_converge() {
        let mut host = InMemoryHost::new(standard_catalog()).with_container(floors_container());
        let mut scheduler = scheduler_with(MemorySettingsStore::with_settings(floors_on()), &host);

        on_module_init(&mut scheduler, &mut host);
        let after_init = host.catalog.clone();
        on_load_finished(&mut scheduler, &mut host);

        for id in ["SkullFloor", "SkullFloorGranite", "SkullFloorMarble"] {
            assert_eq!(host.catalog.find(id), after_init.find(id));
        }
        assert_eq!(
            floor_labels(&host),
            vec!["SkullFloorGranite", "SkullFloorMarble", "WoodPlankFloor"]
        );
    }

    #[test]
    fn test_unload_restores_startup_state() {
        let mut host = InMemoryHost::new(standard_catalog());
        let mut scheduler = scheduler_with(MemorySettingsStore::with_settings(floors_on()), &host);
        on_load_finished(&mut scheduler, &mut host);

        let restored = on_unload(&mut scheduler, &mut host.catalog);

        assert!(restored > 0);
        assert_eq!(scheduler.settings_cached, None);
        let base = host.catalog.find("SkullFloor").expect("base present");
        assert_eq!(base.visibility, Visibility::shown("Floors"));
    }

    #[test]
    fn test_install_wires_lifecycle() {
        let mut host = InMemoryHost::new(standard_catalog());
        let scheduler = Rc::new(RefCell::new(scheduler_with(
            MemorySettingsStore::with_settings(floors_on()),
            &host,
        )));
        let mut lifecycle = LifecycleQueue::new();

        install(&scheduler, &mut lifecycle);

        let mut floors = floors_container();
        // Category resolves before load finished: nothing cached yet
        lifecycle.resolve_category(&mut floors);
        assert_eq!(floors.entries(&list_accessor()).map(|l| l.len()), Some(4));

        lifecycle.finish_loading(&mut host);
        assert!(scheduler.borrow().applied_once);
        assert_eq!(
            representation(&scheduler.borrow().index, &host.catalog, GroupKind::Pathway),
            Representation::Variants
        );
    }
}
