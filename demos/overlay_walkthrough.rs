//! Drives the overlay through a host's lifecycle
//!
//! Run with `cargo run --example overlay_walkthrough`. Set `RUST_LOG=trace` to
//! see every event.

use anyhow::Result;
use ivory_overlay::designators::{Accessor, CategoryContainer, EntryList};
use ivory_overlay::{
    build_variant_index, create_scheduler, init_logging, install, load_catalog_toml,
    on_module_init, on_settings_changed, on_unload, representation, BuildDesignator,
    CatalogRegistry, DropdownDesignator, EntryContainer, GroupKind, InMemoryHost, LifecycleQueue,
    LogObserver, OverlayConfig, OverlaySettings, TomlSettingsStore, ToolDesignator, UiEntry,
};
use std::cell::RefCell;
use std::rc::Rc;

fn entry(id: &str) -> Box<dyn UiEntry> {
    Box::new(BuildDesignator::new(id))
}

fn tool(label: &str) -> Box<dyn UiEntry> {
    Box::new(ToolDesignator::new(label))
}

fn floors_list() -> EntryList {
    vec![
        tool("Cancel"),
        entry("WoodPlankFloor"),
        entry("SkullFloor"),
        Box::new(DropdownDesignator::new(
            "Stone skull floors",
            vec![
                entry("SkullFloorGranite"),
                entry("SkullFloorMarble"),
                entry("SkullFloorSlate"),
            ],
        )),
        entry("SkullFloorFine"),
        entry("SkullFloorFineGranite"),
        entry("SkullFloorFineMarble"),
        entry("SkullPw"),
        entry("SkullPwGranite"),
        entry("SkullPwMarble"),
        entry("SkullPwSlate"),
    ]
}

fn print_state(title: &str, host: &InMemoryHost, accessor: &Accessor) {
    println!("== {}", title);
    if let Some(wall) = host.catalog.find("BoneWall") {
        println!("  wall cost: {:?}", wall.cost);
    }
    if let Some(list) = host.container("Floors").and_then(|c| c.entries(accessor)) {
        let labels: Vec<String> = list.iter().map(|e| e.label()).collect();
        println!("  floors list: {}", labels.join(", "));
    }
}

fn main() -> Result<()> {
    init_logging(true);

    let config = OverlayConfig::default();
    let catalog = load_catalog_toml(include_str!("catalog.toml"))?;
    let index = build_variant_index(&catalog, &config);

    let accessor = Accessor::field("resolvedDesignators");
    let floors = CategoryContainer::new("Floors").with_entries(accessor.clone(), floors_list());
    let mut host = InMemoryHost::new(catalog).with_container(floors);

    let settings_dir = tempfile::tempdir()?;
    let store = TomlSettingsStore::in_dir(settings_dir.path());
    println!("settings file: {}", store.path().display());

    let scheduler = Rc::new(RefCell::new(create_scheduler(
        store,
        index,
        LogObserver::new(config.verbose_diagnostics),
    )));
    let mut lifecycle = LifecycleQueue::new();
    install(&scheduler, &mut lifecycle);

    // Module construction: settings file does not exist yet, defaults apply
    on_module_init(&mut *scheduler.borrow_mut(), &mut host);
    lifecycle.finish_loading(&mut host);
    print_state("after load", &host, &accessor);

    // The user switches both groups to stone
    let mut settings = OverlaySettings::default();
    settings.use_alternate_material_for_walls = true;
    settings.use_alternate_material_for_floors = true;
    settings.wall_cost.alternate = 4;
    if let Some(report) = on_settings_changed(&mut *scheduler.borrow_mut(), settings, &mut host) {
        if let Some(error) = &report.save_error {
            println!("  not saved: {}", error);
        }
        if let Some(applied) = &report.apply {
            for skipped in &applied.skipped {
                println!("  skipped: {}", skipped);
            }
        }
    }
    print_state("stone mode", &host, &accessor);

    // The host rebuilt the list from scratch; back to skulls
    if let Some(container) = host.containers.iter_mut().find(|c| c.category_id() == "Floors") {
        *container = CategoryContainer::new("Floors").with_entries(accessor.clone(), floors_list());
    }
    settings.use_alternate_material_for_floors = false;
    on_settings_changed(&mut *scheduler.borrow_mut(), settings, &mut host);
    print_state("skull floors, stone walls", &host, &accessor);

    {
        let scheduler = scheduler.borrow();
        for kind in GroupKind::FLOOR_GROUPS {
            println!(
                "  {}: {:?}",
                kind,
                representation(&scheduler.index, &host.catalog, kind)
            );
        }
    }

    let restored = on_unload(&mut *scheduler.borrow_mut(), &mut host.catalog);
    println!("restored {} entries", restored);

    Ok(())
}
