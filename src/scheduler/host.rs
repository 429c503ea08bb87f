//! Host seams
//!
//! The host owns the catalog and the UI containers and decides when lifecycle
//! events fire. `LifecycleQueue` and `InMemoryHost` are plain implementations
//! for hosts without their own event plumbing, and for tests.

use crate::catalog::{CatalogData, CatalogRegistry};
use crate::designators::{CategoryContainer, EntryContainer};
use std::collections::{HashSet, VecDeque};

/// What lifecycle callbacks get to touch
pub trait HostEnvironment {
    fn registry_mut(&mut self) -> &mut dyn CatalogRegistry;

    /// Container of a designation category, once the host built it
    fn category_container(&mut self, category: &str) -> Option<&mut dyn EntryContainer>;
}

pub type LoadFinishedCallback = Box<dyn FnOnce(&mut dyn HostEnvironment)>;
pub type CategoryCallback = Box<dyn FnMut(&mut dyn EntryContainer)>;

/// Lifecycle hooks offered by the host
pub trait HostLifecycle {
    /// Run `callback` once the host finished loading; fires exactly once
    fn on_load_finished(&mut self, callback: LoadFinishedCallback);

    /// Run `callback` when the UI for `category` is resolved
    fn on_category_resolved(&mut self, category: &str, callback: CategoryCallback);
}

/// Queue of registered lifecycle callbacks
#[derive(Default)]
pub struct LifecycleQueue {
    pending_load: VecDeque<LoadFinishedCallback>,
    category_callbacks: Vec<(String, CategoryCallback)>,
    resolved: HashSet<String>,
}

impl LifecycleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire every pending load-finished callback
    ///
    /// Each callback is consumed, so a second call only fires callbacks
    /// registered in between.
    pub fn finish_loading(&mut self, env: &mut dyn HostEnvironment) -> usize {
        let mut fired = 0;
        while let Some(callback) = self.pending_load.pop_front() {
            callback(env);
            fired += 1;
        }
        log::debug!("[Lifecycle] Load finished, {} callback(s) fired", fired);
        fired
    }

    /// Fire the callbacks registered for the container's category
    ///
    /// A category resolves once; repeated calls for it fire nothing.
    pub fn resolve_category(&mut self, container: &mut dyn EntryContainer) -> usize {
        let category = container.category_id().to_string();
        if !self.resolved.insert(category.clone()) {
            return 0;
        }

        let mut fired = 0;
        for (registered, callback) in self.category_callbacks.iter_mut() {
            if *registered == category {
                callback(&mut *container);
                fired += 1;
            }
        }
        fired
    }

    /// Callbacks still waiting for load-finished
    pub fn pending(&self) -> usize {
        self.pending_load.len()
    }
}

impl HostLifecycle for LifecycleQueue {
    fn on_load_finished(&mut self, callback: LoadFinishedCallback) {
        self.pending_load.push_back(callback);
    }

    fn on_category_resolved(&mut self, category: &str, callback: CategoryCallback) {
        self.category_callbacks.push((category.to_string(), callback));
    }
}

/// Catalog and containers held in memory
#[derive(Debug, Default)]
pub struct InMemoryHost {
    pub catalog: CatalogData,
    pub containers: Vec<CategoryContainer>,
}

impl InMemoryHost {
    pub fn new(catalog: CatalogData) -> Self {
        Self {
            catalog,
            containers: Vec::new(),
        }
    }

    pub fn with_container(mut self, container: CategoryContainer) -> Self {
        self.containers.push(container);
        self
    }

    pub fn container(&self, category: &str) -> Option<&CategoryContainer> {
        self.containers
            .iter()
            .find(|c| c.category_id() == category)
    }
}

impl HostEnvironment for InMemoryHost {
    fn registry_mut(&mut self) -> &mut dyn CatalogRegistry {
        &mut self.catalog
    }

    fn category_container(&mut self, category: &str) -> Option<&mut dyn EntryContainer> {
        self.containers
            .iter_mut()
            .find(|c| c.category_id() == category)
            .map(|c| c as &mut dyn EntryContainer)
    }
}
