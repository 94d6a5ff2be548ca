// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Host module contract and an in-memory implementation.

use super::handle::{module_name, schema_handles, TypeHandle, TypeInfo};
use crate::config::ModuleNames;
use crate::schema::{KnownElement, ModuleKind};
use dashmap::DashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A loaded module of the host type system.
///
/// Build-time resolution queries these by full name; implementations must be
/// cheap and side-effect free, since concurrent first lookups of the same type
/// may call [`TypeModule::find_type`] more than once.
pub trait TypeModule: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    fn find_type(&self, full_name: &str) -> Option<TypeHandle>;
}

/// Module backed by a concurrent name → handle map.
///
/// Used by hosts that enumerate their types up front, and by tests.
#[derive(Debug)]
pub struct InMemoryModule {
    name: String,
    types: DashMap<Arc<str>, TypeHandle>,
    lookups: AtomicU64,
}

impl InMemoryModule {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            types: DashMap::new(),
            lookups: AtomicU64::new(0),
        }
    }

    /// Register a handle; replaces any previous type with the same name.
    pub fn insert(&self, handle: TypeHandle) {
        self.types.insert(Arc::clone(&handle.full_name), handle);
    }

    /// Define a class in this module and return its handle.
    pub fn define(&self, full_name: &str, base: Option<&TypeHandle>) -> TypeHandle {
        let handle = Arc::new(TypeInfo::new(full_name, &self.name, base.cloned()));
        self.insert(Arc::clone(&handle));
        handle
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Number of [`TypeModule::find_type`] calls served so far.
    pub fn lookups(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl TypeModule for InMemoryModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn find_type(&self, full_name: &str) -> Option<TypeHandle> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.types.get(full_name).map(|entry| Arc::clone(entry.value()))
    }
}

/// The three modules a build-time registry introspects.
#[derive(Debug, Clone)]
pub struct HostModules {
    pub base: Arc<dyn TypeModule>,
    pub core: Arc<dyn TypeModule>,
    pub framework: Arc<dyn TypeModule>,
}

impl HostModules {
    #[must_use]
    pub fn new(
        base: Arc<dyn TypeModule>,
        core: Arc<dyn TypeModule>,
        framework: Arc<dyn TypeModule>,
    ) -> Self {
        Self {
            base,
            core,
            framework,
        }
    }

    /// In-memory modules populated with every known type.
    ///
    /// Stands in for the real toolkit when compiling against the schema alone.
    #[must_use]
    pub fn from_schema(names: &ModuleNames) -> Self {
        let modules = ModuleKind::ALL.map(|kind| InMemoryModule::new(module_name(names, kind)));
        for (id, handle) in schema_handles(names).into_iter().enumerate() {
            let Some(handle) = handle else { continue };
            let module = KnownElement::from_i16(id as i16)
                .ok()
                .and_then(KnownElement::module);
            if let Some(kind) = module {
                modules[kind as usize].insert(handle);
            }
        }
        let [base, core, framework] = modules;
        Self::new(Arc::new(base), Arc::new(core), Arc::new(framework))
    }

    pub fn get(&self, kind: ModuleKind) -> &Arc<dyn TypeModule> {
        match kind {
            ModuleKind::Base => &self.base,
            ModuleKind::Core => &self.core,
            ModuleKind::Framework => &self.framework,
        }
    }

    pub fn names(&self) -> [&str; 3] {
        [self.base.name(), self.core.name(), self.framework.name()]
    }

    /// Search every module, framework first.
    pub fn find_type(&self, full_name: &str) -> Option<TypeHandle> {
        [&self.framework, &self.core, &self.base]
            .into_iter()
            .find_map(|module| module.find_type(full_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_module() {
        let module = InMemoryModule::new("UserControls");
        assert!(module.is_empty());
        let base = module.define("Acme.Widgets.WidgetBase", None);
        let gauge = module.define("Acme.Widgets.Gauge", Some(&base));
        assert_eq!(module.len(), 2);
        let found = module.find_type("Acme.Widgets.Gauge").expect("defined");
        assert!(Arc::ptr_eq(&found, &gauge));
        assert!(module.find_type("Acme.Widgets.Dial").is_none());
        assert_eq!(module.lookups(), 2);
    }

    #[test]
    fn test_schema_modules_partition_by_kind() {
        let names = ModuleNames::default();
        let host = HostModules::from_schema(&names);
        assert_eq!(
            host.names(),
            ["WindowsBase", "PresentationCore", "PresentationFramework"]
        );
        assert!(host.framework.find_type("System.Windows.Controls.Button").is_some());
        assert!(host.core.find_type("System.Windows.Controls.Button").is_none());
        assert!(host.base.find_type("System.Object").is_some());
        let brush = host.find_type("System.Windows.Media.Brush").expect("core type");
        assert_eq!(&*brush.module, "PresentationCore");
    }
}
