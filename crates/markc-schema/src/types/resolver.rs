// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Identifier → type handle resolution.
//!
//! Two strategies share one contract:
//! - [`StaticTypeResolver`]: runtime mode, every handle bound up front
//! - [`ModuleTypeResolver`]: build-time mode, handles found lazily by asking
//!   the host modules and memoized per identifier

use super::handle::{module_name, schema_handles, TypeHandle, TypeInfo};
use super::module::HostModules;
use crate::config::{DeploymentMode, ModuleNames};
use crate::error::{Result, SchemaError};
use crate::schema::KnownElement;
use arc_swap::ArcSwapOption;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Turns a known element into its runtime type handle.
pub trait TypeResolver: Send + Sync {
    /// Resolve a known element.
    ///
    /// Fails for `Unknown`, `Max` and reserved gaps, and when the host no
    /// longer defines the type; identifiers are a contract with compiled
    /// output, so there is no silent fallback.
    fn resolve(&self, element: KnownElement) -> Result<TypeHandle>;

    /// Reverse lookup: the known element a handle stands for, or `Unknown`.
    fn element_of(&self, handle: &TypeHandle) -> KnownElement;

    fn mode(&self) -> DeploymentMode;
}

fn checked_slot(element: KnownElement) -> Result<usize> {
    // from_i16 rejects the sentinels and reserved gaps.
    let element = KnownElement::from_i16(element.as_i16())?;
    Ok(element as usize)
}

/// Known element named by `handle`, provided it lives in the module the
/// schema expects. Same-named types from other modules are not known.
fn element_by_name(handle: &TypeHandle, names: &ModuleNames) -> KnownElement {
    let element = KnownElement::from_full_name(&handle.full_name);
    match element.module() {
        Some(kind) if module_name(names, kind) == &*handle.module => element,
        _ => KnownElement::Unknown,
    }
}

/// Runtime-mode resolver: handles bound directly from the schema.
#[derive(Debug)]
pub struct StaticTypeResolver {
    names: ModuleNames,
    handles: Vec<Option<TypeHandle>>,
}

impl StaticTypeResolver {
    #[must_use]
    pub fn new(names: &ModuleNames) -> Self {
        let handles = schema_handles(names);
        log::debug!(
            "[RESOLVER] bound {} static handles",
            handles.iter().flatten().count()
        );
        Self {
            names: names.clone(),
            handles,
        }
    }
}

impl TypeResolver for StaticTypeResolver {
    fn resolve(&self, element: KnownElement) -> Result<TypeHandle> {
        let slot = checked_slot(element)?;
        match &self.handles[slot] {
            Some(handle) => Ok(Arc::clone(handle)),
            None => Err(SchemaError::Reserved(i32::from(element.as_i16())).into()),
        }
    }

    fn element_of(&self, handle: &TypeHandle) -> KnownElement {
        element_by_name(handle, &self.names)
    }

    fn mode(&self) -> DeploymentMode {
        DeploymentMode::Runtime
    }
}

/// Build-time resolver: lazy, memoized introspection of host modules.
///
/// Each identifier owns an `ArcSwapOption` slot. A miss asks the declaring
/// module, then publishes with compare-and-swap against an empty slot; if
/// another thread published first, its handle is returned instead, so every
/// caller observes the same `Arc`.
pub struct ModuleTypeResolver {
    modules: HostModules,
    names: ModuleNames,
    slots: Box<[ArcSwapOption<TypeInfo>]>,
    introspections: AtomicU64,
}

impl ModuleTypeResolver {
    #[must_use]
    pub fn new(modules: HostModules, names: &ModuleNames) -> Self {
        let slots = (0..KnownElement::COUNT)
            .map(|_| ArcSwapOption::empty())
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Self {
            modules,
            names: names.clone(),
            slots,
            introspections: AtomicU64::new(0),
        }
    }

    pub fn modules(&self) -> &HostModules {
        &self.modules
    }

    /// Number of host lookups performed so far.
    pub fn introspections(&self) -> u64 {
        self.introspections.load(Ordering::Relaxed)
    }

    /// Number of identifiers with a published handle.
    pub fn resolved_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.load().is_some()).count()
    }

    fn introspect(&self, element: KnownElement) -> Result<TypeHandle> {
        let row = element
            .row()
            .ok_or(SchemaError::Reserved(i32::from(element.as_i16())))?;
        let module = self.modules.get(row.module);
        let full_name = row.full_name();
        self.introspections.fetch_add(1, Ordering::Relaxed);
        log::debug!("[RESOLVER] introspecting {} in {}", full_name, module.name());
        module.find_type(&full_name).ok_or_else(|| {
            SchemaError::TypeNotFound {
                module: module.name().to_string(),
                full_name,
            }
            .into()
        })
    }
}

impl TypeResolver for ModuleTypeResolver {
    fn resolve(&self, element: KnownElement) -> Result<TypeHandle> {
        let slot = &self.slots[checked_slot(element)?];
        if let Some(handle) = slot.load_full() {
            return Ok(handle);
        }

        let fresh = self.introspect(element)?;
        let empty: Option<TypeHandle> = None;
        let previous = slot.compare_and_swap(&empty, Some(Arc::clone(&fresh)));
        match &*previous {
            Some(published) => Ok(Arc::clone(published)),
            None => Ok(fresh),
        }
    }

    fn element_of(&self, handle: &TypeHandle) -> KnownElement {
        element_by_name(handle, &self.names)
    }

    fn mode(&self) -> DeploymentMode {
        DeploymentMode::BuildTime
    }
}

impl std::fmt::Debug for ModuleTypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleTypeResolver")
            .field("modules", &self.modules.names())
            .field("resolved", &self.resolved_count())
            .field("introspections", &self.introspections())
            .finish()
    }
}
