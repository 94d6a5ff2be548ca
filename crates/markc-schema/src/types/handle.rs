// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type handles shared between resolvers, caches and host modules.

use crate::config::ModuleNames;
use crate::schema::{ElementKind, KnownElement, ModuleKind};
use std::fmt;
use std::sync::Arc;

/// Shared, immutable description of one runtime type.
pub type TypeHandle = Arc<TypeInfo>;

/// What the host type system reports about a type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    /// Namespace-qualified name (`System.Windows.Controls.Button`).
    pub full_name: Arc<str>,
    /// Name of the module that defines the type.
    pub module: Arc<str>,
    pub base: Option<TypeHandle>,
    pub is_interface: bool,
}

impl TypeInfo {
    #[must_use]
    pub fn new(full_name: &str, module: &str, base: Option<TypeHandle>) -> Self {
        Self {
            full_name: full_name.into(),
            module: module.into(),
            base,
            is_interface: false,
        }
    }

    #[must_use]
    pub fn interface(full_name: &str, module: &str) -> Self {
        Self {
            is_interface: true,
            ..Self::new(full_name, module, None)
        }
    }

    /// Short name: the segment after the last `.`.
    pub fn name(&self) -> &str {
        match self.full_name.rfind('.') {
            Some(pos) => &self.full_name[pos + 1..],
            None => &self.full_name,
        }
    }

    pub fn namespace(&self) -> &str {
        match self.full_name.rfind('.') {
            Some(pos) => &self.full_name[..pos],
            None => "",
        }
    }

    /// `self` followed by its base chain, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = &TypeInfo> {
        std::iter::successors(Some(self), |info| info.base.as_deref())
    }

    /// True when `self` is, or derives from, the type named `full_name`.
    pub fn is_a(&self, full_name: &str) -> bool {
        self.ancestors().any(|info| &*info.full_name == full_name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.full_name, self.module)
    }
}

/// Name of the module hosting `kind` under the given configuration.
pub(crate) fn module_name(names: &ModuleNames, kind: ModuleKind) -> &str {
    match kind {
        ModuleKind::Base => &names.base,
        ModuleKind::Core => &names.core,
        ModuleKind::Framework => &names.framework,
    }
}

/// Build a handle for every known element, indexed by identifier.
///
/// Bases are linked to the handle of their own row, so every chain shares
/// structure with the rest of the set. Reserved gaps stay `None`.
pub(crate) fn schema_handles(names: &ModuleNames) -> Vec<Option<TypeHandle>> {
    let mut handles: Vec<Option<TypeHandle>> = vec![None; KnownElement::COUNT];
    for element in KnownElement::iter() {
        build_handle(element, names, &mut handles);
    }
    handles
}

fn build_handle(
    element: KnownElement,
    names: &ModuleNames,
    handles: &mut [Option<TypeHandle>],
) -> Option<TypeHandle> {
    let row = element.row()?;
    if let Some(existing) = &handles[element as usize] {
        return Some(Arc::clone(existing));
    }
    let module = module_name(names, row.module);
    let info = if row.kind == ElementKind::Interface {
        TypeInfo::interface(&row.full_name(), module)
    } else {
        let base = element
            .base()
            .and_then(|base| build_handle(base, names, handles));
        TypeInfo::new(&row.full_name(), module, base)
    };
    let handle = Arc::new(info);
    handles[element as usize] = Some(Arc::clone(&handle));
    Some(handle)
}
