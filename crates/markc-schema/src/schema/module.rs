// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Host modules that declare known types.

use std::fmt;

/// Which of the three host modules declares a known type.
///
/// In build-time mode each kind maps onto one module handle passed to
/// [`crate::types::initialize`]. `Base` also hosts platform primitives
/// (`Object`, `String`, `Double`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleKind {
    Base,
    Core,
    Framework,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 3] = [ModuleKind::Base, ModuleKind::Core, ModuleKind::Framework];

    pub const fn as_str(self) -> &'static str {
        match self {
            ModuleKind::Base => "base",
            ModuleKind::Core => "core",
            ModuleKind::Framework => "framework",
        }
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
