// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide host module registration.
//!
//! Build-time compilation introspects three externally loaded modules. They are
//! handed over exactly once through [`initialize`]; the slot is a `OnceLock`,
//! so concurrent first calls race safely and exactly one of them wins.

use super::module::HostModules;
use crate::error::{Error, InitError, Result};
use std::sync::OnceLock;

static HOST: OnceLock<HostModules> = OnceLock::new();

/// Result of an [`initialize`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// This call stored the modules.
    Initialized,
    /// Modules were already stored; the supplied ones were dropped.
    AlreadyInitialized,
}

/// Register the host modules for this process.
///
/// Safe to call redundantly and from several threads: only the first call is
/// retained. A redundant call naming different modules is logged, not failed.
pub fn initialize(modules: HostModules) -> Result<InitOutcome> {
    let names = modules.names();
    if names.iter().any(|name| name.is_empty()) {
        return Err(Error::Config("host module names must not be empty".into()));
    }
    if names[0] == names[1] || names[1] == names[2] || names[0] == names[2] {
        return Err(Error::Config(format!(
            "host modules must be distinct, got {:?}",
            names
        )));
    }

    match HOST.set(modules) {
        Ok(()) => {
            log::debug!("[REGISTRY] host modules initialized: {:?}", names_of(host_ref()));
            Ok(InitOutcome::Initialized)
        }
        Err(rejected) => {
            let current = host_ref().map(HostModules::names);
            if current != Some(rejected.names()) {
                log::warn!(
                    "[REGISTRY] ignoring redundant initialize with {:?}, keeping {:?}",
                    rejected.names(),
                    current
                );
            }
            Ok(InitOutcome::AlreadyInitialized)
        }
    }
}

/// The registered host modules.
pub fn host_modules() -> Result<&'static HostModules> {
    host_ref().ok_or(Error::Init(InitError::NotInitialized))
}

pub fn is_initialized() -> bool {
    HOST.get().is_some()
}

fn host_ref() -> Option<&'static HostModules> {
    HOST.get()
}

fn names_of(host: Option<&HostModules>) -> Option<[&str; 3]> {
    host.map(HostModules::names)
}
