// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime type handles and their resolution.
//!
//! Provides `TypeInfo`/`TypeHandle` as reported by host modules, the
//! one-time host registration, identifier resolvers for both deployment
//! modes, and `TypeNameCache` for types outside the schema.

pub mod cache;
pub mod handle;
pub mod host;
pub mod module;
pub mod resolver;

pub use cache::{LookupStats, TypeNameCache};
pub use handle::{TypeHandle, TypeInfo};
pub use host::{host_modules, initialize, is_initialized, InitOutcome};
pub use module::{HostModules, InMemoryModule, TypeModule};
pub use resolver::{ModuleTypeResolver, StaticTypeResolver, TypeResolver};
