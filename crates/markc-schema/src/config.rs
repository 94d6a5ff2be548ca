// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Registry configuration - single source of truth for constants.
//!
//! - **Level 1 (Static)**: schema version, stream magic, default capacities.
//! - **Level 2 (Dynamic)**: [`RegistryConfig`], built in code or loaded from YAML.
//!
//! # Example YAML
//!
//! ```yaml
//! mode: build_time
//! modules:
//!   base: WindowsBase
//!   core: PresentationCore
//!   framework: PresentationFramework
//! structured_codecs: true
//! name_cache_capacity: 1024
//! ```

use crate::error::{Error, Result};

/// Version of the known-symbol tables.
///
/// **Bump whenever a row is added to, removed from, or renumbered in
/// `schema::element` or `schema::property`.** Compiled streams stamped with a
/// different version are rejected before any identifier is read.
pub const SCHEMA_VERSION: u32 = 4;

/// Magic bytes opening every compiled record stream.
pub const STREAM_MAGIC: [u8; 4] = *b"MKB\x01";

/// Default capacity of the non-known type name cache.
pub const DEFAULT_NAME_CACHE_CAPACITY: usize = 512;

/// Default module names for the three host modules.
pub const DEFAULT_BASE_MODULE: &str = "WindowsBase";
pub const DEFAULT_CORE_MODULE: &str = "PresentationCore";
pub const DEFAULT_FRAMEWORK_MODULE: &str = "PresentationFramework";

/// How type handles are acquired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(rename_all = "snake_case"))]
pub enum DeploymentMode {
    /// Inside the toolkit's own process: handles bound from the static table.
    #[default]
    Runtime,
    /// Compiling against a toolkit loaded as external modules: handles found
    /// by introspecting the modules supplied to [`crate::types::initialize`].
    BuildTime,
}

/// Expected names of the host modules (build-time mode only).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default))]
pub struct ModuleNames {
    pub base: String,
    pub core: String,
    pub framework: String,
}

impl Default for ModuleNames {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE_MODULE.to_string(),
            core: DEFAULT_CORE_MODULE.to_string(),
            framework: DEFAULT_FRAMEWORK_MODULE.to_string(),
        }
    }
}

/// Registry construction options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-loaders", derive(serde::Deserialize))]
#[cfg_attr(feature = "config-loaders", serde(default))]
pub struct RegistryConfig {
    pub mode: DeploymentMode,
    pub modules: ModuleNames,
    /// When false every value goes through generic string conversion.
    pub structured_codecs: bool,
    pub name_cache_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            mode: DeploymentMode::Runtime,
            modules: ModuleNames::default(),
            structured_codecs: true,
            name_cache_capacity: DEFAULT_NAME_CACHE_CAPACITY,
        }
    }
}

impl RegistryConfig {
    #[must_use]
    pub fn runtime() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn build_time() -> Self {
        Self {
            mode: DeploymentMode::BuildTime,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_structured_codecs(mut self, enabled: bool) -> Self {
        self.structured_codecs = enabled;
        self
    }

    #[must_use]
    pub fn with_name_cache_capacity(mut self, capacity: usize) -> Self {
        self.name_cache_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name_cache_capacity == 0 {
            return Err(Error::Config("name_cache_capacity must be > 0".into()));
        }
        let names = [&self.modules.base, &self.modules.core, &self.modules.framework];
        if names.iter().any(|name| name.trim().is_empty()) {
            return Err(Error::Config("module names must not be empty".into()));
        }
        if names[0] == names[1] || names[1] == names[2] || names[0] == names[2] {
            return Err(Error::Config("module names must be distinct".into()));
        }
        Ok(())
    }

    /// Parse and validate a YAML document.
    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: RegistryConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::Config(format!("YAML parse error: {}", e)))?;
        config.validate()?;
        log::debug!(
            "[CONFIG] loaded registry config: mode={:?} codecs={} cache={}",
            config.mode,
            config.structured_codecs,
            config.name_cache_capacity
        );
        Ok(config)
    }

    #[cfg(feature = "config-loaders")]
    pub fn from_yaml_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RegistryConfig::default();
        assert_eq!(config.mode, DeploymentMode::Runtime);
        assert!(config.structured_codecs);
        assert!(config.validate().is_ok());
        assert_eq!(RegistryConfig::build_time().mode, DeploymentMode::BuildTime);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = RegistryConfig::default().with_name_cache_capacity(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_duplicate_module_names_rejected() {
        let mut config = RegistryConfig::default();
        config.modules.core = config.modules.base.clone();
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
mode: build_time
modules:
  base: Base
  core: Core
  framework: Framework
structured_codecs: false
name_cache_capacity: 64
"#;
        let config = RegistryConfig::from_yaml_str(yaml).expect("valid yaml");
        assert_eq!(config.mode, DeploymentMode::BuildTime);
        assert_eq!(config.modules.framework, "Framework");
        assert!(!config.structured_codecs);
        assert_eq!(config.name_cache_capacity, 64);
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn test_yaml_partial_uses_defaults() {
        let config = RegistryConfig::from_yaml_str("structured_codecs: true\n").expect("valid");
        assert_eq!(config.mode, DeploymentMode::Runtime);
        assert_eq!(config.modules, ModuleNames::default());
        assert_eq!(config.name_cache_capacity, DEFAULT_NAME_CACHE_CAPACITY);
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn test_yaml_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "mode: runtime\nname_cache_capacity: 8").expect("write");
        let config = RegistryConfig::from_yaml_file(file.path()).expect("load");
        assert_eq!(config.name_cache_capacity, 8);
    }

    #[cfg(feature = "config-loaders")]
    #[test]
    fn test_yaml_invalid_mode() {
        assert!(RegistryConfig::from_yaml_str("mode: sideways\n").is_err());
    }
}
