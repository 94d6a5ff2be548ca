// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! `SymbolRegistry`: the single entry point the compiler and loader talk to.
//!
//! Wraps the resolver selected by [`DeploymentMode`], the name cache for
//! types outside the schema, and the converter, content and codec tables.
//!
//! # Example
//!
//! ```
//! use markc_schema::{KnownElement, KnownProperty, SymbolRegistry};
//!
//! let registry = SymbolRegistry::runtime();
//! let button = registry.resolve_type(KnownElement::Button.as_i16()).unwrap();
//! assert_eq!(registry.resolve_element_id(&button), KnownElement::Button);
//! assert_eq!(
//!     registry.resolve_property_id(KnownElement::Button, "Width"),
//!     KnownProperty::FrameworkElement_Width
//! );
//! ```

use crate::codec::{self, StructuredCodec};
use crate::config::{DeploymentMode, RegistryConfig};
use crate::content::{self, ContentSequence, ElementObject, InstanceFactory};
use crate::convert;
use crate::error::{Error, InitError, Result, SchemaError};
use crate::records::TemplateBodyCodec;
use crate::schema::{self, KnownElement, KnownProperty};
use crate::types::handle::module_name;
use crate::types::{
    host_modules, HostModules, LookupStats, ModuleTypeResolver, StaticTypeResolver, TypeHandle,
    TypeModule, TypeNameCache, TypeResolver,
};
use std::sync::Arc;

/// Known-symbol registry bound to one deployment mode.
pub struct SymbolRegistry {
    config: RegistryConfig,
    resolver: Box<dyn TypeResolver>,
    /// Searched for names outside the schema, after the host modules.
    user_modules: Vec<Arc<dyn TypeModule>>,
    host: Option<HostModules>,
    names: TypeNameCache,
}

impl SymbolRegistry {
    /// Runtime-mode registry with the default configuration.
    #[must_use]
    pub fn runtime() -> Self {
        let config = RegistryConfig::runtime();
        let resolver = StaticTypeResolver::new(&config.modules);
        Self::assemble(config, Box::new(resolver), None)
    }

    /// Build-time registry over the process-wide host modules.
    ///
    /// Fails with `NotInitialized` until [`crate::types::initialize`] ran.
    pub fn build_time() -> Result<Self> {
        Self::from_config(RegistryConfig::build_time())
    }

    /// Registry for `config`. Build-time mode reads the registered host modules.
    pub fn from_config(config: RegistryConfig) -> Result<Self> {
        config.validate()?;
        match config.mode {
            DeploymentMode::Runtime => {
                let resolver = StaticTypeResolver::new(&config.modules);
                Ok(Self::assemble(config, Box::new(resolver), None))
            }
            DeploymentMode::BuildTime => {
                let modules = host_modules()?.clone();
                Self::with_modules(config, modules)
            }
        }
    }

    /// Build-time registry over explicit modules, bypassing process state.
    pub fn with_modules(config: RegistryConfig, modules: HostModules) -> Result<Self> {
        config.validate()?;
        check_module_names(&config, &modules)?;
        let resolver = ModuleTypeResolver::new(modules.clone(), &config.modules);
        let config = RegistryConfig {
            mode: DeploymentMode::BuildTime,
            ..config
        };
        Ok(Self::assemble(config, Box::new(resolver), Some(modules)))
    }

    fn assemble(
        config: RegistryConfig,
        resolver: Box<dyn TypeResolver>,
        host: Option<HostModules>,
    ) -> Self {
        if !config.structured_codecs {
            log::warn!("[REGISTRY] structured codecs disabled, values use generic conversion");
        }
        log::debug!(
            "[REGISTRY] ready: mode={:?} schema={} elements={} properties={}",
            config.mode,
            crate::config::SCHEMA_VERSION,
            KnownElement::iter().count(),
            KnownProperty::iter().count()
        );
        let names = TypeNameCache::new(config.name_cache_capacity);
        Self {
            config,
            resolver,
            user_modules: Vec::new(),
            host,
            names,
        }
    }

    /// Add a module searched by [`Self::resolve_type_name`] for user types.
    #[must_use]
    pub fn with_user_module(mut self, module: Arc<dyn TypeModule>) -> Self {
        self.user_modules.push(module);
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn mode(&self) -> DeploymentMode {
        self.resolver.mode()
    }

    // ---------------------------------------------------------------------
    // Identifiers and handles
    // ---------------------------------------------------------------------

    /// Handle for a raw type identifier.
    ///
    /// `Unknown`, `Max`, anything beyond it and reserved gaps are schema
    /// errors; there is no fallback for an identifier.
    pub fn resolve_type(&self, id: i16) -> Result<TypeHandle> {
        let element = KnownElement::from_i16(id)?;
        self.resolver.resolve(element)
    }

    pub fn resolve_element(&self, element: KnownElement) -> Result<TypeHandle> {
        self.resolver.resolve(element)
    }

    /// Known element for `handle`, or `Unknown` for types outside the schema.
    pub fn resolve_element_id(&self, handle: &TypeHandle) -> KnownElement {
        self.resolver.element_of(handle)
    }

    /// Property named `member` on `owner`, walking `owner`'s ancestors until a
    /// declaring type matches. `Unknown` when nothing along the chain does.
    pub fn resolve_property_id(&self, owner: KnownElement, member: &str) -> KnownProperty {
        owner
            .ancestors()
            .map(|candidate| KnownProperty::lookup(candidate, member))
            .find(|property| property.is_known())
            .unwrap_or(KnownProperty::Unknown)
    }

    /// [`Self::resolve_property_id`] for a handle, which may be a user type
    /// deriving from a known one.
    pub fn resolve_member_of(&self, handle: &TypeHandle, member: &str) -> KnownProperty {
        let mut current = Some(Arc::clone(handle));
        while let Some(info) = current {
            let element = self.resolver.element_of(&info);
            if element.is_known() {
                return self.resolve_property_id(element, member);
            }
            current = info.base.clone();
        }
        KnownProperty::Unknown
    }

    /// Handle for any fully-qualified name.
    ///
    /// Known names take the identifier path. Other names are searched in the
    /// host modules (build-time mode) and the user modules, then cached.
    pub fn resolve_type_name(&self, full_name: &str) -> Result<TypeHandle> {
        let known = KnownElement::from_full_name(full_name);
        if known.is_known() {
            return self.resolver.resolve(known);
        }
        self.names
            .get_or_try_resolve(full_name, || self.find_user_type(full_name))
    }

    /// Keep `full_name` in the name cache once resolved.
    pub fn pin_type_name(&self, full_name: &str) {
        self.names.pin(full_name);
    }

    pub fn name_cache_stats(&self) -> LookupStats {
        self.names.stats()
    }

    fn find_user_type(&self, full_name: &str) -> Result<TypeHandle> {
        let from_host = self
            .host
            .as_ref()
            .and_then(|host| host.find_type(full_name));
        from_host
            .or_else(|| {
                self.user_modules
                    .iter()
                    .find_map(|module| module.find_type(full_name))
            })
            .ok_or_else(|| {
                log::debug!("[REGISTRY] no module defines {}", full_name);
                SchemaError::TypeNotFound {
                    module: "<any>".to_string(),
                    full_name: full_name.to_string(),
                }
                .into()
            })
    }

    // ---------------------------------------------------------------------
    // Converters
    // ---------------------------------------------------------------------

    pub fn converter_for_type(&self, value_type: KnownElement) -> Option<KnownElement> {
        convert::converter_for_type(value_type)
    }

    pub fn converter_for_property(&self, owner: KnownElement, member: &str) -> Option<KnownElement> {
        convert::converter_for_property(owner, member)
    }

    /// Property rule, else the default for `value_type`, else `None`.
    pub fn converter_for_member(
        &self,
        owner: KnownElement,
        member: &str,
        value_type: KnownElement,
    ) -> Option<KnownElement> {
        convert::converter_for_member(owner, member, value_type)
    }

    pub fn converter_for_known_property(
        &self,
        element: KnownElement,
        property: KnownProperty,
    ) -> Option<KnownElement> {
        convert::converter_for_known_property(element, property)
    }

    // ---------------------------------------------------------------------
    // Content
    // ---------------------------------------------------------------------

    pub fn default_content_member(&self, element: KnownElement) -> Option<&'static str> {
        content::default_content_member(element)
    }

    pub fn default_content_property(&self, element: KnownElement) -> KnownProperty {
        content::default_content_property(element)
    }

    pub fn collection_accepts_strings(&self, element: KnownElement) -> bool {
        content::collection_accepts_strings(element)
    }

    pub fn content_collection_of<'i>(
        &self,
        instance: &'i mut dyn ElementObject,
        element: KnownElement,
    ) -> Option<&'i mut dyn ContentSequence> {
        content::content_collection_of(instance, element)
    }

    /// Ask the host to allocate a default instance of `element`.
    pub fn create_instance(
        &self,
        factory: &dyn InstanceFactory,
        element: KnownElement,
    ) -> Result<Box<dyn ElementObject>> {
        let element = KnownElement::from_i16(element.as_i16())?;
        factory.create(element).ok_or_else(|| {
            let module = element
                .module()
                .map_or("<none>", |kind| module_name(&self.config.modules, kind));
            SchemaError::TypeNotFound {
                module: module.to_string(),
                full_name: element.full_name().unwrap_or_default(),
            }
            .into()
        })
    }

    // ---------------------------------------------------------------------
    // Codecs
    // ---------------------------------------------------------------------

    /// Structured codec owning values of `element`.
    ///
    /// Always `None` when structured codecs are disabled in the config.
    pub fn codec_for(&self, element: KnownElement) -> Option<&'static dyn StructuredCodec> {
        if !self.config.structured_codecs {
            return None;
        }
        codec::codec_for(element)
    }

    /// Body codec for templates and styles, subject to the same switch.
    pub fn template_codec_for(&self, element: KnownElement) -> Option<TemplateBodyCodec> {
        if !self.config.structured_codecs {
            return None;
        }
        TemplateBodyCodec::for_type(element)
    }

    /// Every table consistency defect, across all components.
    pub fn verify(&self) -> Vec<String> {
        let mut violations = schema::verify_tables();
        violations.extend(convert::verify_tables());
        violations.extend(content::verify_tables());
        violations.extend(codec::verify_tables());
        violations
    }
}

impl std::fmt::Debug for SymbolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolRegistry")
            .field("mode", &self.mode())
            .field("structured_codecs", &self.config.structured_codecs)
            .field("user_modules", &self.user_modules.len())
            .field("names", &self.names)
            .finish()
    }
}

/// Supplied modules must carry the names the config expects.
fn check_module_names(config: &RegistryConfig, modules: &HostModules) -> Result<()> {
    let expected = [
        &config.modules.base,
        &config.modules.core,
        &config.modules.framework,
    ];
    for (expected, found) in expected.into_iter().zip(modules.names()) {
        if expected.as_str() != found {
            return Err(Error::Init(InitError::ModuleMismatch {
                expected: expected.clone(),
                found: found.to_string(),
            }));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
