// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;
use crate::config::ModuleNames;
use crate::content::ContentItem;
use crate::error::ErrorCode;
use crate::types::InMemoryModule;
use KnownElement as E;

fn build_time_registry() -> SymbolRegistry {
    let config = RegistryConfig::build_time();
    let modules = HostModules::from_schema(&config.modules);
    SymbolRegistry::with_modules(config, modules).expect("registry")
}

#[derive(Debug, Default)]
struct Panelish {
    children: Vec<ContentItem>,
}

impl ElementObject for Panelish {
    fn element_type(&self) -> E {
        E::StackPanel
    }
    fn children(&mut self) -> Option<&mut dyn ContentSequence> {
        Some(&mut self.children)
    }
}

struct PanelFactory;

impl InstanceFactory for PanelFactory {
    fn create(&self, element: E) -> Option<Box<dyn ElementObject>> {
        element
            .is_a(E::Panel)
            .then(|| Box::new(Panelish::default()) as Box<dyn ElementObject>)
    }
}

#[test]
fn test_both_modes_agree() {
    let runtime = SymbolRegistry::runtime();
    let build_time = build_time_registry();
    assert_eq!(runtime.mode(), DeploymentMode::Runtime);
    assert_eq!(build_time.mode(), DeploymentMode::BuildTime);
    for element in [E::Button, E::Grid, E::SolidColorBrush, E::Int32Collection] {
        let a = runtime.resolve_element(element).expect("runtime");
        let b = build_time.resolve_element(element).expect("build time");
        assert_eq!(a.full_name, b.full_name);
        assert_eq!(runtime.resolve_element_id(&b), element);
    }
}

#[test]
fn test_resolve_type_rejects_bad_ids() {
    let registry = SymbolRegistry::runtime();
    for (id, code) in [
        (0, ErrorCode::IdentifierOutOfRange),
        (E::Max.as_i16(), ErrorCode::IdentifierOutOfRange),
        (i16::MAX, ErrorCode::IdentifierOutOfRange),
        (-3, ErrorCode::IdentifierOutOfRange),
        (60, ErrorCode::IdentifierReserved),
    ] {
        let err = registry.resolve_type(id).expect_err("bad id");
        assert_eq!(err.code(), code, "id {}", id);
    }
}

#[test]
fn test_property_walks_ancestors() {
    let registry = SymbolRegistry::runtime();
    assert_eq!(
        registry.resolve_property_id(E::Button, "Width"),
        KnownProperty::FrameworkElement_Width
    );
    assert_eq!(
        registry.resolve_property_id(E::Button, "FontSize"),
        KnownProperty::Control_FontSize
    );
    // TextBlock declares its own FontSize.
    assert_eq!(
        registry.resolve_property_id(E::TextBlock, "FontSize"),
        KnownProperty::TextBlock_FontSize
    );
    assert_eq!(
        registry.resolve_property_id(E::Button, "NoSuchMember"),
        KnownProperty::Unknown
    );
    assert_eq!(
        registry.resolve_property_id(E::Unknown, "Width"),
        KnownProperty::Unknown
    );
}

#[test]
fn test_user_type_members_and_names() {
    let button = SymbolRegistry::runtime()
        .resolve_element(E::Button)
        .expect("Button");
    let user = Arc::new(InMemoryModule::new("Acme.Controls"));
    let fancy = user.define("Acme.Controls.FancyButton", Some(&button));

    let registry = SymbolRegistry::runtime().with_user_module(user);
    assert_eq!(registry.resolve_element_id(&fancy), E::Unknown);
    assert_eq!(
        registry.resolve_member_of(&fancy, "Width"),
        KnownProperty::FrameworkElement_Width
    );
    assert_eq!(registry.resolve_member_of(&fancy, "Glow"), KnownProperty::Unknown);

    let found = registry
        .resolve_type_name("Acme.Controls.FancyButton")
        .expect("user type");
    assert!(Arc::ptr_eq(&found, &fancy));
    registry
        .resolve_type_name("Acme.Controls.FancyButton")
        .expect("cached");
    let stats = registry.name_cache_stats();
    assert_eq!((stats.hits, stats.misses), (1, 1));

    let known = registry
        .resolve_type_name("System.Windows.Controls.Button")
        .expect("known");
    assert_eq!(registry.resolve_element_id(&known), E::Button);

    let err = registry
        .resolve_type_name("Acme.Controls.Missing")
        .expect_err("missing");
    assert_eq!(err.code(), ErrorCode::TypeNotFound);
}

#[test]
fn test_module_names_must_match() {
    let modules = HostModules::from_schema(&ModuleNames {
        framework: "OtherFramework".to_string(),
        ..ModuleNames::default()
    });
    let err = SymbolRegistry::with_modules(RegistryConfig::build_time(), modules)
        .expect_err("mismatch");
    assert_eq!(err.code(), ErrorCode::ModuleMismatch);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = RegistryConfig::runtime().with_name_cache_capacity(0);
    let err = SymbolRegistry::from_config(config).expect_err("zero capacity");
    assert_eq!(err.code(), ErrorCode::InvalidConfig);
}

#[test]
fn test_codec_switch() {
    let registry = SymbolRegistry::runtime();
    assert!(registry.codec_for(E::PointCollection).is_some());
    assert!(registry.template_codec_for(E::ControlTemplate).is_some());

    let generic =
        SymbolRegistry::from_config(RegistryConfig::runtime().with_structured_codecs(false))
            .expect("registry");
    assert!(generic.codec_for(E::PointCollection).is_none());
    assert!(generic.template_codec_for(E::ControlTemplate).is_none());
}

#[test]
fn test_converter_delegates() {
    let registry = SymbolRegistry::runtime();
    assert_eq!(
        registry.converter_for_member(E::Button, "Width", E::Double),
        Some(E::LengthConverter)
    );
    assert_eq!(registry.converter_for_type(E::Double), Some(E::DoubleConverter));
    assert_eq!(
        registry.converter_for_known_property(E::Button, KnownProperty::FrameworkElement_Width),
        Some(E::LengthConverter)
    );
}

#[test]
fn test_create_instance_and_content() {
    let registry = SymbolRegistry::runtime();
    let mut panel = registry
        .create_instance(&PanelFactory, E::StackPanel)
        .expect("panel");
    assert_eq!(registry.default_content_member(E::StackPanel), Some("Children"));
    assert!(!registry.collection_accepts_strings(E::StackPanel));
    let children = registry
        .content_collection_of(panel.as_mut(), E::StackPanel)
        .expect("children");
    assert!(children.is_empty());

    let err = registry
        .create_instance(&PanelFactory, E::Button)
        .expect_err("factory declines");
    assert_eq!(err.code(), ErrorCode::TypeNotFound);
    let err = registry
        .create_instance(&PanelFactory, E::Unknown)
        .expect_err("sentinel");
    assert_eq!(err.code(), ErrorCode::IdentifierOutOfRange);
}

#[test]
fn test_tables_are_consistent() {
    assert_eq!(SymbolRegistry::runtime().verify(), Vec::<String>::new());
}
