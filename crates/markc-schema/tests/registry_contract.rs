// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

#![allow(clippy::uninlined_format_args)] // Test readability

//! Registry contract tests.
//!
//! Identifier/handle bijection in both deployment modes, the `Unknown`
//! fallback for foreign types, converter precedence over the whole property
//! table, and agreement between content members and their collections.

use markc_schema::content::{content_row, ContentFamily};
use markc_schema::{
    ContentItem, ContentSequence, ElementObject, HostModules, InstanceFactory, KnownElement,
    KnownProperty, RegistryConfig, SymbolRegistry, TypeInfo,
};
use std::collections::HashMap;
use std::sync::Arc;

fn registries() -> [SymbolRegistry; 2] {
    let config = RegistryConfig::build_time();
    let modules = HostModules::from_schema(&config.modules);
    [
        SymbolRegistry::runtime(),
        SymbolRegistry::with_modules(config, modules).expect("build-time registry"),
    ]
}

#[test]
fn test_identifier_handle_bijection() {
    for registry in registries() {
        let mut seen = std::collections::HashSet::new();
        for element in KnownElement::iter() {
            let id = element.as_i16();
            let handle = registry.resolve_type(id).expect("known id resolves");
            assert_eq!(
                registry.resolve_element_id(&handle),
                element,
                "{:?} mode, id {}",
                registry.mode(),
                id
            );
            assert!(seen.insert(handle.full_name.clone()), "{} bound twice", handle);
        }
        assert!(registry.resolve_type(KnownElement::Max.as_i16()).is_err());
    }
}

#[test]
fn test_handles_share_base_chains() {
    let registry = SymbolRegistry::runtime();
    let button = registry.resolve_element(KnownElement::Button).expect("Button");
    let chain: Vec<&str> = button.ancestors().map(TypeInfo::name).collect();
    assert_eq!(chain.first(), Some(&"Button"));
    assert_eq!(chain.last(), Some(&"Object"));
    assert!(button.is_a("System.Windows.FrameworkElement"));
}

#[test]
fn test_foreign_types_resolve_to_unknown() {
    for registry in registries() {
        let user = Arc::new(TypeInfo::new("Acme.Gauge", "Acme.Controls", None));
        assert_eq!(registry.resolve_element_id(&user), KnownElement::Unknown);

        // Right name, wrong module.
        let imposter = Arc::new(TypeInfo::new(
            "System.Windows.Controls.Grid",
            "Acme.Controls",
            None,
        ));
        assert_eq!(registry.resolve_element_id(&imposter), KnownElement::Unknown);

        // Right module, name outside the schema.
        let unlisted = Arc::new(TypeInfo::new(
            "System.Windows.Controls.Unlisted",
            "PresentationFramework",
            None,
        ));
        assert_eq!(registry.resolve_element_id(&unlisted), KnownElement::Unknown);
    }
}

#[test]
fn test_declared_properties_resolve_on_every_subtype() {
    let registry = SymbolRegistry::runtime();
    for property in KnownProperty::iter() {
        let owner = property.owner();
        assert_eq!(registry.resolve_property_id(owner, property.name()), property);
    }
    let derived: Vec<KnownElement> = KnownElement::iter()
        .filter(|element| element.is_a(KnownElement::FrameworkElement))
        .collect();
    assert!(derived.len() > 20);
    for element in derived {
        let margin = registry.resolve_property_id(element, "Margin");
        assert_eq!(margin.owner(), KnownElement::FrameworkElement, "{}", element);
    }
}

#[test]
fn test_property_rules_beat_type_defaults() {
    let registry = SymbolRegistry::runtime();
    let mut overridden = 0;
    for element in KnownElement::iter() {
        for property in KnownProperty::iter().filter(|p| element.is_a(p.owner())) {
            let Some(rule) = registry.converter_for_property(element, property.name()) else {
                continue;
            };
            overridden += 1;
            assert_eq!(
                registry.converter_for_member(element, property.name(), property.value_type()),
                Some(rule),
                "{} on {}",
                property,
                element
            );
            assert_eq!(
                registry.converter_for_known_property(element, property),
                Some(rule)
            );
        }
    }
    assert!(overridden > 0);
}

/// Host element exposing one collection per family it was built with.
#[derive(Debug)]
struct HostElement {
    element: KnownElement,
    collections: HashMap<ContentFamily, Vec<ContentItem>>,
}

impl HostElement {
    fn collection(&mut self, family: ContentFamily) -> Option<&mut dyn ContentSequence> {
        self.collections
            .get_mut(&family)
            .map(|items| items as &mut dyn ContentSequence)
    }
}

impl ElementObject for HostElement {
    fn element_type(&self) -> KnownElement {
        self.element
    }
    fn children(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Children)
    }
    fn items(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Items)
    }
    fn inlines(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Inlines)
    }
    fn blocks(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Blocks)
    }
    fn list_items(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::ListItems)
    }
    fn row_groups(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::RowGroups)
    }
    fn rows(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Rows)
    }
    fn cells(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Cells)
    }
    fn key_frames(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::KeyFrames)
    }
    fn gradient_stops(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::GradientStops)
    }
    fn figures(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Figures)
    }
    fn segments(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Segments)
    }
    fn columns(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Columns)
    }
    fn setters(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Setters)
    }
    fn actions(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Actions)
    }
    fn bindings(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::Bindings)
    }
    fn tool_bars(&mut self) -> Option<&mut dyn ContentSequence> {
        self.collection(ContentFamily::ToolBars)
    }
}

/// Builds every class with the collection its content row names.
struct HostFactory;

impl InstanceFactory for HostFactory {
    fn create(&self, element: KnownElement) -> Option<Box<dyn ElementObject>> {
        let mut collections = HashMap::new();
        if let Some(row) = content_row(element) {
            collections.insert(row.family, Vec::new());
        }
        Some(Box::new(HostElement {
            element,
            collections,
        }))
    }
}

#[test]
fn test_content_member_and_collection_agree() {
    let registry = SymbolRegistry::runtime();
    let mut with_content = 0;
    for element in KnownElement::iter() {
        let mut instance = registry
            .create_instance(&HostFactory, element)
            .expect("instance");
        let member = registry.default_content_member(element);
        let collection = registry.content_collection_of(instance.as_mut(), element);
        match (member, collection) {
            (Some(_), Some(sequence)) => {
                with_content += 1;
                assert!(sequence.is_empty(), "{} starts non-empty", element);
                sequence.push(ContentItem::Text("x".into()));
                assert_eq!(sequence.len(), 1);
            }
            (None, None) => {}
            (member, collection) => panic!(
                "{}: member {:?} but collection present = {}",
                element,
                member,
                collection.is_some()
            ),
        }
        if member.is_some() {
            assert!(registry.default_content_property(element).is_known(), "{}", element);
        }
    }
    assert!(with_content > 30);
}

#[test]
fn test_text_only_where_accepted() {
    let registry = SymbolRegistry::runtime();
    assert!(registry.collection_accepts_strings(KnownElement::ListBox));
    assert!(registry.collection_accepts_strings(KnownElement::Paragraph));
    assert!(!registry.collection_accepts_strings(KnownElement::Grid));
    assert!(!registry.collection_accepts_strings(KnownElement::GradientBrush));
    assert!(!registry.collection_accepts_strings(KnownElement::Button));
}
