// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use super::*;
use crate::error::ErrorCode;
use crate::records::MemberRef;
use crate::schema::KnownProperty;
use KnownElement as E;

fn start(element: E) -> Record<'static> {
    Record::ElementStart(TypeRef::Known(element))
}

fn target_type(value: &str) -> Record<'_> {
    Record::property(KnownProperty::Style_TargetType, value)
}

fn data_type(value: &str) -> Record<'_> {
    Record::property(KnownProperty::DataTemplate_DataType, value)
}

#[test]
fn test_target_type_key() {
    let key = extract_key([start(E::Style), target_type("Button"), Record::ElementEnd])
        .expect("key");
    assert_eq!(key, DictionaryKey::Type(TypeRef::Known(E::Button)));
}

#[test]
fn test_type_extension_target_type() {
    let key = extract_key([
        start(E::Style),
        target_type("{x:TypeExtension Button}"),
        Record::ElementEnd,
    ])
    .expect("key");
    assert_eq!(key, DictionaryKey::Type(TypeRef::Known(E::Button)));
}

#[test]
fn test_control_template_target_type() {
    let records = vec![
        start(E::ControlTemplate),
        Record::property(KnownProperty::ControlTemplate_TargetType, "{x:Type ToggleButton}"),
        start(E::Border),
    ];
    assert_eq!(
        extract_key(records).expect("key"),
        DictionaryKey::Type(TypeRef::Known(E::ToggleButton))
    );
}

#[test]
fn test_prefixed_type_stays_named() {
    let value = String::from("{x:Type local:Gauge}");
    let key = extract_key([start(E::Style), target_type(&value)]).expect("key");
    match key {
        DictionaryKey::Type(TypeRef::Named(Cow::Borrowed(name))) => assert_eq!(name, "local:Gauge"),
        other => panic!("unexpected key {:?}", other),
    }
    // A prefix hides the schema type of the same short name.
    let key = extract_key([start(E::Style), target_type("ui:Button")]).expect("key");
    assert_eq!(key.type_ref(), &TypeRef::Named("ui:Button".into()));
}

#[test]
fn test_data_type_key() {
    let key = extract_key([
        start(E::DataTemplate),
        data_type("{x:Type TypeName=local:Person}"),
    ])
    .expect("key");
    assert_eq!(
        key,
        DictionaryKey::DataTemplate(TypeRef::Named("local:Person".into()))
    );
    assert_eq!(key.to_string(), "DataTemplateKey(local:Person)");
}

#[test]
fn test_inherited_key_member() {
    // DataType is declared on DataTemplate and used on a subclass.
    let key = extract_key([start(E::HierarchicalDataTemplate), data_type("String")]).expect("key");
    assert_eq!(key, DictionaryKey::DataTemplate(TypeRef::Known(E::String)));
}

#[test]
fn test_unrelated_properties_are_skipped() {
    let records = vec![
        start(E::Style),
        Record::property(MemberRef::new(E::Style, "BasedOn"), "{StaticResource Base}"),
        target_type("CheckBox"),
    ];
    assert_eq!(
        extract_key(records).expect("key"),
        DictionaryKey::Type(TypeRef::Known(E::CheckBox))
    );

    // TargetType declared on another type does not count.
    let records = vec![
        start(E::Style),
        Record::property(MemberRef::new(E::Button, "TargetType"), "Button"),
        Record::ElementEnd,
    ];
    let err = extract_key(records).expect_err("foreign member");
    assert_eq!(err.code(), ErrorCode::DictionaryKeyNotFound);
}

#[test]
fn test_second_element_ends_scan() {
    let records = vec![
        Record::LinePosition(SourcePos::new(4, 9)),
        start(E::DataTemplate),
        Record::LinePosition(SourcePos::new(5, 13)),
        start(E::Grid),
        data_type("String"),
    ];
    let err = extract_key(records).expect_err("body began");
    assert_eq!(err.code(), ErrorCode::DictionaryKeyNotFound);
    assert_eq!(err.position(), Some(SourcePos::new(5, 13)));
}

#[test]
fn test_body_records_end_scan() {
    for body in [
        Record::PropertyComplexStart(MemberRef::new(E::Style, "Setters")),
        Record::PropertyListStart(MemberRef::new(E::Style, "Triggers")),
        Record::ElementEnd,
        Record::Text("hello".into()),
    ] {
        let mut extractor = KeyExtractor::new();
        assert_eq!(extractor.feed(&start(E::Style)).expect("start"), None);
        assert_eq!(extractor.state(), ScanState::LookingForKeyAttribute);
        let err = extractor.feed(&body).expect_err("no key");
        assert_eq!(err.code(), ErrorCode::DictionaryKeyNotFound);
        assert_eq!(extractor.state(), ScanState::NotFound);
        // The scan stays failed.
        assert!(extractor.feed(&target_type("Button")).is_err());
    }
}

#[test]
fn test_invalid_data_types() {
    for value in ["Object", "{x:Type ICommand}"] {
        let records = vec![
            Record::LinePosition(SourcePos::new(2, 3)),
            start(E::DataTemplate),
            data_type(value),
        ];
        let err = extract_key(records).expect_err("unusable data type");
        assert_eq!(err.code(), ErrorCode::InvalidDataTypeKey, "{}", value);
        assert_eq!(err.position(), Some(SourcePos::new(2, 3)));
    }
}

#[test]
fn test_malformed_type_value() {
    let err = extract_key([start(E::Style), target_type("{x:Type}")]).expect_err("no name");
    assert_eq!(err.code(), ErrorCode::DictionaryKeyNotFound);
}

#[test]
fn test_empty_stream() {
    let err = extract_key(Vec::new()).expect_err("empty");
    assert_eq!(err.code(), ErrorCode::DictionaryKeyNotFound);
    assert_eq!(err.position(), None);
}

#[test]
fn test_found_is_terminal() {
    let mut extractor = KeyExtractor::new();
    extractor.feed(&start(E::Style)).expect("start");
    assert!(extractor.feed(&target_type("Button")).expect("key").is_some());
    assert_eq!(extractor.state(), ScanState::Found);
    assert_eq!(extractor.feed(&start(E::Grid)).expect("ignored"), None);
}

#[test]
fn test_parse_type_reference_forms() {
    let name = |value: &str| parse_type_reference(value).map(|range| value[range].to_string());
    assert_eq!(name("Button").as_deref(), Some("Button"));
    assert_eq!(name("  local:Gauge ").as_deref(), Some("local:Gauge"));
    assert_eq!(name("{x:Type Button}").as_deref(), Some("Button"));
    assert_eq!(name("{ x:Type   Button }").as_deref(), Some("Button"));
    assert_eq!(name("{Type TypeName = ui:Dial}").as_deref(), Some("ui:Dial"));
    assert_eq!(name("{x:TypeExtension Button}").as_deref(), Some("Button"));
    assert_eq!(name("{TypeExtension TypeName=ui:Dial}").as_deref(), Some("ui:Dial"));
    assert_eq!(name("{x:TypeExtension}"), None);
    assert_eq!(name("{x:Type}"), None);
    assert_eq!(name("{Binding}"), None);
    assert_eq!(name(""), None);
    assert_eq!(name("two words"), None);
}
