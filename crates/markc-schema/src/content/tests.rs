// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com
//! Tests for content resolution.

use super::*;
use KnownElement as E;

/// Element stub exposing exactly the family its content row names.
#[derive(Debug)]
struct StubElement {
    element: E,
    family: Option<ContentFamily>,
    content: Vec<ContentItem>,
}

impl StubElement {
    fn sequence_for(&mut self, family: ContentFamily) -> Option<&mut dyn ContentSequence> {
        if self.family == Some(family) {
            Some(&mut self.content)
        } else {
            None
        }
    }
}

impl ElementObject for StubElement {
    fn element_type(&self) -> E {
        self.element
    }
    fn children(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Children)
    }
    fn items(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Items)
    }
    fn inlines(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Inlines)
    }
    fn blocks(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Blocks)
    }
    fn list_items(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::ListItems)
    }
    fn row_groups(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::RowGroups)
    }
    fn rows(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Rows)
    }
    fn cells(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Cells)
    }
    fn key_frames(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::KeyFrames)
    }
    fn gradient_stops(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::GradientStops)
    }
    fn figures(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Figures)
    }
    fn segments(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Segments)
    }
    fn columns(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Columns)
    }
    fn setters(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Setters)
    }
    fn actions(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Actions)
    }
    fn bindings(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::Bindings)
    }
    fn tool_bars(&mut self) -> Option<&mut dyn ContentSequence> {
        self.sequence_for(ContentFamily::ToolBars)
    }
}

fn stub(element: E) -> StubElement {
    StubElement {
        element,
        family: content_row(element).map(|row| row.family),
        content: Vec::new(),
    }
}

#[test]
fn test_tables_are_well_formed() {
    let violations = verify_tables();
    assert!(violations.is_empty(), "content violations: {:#?}", violations);
}

#[test]
fn test_inherited_content() {
    assert_eq!(default_content_member(E::Grid), Some("Children"));
    assert_eq!(default_content_member(E::Bold), Some("Inlines"));
    assert_eq!(default_content_member(E::Hyperlink), Some("Inlines"));
    assert_eq!(default_content_member(E::ListBox), Some("Items"));
    assert_eq!(default_content_member(E::Storyboard), Some("Children"));
    assert_eq!(default_content_member(E::LinearGradientBrush), Some("GradientStops"));
    assert_eq!(default_content_property(E::StackPanel), KnownProperty::Panel_Children);
    assert_eq!(default_content_property(E::Hyperlink), KnownProperty::Span_Inlines);
}

#[test]
fn test_no_content() {
    assert_eq!(default_content_member(E::Double), None);
    assert_eq!(default_content_member(E::Unknown), None);
    assert_eq!(default_content_property(E::Brush), KnownProperty::Unknown);
    assert!(!collection_accepts_strings(E::Unknown));
}

#[test]
fn test_text_acceptance() {
    assert!(collection_accepts_strings(E::TextBlock));
    assert!(collection_accepts_strings(E::ComboBox));
    assert!(!collection_accepts_strings(E::StackPanel));
    assert!(!collection_accepts_strings(E::PathFigure));
    assert!(!collection_accepts_strings(E::DoubleAnimationUsingKeyFrames));
}

#[test]
fn test_every_content_member_has_working_accessor() {
    for element in E::iter() {
        if default_content_member(element).is_none() {
            continue;
        }
        let mut instance = stub(element);
        let sequence = content_collection_of(&mut instance, element)
            .unwrap_or_else(|| panic!("{} has no content collection", element));
        assert!(sequence.is_empty());
        sequence.push(ContentItem::Text("probe".into()));
        assert_eq!(sequence.len(), 1);
    }
}

#[test]
fn test_add_text() {
    let mut block = stub(E::TextBlock);
    add_text(&mut block, E::TextBlock, "Hello").expect("text allowed");
    assert_eq!(block.content.len(), 1);

    let mut panel = stub(E::StackPanel);
    let err = add_text(&mut panel, E::StackPanel, "Hello").expect_err("typed children");
    assert_eq!(err.code(), crate::error::ErrorCode::MalformedCodecInput);
    assert!(panel.content.is_empty());
}

#[test]
fn test_instance_without_family_yields_none() {
    let mut instance = StubElement {
        element: E::StackPanel,
        family: None,
        content: Vec::new(),
    };
    assert!(content_collection_of(&mut instance, E::StackPanel).is_none());
}
