// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Default content resolution.
//!
//! A type's *content member* receives child markup written without an explicit
//! property tag. Every content member here is collection-backed: the
//! resolver names the member and, given a live instance, hands back the
//! mutable sequence behind it. Instances belong to the host toolkit and are
//! reached through [`ElementObject`].
//!
//! Content is inherited: `Grid` uses `Panel.Children`, `Bold` uses
//! `Span.Inlines`. The nearest ancestor with a row wins.

use crate::error::{Error, Result};
use crate::schema::{KnownElement, KnownProperty};
use std::collections::HashMap;
use std::sync::OnceLock;

/// One child added to a content collection.
#[derive(Debug)]
pub enum ContentItem {
    Element(Box<dyn ElementObject>),
    Text(String),
}

/// A mutable sequence backing a content member.
pub trait ContentSequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, item: ContentItem);
}

impl ContentSequence for Vec<ContentItem> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn push(&mut self, item: ContentItem) {
        Vec::push(self, item);
    }
}

/// Host-side view of a constructed element.
///
/// One accessor per content family; an element implements those its type
/// exposes and leaves the rest returning `None`.
pub trait ElementObject: std::fmt::Debug {
    /// Known type of the instance, or `Unknown` for user types.
    fn element_type(&self) -> KnownElement;

    fn children(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn items(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn inlines(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn blocks(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn list_items(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn row_groups(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn rows(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn cells(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn key_frames(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn gradient_stops(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn figures(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn segments(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn columns(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn setters(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn actions(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn bindings(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
    fn tool_bars(&mut self) -> Option<&mut dyn ContentSequence> {
        None
    }
}

/// Outbound collaborator that allocates default instances.
pub trait InstanceFactory {
    fn create(&self, element: KnownElement) -> Option<Box<dyn ElementObject>>;
}

/// Which [`ElementObject`] accessor backs a content member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentFamily {
    Children,
    Items,
    Inlines,
    Blocks,
    ListItems,
    RowGroups,
    Rows,
    Cells,
    KeyFrames,
    GradientStops,
    Figures,
    Segments,
    Columns,
    Setters,
    Actions,
    Bindings,
    ToolBars,
}

impl ContentFamily {
    /// Delegate to the matching accessor.
    pub fn access(self, instance: &mut dyn ElementObject) -> Option<&mut dyn ContentSequence> {
        match self {
            ContentFamily::Children => instance.children(),
            ContentFamily::Items => instance.items(),
            ContentFamily::Inlines => instance.inlines(),
            ContentFamily::Blocks => instance.blocks(),
            ContentFamily::ListItems => instance.list_items(),
            ContentFamily::RowGroups => instance.row_groups(),
            ContentFamily::Rows => instance.rows(),
            ContentFamily::Cells => instance.cells(),
            ContentFamily::KeyFrames => instance.key_frames(),
            ContentFamily::GradientStops => instance.gradient_stops(),
            ContentFamily::Figures => instance.figures(),
            ContentFamily::Segments => instance.segments(),
            ContentFamily::Columns => instance.columns(),
            ContentFamily::Setters => instance.setters(),
            ContentFamily::Actions => instance.actions(),
            ContentFamily::Bindings => instance.bindings(),
            ContentFamily::ToolBars => instance.tool_bars(),
        }
    }
}

/// One row of the content table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRow {
    pub owner: KnownElement,
    pub member: &'static str,
    pub family: ContentFamily,
    /// Raw text children allowed (`false` for typed-element collections).
    pub accepts_strings: bool,
}

macro_rules! content_rows {
    ( $( $owner:ident . $member:literal => $family:ident $(, $text:ident)? ; )* ) => {
        static CONTENT_ROWS: &[ContentRow] = &[
            $(
                ContentRow {
                    owner: KnownElement::$owner,
                    member: $member,
                    family: ContentFamily::$family,
                    accepts_strings: content_rows!(@text $($text)?),
                },
            )*
        ];
    };
    (@text) => { false };
    (@text text) => { true };
}

content_rows! {
    Panel."Children" => Children;
    ItemsControl."Items" => Items, text;
    ToolBarTray."ToolBars" => ToolBars;
    Viewport3D."Children" => Children;
    TextBlock."Inlines" => Inlines, text;
    Span."Inlines" => Inlines, text;
    Paragraph."Inlines" => Inlines, text;
    Section."Blocks" => Blocks;
    FlowDocument."Blocks" => Blocks;
    ListItem."Blocks" => Blocks;
    TableCell."Blocks" => Blocks;
    Figure."Blocks" => Blocks;
    Floater."Blocks" => Blocks;
    List."ListItems" => ListItems;
    Table."RowGroups" => RowGroups;
    TableRowGroup."Rows" => Rows;
    TableRow."Cells" => Cells;
    DoubleAnimationUsingKeyFrames."KeyFrames" => KeyFrames;
    ColorAnimationUsingKeyFrames."KeyFrames" => KeyFrames;
    PointAnimationUsingKeyFrames."KeyFrames" => KeyFrames;
    ObjectAnimationUsingKeyFrames."KeyFrames" => KeyFrames;
    TimelineGroup."Children" => Children;
    GradientBrush."GradientStops" => GradientStops;
    PathGeometry."Figures" => Figures;
    PathFigure."Segments" => Segments;
    TransformGroup."Children" => Children;
    GeometryGroup."Children" => Children;
    DrawingGroup."Children" => Children;
    Model3DGroup."Children" => Children;
    ModelVisual3D."Children" => Children;
    GridView."Columns" => Columns;
    Style."Setters" => Setters;
    Trigger."Setters" => Setters;
    DataTrigger."Setters" => Setters;
    MultiTrigger."Setters" => Setters;
    EventTrigger."Actions" => Actions;
    MultiBinding."Bindings" => Bindings;
    PriorityBinding."Bindings" => Bindings;
    ArrayExtension."Items" => Items, text;
}

fn index() -> &'static HashMap<KnownElement, &'static ContentRow> {
    static INDEX: OnceLock<HashMap<KnownElement, &'static ContentRow>> = OnceLock::new();
    INDEX.get_or_init(|| CONTENT_ROWS.iter().map(|row| (row.owner, row)).collect())
}

/// Content row governing `element`: its own, else the nearest ancestor's.
pub fn content_row(element: KnownElement) -> Option<&'static ContentRow> {
    let index = index();
    element
        .ancestors()
        .find_map(|candidate| index.get(&candidate).copied())
}

pub fn default_content_member(element: KnownElement) -> Option<&'static str> {
    content_row(element).map(|row| row.member)
}

/// Known property behind `element`'s content member.
pub fn default_content_property(element: KnownElement) -> KnownProperty {
    content_row(element).map_or(KnownProperty::Unknown, |row| {
        KnownProperty::lookup(row.owner, row.member)
    })
}

/// True when `element`'s content collection takes raw text children.
pub fn collection_accepts_strings(element: KnownElement) -> bool {
    content_row(element).is_some_and(|row| row.accepts_strings)
}

/// Mutable sequence behind `element`'s content member on `instance`.
pub fn content_collection_of(
    instance: &mut dyn ElementObject,
    element: KnownElement,
) -> Option<&mut dyn ContentSequence> {
    let row = content_row(element)?;
    row.family.access(instance)
}

/// Append text to `instance`'s content collection, enforcing text acceptance.
pub fn add_text(instance: &mut dyn ElementObject, element: KnownElement, text: &str) -> Result<()> {
    let row = content_row(element).ok_or_else(|| {
        Error::conversion("Content", 0, format!("{} has no content member", element))
    })?;
    if !row.accepts_strings {
        return Err(Error::conversion(
            "Content",
            0,
            format!("{}.{} does not accept text", row.owner, row.member),
        ));
    }
    let sequence = row.family.access(instance).ok_or_else(|| {
        Error::conversion("Content", 0, format!("instance exposes no {:?}", row.family))
    })?;
    sequence.push(ContentItem::Text(text.to_string()));
    Ok(())
}

/// Iterate over every content row.
pub fn rows() -> impl Iterator<Item = &'static ContentRow> {
    CONTENT_ROWS.iter()
}

/// Every row must name a property its owner declares, owners must be unique,
/// and text-accepting members must hold a text-compatible family.
pub fn verify_tables() -> Vec<String> {
    let mut violations = Vec::new();
    let mut seen = std::collections::HashSet::new();
    for row in CONTENT_ROWS {
        if !seen.insert(row.owner) {
            violations.push(format!("content owner {} listed twice", row.owner));
        }
        if !KnownProperty::lookup(row.owner, row.member).is_known() {
            violations.push(format!("{}.{} is not a known property", row.owner, row.member));
        }
        let text_family = matches!(row.family, ContentFamily::Items | ContentFamily::Inlines);
        if row.accepts_strings && !text_family {
            violations.push(format!("{}.{} accepts text but holds typed children", row.owner, row.member));
        }
    }
    violations
}

#[cfg(test)]
mod tests;
