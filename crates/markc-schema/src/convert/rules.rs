// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Converter tables: type-level defaults and per-owner override rules.

use crate::schema::KnownElement as E;

/// One entry of an owner's override list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterRule {
    /// `Width`, `Height`, `MinWidth`, `MinHeight`, `MaxWidth`, `MaxHeight`
    /// route to the unit-aware length converter.
    StandardLength,
    /// `FontSize` routes to the font-size converter.
    FontSize,
    /// An exact member name.
    Member(&'static str, E),
}

pub(crate) const STANDARD_LENGTH_MEMBERS: [&str; 6] =
    ["Width", "Height", "MinWidth", "MinHeight", "MaxWidth", "MaxHeight"];

impl ConverterRule {
    /// Converter this rule assigns to `member`, if it matches.
    pub fn apply(&self, member: &str) -> Option<E> {
        match *self {
            ConverterRule::StandardLength if STANDARD_LENGTH_MEMBERS.contains(&member) => {
                Some(E::LengthConverter)
            }
            ConverterRule::FontSize if member == "FontSize" => Some(E::FontSizeConverter),
            ConverterRule::Member(name, converter) if name == member => Some(converter),
            _ => None,
        }
    }

    pub fn converter(&self) -> E {
        match *self {
            ConverterRule::StandardLength => E::LengthConverter,
            ConverterRule::FontSize => E::FontSizeConverter,
            ConverterRule::Member(_, converter) => converter,
        }
    }
}

use ConverterRule::{FontSize, Member, StandardLength};

/// Default converter per value type. Enums are absent: they convert generically.
pub(crate) static TYPE_CONVERTERS: &[(E, E)] = &[
    // platform primitives
    (E::Boolean, E::BooleanConverter),
    (E::Char, E::CharConverter),
    (E::Double, E::DoubleConverter),
    (E::Int32, E::Int32Converter),
    (E::String, E::StringConverter),
    (E::TimeSpan, E::TimeSpanConverter),
    (E::Uri, E::UriTypeConverter),
    (E::Type, E::TypeTypeConverter),
    (E::CultureInfo, E::CultureInfoConverter),
    // geometry values
    (E::Point, E::PointConverter),
    (E::Rect, E::RectConverter),
    (E::Size, E::SizeConverter),
    (E::Vector, E::VectorConverter),
    (E::Thickness, E::ThicknessConverter),
    (E::CornerRadius, E::CornerRadiusConverter),
    (E::GridLength, E::GridLengthConverter),
    (E::FigureLength, E::FigureLengthConverter),
    (E::Point3D, E::Point3DConverter),
    (E::Vector3D, E::Vector3DConverter),
    // collections
    (E::DoubleCollection, E::DoubleCollectionConverter),
    (E::Int32Collection, E::Int32CollectionConverter),
    (E::PointCollection, E::PointCollectionConverter),
    (E::VectorCollection, E::VectorCollectionConverter),
    (E::Point3DCollection, E::Point3DCollectionConverter),
    (E::Vector3DCollection, E::Vector3DCollectionConverter),
    (E::TextDecorationCollection, E::TextDecorationCollectionConverter),
    // media
    (E::Brush, E::BrushConverter),
    (E::Color, E::ColorConverter),
    (E::Geometry, E::GeometryConverter),
    (E::Transform, E::TransformConverter),
    (E::ImageSource, E::ImageSourceConverter),
    (E::FontFamily, E::FontFamilyConverter),
    (E::FontStretch, E::FontStretchConverter),
    (E::FontStyle, E::FontStyleConverter),
    (E::FontWeight, E::FontWeightConverter),
    // timing
    (E::Duration, E::DurationConverter),
    (E::KeyTime, E::KeyTimeConverter),
    (E::RepeatBehavior, E::RepeatBehaviorConverter),
    // input
    (E::ICommand, E::CommandConverter),
    (E::Key, E::KeyConverter),
    (E::ModifierKeys, E::ModifierKeysConverter),
    (E::KeyGesture, E::KeyGestureConverter),
    (E::MouseGesture, E::MouseGestureConverter),
    (E::Cursor, E::CursorConverter),
    // markup
    (E::XmlLanguage, E::XmlLanguageConverter),
    (E::PropertyPath, E::PropertyPathConverter),
    (E::DependencyProperty, E::DependencyPropertyConverter),
    (E::RoutedEvent, E::RoutedEventConverter),
];

const LENGTH: E = E::LengthConverter;
const COMMAND: E = E::CommandConverter;
const IETF_CULTURE: E = E::CultureInfoIetfLanguageTagConverter;

/// Override lists, one per owner type.
///
/// Lookup uses the list of the nearest ancestor that has one; lists do not
/// inherit from each other. Within a list the first matching rule wins, so a
/// `StandardLength` entry shadows any later `Member("Width", ..)`.
pub(crate) static OWNER_RULES: &[(E, &[ConverterRule])] = &[
    // layout elements
    (E::FrameworkElement, &[StandardLength]),
    (E::Control, &[StandardLength, FontSize]),
    (E::TextBlock, &[StandardLength, FontSize, Member("LineHeight", LENGTH)]),
    (E::AccessText, &[StandardLength, FontSize]),
    (E::Canvas, &[
        StandardLength,
        Member("Left", LENGTH),
        Member("Top", LENGTH),
        Member("Right", LENGTH),
        Member("Bottom", LENGTH),
    ]),
    (E::WrapPanel, &[StandardLength, Member("ItemWidth", LENGTH), Member("ItemHeight", LENGTH)]),
    (E::Popup, &[
        StandardLength,
        Member("HorizontalOffset", LENGTH),
        Member("VerticalOffset", LENGTH),
    ]),
    (E::Window, &[StandardLength, FontSize, Member("Left", LENGTH), Member("Top", LENGTH)]),
    (E::ColumnDefinition, &[Member("MinWidth", LENGTH), Member("MaxWidth", LENGTH)]),
    (E::RowDefinition, &[Member("MinHeight", LENGTH), Member("MaxHeight", LENGTH)]),
    (E::GridViewColumn, &[Member("Width", LENGTH)]),
    // controls
    (E::ButtonBase, &[StandardLength, FontSize, Member("Command", COMMAND)]),
    (E::ToggleButton, &[
        StandardLength,
        FontSize,
        Member("IsChecked", E::NullableBoolConverter),
        Member("Command", COMMAND),
    ]),
    (E::MenuItem, &[StandardLength, FontSize, Member("Command", COMMAND)]),
    (E::ContextMenu, &[
        StandardLength,
        FontSize,
        Member("HorizontalOffset", LENGTH),
        Member("VerticalOffset", LENGTH),
    ]),
    (E::ToolTip, &[
        StandardLength,
        FontSize,
        Member("HorizontalOffset", LENGTH),
        Member("VerticalOffset", LENGTH),
    ]),
    // shapes
    (E::Shape, &[StandardLength, Member("StrokeThickness", LENGTH)]),
    (E::Line, &[
        StandardLength,
        Member("StrokeThickness", LENGTH),
        Member("X1", LENGTH),
        Member("Y1", LENGTH),
        Member("X2", LENGTH),
        Member("Y2", LENGTH),
    ]),
    // flow content
    (E::TextElement, &[FontSize]),
    (E::Hyperlink, &[FontSize, Member("Command", COMMAND)]),
    (E::Block, &[FontSize, Member("LineHeight", LENGTH)]),
    (E::Paragraph, &[FontSize, Member("LineHeight", LENGTH), Member("TextIndent", LENGTH)]),
    (E::Table, &[FontSize, Member("LineHeight", LENGTH), Member("CellSpacing", LENGTH)]),
    (E::List, &[FontSize, Member("LineHeight", LENGTH), Member("MarkerOffset", LENGTH)]),
    (E::Figure, &[
        FontSize,
        Member("Width", E::FigureLengthConverter),
        Member("Height", E::FigureLengthConverter),
    ]),
    (E::Floater, &[FontSize, Member("Width", LENGTH)]),
    (E::FlowDocument, &[
        FontSize,
        Member("LineHeight", LENGTH),
        Member("ColumnWidth", LENGTH),
        Member("ColumnGap", LENGTH),
        Member("ColumnRuleWidth", LENGTH),
        Member("PageWidth", LENGTH),
        Member("PageHeight", LENGTH),
        Member("MinPageWidth", LENGTH),
        Member("MinPageHeight", LENGTH),
        Member("MaxPageWidth", LENGTH),
        Member("MaxPageHeight", LENGTH),
    ]),
    // data
    (E::Binding, &[Member("ConverterCulture", IETF_CULTURE)]),
    (E::MultiBinding, &[Member("ConverterCulture", IETF_CULTURE)]),
    (E::CollectionViewSource, &[Member("Culture", IETF_CULTURE)]),
    // input
    (E::KeyBinding, &[Member("Gesture", E::KeyGestureConverter), Member("Command", COMMAND)]),
    (E::MouseBinding, &[Member("Gesture", E::MouseGestureConverter), Member("Command", COMMAND)]),
    // per-slot list fidelity
    (E::GlyphRun, &[
        Member("CaretStops", E::BoolIListConverter),
        Member("ClusterMap", E::UShortIListConverter),
        Member("Characters", E::CharIListConverter),
        Member("GlyphIndices", E::UShortIListConverter),
        Member("AdvanceWidths", E::DoubleIListConverter),
        Member("GlyphOffsets", E::PointIListConverter),
    ]),
];
