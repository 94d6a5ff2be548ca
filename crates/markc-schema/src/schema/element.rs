// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Known element (type) table.
//!
//! Rows are declarative data; lookups go through lazily built indices so the
//! table itself stays a flat `static` slice.

use super::macros::known_elements;
use super::module::ModuleKind;
use crate::error::SchemaError;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Namespaces of known types.
pub mod ns {
    pub const SYSTEM: &str = "System";
    pub const COMPONENT_MODEL: &str = "System.ComponentModel";
    pub const GLOBALIZATION: &str = "System.Globalization";
    pub const WINDOWS: &str = "System.Windows";
    pub const THREADING: &str = "System.Windows.Threading";
    pub const CONTROLS: &str = "System.Windows.Controls";
    pub const PRIMITIVES: &str = "System.Windows.Controls.Primitives";
    pub const DOCUMENTS: &str = "System.Windows.Documents";
    pub const DATA: &str = "System.Windows.Data";
    pub const INPUT: &str = "System.Windows.Input";
    pub const MARKUP: &str = "System.Windows.Markup";
    pub const MEDIA: &str = "System.Windows.Media";
    pub const MEDIA_ANIMATION: &str = "System.Windows.Media.Animation";
    pub const MEDIA_CONVERTERS: &str = "System.Windows.Media.Converters";
    pub const MEDIA3D: &str = "System.Windows.Media.Media3D";
    pub const SHAPES: &str = "System.Windows.Shapes";
}

/// Broad shape of a known type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Class,
    Value,
    Enum,
    Interface,
}

/// One row of the element table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementRow {
    pub id: KnownElement,
    pub name: &'static str,
    pub namespace: &'static str,
    pub module: ModuleKind,
    pub kind: ElementKind,
    /// Declared base type; `Unknown` for `Object` and interfaces.
    pub base: KnownElement,
}

impl ElementRow {
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.namespace, self.name)
    }
}

known_elements! {
    1 => AccessText(Framework, CONTROLS, Class, FrameworkElement),
    2 => Animatable(Core, MEDIA_ANIMATION, Class, Freezable),
    3 => ArcSegment(Core, MEDIA, Class, PathSegment),
    4 => ArrayExtension(Framework, MARKUP, Class, MarkupExtension),
    5 => BeginStoryboard(Framework, MEDIA_ANIMATION, Class, TriggerAction),
    6 => BezierSegment(Core, MEDIA, Class, PathSegment),
    7 => Binding(Framework, DATA, Class, BindingBase),
    8 => BindingBase(Framework, DATA, Class, MarkupExtension),
    9 => BindingMode(Framework, DATA, Enum, Object),
    10 => Block(Framework, DOCUMENTS, Class, TextElement),
    11 => BlockCollection(Framework, DOCUMENTS, Class, Object),
    12 => BlockUIContainer(Framework, DOCUMENTS, Class, Block),
    13 => Bold(Framework, DOCUMENTS, Class, Span),
    14 => BoolIListConverter(Core, MEDIA_CONVERTERS, Class, TypeConverter),
    15 => Boolean(Base, SYSTEM, Value, Object),
    16 => BooleanConverter(Base, COMPONENT_MODEL, Class, TypeConverter),
    17 => Border(Framework, CONTROLS, Class, Decorator),
    18 => Brush(Core, MEDIA, Class, Animatable),
    19 => BrushConverter(Core, MEDIA, Class, TypeConverter),
    20 => Button(Framework, CONTROLS, Class, ButtonBase),
    21 => ButtonBase(Framework, PRIMITIVES, Class, ContentControl),
    22 => Canvas(Framework, CONTROLS, Class, Panel),
    23 => Char(Base, SYSTEM, Value, Object),
    24 => CharConverter(Base, COMPONENT_MODEL, Class, TypeConverter),
    25 => CharIListConverter(Core, MEDIA_CONVERTERS, Class, TypeConverter),
    26 => CheckBox(Framework, CONTROLS, Class, ToggleButton),
    27 => ClickMode(Framework, CONTROLS, Enum, Object),
    28 => CollectionViewSource(Framework, DATA, Class, DependencyObject),
    29 => Color(Core, MEDIA, Value, Object),
    30 => ColorAnimationUsingKeyFrames(Core, MEDIA_ANIMATION, Class, Timeline),
    31 => ColorConverter(Core, MEDIA, Class, TypeConverter),
    32 => ColorKeyFrame(Core, MEDIA_ANIMATION, Class, Freezable),
    33 => ColorKeyFrameCollection(Core, MEDIA_ANIMATION, Class, Freezable),
    34 => ColumnDefinition(Framework, CONTROLS, Class, FrameworkContentElement),
    35 => ColumnDefinitionCollection(Framework, CONTROLS, Class, Object),
    36 => ComboBox(Framework, CONTROLS, Class, Selector),
    37 => ComboBoxItem(Framework, CONTROLS, Class, ListBoxItem),
    38 => CommandBinding(Core, INPUT, Class, Object),
    39 => CommandConverter(Core, INPUT, Class, TypeConverter),
    40 => Condition(Framework, WINDOWS, Class, Object),
    41 => ConditionCollection(Framework, WINDOWS, Class, Object),
    42 => ContentControl(Framework, CONTROLS, Class, Control),
    43 => ContentElement(Core, WINDOWS, Class, DependencyObject),
    44 => ContextMenu(Framework, CONTROLS, Class, MenuBase),
    45 => Control(Framework, CONTROLS, Class, FrameworkElement),
    46 => ControlTemplate(Framework, CONTROLS, Class, FrameworkTemplate),
    47 => CornerRadius(Framework, WINDOWS, Value, Object),
    48 => CornerRadiusConverter(Framework, WINDOWS, Class, TypeConverter),
    49 => CultureInfo(Base, GLOBALIZATION, Class, Object),
    50 => CultureInfoConverter(Base, COMPONENT_MODEL, Class, TypeConverter),
    51 => CultureInfoIetfLanguageTagConverter(Core, WINDOWS, Class, TypeConverter),
    52 => Cursor(Core, INPUT, Class, Object),
    53 => CursorConverter(Core, INPUT, Class, TypeConverter),
    54 => DataTemplate(Framework, WINDOWS, Class, FrameworkTemplate),
    55 => DataTrigger(Framework, WINDOWS, Class, TriggerBase),
    56 => Decorator(Framework, CONTROLS, Class, FrameworkElement),
    57 => DependencyObject(Base, WINDOWS, Class, DispatcherObject),
    58 => DependencyProperty(Base, WINDOWS, Class, Object),
    59 => DependencyPropertyConverter(Framework, MARKUP, Class, TypeConverter),
    // 60: reserved
    61 => DiscreteDoubleKeyFrame(Core, MEDIA_ANIMATION, Class, DoubleKeyFrame),
    62 => DiscreteObjectKeyFrame(Core, MEDIA_ANIMATION, Class, ObjectKeyFrame),
    63 => DispatcherObject(Base, THREADING, Class, Object),
    64 => Dock(Framework, CONTROLS, Enum, Object),
    65 => DockPanel(Framework, CONTROLS, Class, Panel),
    66 => Double(Base, SYSTEM, Value, Object),
    67 => DoubleAnimation(Core, MEDIA_ANIMATION, Class, Timeline),
    68 => DoubleAnimationUsingKeyFrames(Core, MEDIA_ANIMATION, Class, Timeline),
    69 => DoubleCollection(Core, MEDIA, Class, Freezable),
    70 => DoubleCollectionConverter(Core, MEDIA, Class, TypeConverter),
    71 => DoubleConverter(Base, COMPONENT_MODEL, Class, TypeConverter),
    72 => DoubleIListConverter(Core, MEDIA_CONVERTERS, Class, TypeConverter),
    73 => DoubleKeyFrame(Core, MEDIA_ANIMATION, Class, Freezable),
    74 => DoubleKeyFrameCollection(Core, MEDIA_ANIMATION, Class, Freezable),
    75 => Drawing(Core, MEDIA, Class, Animatable),
    76 => DrawingCollection(Core, MEDIA, Class, Freezable),
    77 => DrawingGroup(Core, MEDIA, Class, Drawing),
    78 => Duration(Core, WINDOWS, Value, Object),
    79 => DurationConverter(Core, WINDOWS, Class, TypeConverter),
    80 => DynamicResourceExtension(Framework, WINDOWS, Class, MarkupExtension),
    81 => Ellipse(Framework, SHAPES, Class, Shape),
    82 => EventTrigger(Framework, WINDOWS, Class, TriggerBase),
    83 => Expander(Framework, CONTROLS, Class, HeaderedContentControl),
    84 => Figure(Framework, DOCUMENTS, Class, Inline),
    85 => FigureLength(Framework, WINDOWS, Value, Object),
    86 => FigureLengthConverter(Framework, WINDOWS, Class, TypeConverter),
    87 => FillRule(Core, MEDIA, Enum, Object),
    88 => FlowDirection(Core, WINDOWS, Enum, Object),
    89 => FlowDocument(Framework, DOCUMENTS, Class, FrameworkContentElement),
    90 => Floater(Framework, DOCUMENTS, Class, Inline),
    91 => FontFamily(Core, MEDIA, Class, Object),
    92 => FontFamilyConverter(Core, MEDIA, Class, TypeConverter),
    93 => FontSizeConverter(Framework, WINDOWS, Class, TypeConverter),
    94 => FontStretch(Core, WINDOWS, Value, Object),
    95 => FontStretchConverter(Core, WINDOWS, Class, TypeConverter),
    96 => FontStyle(Core, WINDOWS, Value, Object),
    97 => FontStyleConverter(Core, WINDOWS, Class, TypeConverter),
    98 => FontWeight(Core, WINDOWS, Value, Object),
    99 => FontWeightConverter(Core, WINDOWS, Class, TypeConverter),
    100 => FrameworkContentElement(Framework, WINDOWS, Class, ContentElement),
    101 => FrameworkElement(Framework, WINDOWS, Class, UIElement),
    102 => FrameworkTemplate(Framework, WINDOWS, Class, DispatcherObject),
    103 => Freezable(Base, WINDOWS, Class, DependencyObject),
    104 => Geometry(Core, MEDIA, Class, Animatable),
    105 => GeometryCollection(Core, MEDIA, Class, Freezable),
    106 => GeometryConverter(Core, MEDIA, Class, TypeConverter),
    107 => GeometryGroup(Core, MEDIA, Class, Geometry),
    108 => GeometryModel3D(Core, MEDIA3D, Class, Model3D),
    109 => GlyphRun(Core, MEDIA, Class, Object),
    110 => Glyphs(Framework, DOCUMENTS, Class, FrameworkElement),
    111 => GradientBrush(Core, MEDIA, Class, Brush),
    112 => GradientStop(Core, MEDIA, Class, Animatable),
    113 => GradientStopCollection(Core, MEDIA, Class, Freezable),
    114 => Grid(Framework, CONTROLS, Class, Panel),
    115 => GridLength(Framework, WINDOWS, Value, Object),
    116 => GridLengthConverter(Framework, WINDOWS, Class, TypeConverter),
    117 => GridView(Framework, CONTROLS, Class, ViewBase),
    118 => GridViewColumn(Framework, CONTROLS, Class, DependencyObject),
    119 => GridViewColumnCollection(Framework, CONTROLS, Class, Object),
    120 => GroupBox(Framework, CONTROLS, Class, HeaderedContentControl),
    121 => HeaderedContentControl(Framework, CONTROLS, Class, ContentControl),
    122 => HeaderedItemsControl(Framework, CONTROLS, Class, ItemsControl),
    123 => HierarchicalDataTemplate(Framework, WINDOWS, Class, DataTemplate),
    124 => HorizontalAlignment(Framework, WINDOWS, Enum, Object),
    125 => Hyperlink(Framework, DOCUMENTS, Class, Span),
    126 => ICommand(Core, INPUT, Interface, Unknown),
    127 => Image(Framework, CONTROLS, Class, FrameworkElement),
    128 => ImageSource(Core, MEDIA, Class, Animatable),
    129 => ImageSourceConverter(Core, MEDIA, Class, TypeConverter),
    130 => Inline(Framework, DOCUMENTS, Class, TextElement),
    131 => InlineCollection(Framework, DOCUMENTS, Class, Object),
    132 => InlineUIContainer(Framework, DOCUMENTS, Class, Inline),
    133 => InputBinding(Core, INPUT, Class, Freezable),
    134 => InputGesture(Core, INPUT, Class, Object),
    135 => Int32(Base, SYSTEM, Value, Object),
    136 => Int32Collection(Core, MEDIA, Class, Freezable),
    137 => Int32CollectionConverter(Core, MEDIA, Class, TypeConverter),
    138 => Int32Converter(Base, COMPONENT_MODEL, Class, TypeConverter),
    139 => Italic(Framework, DOCUMENTS, Class, Span),
    140 => ItemCollection(Framework, CONTROLS, Class, Object),
    141 => ItemsControl(Framework, CONTROLS, Class, Control),
    142 => ItemsPanelTemplate(Framework, CONTROLS, Class, FrameworkTemplate),
    143 => Key(Base, INPUT, Enum, Object),
    144 => KeyBinding(Core, INPUT, Class, InputBinding),
    145 => KeyConverter(Base, INPUT, Class, TypeConverter),
    146 => KeyGesture(Core, INPUT, Class, InputGesture),
    147 => KeyGestureConverter(Core, INPUT, Class, TypeConverter),
    148 => KeyTime(Core, MEDIA_ANIMATION, Value, Object),
    149 => KeyTimeConverter(Core, MEDIA_ANIMATION, Class, TypeConverter),
    150 => Label(Framework, CONTROLS, Class, ContentControl),
    151 => LengthConverter(Framework, WINDOWS, Class, TypeConverter),
    152 => Line(Framework, SHAPES, Class, Shape),
    153 => LineBreak(Framework, DOCUMENTS, Class, Inline),
    154 => LineSegment(Core, MEDIA, Class, PathSegment),
    155 => LinearColorKeyFrame(Core, MEDIA_ANIMATION, Class, ColorKeyFrame),
    156 => LinearDoubleKeyFrame(Core, MEDIA_ANIMATION, Class, DoubleKeyFrame),
    157 => LinearGradientBrush(Core, MEDIA, Class, GradientBrush),
    158 => LinearPointKeyFrame(Core, MEDIA_ANIMATION, Class, PointKeyFrame),
    159 => List(Framework, DOCUMENTS, Class, Block),
    160 => ListBox(Framework, CONTROLS, Class, Selector),
    161 => ListBoxItem(Framework, CONTROLS, Class, ContentControl),
    162 => ListItem(Framework, DOCUMENTS, Class, TextElement),
    163 => ListItemCollection(Framework, DOCUMENTS, Class, Object),
    164 => ListView(Framework, CONTROLS, Class, ListBox),
    165 => ListViewItem(Framework, CONTROLS, Class, ListBoxItem),
    166 => MarkupExtension(Base, MARKUP, Class, Object),
    167 => Material(Core, MEDIA3D, Class, Animatable),
    168 => MediaElement(Framework, CONTROLS, Class, FrameworkElement),
    169 => Menu(Framework, CONTROLS, Class, MenuBase),
    170 => MenuBase(Framework, PRIMITIVES, Class, ItemsControl),
    171 => MenuItem(Framework, CONTROLS, Class, HeaderedItemsControl),
    172 => MeshGeometry3D(Core, MEDIA3D, Class, Animatable),
    173 => Model3D(Core, MEDIA3D, Class, Animatable),
    174 => Model3DCollection(Core, MEDIA3D, Class, Freezable),
    175 => Model3DGroup(Core, MEDIA3D, Class, Model3D),
    176 => ModelVisual3D(Core, MEDIA3D, Class, Visual3D),
    177 => ModifierKeys(Base, INPUT, Enum, Object),
    178 => ModifierKeysConverter(Base, INPUT, Class, TypeConverter),
    179 => MouseAction(Core, INPUT, Enum, Object),
    180 => MouseBinding(Core, INPUT, Class, InputBinding),
    181 => MouseGesture(Core, INPUT, Class, InputGesture),
    182 => MouseGestureConverter(Core, INPUT, Class, TypeConverter),
    183 => MultiBinding(Framework, DATA, Class, BindingBase),
    184 => MultiTrigger(Framework, WINDOWS, Class, TriggerBase),
    185 => NullExtension(Framework, MARKUP, Class, MarkupExtension),
    186 => NullableBoolConverter(Framework, WINDOWS, Class, TypeConverter),
    187 => Object(Base, SYSTEM, Class, Unknown),
    188 => ObjectAnimationUsingKeyFrames(Core, MEDIA_ANIMATION, Class, Timeline),
    189 => ObjectKeyFrame(Core, MEDIA_ANIMATION, Class, Freezable),
    190 => ObjectKeyFrameCollection(Core, MEDIA_ANIMATION, Class, Freezable),
    191 => Orientation(Framework, CONTROLS, Enum, Object),
    192 => Page(Framework, CONTROLS, Class, UserControl),
    193 => Panel(Framework, CONTROLS, Class, FrameworkElement),
    194 => Paragraph(Framework, DOCUMENTS, Class, Block),
    195 => Path(Framework, SHAPES, Class, Shape),
    196 => PathFigure(Core, MEDIA, Class, Animatable),
    197 => PathFigureCollection(Core, MEDIA, Class, Freezable),
    198 => PathGeometry(Core, MEDIA, Class, Geometry),
    199 => PathSegment(Core, MEDIA, Class, Animatable),
    200 => PathSegmentCollection(Core, MEDIA, Class, Freezable),
    201 => PlacementMode(Framework, PRIMITIVES, Enum, Object),
    202 => Point(Base, WINDOWS, Value, Object),
    203 => Point3D(Core, MEDIA3D, Value, Object),
    204 => Point3DCollection(Core, MEDIA3D, Class, Freezable),
    205 => Point3DCollectionConverter(Core, MEDIA3D, Class, TypeConverter),
    206 => Point3DConverter(Core, MEDIA3D, Class, TypeConverter),
    207 => PointAnimationUsingKeyFrames(Core, MEDIA_ANIMATION, Class, Timeline),
    208 => PointCollection(Core, MEDIA, Class, Freezable),
    209 => PointCollectionConverter(Core, MEDIA, Class, TypeConverter),
    210 => PointConverter(Base, WINDOWS, Class, TypeConverter),
    211 => PointIListConverter(Core, MEDIA_CONVERTERS, Class, TypeConverter),
    212 => PointKeyFrame(Core, MEDIA_ANIMATION, Class, Freezable),
    213 => PointKeyFrameCollection(Core, MEDIA_ANIMATION, Class, Freezable),
    214 => PolyBezierSegment(Core, MEDIA, Class, PathSegment),
    215 => PolyLineSegment(Core, MEDIA, Class, PathSegment),
    216 => Polygon(Framework, SHAPES, Class, Shape),
    217 => Polyline(Framework, SHAPES, Class, Shape),
    218 => Popup(Framework, PRIMITIVES, Class, FrameworkElement),
    219 => PriorityBinding(Framework, DATA, Class, BindingBase),
    220 => ProgressBar(Framework, CONTROLS, Class, RangeBase),
    221 => PropertyPath(Framework, WINDOWS, Class, Object),
    222 => PropertyPathConverter(Framework, WINDOWS, Class, TypeConverter),
    223 => QuadraticBezierSegment(Core, MEDIA, Class, PathSegment),
    224 => RadioButton(Framework, CONTROLS, Class, ToggleButton),
    225 => RangeBase(Framework, PRIMITIVES, Class, Control),
    226 => Rect(Base, WINDOWS, Value, Object),
    227 => RectConverter(Base, WINDOWS, Class, TypeConverter),
    228 => Rectangle(Framework, SHAPES, Class, Shape),
    229 => RelativeSource(Framework, DATA, Class, MarkupExtension),
    230 => RepeatBehavior(Core, MEDIA_ANIMATION, Value, Object),
    231 => RepeatBehaviorConverter(Core, MEDIA_ANIMATION, Class, TypeConverter),
    232 => RepeatButton(Framework, PRIMITIVES, Class, ButtonBase),
    233 => ResourceDictionary(Framework, WINDOWS, Class, Object),
    234 => RichTextBox(Framework, CONTROLS, Class, TextBoxBase),
    235 => RotateTransform(Core, MEDIA, Class, Transform),
    236 => RoutedCommand(Core, INPUT, Class, Object),
    237 => RoutedEvent(Core, WINDOWS, Class, Object),
    238 => RoutedEventConverter(Framework, MARKUP, Class, TypeConverter),
    239 => RoutedUICommand(Core, INPUT, Class, RoutedCommand),
    240 => RowDefinition(Framework, CONTROLS, Class, FrameworkContentElement),
    241 => RowDefinitionCollection(Framework, CONTROLS, Class, Object),
    242 => Run(Framework, DOCUMENTS, Class, Inline),
    243 => ScaleTransform(Core, MEDIA, Class, Transform),
    244 => ScrollBar(Framework, PRIMITIVES, Class, RangeBase),
    245 => ScrollBarVisibility(Framework, CONTROLS, Enum, Object),
    246 => ScrollViewer(Framework, CONTROLS, Class, ContentControl),
    247 => Section(Framework, DOCUMENTS, Class, Block),
    248 => Selector(Framework, PRIMITIVES, Class, ItemsControl),
    249 => Separator(Framework, CONTROLS, Class, Control),
    250 => Setter(Framework, WINDOWS, Class, SetterBase),
    251 => SetterBase(Framework, WINDOWS, Class, Object),
    252 => SetterBaseCollection(Framework, WINDOWS, Class, Object),
    253 => Shape(Framework, SHAPES, Class, FrameworkElement),
    254 => Size(Base, WINDOWS, Value, Object),
    255 => SizeConverter(Base, WINDOWS, Class, TypeConverter),
    256 => SizeToContent(Framework, WINDOWS, Enum, Object),
    257 => Slider(Framework, CONTROLS, Class, RangeBase),
    258 => SolidColorBrush(Core, MEDIA, Class, Brush),
    259 => Span(Framework, DOCUMENTS, Class, Inline),
    260 => StackPanel(Framework, CONTROLS, Class, Panel),
    261 => StaticExtension(Base, MARKUP, Class, MarkupExtension),
    262 => StaticResourceExtension(Framework, WINDOWS, Class, MarkupExtension),
    263 => StatusBar(Framework, PRIMITIVES, Class, ItemsControl),
    264 => StatusBarItem(Framework, PRIMITIVES, Class, ContentControl),
    265 => Storyboard(Framework, MEDIA_ANIMATION, Class, TimelineGroup),
    266 => StreamGeometry(Core, MEDIA, Class, Geometry),
    267 => Stretch(Core, MEDIA, Enum, Object),
    268 => String(Base, SYSTEM, Class, Object),
    269 => StringConverter(Base, COMPONENT_MODEL, Class, TypeConverter),
    270 => Style(Framework, WINDOWS, Class, DispatcherObject),
    271 => SweepDirection(Core, MEDIA, Enum, Object),
    272 => TabControl(Framework, CONTROLS, Class, Selector),
    273 => TabItem(Framework, CONTROLS, Class, HeaderedContentControl),
    274 => Table(Framework, DOCUMENTS, Class, Block),
    275 => TableCell(Framework, DOCUMENTS, Class, TextElement),
    276 => TableCellCollection(Framework, DOCUMENTS, Class, Object),
    277 => TableColumn(Framework, DOCUMENTS, Class, FrameworkContentElement),
    278 => TableColumnCollection(Framework, DOCUMENTS, Class, Object),
    279 => TableRow(Framework, DOCUMENTS, Class, TextElement),
    280 => TableRowCollection(Framework, DOCUMENTS, Class, Object),
    281 => TableRowGroup(Framework, DOCUMENTS, Class, TextElement),
    282 => TableRowGroupCollection(Framework, DOCUMENTS, Class, Object),
    283 => TemplateBindingExtension(Framework, WINDOWS, Class, MarkupExtension),
    284 => TextAlignment(Core, WINDOWS, Enum, Object),
    285 => TextBlock(Framework, CONTROLS, Class, FrameworkElement),
    286 => TextBox(Framework, CONTROLS, Class, TextBoxBase),
    287 => TextBoxBase(Framework, PRIMITIVES, Class, Control),
    288 => TextDecorationCollection(Core, WINDOWS, Class, Freezable),
    289 => TextDecorationCollectionConverter(Core, WINDOWS, Class, TypeConverter),
    290 => TextElement(Framework, DOCUMENTS, Class, FrameworkContentElement),
    291 => TextWrapping(Core, WINDOWS, Enum, Object),
    292 => Thickness(Framework, WINDOWS, Value, Object),
    293 => ThicknessConverter(Framework, WINDOWS, Class, TypeConverter),
    294 => TimeSpan(Base, SYSTEM, Value, Object),
    295 => TimeSpanConverter(Base, COMPONENT_MODEL, Class, TypeConverter),
    296 => Timeline(Core, MEDIA_ANIMATION, Class, Animatable),
    297 => TimelineCollection(Core, MEDIA_ANIMATION, Class, Freezable),
    298 => TimelineGroup(Core, MEDIA_ANIMATION, Class, Timeline),
    299 => ToggleButton(Framework, PRIMITIVES, Class, ButtonBase),
    300 => ToolBar(Framework, CONTROLS, Class, HeaderedItemsControl),
    301 => ToolBarTray(Framework, CONTROLS, Class, FrameworkElement),
    302 => ToolTip(Framework, CONTROLS, Class, ContentControl),
    303 => Transform(Core, MEDIA, Class, Animatable),
    304 => TransformCollection(Core, MEDIA, Class, Freezable),
    305 => TransformConverter(Core, MEDIA, Class, TypeConverter),
    306 => TransformGroup(Core, MEDIA, Class, Transform),
    307 => TranslateTransform(Core, MEDIA, Class, Transform),
    308 => TreeView(Framework, CONTROLS, Class, ItemsControl),
    309 => TreeViewItem(Framework, CONTROLS, Class, HeaderedItemsControl),
    310 => Trigger(Framework, WINDOWS, Class, TriggerBase),
    311 => TriggerAction(Framework, WINDOWS, Class, DependencyObject),
    312 => TriggerActionCollection(Framework, WINDOWS, Class, Object),
    313 => TriggerBase(Framework, WINDOWS, Class, DependencyObject),
    314 => TriggerCollection(Framework, WINDOWS, Class, Object),
    315 => Type(Base, SYSTEM, Class, Object),
    316 => TypeConverter(Base, COMPONENT_MODEL, Class, Object),
    317 => TypeExtension(Framework, MARKUP, Class, MarkupExtension),
    318 => TypeTypeConverter(Framework, MARKUP, Class, TypeConverter),
    319 => UIElement(Core, WINDOWS, Class, Visual),
    320 => UIElementCollection(Framework, CONTROLS, Class, Object),
    321 => UInt16(Base, SYSTEM, Value, Object),
    322 => UShortIListConverter(Core, MEDIA_CONVERTERS, Class, TypeConverter),
    323 => Underline(Framework, DOCUMENTS, Class, Span),
    324 => UniformGrid(Framework, PRIMITIVES, Class, Panel),
    325 => UpdateSourceTrigger(Framework, DATA, Enum, Object),
    326 => Uri(Base, SYSTEM, Class, Object),
    327 => UriTypeConverter(Base, SYSTEM, Class, TypeConverter),
    328 => UserControl(Framework, CONTROLS, Class, ContentControl),
    329 => Vector(Base, WINDOWS, Value, Object),
    330 => Vector3D(Core, MEDIA3D, Value, Object),
    331 => Vector3DCollection(Core, MEDIA3D, Class, Freezable),
    332 => Vector3DCollectionConverter(Core, MEDIA3D, Class, TypeConverter),
    333 => Vector3DConverter(Core, MEDIA3D, Class, TypeConverter),
    334 => VectorCollection(Core, MEDIA, Class, Freezable),
    335 => VectorCollectionConverter(Core, MEDIA, Class, TypeConverter),
    336 => VectorConverter(Base, WINDOWS, Class, TypeConverter),
    337 => VerticalAlignment(Framework, WINDOWS, Enum, Object),
    338 => ViewBase(Framework, CONTROLS, Class, DependencyObject),
    339 => Viewbox(Framework, CONTROLS, Class, Decorator),
    340 => Viewport3D(Framework, CONTROLS, Class, FrameworkElement),
    341 => Visibility(Core, WINDOWS, Enum, Object),
    342 => Visual(Core, MEDIA, Class, DependencyObject),
    343 => Visual3D(Core, MEDIA3D, Class, DependencyObject),
    344 => Visual3DCollection(Core, MEDIA3D, Class, Object),
    345 => Window(Framework, WINDOWS, Class, ContentControl),
    346 => WindowStyle(Framework, WINDOWS, Enum, Object),
    347 => WrapPanel(Framework, CONTROLS, Class, Panel),
    // 348: reserved
    349 => XmlDataProvider(Framework, DATA, Class, DependencyObject),
    350 => XmlLanguage(Core, MARKUP, Class, Object),
    351 => XmlLanguageConverter(Core, MARKUP, Class, TypeConverter),
}

struct ElementIndex {
    /// `by_id[id]` is the row position, or `None` for reserved ids.
    by_id: Vec<Option<u16>>,
    by_name: HashMap<&'static str, KnownElement>,
    by_full_name: HashMap<String, KnownElement>,
}

fn index() -> &'static ElementIndex {
    static INDEX: OnceLock<ElementIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut by_id = vec![None; KnownElement::Max as usize];
        let mut by_name = HashMap::with_capacity(ELEMENT_ROWS.len());
        let mut by_full_name = HashMap::with_capacity(ELEMENT_ROWS.len());
        for (pos, row) in ELEMENT_ROWS.iter().enumerate() {
            by_id[row.id as usize] = Some(pos as u16);
            by_name.insert(row.name, row.id);
            by_full_name.insert(row.full_name(), row.id);
        }
        ElementIndex {
            by_id,
            by_name,
            by_full_name,
        }
    })
}

impl KnownElement {
    /// Number of identifier slots, reserved gaps included.
    pub const COUNT: usize = KnownElement::Max as usize;

    pub const fn as_i16(self) -> i16 {
        self as i16
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, KnownElement::Unknown | KnownElement::Max)
    }

    /// Identifier lookup; fails for `Max`, out-of-range values and reserved gaps.
    pub fn from_i16(id: i16) -> Result<Self, SchemaError> {
        if id <= 0 || id >= KnownElement::Max as i16 {
            return Err(SchemaError::ElementOutOfRange(i32::from(id)));
        }
        match index().by_id[id as usize] {
            Some(pos) => Ok(ELEMENT_ROWS[pos as usize].id),
            None => Err(SchemaError::Reserved(i32::from(id))),
        }
    }

    /// Look up by short type name (`"Button"`).
    pub fn from_name(name: &str) -> Self {
        index()
            .by_name
            .get(name)
            .copied()
            .unwrap_or(KnownElement::Unknown)
    }

    /// Look up by namespace-qualified name (`"System.Windows.Controls.Button"`).
    pub fn from_full_name(full_name: &str) -> Self {
        index()
            .by_full_name
            .get(full_name)
            .copied()
            .unwrap_or(KnownElement::Unknown)
    }

    pub fn row(self) -> Option<&'static ElementRow> {
        if !self.is_known() {
            return None;
        }
        index().by_id[self as usize].map(|pos| &ELEMENT_ROWS[pos as usize])
    }

    pub fn name(self) -> &'static str {
        match self {
            KnownElement::Unknown => "Unknown",
            KnownElement::Max => "Max",
            _ => self.row().map_or("Unknown", |row| row.name),
        }
    }

    pub fn namespace(self) -> Option<&'static str> {
        self.row().map(|row| row.namespace)
    }

    pub fn full_name(self) -> Option<String> {
        self.row().map(ElementRow::full_name)
    }

    pub fn module(self) -> Option<ModuleKind> {
        self.row().map(|row| row.module)
    }

    pub fn kind(self) -> Option<ElementKind> {
        self.row().map(|row| row.kind)
    }

    /// Declared base, `None` at the root of the chain.
    pub fn base(self) -> Option<KnownElement> {
        self.row()
            .map(|row| row.base)
            .filter(|base| *base != KnownElement::Unknown)
    }

    /// Iterate over `self` and its declared ancestors, nearest first.
    pub fn ancestors(self) -> impl Iterator<Item = KnownElement> {
        std::iter::successors(Some(self).filter(|e| e.is_known()), |e| e.base())
    }

    /// True when `self` is `other` or derives from it.
    pub fn is_a(self, other: KnownElement) -> bool {
        self.ancestors().any(|e| e == other)
    }

    /// All known elements in identifier order (gaps skipped).
    pub fn iter() -> impl Iterator<Item = KnownElement> {
        ELEMENT_ROWS.iter().map(|row| row.id)
    }
}

impl fmt::Display for KnownElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
