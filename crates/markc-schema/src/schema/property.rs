// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Known property table.
//!
//! A property's owner is always its *declaring* type. `FrameworkElement_Width`
//! applies to every subtype; resolving a member on a derived type walks the
//! ancestor chain (see [`crate::registry::SymbolRegistry::resolve_property_id`]).

use super::element::KnownElement;
use super::macros::known_properties;
use crate::error::SchemaError;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// One row of the property table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyRow {
    pub id: KnownProperty,
    pub owner: KnownElement,
    pub name: &'static str,
    pub value_type: KnownElement,
    pub attached: bool,
}

known_properties! {
    1 => AccessText_Text(AccessText, "Text", String),
    2 => ArrayExtension_Items(ArrayExtension, "Items", Object),
    3 => ArrayExtension_Type(ArrayExtension, "Type", Type),
    4 => BeginStoryboard_Storyboard(BeginStoryboard, "Storyboard", Storyboard),
    5 => BezierSegment_Point1(BezierSegment, "Point1", Point),
    6 => BezierSegment_Point2(BezierSegment, "Point2", Point),
    7 => BezierSegment_Point3(BezierSegment, "Point3", Point),
    8 => Binding_ConverterCulture(Binding, "ConverterCulture", CultureInfo),
    9 => Binding_Converter(Binding, "Converter", Object),
    10 => Binding_ConverterParameter(Binding, "ConverterParameter", Object),
    11 => Binding_ElementName(Binding, "ElementName", String),
    12 => Binding_Mode(Binding, "Mode", BindingMode),
    13 => Binding_Path(Binding, "Path", PropertyPath),
    14 => Binding_RelativeSource(Binding, "RelativeSource", RelativeSource),
    15 => Binding_Source(Binding, "Source", Object),
    16 => Binding_UpdateSourceTrigger(Binding, "UpdateSourceTrigger", UpdateSourceTrigger),
    17 => BindingBase_FallbackValue(BindingBase, "FallbackValue", Object),
    18 => BindingBase_StringFormat(BindingBase, "StringFormat", String),
    19 => Block_LineHeight(Block, "LineHeight", Double),
    20 => Block_Margin(Block, "Margin", Thickness),
    21 => Block_TextAlignment(Block, "TextAlignment", TextAlignment),
    22 => BlockUIContainer_Child(BlockUIContainer, "Child", UIElement),
    23 => Border_Background(Border, "Background", Brush),
    24 => Border_BorderBrush(Border, "BorderBrush", Brush),
    25 => Border_BorderThickness(Border, "BorderThickness", Thickness),
    26 => Border_CornerRadius(Border, "CornerRadius", CornerRadius),
    27 => Border_Padding(Border, "Padding", Thickness),
    28 => Brush_Opacity(Brush, "Opacity", Double),
    29 => ButtonBase_ClickMode(ButtonBase, "ClickMode", ClickMode),
    30 => ButtonBase_Command(ButtonBase, "Command", ICommand),
    31 => ButtonBase_CommandParameter(ButtonBase, "CommandParameter", Object),
    32 => Canvas_Bottom(Canvas, "Bottom", Double, attached),
    33 => Canvas_Left(Canvas, "Left", Double, attached),
    34 => Canvas_Right(Canvas, "Right", Double, attached),
    35 => Canvas_Top(Canvas, "Top", Double, attached),
    36 => CollectionViewSource_Culture(CollectionViewSource, "Culture", CultureInfo),
    37 => CollectionViewSource_Source(CollectionViewSource, "Source", Object),
    38 => ColorAnimationUsingKeyFrames_KeyFrames(ColorAnimationUsingKeyFrames, "KeyFrames", ColorKeyFrameCollection),
    39 => ColorKeyFrame_KeyTime(ColorKeyFrame, "KeyTime", KeyTime),
    40 => ColorKeyFrame_Value(ColorKeyFrame, "Value", Color),
    41 => ColumnDefinition_MaxWidth(ColumnDefinition, "MaxWidth", Double),
    42 => ColumnDefinition_MinWidth(ColumnDefinition, "MinWidth", Double),
    43 => ColumnDefinition_Width(ColumnDefinition, "Width", GridLength),
    44 => CommandBinding_Command(CommandBinding, "Command", ICommand),
    45 => Condition_Binding(Condition, "Binding", BindingBase),
    46 => Condition_Property(Condition, "Property", DependencyProperty),
    47 => Condition_Value(Condition, "Value", Object),
    48 => ContentControl_Content(ContentControl, "Content", Object),
    49 => ContentControl_ContentTemplate(ContentControl, "ContentTemplate", DataTemplate),
    50 => ContextMenu_HorizontalOffset(ContextMenu, "HorizontalOffset", Double),
    51 => ContextMenu_VerticalOffset(ContextMenu, "VerticalOffset", Double),
    52 => Control_Background(Control, "Background", Brush),
    53 => Control_BorderBrush(Control, "BorderBrush", Brush),
    54 => Control_BorderThickness(Control, "BorderThickness", Thickness),
    55 => Control_FontFamily(Control, "FontFamily", FontFamily),
    56 => Control_FontSize(Control, "FontSize", Double),
    57 => Control_FontStretch(Control, "FontStretch", FontStretch),
    58 => Control_FontStyle(Control, "FontStyle", FontStyle),
    59 => Control_FontWeight(Control, "FontWeight", FontWeight),
    60 => Control_Foreground(Control, "Foreground", Brush),
    61 => Control_HorizontalContentAlignment(Control, "HorizontalContentAlignment", HorizontalAlignment),
    62 => Control_Padding(Control, "Padding", Thickness),
    63 => Control_TabIndex(Control, "TabIndex", Int32),
    64 => Control_Template(Control, "Template", ControlTemplate),
    65 => Control_VerticalContentAlignment(Control, "VerticalContentAlignment", VerticalAlignment),
    66 => ControlTemplate_TargetType(ControlTemplate, "TargetType", Type),
    67 => ControlTemplate_Triggers(ControlTemplate, "Triggers", TriggerCollection),
    68 => DataTemplate_DataType(DataTemplate, "DataType", Object),
    69 => DataTemplate_Triggers(DataTemplate, "Triggers", TriggerCollection),
    70 => DataTrigger_Binding(DataTrigger, "Binding", BindingBase),
    71 => DataTrigger_Setters(DataTrigger, "Setters", SetterBaseCollection),
    72 => DataTrigger_Value(DataTrigger, "Value", Object),
    73 => Decorator_Child(Decorator, "Child", UIElement),
    74 => DockPanel_Dock(DockPanel, "Dock", Dock, attached),
    75 => DockPanel_LastChildFill(DockPanel, "LastChildFill", Boolean),
    76 => DoubleAnimation_By(DoubleAnimation, "By", Double),
    77 => DoubleAnimation_From(DoubleAnimation, "From", Double),
    78 => DoubleAnimation_To(DoubleAnimation, "To", Double),
    79 => DoubleAnimationUsingKeyFrames_KeyFrames(DoubleAnimationUsingKeyFrames, "KeyFrames", DoubleKeyFrameCollection),
    80 => DoubleKeyFrame_KeyTime(DoubleKeyFrame, "KeyTime", KeyTime),
    81 => DoubleKeyFrame_Value(DoubleKeyFrame, "Value", Double),
    82 => DrawingGroup_Children(DrawingGroup, "Children", DrawingCollection),
    83 => EventTrigger_Actions(EventTrigger, "Actions", TriggerActionCollection),
    84 => EventTrigger_RoutedEvent(EventTrigger, "RoutedEvent", RoutedEvent),
    85 => Expander_IsExpanded(Expander, "IsExpanded", Boolean),
    86 => Figure_Blocks(Figure, "Blocks", BlockCollection),
    87 => Figure_Height(Figure, "Height", FigureLength),
    88 => Figure_Width(Figure, "Width", FigureLength),
    89 => Floater_Blocks(Floater, "Blocks", BlockCollection),
    90 => Floater_Width(Floater, "Width", Double),
    91 => FlowDocument_Blocks(FlowDocument, "Blocks", BlockCollection),
    92 => FlowDocument_ColumnGap(FlowDocument, "ColumnGap", Double),
    93 => FlowDocument_ColumnRuleWidth(FlowDocument, "ColumnRuleWidth", Double),
    94 => FlowDocument_ColumnWidth(FlowDocument, "ColumnWidth", Double),
    95 => FlowDocument_FontSize(FlowDocument, "FontSize", Double),
    96 => FlowDocument_LineHeight(FlowDocument, "LineHeight", Double),
    97 => FlowDocument_MaxPageHeight(FlowDocument, "MaxPageHeight", Double),
    98 => FlowDocument_MaxPageWidth(FlowDocument, "MaxPageWidth", Double),
    99 => FlowDocument_MinPageHeight(FlowDocument, "MinPageHeight", Double),
    100 => FlowDocument_MinPageWidth(FlowDocument, "MinPageWidth", Double),
    101 => FlowDocument_PageHeight(FlowDocument, "PageHeight", Double),
    102 => FlowDocument_PagePadding(FlowDocument, "PagePadding", Thickness),
    103 => FlowDocument_PageWidth(FlowDocument, "PageWidth", Double),
    104 => FrameworkElement_ContextMenu(FrameworkElement, "ContextMenu", ContextMenu),
    105 => FrameworkElement_Cursor(FrameworkElement, "Cursor", Cursor),
    106 => FrameworkElement_DataContext(FrameworkElement, "DataContext", Object),
    107 => FrameworkElement_FlowDirection(FrameworkElement, "FlowDirection", FlowDirection),
    108 => FrameworkElement_Height(FrameworkElement, "Height", Double),
    109 => FrameworkElement_HorizontalAlignment(FrameworkElement, "HorizontalAlignment", HorizontalAlignment),
    110 => FrameworkElement_Language(FrameworkElement, "Language", XmlLanguage),
    111 => FrameworkElement_Margin(FrameworkElement, "Margin", Thickness),
    112 => FrameworkElement_MaxHeight(FrameworkElement, "MaxHeight", Double),
    113 => FrameworkElement_MaxWidth(FrameworkElement, "MaxWidth", Double),
    114 => FrameworkElement_MinHeight(FrameworkElement, "MinHeight", Double),
    115 => FrameworkElement_MinWidth(FrameworkElement, "MinWidth", Double),
    116 => FrameworkElement_Name(FrameworkElement, "Name", String),
    117 => FrameworkElement_Resources(FrameworkElement, "Resources", ResourceDictionary),
    118 => FrameworkElement_Style(FrameworkElement, "Style", Style),
    119 => FrameworkElement_Tag(FrameworkElement, "Tag", Object),
    120 => FrameworkElement_ToolTip(FrameworkElement, "ToolTip", Object),
    121 => FrameworkElement_Triggers(FrameworkElement, "Triggers", TriggerCollection),
    122 => FrameworkElement_VerticalAlignment(FrameworkElement, "VerticalAlignment", VerticalAlignment),
    123 => FrameworkElement_Width(FrameworkElement, "Width", Double),
    124 => FrameworkTemplate_Resources(FrameworkTemplate, "Resources", ResourceDictionary),
    125 => FrameworkTemplate_VisualTree(FrameworkTemplate, "VisualTree", Object),
    126 => GeometryGroup_Children(GeometryGroup, "Children", GeometryCollection),
    127 => GeometryGroup_FillRule(GeometryGroup, "FillRule", FillRule),
    128 => GeometryModel3D_Geometry(GeometryModel3D, "Geometry", MeshGeometry3D),
    129 => GeometryModel3D_Material(GeometryModel3D, "Material", Material),
    130 => GlyphRun_AdvanceWidths(GlyphRun, "AdvanceWidths", DoubleCollection),
    131 => GlyphRun_BaselineOrigin(GlyphRun, "BaselineOrigin", Point),
    132 => GlyphRun_CaretStops(GlyphRun, "CaretStops", Object),
    133 => GlyphRun_Characters(GlyphRun, "Characters", Object),
    134 => GlyphRun_ClusterMap(GlyphRun, "ClusterMap", Object),
    135 => GlyphRun_FontRenderingEmSize(GlyphRun, "FontRenderingEmSize", Double),
    136 => GlyphRun_GlyphIndices(GlyphRun, "GlyphIndices", Object),
    137 => GlyphRun_GlyphOffsets(GlyphRun, "GlyphOffsets", Object),
    138 => Glyphs_Fill(Glyphs, "Fill", Brush),
    139 => Glyphs_FontRenderingEmSize(Glyphs, "FontRenderingEmSize", Double),
    140 => Glyphs_FontUri(Glyphs, "FontUri", Uri),
    141 => Glyphs_Indices(Glyphs, "Indices", String),
    142 => Glyphs_OriginX(Glyphs, "OriginX", Double),
    143 => Glyphs_OriginY(Glyphs, "OriginY", Double),
    144 => Glyphs_UnicodeString(Glyphs, "UnicodeString", String),
    145 => GradientBrush_GradientStops(GradientBrush, "GradientStops", GradientStopCollection),
    146 => GradientStop_Color(GradientStop, "Color", Color),
    147 => GradientStop_Offset(GradientStop, "Offset", Double),
    148 => Grid_Column(Grid, "Column", Int32, attached),
    149 => Grid_ColumnDefinitions(Grid, "ColumnDefinitions", ColumnDefinitionCollection),
    150 => Grid_ColumnSpan(Grid, "ColumnSpan", Int32, attached),
    151 => Grid_Row(Grid, "Row", Int32, attached),
    152 => Grid_RowDefinitions(Grid, "RowDefinitions", RowDefinitionCollection),
    153 => Grid_RowSpan(Grid, "RowSpan", Int32, attached),
    154 => Grid_ShowGridLines(Grid, "ShowGridLines", Boolean),
    155 => GridView_Columns(GridView, "Columns", GridViewColumnCollection),
    156 => GridViewColumn_DisplayMemberBinding(GridViewColumn, "DisplayMemberBinding", BindingBase),
    157 => GridViewColumn_Header(GridViewColumn, "Header", Object),
    158 => GridViewColumn_Width(GridViewColumn, "Width", Double),
    159 => HeaderedContentControl_Header(HeaderedContentControl, "Header", Object),
    160 => HeaderedItemsControl_Header(HeaderedItemsControl, "Header", Object),
    161 => HierarchicalDataTemplate_ItemTemplate(HierarchicalDataTemplate, "ItemTemplate", DataTemplate),
    162 => HierarchicalDataTemplate_ItemsSource(HierarchicalDataTemplate, "ItemsSource", BindingBase),
    163 => Hyperlink_Command(Hyperlink, "Command", ICommand),
    164 => Hyperlink_NavigateUri(Hyperlink, "NavigateUri", Uri),
    165 => Image_Source(Image, "Source", ImageSource),
    166 => Image_Stretch(Image, "Stretch", Stretch),
    167 => InputBinding_Command(InputBinding, "Command", ICommand),
    168 => InputBinding_CommandParameter(InputBinding, "CommandParameter", Object),
    169 => InputBinding_Gesture(InputBinding, "Gesture", InputGesture),
    170 => ItemsControl_ItemContainerStyle(ItemsControl, "ItemContainerStyle", Style),
    171 => ItemsControl_ItemTemplate(ItemsControl, "ItemTemplate", DataTemplate),
    172 => ItemsControl_Items(ItemsControl, "Items", ItemCollection),
    173 => ItemsControl_ItemsPanel(ItemsControl, "ItemsPanel", ItemsPanelTemplate),
    174 => ItemsControl_ItemsSource(ItemsControl, "ItemsSource", Object),
    175 => KeyBinding_Command(KeyBinding, "Command", ICommand),
    176 => KeyBinding_Gesture(KeyBinding, "Gesture", InputGesture),
    177 => KeyBinding_Key(KeyBinding, "Key", Key),
    178 => KeyBinding_Modifiers(KeyBinding, "Modifiers", ModifierKeys),
    179 => Line_X1(Line, "X1", Double),
    180 => Line_X2(Line, "X2", Double),
    181 => Line_Y1(Line, "Y1", Double),
    182 => Line_Y2(Line, "Y2", Double),
    183 => LineSegment_Point(LineSegment, "Point", Point),
    184 => LinearGradientBrush_EndPoint(LinearGradientBrush, "EndPoint", Point),
    185 => LinearGradientBrush_StartPoint(LinearGradientBrush, "StartPoint", Point),
    186 => List_ListItems(List, "ListItems", ListItemCollection),
    187 => List_MarkerOffset(List, "MarkerOffset", Double),
    188 => ListItem_Blocks(ListItem, "Blocks", BlockCollection),
    189 => ListView_View(ListView, "View", ViewBase),
    190 => MediaElement_Source(MediaElement, "Source", Uri),
    191 => MenuItem_Command(MenuItem, "Command", ICommand),
    192 => MenuItem_Icon(MenuItem, "Icon", Object),
    193 => MenuItem_InputGestureText(MenuItem, "InputGestureText", String),
    194 => MenuItem_IsCheckable(MenuItem, "IsCheckable", Boolean),
    195 => MenuItem_IsChecked(MenuItem, "IsChecked", Boolean),
    196 => MeshGeometry3D_Normals(MeshGeometry3D, "Normals", Vector3DCollection),
    197 => MeshGeometry3D_Positions(MeshGeometry3D, "Positions", Point3DCollection),
    198 => MeshGeometry3D_TextureCoordinates(MeshGeometry3D, "TextureCoordinates", PointCollection),
    199 => MeshGeometry3D_TriangleIndices(MeshGeometry3D, "TriangleIndices", Int32Collection),
    200 => Model3DGroup_Children(Model3DGroup, "Children", Model3DCollection),
    201 => ModelVisual3D_Children(ModelVisual3D, "Children", Visual3DCollection),
    202 => ModelVisual3D_Content(ModelVisual3D, "Content", Model3D),
    203 => MouseBinding_Command(MouseBinding, "Command", ICommand),
    204 => MouseBinding_Gesture(MouseBinding, "Gesture", InputGesture),
    205 => MouseBinding_MouseAction(MouseBinding, "MouseAction", MouseAction),
    206 => MultiBinding_Bindings(MultiBinding, "Bindings", Object),
    207 => MultiBinding_Converter(MultiBinding, "Converter", Object),
    208 => MultiBinding_ConverterCulture(MultiBinding, "ConverterCulture", CultureInfo),
    209 => MultiTrigger_Conditions(MultiTrigger, "Conditions", ConditionCollection),
    210 => MultiTrigger_Setters(MultiTrigger, "Setters", SetterBaseCollection),
    211 => ObjectAnimationUsingKeyFrames_KeyFrames(ObjectAnimationUsingKeyFrames, "KeyFrames", ObjectKeyFrameCollection),
    212 => ObjectKeyFrame_KeyTime(ObjectKeyFrame, "KeyTime", KeyTime),
    213 => ObjectKeyFrame_Value(ObjectKeyFrame, "Value", Object),
    214 => Page_Title(Page, "Title", String),
    215 => Panel_Background(Panel, "Background", Brush),
    216 => Panel_Children(Panel, "Children", UIElementCollection),
    217 => Paragraph_Inlines(Paragraph, "Inlines", InlineCollection),
    218 => Paragraph_TextIndent(Paragraph, "TextIndent", Double),
    219 => Path_Data(Path, "Data", Geometry),
    220 => PathFigure_IsClosed(PathFigure, "IsClosed", Boolean),
    221 => PathFigure_IsFilled(PathFigure, "IsFilled", Boolean),
    222 => PathFigure_Segments(PathFigure, "Segments", PathSegmentCollection),
    223 => PathFigure_StartPoint(PathFigure, "StartPoint", Point),
    224 => PathGeometry_FillRule(PathGeometry, "FillRule", FillRule),
    225 => PathGeometry_Figures(PathGeometry, "Figures", PathFigureCollection),
    226 => PointAnimationUsingKeyFrames_KeyFrames(PointAnimationUsingKeyFrames, "KeyFrames", PointKeyFrameCollection),
    227 => PointKeyFrame_KeyTime(PointKeyFrame, "KeyTime", KeyTime),
    228 => PointKeyFrame_Value(PointKeyFrame, "Value", Point),
    229 => PolyBezierSegment_Points(PolyBezierSegment, "Points", PointCollection),
    230 => PolyLineSegment_Points(PolyLineSegment, "Points", PointCollection),
    231 => Polygon_FillRule(Polygon, "FillRule", FillRule),
    232 => Polygon_Points(Polygon, "Points", PointCollection),
    233 => Polyline_Points(Polyline, "Points", PointCollection),
    234 => Popup_Child(Popup, "Child", UIElement),
    235 => Popup_HorizontalOffset(Popup, "HorizontalOffset", Double),
    236 => Popup_IsOpen(Popup, "IsOpen", Boolean),
    237 => Popup_Placement(Popup, "Placement", PlacementMode),
    238 => Popup_VerticalOffset(Popup, "VerticalOffset", Double),
    239 => PriorityBinding_Bindings(PriorityBinding, "Bindings", Object),
    240 => QuadraticBezierSegment_Point1(QuadraticBezierSegment, "Point1", Point),
    241 => QuadraticBezierSegment_Point2(QuadraticBezierSegment, "Point2", Point),
    242 => RangeBase_Maximum(RangeBase, "Maximum", Double),
    243 => RangeBase_Minimum(RangeBase, "Minimum", Double),
    244 => RangeBase_Value(RangeBase, "Value", Double),
    245 => Rectangle_RadiusX(Rectangle, "RadiusX", Double),
    246 => Rectangle_RadiusY(Rectangle, "RadiusY", Double),
    247 => ResourceDictionary_MergedDictionaries(ResourceDictionary, "MergedDictionaries", Object),
    248 => ResourceDictionary_Source(ResourceDictionary, "Source", Uri),
    249 => RotateTransform_Angle(RotateTransform, "Angle", Double),
    250 => RowDefinition_Height(RowDefinition, "Height", GridLength),
    251 => RowDefinition_MaxHeight(RowDefinition, "MaxHeight", Double),
    252 => RowDefinition_MinHeight(RowDefinition, "MinHeight", Double),
    253 => Run_Text(Run, "Text", String),
    254 => ScaleTransform_ScaleX(ScaleTransform, "ScaleX", Double),
    255 => ScaleTransform_ScaleY(ScaleTransform, "ScaleY", Double),
    256 => ScrollViewer_HorizontalScrollBarVisibility(ScrollViewer, "HorizontalScrollBarVisibility", ScrollBarVisibility),
    257 => ScrollViewer_VerticalScrollBarVisibility(ScrollViewer, "VerticalScrollBarVisibility", ScrollBarVisibility),
    258 => Section_Blocks(Section, "Blocks", BlockCollection),
    259 => Setter_Property(Setter, "Property", DependencyProperty),
    260 => Setter_TargetName(Setter, "TargetName", String),
    261 => Setter_Value(Setter, "Value", Object),
    262 => Shape_Fill(Shape, "Fill", Brush),
    263 => Shape_Stretch(Shape, "Stretch", Stretch),
    264 => Shape_Stroke(Shape, "Stroke", Brush),
    265 => Shape_StrokeThickness(Shape, "StrokeThickness", Double),
    266 => SolidColorBrush_Color(SolidColorBrush, "Color", Color),
    267 => Span_Inlines(Span, "Inlines", InlineCollection),
    268 => StackPanel_Orientation(StackPanel, "Orientation", Orientation),
    269 => StaticExtension_Member(StaticExtension, "Member", String),
    270 => StaticResourceExtension_ResourceKey(StaticResourceExtension, "ResourceKey", Object),
    271 => Storyboard_TargetName(Storyboard, "TargetName", String, attached),
    272 => Storyboard_TargetProperty(Storyboard, "TargetProperty", PropertyPath, attached),
    273 => Style_BasedOn(Style, "BasedOn", Style),
    274 => Style_Resources(Style, "Resources", ResourceDictionary),
    275 => Style_Setters(Style, "Setters", SetterBaseCollection),
    276 => Style_TargetType(Style, "TargetType", Type),
    277 => Style_Triggers(Style, "Triggers", TriggerCollection),
    278 => Table_CellSpacing(Table, "CellSpacing", Double),
    279 => Table_Columns(Table, "Columns", TableColumnCollection),
    280 => Table_RowGroups(Table, "RowGroups", TableRowGroupCollection),
    281 => TableCell_Blocks(TableCell, "Blocks", BlockCollection),
    282 => TableCell_ColumnSpan(TableCell, "ColumnSpan", Int32),
    283 => TableCell_RowSpan(TableCell, "RowSpan", Int32),
    284 => TableColumn_Width(TableColumn, "Width", GridLength),
    285 => TableRow_Cells(TableRow, "Cells", TableCellCollection),
    286 => TableRowGroup_Rows(TableRowGroup, "Rows", TableRowCollection),
    287 => TextBlock_Background(TextBlock, "Background", Brush),
    288 => TextBlock_FontFamily(TextBlock, "FontFamily", FontFamily),
    289 => TextBlock_FontSize(TextBlock, "FontSize", Double),
    290 => TextBlock_FontWeight(TextBlock, "FontWeight", FontWeight),
    291 => TextBlock_Foreground(TextBlock, "Foreground", Brush),
    292 => TextBlock_Inlines(TextBlock, "Inlines", InlineCollection),
    293 => TextBlock_LineHeight(TextBlock, "LineHeight", Double),
    294 => TextBlock_Padding(TextBlock, "Padding", Thickness),
    295 => TextBlock_Text(TextBlock, "Text", String),
    296 => TextBlock_TextAlignment(TextBlock, "TextAlignment", TextAlignment),
    297 => TextBlock_TextDecorations(TextBlock, "TextDecorations", TextDecorationCollection),
    298 => TextBlock_TextWrapping(TextBlock, "TextWrapping", TextWrapping),
    299 => TextBox_Text(TextBox, "Text", String),
    300 => TextBox_TextWrapping(TextBox, "TextWrapping", TextWrapping),
    301 => TextElement_Background(TextElement, "Background", Brush),
    302 => TextElement_FontFamily(TextElement, "FontFamily", FontFamily),
    303 => TextElement_FontSize(TextElement, "FontSize", Double),
    304 => TextElement_FontStyle(TextElement, "FontStyle", FontStyle),
    305 => TextElement_FontWeight(TextElement, "FontWeight", FontWeight),
    306 => TextElement_Foreground(TextElement, "Foreground", Brush),
    307 => Timeline_AutoReverse(Timeline, "AutoReverse", Boolean),
    308 => Timeline_BeginTime(Timeline, "BeginTime", TimeSpan),
    309 => Timeline_Duration(Timeline, "Duration", Duration),
    310 => Timeline_RepeatBehavior(Timeline, "RepeatBehavior", RepeatBehavior),
    311 => TimelineGroup_Children(TimelineGroup, "Children", TimelineCollection),
    312 => ToggleButton_IsChecked(ToggleButton, "IsChecked", Boolean),
    313 => ToggleButton_IsThreeState(ToggleButton, "IsThreeState", Boolean),
    314 => ToolBarTray_ToolBars(ToolBarTray, "ToolBars", Object),
    315 => ToolTip_HorizontalOffset(ToolTip, "HorizontalOffset", Double),
    316 => ToolTip_VerticalOffset(ToolTip, "VerticalOffset", Double),
    317 => TransformGroup_Children(TransformGroup, "Children", TransformCollection),
    318 => TranslateTransform_X(TranslateTransform, "X", Double),
    319 => TranslateTransform_Y(TranslateTransform, "Y", Double),
    320 => Trigger_Property(Trigger, "Property", DependencyProperty),
    321 => Trigger_Setters(Trigger, "Setters", SetterBaseCollection),
    322 => Trigger_Value(Trigger, "Value", Object),
    323 => TypeExtension_TypeName(TypeExtension, "TypeName", String),
    324 => UIElement_ClipToBounds(UIElement, "ClipToBounds", Boolean),
    325 => UIElement_Focusable(UIElement, "Focusable", Boolean),
    326 => UIElement_IsEnabled(UIElement, "IsEnabled", Boolean),
    327 => UIElement_IsHitTestVisible(UIElement, "IsHitTestVisible", Boolean),
    328 => UIElement_Opacity(UIElement, "Opacity", Double),
    329 => UIElement_RenderTransform(UIElement, "RenderTransform", Transform),
    330 => UIElement_Visibility(UIElement, "Visibility", Visibility),
    331 => UniformGrid_Columns(UniformGrid, "Columns", Int32),
    332 => UniformGrid_Rows(UniformGrid, "Rows", Int32),
    333 => Viewport3D_Children(Viewport3D, "Children", Visual3DCollection),
    334 => Window_Icon(Window, "Icon", ImageSource),
    335 => Window_Left(Window, "Left", Double),
    336 => Window_SizeToContent(Window, "SizeToContent", SizeToContent),
    337 => Window_Title(Window, "Title", String),
    338 => Window_Top(Window, "Top", Double),
    339 => Window_Topmost(Window, "Topmost", Boolean),
    340 => Window_WindowStyle(Window, "WindowStyle", WindowStyle),
    341 => WrapPanel_ItemHeight(WrapPanel, "ItemHeight", Double),
    342 => WrapPanel_ItemWidth(WrapPanel, "ItemWidth", Double),
    343 => WrapPanel_Orientation(WrapPanel, "Orientation", Orientation),
    344 => XmlDataProvider_Source(XmlDataProvider, "Source", Uri),
    345 => XmlDataProvider_XPath(XmlDataProvider, "XPath", String),
}

struct PropertyIndex {
    by_id: Vec<Option<u16>>,
    by_owner: HashMap<KnownElement, HashMap<&'static str, KnownProperty>>,
}

fn index() -> &'static PropertyIndex {
    static INDEX: OnceLock<PropertyIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut by_id = vec![None; KnownProperty::Max as usize];
        let mut by_owner: HashMap<KnownElement, HashMap<&'static str, KnownProperty>> =
            HashMap::new();
        for (pos, row) in PROPERTY_ROWS.iter().enumerate() {
            by_id[row.id as usize] = Some(pos as u16);
            by_owner.entry(row.owner).or_default().insert(row.name, row.id);
        }
        PropertyIndex { by_id, by_owner }
    })
}

impl KnownProperty {
    pub const COUNT: usize = KnownProperty::Max as usize;

    pub const fn as_i16(self) -> i16 {
        self as i16
    }

    pub const fn is_known(self) -> bool {
        !matches!(self, KnownProperty::Unknown | KnownProperty::Max)
    }

    pub fn from_i16(id: i16) -> Result<Self, SchemaError> {
        if id <= 0 || id >= KnownProperty::Max as i16 {
            return Err(SchemaError::PropertyOutOfRange(i32::from(id)));
        }
        match index().by_id[id as usize] {
            Some(pos) => Ok(PROPERTY_ROWS[pos as usize].id),
            None => Err(SchemaError::Reserved(i32::from(id))),
        }
    }

    /// Exact (declaring owner, member) lookup; no ancestor walk.
    pub fn lookup(owner: KnownElement, name: &str) -> Self {
        index()
            .by_owner
            .get(&owner)
            .and_then(|members| members.get(name))
            .copied()
            .unwrap_or(KnownProperty::Unknown)
    }

    pub fn row(self) -> Option<&'static PropertyRow> {
        if !self.is_known() {
            return None;
        }
        index().by_id[self as usize].map(|pos| &PROPERTY_ROWS[pos as usize])
    }

    pub fn owner(self) -> KnownElement {
        self.row().map_or(KnownElement::Unknown, |row| row.owner)
    }

    pub fn name(self) -> &'static str {
        self.row().map_or("Unknown", |row| row.name)
    }

    pub fn value_type(self) -> KnownElement {
        self.row().map_or(KnownElement::Unknown, |row| row.value_type)
    }

    pub fn is_attached(self) -> bool {
        self.row().is_some_and(|row| row.attached)
    }

    /// Members declared directly on `owner`, in identifier order.
    pub fn declared_on(owner: KnownElement) -> impl Iterator<Item = KnownProperty> {
        PROPERTY_ROWS
            .iter()
            .filter(move |row| row.owner == owner)
            .map(|row| row.id)
    }

    pub fn iter() -> impl Iterator<Item = KnownProperty> {
        PROPERTY_ROWS.iter().map(|row| row.id)
    }
}

impl fmt::Display for KnownProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.row() {
            Some(row) => write!(f, "{}.{}", row.owner.name(), row.name),
            None => f.write_str("Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        assert_eq!(
            KnownProperty::lookup(KnownElement::FrameworkElement, "Width"),
            KnownProperty::FrameworkElement_Width
        );
        // Exact lookup never walks to the declaring base.
        assert_eq!(
            KnownProperty::lookup(KnownElement::StackPanel, "Width"),
            KnownProperty::Unknown
        );
    }

    #[test]
    fn test_row_accessors() {
        let prop = KnownProperty::Grid_Row;
        assert_eq!(prop.owner(), KnownElement::Grid);
        assert_eq!(prop.name(), "Row");
        assert_eq!(prop.value_type(), KnownElement::Int32);
        assert!(prop.is_attached());
        assert!(!KnownProperty::Grid_ShowGridLines.is_attached());
        assert_eq!(prop.to_string(), "Grid.Row");
    }

    #[test]
    fn test_from_i16_bounds() {
        assert_eq!(KnownProperty::from_i16(1), Ok(KnownProperty::AccessText_Text));
        assert!(KnownProperty::from_i16(-3).is_err());
        assert!(KnownProperty::from_i16(KnownProperty::Max.as_i16()).is_err());
    }
}
