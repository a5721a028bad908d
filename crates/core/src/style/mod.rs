use crate::classify::LayoutCategory;
use crate::kind::ComponentKind;
use serde::Serialize;

/// Visual styling for one wireframe component.
/// Absent properties are left to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_bottom: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_right: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_items: Option<AlignItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<JustifyContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<Cursor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Block,
    Flex,
    Grid,
    InlineBlock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignItems {
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    Default,
    Pointer,
}

const EMPTY: ComponentStyle = ComponentStyle {
    background_color: None,
    color: None,
    border: None,
    border_bottom: None,
    border_right: None,
    border_radius: None,
    padding: None,
    display: None,
    align_items: None,
    justify_content: None,
    text_align: None,
    font_size: None,
    font_weight: None,
    cursor: None,
    box_shadow: None,
};

/// Neutral card look shared by most kinds.
pub const BASE: ComponentStyle = ComponentStyle {
    background_color: Some("#ffffff"),
    border: Some("1px solid #e5e7eb"),
    border_radius: Some("6px"),
    padding: Some("1rem"),
    ..EMPTY
};

const HEADER: ComponentStyle = ComponentStyle {
    border_bottom: Some("2px solid #e5e7eb"),
    border_radius: Some("0"),
    display: Some(Display::Flex),
    align_items: Some(AlignItems::Center),
    justify_content: Some(JustifyContent::SpaceBetween),
    font_weight: Some(600),
    ..BASE
};

const SIDEBAR_LIGHT: ComponentStyle = ComponentStyle {
    background_color: Some("#f9fafb"),
    color: Some("#374151"),
    border_radius: Some("0"),
    border_right: Some("1px solid #e5e7eb"),
    ..BASE
};

const SIDEBAR_DARK: ComponentStyle = ComponentStyle {
    background_color: Some("#1f2937"),
    color: Some("white"),
    ..SIDEBAR_LIGHT
};

const HERO: ComponentStyle = ComponentStyle {
    background_color: Some("#f8fafc"),
    text_align: Some(TextAlign::Center),
    font_size: Some("24px"),
    font_weight: Some(700),
    padding: Some("3rem"),
    ..BASE
};

// Buttons do not build on BASE: no padding, no light border.
const BUTTON: ComponentStyle = ComponentStyle {
    background_color: Some("#3b82f6"),
    color: Some("white"),
    border: Some("none"),
    border_radius: Some("8px"),
    font_weight: Some(600),
    cursor: Some(Cursor::Pointer),
    text_align: Some(TextAlign::Center),
    display: Some(Display::Flex),
    align_items: Some(AlignItems::Center),
    justify_content: Some(JustifyContent::Center),
    ..EMPTY
};

const STATS: ComponentStyle = ComponentStyle {
    text_align: Some(TextAlign::Center),
    box_shadow: Some("0 1px 3px rgba(0,0,0,0.1)"),
    ..BASE
};

const CHART: ComponentStyle = ComponentStyle {
    display: Some(Display::Flex),
    align_items: Some(AlignItems::Center),
    justify_content: Some(JustifyContent::Center),
    ..BASE
};

const FOOTER: ComponentStyle = ComponentStyle {
    background_color: Some("#1f2937"),
    color: Some("white"),
    border_radius: Some("0"),
    text_align: Some(TextAlign::Center),
    ..BASE
};

/// Style for a component of `kind` on a page of `category`.
pub fn style_for(kind: ComponentKind, category: LayoutCategory) -> ComponentStyle {
    match kind {
        ComponentKind::Header => HEADER,
        ComponentKind::Sidebar if category == LayoutCategory::Dashboard => SIDEBAR_DARK,
        ComponentKind::Sidebar => SIDEBAR_LIGHT,
        ComponentKind::Hero => HERO,
        ComponentKind::Button => BUTTON,
        ComponentKind::Stats => STATS,
        ComponentKind::Chart => CHART,
        ComponentKind::Footer => FOOTER,
        _ => BASE,
    }
}
