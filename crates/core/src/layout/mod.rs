use crate::classify::LayoutCategory;
use crate::extract::{Anchor, ComponentMention};
use crate::kind::ComponentKind;
use crate::output::{component_id, WireframeComponent};
use crate::style;
use serde::Serialize;

/// Vertical gap left between consecutive components.
const GAP: f32 = 2.0;

/// Left rail kept free for the sidebar on dashboards.
const DASHBOARD_RAIL: f32 = 25.0;
/// Widest a dashboard content block may be.
const DASHBOARD_CONTENT_WIDTH: f32 = 70.0;

/// A bounding box in percent of the canvas.
///
/// Boxes are not clamped: `x + width` or `y + height` may exceed 100 once
/// the cursor has run down the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True when the box reaches past the right or bottom canvas edge.
    pub fn exceeds_canvas(&self) -> bool {
        self.x + self.width > 100.0 || self.y + self.height > 100.0
    }
}

/// Stable sort into canonical top-to-bottom order.
pub fn sort_by_display_priority(mentions: &mut [ComponentMention]) {
    mentions.sort_by_key(|m| m.kind.display_priority());
}

/// Kinds whose geometry comes from `override_box_for_type`.
fn has_geometry_rule(kind: ComponentKind) -> bool {
    matches!(
        kind,
        ComponentKind::Header
            | ComponentKind::Sidebar
            | ComponentKind::Hero
            | ComponentKind::Search
            | ComponentKind::Stats
            | ComponentKind::Chart
            | ComponentKind::Table
            | ComponentKind::Form
            | ComponentKind::Button
            | ComponentKind::ProductCard
            | ComponentKind::Filter
            | ComponentKind::Footer
    )
}

/// The box a component gets from the running cursor alone.
pub fn default_box_from_cursor(kind: ComponentKind, cursor_y: f32) -> Bounds {
    if has_geometry_rule(kind) {
        Bounds::new(0.0, cursor_y, 100.0, 8.0)
    } else {
        Bounds::new(10.0, cursor_y, 80.0, 15.0)
    }
}

/// Apply the per-kind geometry rule on top of the cursor default.
/// Fields a rule does not set keep their default value.
pub fn override_box_for_type(
    mention: &ComponentMention,
    category: LayoutCategory,
    default: Bounds,
) -> Bounds {
    let dashboard = category == LayoutCategory::Dashboard;
    let ecommerce = category == LayoutCategory::Ecommerce;
    let pick = |on: f32, off: f32, flag: bool| if flag { on } else { off };
    let mut b = default;

    match mention.kind {
        ComponentKind::Header => {
            b.y = 0.0;
            b.height = 10.0;
        }
        ComponentKind::Sidebar => {
            b.x = 0.0;
            b.y = pick(0.0, 12.0, dashboard);
            b.width = pick(20.0, 25.0, dashboard);
            b.height = pick(100.0, 60.0, dashboard);
        }
        ComponentKind::Hero => {
            if mention.anchor == Anchor::Top {
                b.y = 12.0;
            }
            b.height = 35.0;
        }
        ComponentKind::Search => {
            b.x = 20.0;
            b.width = 60.0;
            b.height = 6.0;
        }
        ComponentKind::Stats => {
            b.x = pick(25.0, 10.0, dashboard);
            b.width = 15.0;
            b.height = 12.0;
        }
        ComponentKind::Chart => {
            b.x = pick(25.0, 10.0, dashboard);
            b.width = pick(50.0, 80.0, dashboard);
            b.height = 25.0;
        }
        ComponentKind::Table => {
            b.x = pick(25.0, 10.0, dashboard);
            b.width = pick(70.0, 80.0, dashboard);
            b.height = 30.0;
        }
        ComponentKind::Form => {
            b.x = 25.0;
            b.width = 50.0;
            b.height = 40.0;
        }
        ComponentKind::Button => {
            b.x = 40.0;
            b.width = 20.0;
            b.height = 6.0;
        }
        ComponentKind::ProductCard => {
            let beside_sidebar = mention.context.iter().any(|w| w.contains("sidebar"));
            b.x = pick(25.0, 10.0, ecommerce && beside_sidebar);
            b.width = pick(70.0, 80.0, ecommerce);
            b.height = 50.0;
        }
        ComponentKind::Filter => {
            b.x = 0.0;
            b.width = 20.0;
            b.height = 60.0;
        }
        ComponentKind::Footer => {
            b.y = 90.0;
            b.height = 10.0;
        }
        _ => {}
    }
    b
}

/// On dashboards, push content right of the sidebar and narrow it to fit.
pub fn reserve_sidebar_rail(
    kind: ComponentKind,
    category: LayoutCategory,
    mut bounds: Bounds,
) -> Bounds {
    if category == LayoutCategory::Dashboard
        && kind != ComponentKind::Sidebar
        && kind != ComponentKind::Header
    {
        bounds.x = bounds.x.max(DASHBOARD_RAIL);
        bounds.width = bounds.width.min(DASHBOARD_CONTENT_WIDTH);
    }
    bounds
}

/// Order mentions for display and give each a box and a style.
///
/// The cursor advances by every component's height, including components
/// whose rule pins them elsewhere (header, sidebar, footer).
pub fn place_components(
    mut mentions: Vec<ComponentMention>,
    category: LayoutCategory,
) -> Vec<WireframeComponent> {
    sort_by_display_priority(&mut mentions);

    let mut cursor_y = 0.0;
    let mut components = Vec::with_capacity(mentions.len());
    for mention in mentions {
        let default = default_box_from_cursor(mention.kind, cursor_y);
        let rule_box = override_box_for_type(&mention, category, default);
        let bounds = reserve_sidebar_rail(mention.kind, category, rule_box);
        cursor_y += bounds.height + GAP;

        components.push(WireframeComponent {
            id: component_id(mention.kind),
            kind: mention.kind,
            bounds,
            content: mention.content,
            style: style::style_for(mention.kind, category),
        });
    }
    components
}
