//! Fallback components for descriptions that name too little.

use crate::extract::{Anchor, ComponentMention};
use crate::kind::ComponentKind;

/// Below this many mentions a generic content block is added.
const MIN_MENTIONS: usize = 2;

fn fallback(kind: ComponentKind, content: &str, anchor: Anchor, importance: u8) -> ComponentMention {
    ComponentMention {
        kind,
        content: content.to_string(),
        anchor,
        importance,
        context: vec!["fallback".to_string()],
    }
}

fn has_kind(mentions: &[ComponentMention], kind: ComponentKind) -> bool {
    mentions.iter().any(|m| m.kind == kind)
}

/// Append fallback mentions so every wireframe has a usable skeleton.
///
/// Purely additive: existing mentions keep their order and new ones go at
/// the end. The keyword triggers are case-sensitive substring checks on
/// the raw description.
pub fn add_fallbacks(
    mut mentions: Vec<ComponentMention>,
    description: &str,
) -> Vec<ComponentMention> {
    if !has_kind(&mentions, ComponentKind::Header) {
        mentions.push(fallback(ComponentKind::Header, "Header", Anchor::Top, 9));
    }

    if mentions.len() < MIN_MENTIONS {
        mentions.push(fallback(ComponentKind::Text, "Main Content", Anchor::Main, 7));
    }

    let app_like = description.contains("app") || description.contains("platform");
    if app_like && !has_kind(&mentions, ComponentKind::Sidebar) {
        mentions.push(fallback(ComponentKind::Sidebar, "Navigation", Anchor::Left, 7));
    }

    let wants_search = description.contains("shop")
        || description.contains("social")
        || description.contains("search");
    if wants_search && !has_kind(&mentions, ComponentKind::Search) {
        mentions.push(fallback(ComponentKind::Search, "Search", Anchor::Top, 6));
    }

    mentions
}
