//! Keyword-driven component extraction.
//!
//! A fixed table of pattern groups maps keyword phrases to component kinds.
//! Every phrase that occurs as a whole word in the description yields a
//! mention; mentions are then collapsed to one per kind and ranked by
//! importance.

mod content;

pub use content::derive_content;

use crate::kind::ComponentKind;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Characters of context captured on each side of a keyword.
const CONTEXT_RADIUS: usize = 30;

/// Coarse placement hint attached at extraction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Top,
    Bottom,
    Left,
    Right,
    Center,
    Main,
}

/// A component inferred from the description, before geometry is assigned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentMention {
    pub kind: ComponentKind,
    pub content: String,
    pub anchor: Anchor,
    pub importance: u8,
    /// Words surrounding the keyword in the original text.
    pub context: Vec<String>,
}

struct PatternGroup {
    keywords: &'static [&'static str],
    kind: ComponentKind,
    anchor: Anchor,
    importance: u8,
}

const fn group(
    keywords: &'static [&'static str],
    kind: ComponentKind,
    anchor: Anchor,
    importance: u8,
) -> PatternGroup {
    PatternGroup {
        keywords,
        kind,
        anchor,
        importance,
    }
}

/// Scan order matters: the first group to produce a kind wins dedup.
const PATTERN_GROUPS: &[PatternGroup] = &[
    // Navigation
    group(
        &["header", "navigation", "nav", "menu bar", "top bar", "navbar"],
        ComponentKind::Header,
        Anchor::Top,
        9,
    ),
    group(
        &["sidebar", "side menu", "side nav", "side panel", "menu"],
        ComponentKind::Sidebar,
        Anchor::Left,
        7,
    ),
    group(&["footer", "bottom"], ComponentKind::Footer, Anchor::Bottom, 6),
    group(&["breadcrumb", "breadcrumbs"], ComponentKind::Breadcrumb, Anchor::Top, 4),
    group(&["tabs", "tab menu", "tabbed"], ComponentKind::Tabs, Anchor::Top, 5),
    // Content areas
    group(
        &["hero", "hero section", "main banner", "landing banner"],
        ComponentKind::Hero,
        Anchor::Center,
        8,
    ),
    group(
        &["content", "main content", "article", "post", "text", "feed", "timeline"],
        ComponentKind::Text,
        Anchor::Main,
        7,
    ),
    group(
        &["image", "photo", "picture", "gallery", "avatar", "profile picture"],
        ComponentKind::Image,
        Anchor::Center,
        5,
    ),
    group(&["video", "media", "player"], ComponentKind::Video, Anchor::Center, 6),
    group(
        &["carousel", "slider", "slideshow"],
        ComponentKind::Carousel,
        Anchor::Center,
        6,
    ),
    // Interactive elements
    group(
        &["button", "call to action", "cta", "action button"],
        ComponentKind::Button,
        Anchor::Center,
        7,
    ),
    group(
        &["form", "contact form", "signup", "register", "login", "booking form"],
        ComponentKind::Form,
        Anchor::Center,
        8,
    ),
    group(
        &["search", "search bar", "search box"],
        ComponentKind::Search,
        Anchor::Top,
        6,
    ),
    group(
        &["input", "text field", "input field"],
        ComponentKind::Input,
        Anchor::Center,
        5,
    ),
    // Data display
    group(
        &["table", "data table", "list", "grid", "product grid"],
        ComponentKind::Table,
        Anchor::Main,
        7,
    ),
    group(
        &["chart", "graph", "analytics", "visualization", "metrics", "dashboard"],
        ComponentKind::Chart,
        Anchor::Main,
        7,
    ),
    group(&["card", "cards", "card layout"], ComponentKind::Card, Anchor::Center, 6),
    group(
        &["stats", "statistics", "metrics", "numbers", "real-time"],
        ComponentKind::Stats,
        Anchor::Top,
        6,
    ),
    // E-commerce
    group(
        &["product", "products", "items", "catalog"],
        ComponentKind::ProductCard,
        Anchor::Main,
        8,
    ),
    group(
        &["cart", "shopping cart", "basket"],
        ComponentKind::ShoppingCart,
        Anchor::Top,
        7,
    ),
    group(
        &["filter", "filters", "search filters"],
        ComponentKind::Filter,
        Anchor::Left,
        6,
    ),
    group(&["price", "pricing", "cost"], ComponentKind::Price, Anchor::Center, 6),
    // Social
    group(
        &["messaging", "chat", "messages", "inbox"],
        ComponentKind::Text,
        Anchor::Main,
        8,
    ),
    group(
        &["profile", "user profile", "account"],
        ComponentKind::Card,
        Anchor::Center,
        7,
    ),
    group(
        &["notification", "notifications", "alerts"],
        ComponentKind::Card,
        Anchor::Top,
        6,
    ),
    // Calendar and booking
    group(
        &["calendar", "schedule", "booking", "appointment"],
        ComponentKind::Chart,
        Anchor::Main,
        8,
    ),
    group(
        &["date picker", "time slot", "availability"],
        ComponentKind::Input,
        Anchor::Center,
        7,
    ),
    // App shells
    group(
        &["app", "mobile app", "application"],
        ComponentKind::Container,
        Anchor::Main,
        5,
    ),
    group(
        &["platform", "system", "tool"],
        ComponentKind::Container,
        Anchor::Main,
        4,
    ),
    // Layout sections
    group(
        &["section", "area", "region", "block"],
        ComponentKind::Section,
        Anchor::Main,
        4,
    ),
    group(
        &["container", "wrapper", "layout"],
        ComponentKind::Container,
        Anchor::Main,
        3,
    ),
];

struct KeywordMatcher {
    group: &'static PatternGroup,
    keyword: &'static str,
    pattern: Regex,
}

/// One compiled whole-word matcher per keyword, in table order.
static MATCHERS: LazyLock<Vec<KeywordMatcher>> = LazyLock::new(|| {
    PATTERN_GROUPS
        .iter()
        .flat_map(|group| {
            group.keywords.iter().map(move |&keyword| KeywordMatcher {
                group,
                keyword,
                // ASCII word boundaries: hyphens and spaces split words.
                pattern: Regex::new(&format!(r"(?-u:\b){}(?-u:\b)", regex::escape(keyword)))
                    .expect("keyword patterns are static and valid"),
            })
        })
        .collect()
});

/// Extract component mentions from a description.
///
/// The result holds at most one mention per kind (the first one found in
/// table order) and is ordered by descending importance, ties keeping
/// scan order.
pub fn extract_components(description: &str) -> Vec<ComponentMention> {
    // ASCII lowering keeps byte offsets identical to `description`.
    let lowered = description.to_ascii_lowercase();

    let mut mentions: Vec<ComponentMention> = Vec::new();
    for matcher in MATCHERS.iter() {
        if !matcher.pattern.is_match(&lowered) {
            continue;
        }
        let context = context_words(description, &lowered, matcher.keyword);
        let group = matcher.group;
        mentions.push(ComponentMention {
            kind: group.kind,
            content: derive_content(group.kind, &context),
            anchor: group.anchor,
            importance: group.importance,
            context,
        });
    }

    // Dedup before ranking so scan order decides which mention survives.
    let mut unique: Vec<ComponentMention> = Vec::with_capacity(mentions.len());
    for mention in mentions {
        if !unique.iter().any(|m| m.kind == mention.kind) {
            unique.push(mention);
        }
    }

    unique.sort_by(|a, b| b.importance.cmp(&a.importance));
    unique
}

/// Words within `CONTEXT_RADIUS` bytes of the keyword's first occurrence.
///
/// The first occurrence is a plain substring search, so it may sit inside
/// a longer word even when a whole-word match exists further on.
fn context_words(original: &str, lowered: &str, keyword: &str) -> Vec<String> {
    let Some(index) = lowered.find(keyword) else {
        return Vec::new();
    };

    let mut start = index.saturating_sub(CONTEXT_RADIUS);
    while !original.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (index + keyword.len() + CONTEXT_RADIUS).min(original.len());
    while !original.is_char_boundary(end) {
        end += 1;
    }

    original[start..end].split(' ').map(String::from).collect()
}
