use crate::extract::ComponentMention;
use crate::kind::ComponentKind;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Page archetype. Parameterizes geometry and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutCategory {
    Standard,
    Dashboard,
    Ecommerce,
    Blog,
    Form,
}

impl LayoutCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutCategory::Standard => "standard",
            LayoutCategory::Dashboard => "dashboard",
            LayoutCategory::Ecommerce => "ecommerce",
            LayoutCategory::Blog => "blog",
            LayoutCategory::Form => "form",
        }
    }

    /// Capitalized name for titles.
    pub fn label(self) -> &'static str {
        match self {
            LayoutCategory::Standard => "Standard",
            LayoutCategory::Dashboard => "Dashboard",
            LayoutCategory::Ecommerce => "Ecommerce",
            LayoutCategory::Blog => "Blog",
            LayoutCategory::Form => "Form",
        }
    }
}

impl fmt::Display for LayoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const FORM_KINDS: [ComponentKind; 3] = [
    ComponentKind::Form,
    ComponentKind::Input,
    ComponentKind::Button,
];

/// Pick the page archetype for a set of mentions. First matching rule wins.
///
/// Depends only on which kinds are present (plus context words for the
/// blog rule), never on mention order.
pub fn classify_layout(mentions: &[ComponentMention]) -> LayoutCategory {
    let kinds: HashSet<ComponentKind> = mentions.iter().map(|m| m.kind).collect();
    let has = |kind: ComponentKind| kinds.contains(&kind);

    if has(ComponentKind::Sidebar)
        && (has(ComponentKind::Chart) || has(ComponentKind::Stats) || has(ComponentKind::Table))
    {
        return LayoutCategory::Dashboard;
    }

    if has(ComponentKind::ProductCard) || has(ComponentKind::ShoppingCart) || has(ComponentKind::Filter)
    {
        return LayoutCategory::Ecommerce;
    }

    let mentions_articles = mentions.iter().any(|m| {
        m.context
            .iter()
            .any(|word| word.contains("article") || word.contains("blog"))
    });
    if has(ComponentKind::Text) && (has(ComponentKind::Sidebar) || mentions_articles) {
        return LayoutCategory::Blog;
    }

    if FORM_KINDS.iter().filter(|kind| has(**kind)).count() >= 2 {
        return LayoutCategory::Form;
    }

    LayoutCategory::Standard
}
