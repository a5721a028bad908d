use serde::{Deserialize, Serialize};
use std::fmt;

/// The UI element types a wireframe can contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    // Navigation
    Header,
    Navigation,
    Navbar,
    Sidebar,
    Footer,
    Breadcrumb,
    Tabs,
    Pagination,
    // Content
    Hero,
    Heading,
    Text,
    Image,
    Video,
    Carousel,
    // Interactive
    Button,
    Form,
    Search,
    Input,
    // Data display
    Table,
    List,
    Chart,
    Card,
    Stats,
    // E-commerce
    ProductCard,
    ShoppingCart,
    Filter,
    Price,
    // Overlays and layout
    Modal,
    Container,
    Section,
}

/// Priority given to kinds without an entry in the display-order table.
pub const UNRANKED_PRIORITY: u8 = 50;

/// Top-to-bottom display order. Lower values are painted first.
const DISPLAY_PRIORITY: &[(ComponentKind, u8)] = &[
    (ComponentKind::Header, 0),
    (ComponentKind::Breadcrumb, 1),
    (ComponentKind::Search, 2),
    (ComponentKind::Hero, 3),
    (ComponentKind::Tabs, 4),
    (ComponentKind::Sidebar, 5),
    (ComponentKind::Stats, 6),
    (ComponentKind::Chart, 7),
    (ComponentKind::Table, 8),
    (ComponentKind::Card, 9),
    (ComponentKind::ProductCard, 10),
    (ComponentKind::Form, 11),
    (ComponentKind::Text, 12),
    (ComponentKind::Image, 13),
    (ComponentKind::Video, 14),
    (ComponentKind::Button, 15),
    (ComponentKind::Footer, 99),
];

impl ComponentKind {
    pub const ALL: [ComponentKind; 30] = [
        ComponentKind::Header,
        ComponentKind::Navigation,
        ComponentKind::Navbar,
        ComponentKind::Sidebar,
        ComponentKind::Footer,
        ComponentKind::Breadcrumb,
        ComponentKind::Tabs,
        ComponentKind::Pagination,
        ComponentKind::Hero,
        ComponentKind::Heading,
        ComponentKind::Text,
        ComponentKind::Image,
        ComponentKind::Video,
        ComponentKind::Carousel,
        ComponentKind::Button,
        ComponentKind::Form,
        ComponentKind::Search,
        ComponentKind::Input,
        ComponentKind::Table,
        ComponentKind::List,
        ComponentKind::Chart,
        ComponentKind::Card,
        ComponentKind::Stats,
        ComponentKind::ProductCard,
        ComponentKind::ShoppingCart,
        ComponentKind::Filter,
        ComponentKind::Price,
        ComponentKind::Modal,
        ComponentKind::Container,
        ComponentKind::Section,
    ];

    /// The wire name, as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Header => "header",
            ComponentKind::Navigation => "navigation",
            ComponentKind::Navbar => "navbar",
            ComponentKind::Sidebar => "sidebar",
            ComponentKind::Footer => "footer",
            ComponentKind::Breadcrumb => "breadcrumb",
            ComponentKind::Tabs => "tabs",
            ComponentKind::Pagination => "pagination",
            ComponentKind::Hero => "hero",
            ComponentKind::Heading => "heading",
            ComponentKind::Text => "text",
            ComponentKind::Image => "image",
            ComponentKind::Video => "video",
            ComponentKind::Carousel => "carousel",
            ComponentKind::Button => "button",
            ComponentKind::Form => "form",
            ComponentKind::Search => "search",
            ComponentKind::Input => "input",
            ComponentKind::Table => "table",
            ComponentKind::List => "list",
            ComponentKind::Chart => "chart",
            ComponentKind::Card => "card",
            ComponentKind::Stats => "stats",
            ComponentKind::ProductCard => "product-card",
            ComponentKind::ShoppingCart => "shopping-cart",
            ComponentKind::Filter => "filter",
            ComponentKind::Price => "price",
            ComponentKind::Modal => "modal",
            ComponentKind::Container => "container",
            ComponentKind::Section => "section",
        }
    }

    pub fn display_priority(self) -> u8 {
        DISPLAY_PRIORITY
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, priority)| *priority)
            .unwrap_or(UNRANKED_PRIORITY)
    }

    /// Label used when no context-specific content applies: the wire name
    /// with its first letter upper-cased ("Product-card").
    pub fn default_label(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
