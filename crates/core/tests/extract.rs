//! Tests for keyword extraction, dedup ordering, and content labels.

use pretty_assertions::assert_eq;
use wiresketch_core::extract::{extract_components, Anchor};
use wiresketch_core::kind::ComponentKind;

fn kinds(description: &str) -> Vec<ComponentKind> {
    extract_components(description).iter().map(|m| m.kind).collect()
}

#[test]
fn test_repeated_keyword_yields_one_mention() {
    let mentions = extract_components("header header header");
    assert_eq!(mentions.len(), 1);
    assert_eq!(mentions[0].kind, ComponentKind::Header);
    assert_eq!(mentions[0].content, "Main Header");
    assert_eq!(mentions[0].anchor, Anchor::Top);
    assert_eq!(mentions[0].importance, 9);
}

#[test]
fn test_whole_word_matching() {
    // "bottomless" must not trigger the footer, "charts" must not trigger "chart"
    assert!(kinds("a bottomless pit").is_empty());
    assert!(!kinds("lots of charts").contains(&ComponentKind::Chart));
    assert_eq!(kinds("a page footer"), vec![ComponentKind::Footer]);
}

#[test]
fn test_hyphenated_keyword() {
    assert_eq!(kinds("real-time numbers"), vec![ComponentKind::Stats]);
}

#[test]
fn test_sorted_by_importance() {
    assert_eq!(
        kinds("a footer, a hero and a header"),
        vec![ComponentKind::Header, ComponentKind::Hero, ComponentKind::Footer]
    );
}

#[test]
fn test_importance_ties_keep_table_order() {
    // table and chart share importance 7; the table group is scanned first
    assert_eq!(
        kinds("a chart above a table"),
        vec![ComponentKind::Table, ComponentKind::Chart]
    );
}

#[test]
fn test_dedup_happens_before_sort() {
    // "chat" alone maps to text at importance 8
    let chat = extract_components("a chat window");
    assert_eq!(chat[0].kind, ComponentKind::Text);
    assert_eq!(chat[0].importance, 8);

    // with "text" present, the earlier text group (importance 7) wins dedup
    let both = extract_components("a chat window with text");
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].kind, ComponentKind::Text);
    assert_eq!(both[0].importance, 7);
}

#[test]
fn test_case_insensitive_matching() {
    assert_eq!(kinds("SIDEBAR"), vec![ComponentKind::Sidebar]);
}

#[test]
fn test_content_labels() {
    let find = |description: &str, kind: ComponentKind| {
        extract_components(description)
            .into_iter()
            .find(|m| m.kind == kind)
            .map(|m| m.content)
            .unwrap()
    };

    assert_eq!(find("Big signup button", ComponentKind::Button), "Sign Up");
    assert_eq!(find("Big signup button", ComponentKind::Form), "Registration Form");
    assert_eq!(find("a button to buy", ComponentKind::Button), "Buy Now");
    assert_eq!(find("a button", ComponentKind::Button), "Get Started");
    assert_eq!(find("company header with logo", ComponentKind::Header), "Company Header");
    assert_eq!(find("hero for an AI startup", ComponentKind::Hero), "AI-Powered Solution");
    assert_eq!(find("hero for our software", ComponentKind::Hero), "SaaS Platform");
    assert_eq!(find("a big hero", ComponentKind::Hero), "Welcome Message");
    assert_eq!(find("login form", ComponentKind::Form), "Login Form");
    assert_eq!(find("search for products", ComponentKind::Search), "Search products...");
    assert_eq!(find("search the article archive", ComponentKind::Search), "Search articles...");
    assert_eq!(find("a carousel", ComponentKind::Carousel), "Carousel");
    assert_eq!(find("our products", ComponentKind::ProductCard), "Product-card");
}

#[test]
fn test_context_window_is_bounded() {
    let description = format!("{} footer {}", "x".repeat(50), "y".repeat(50));
    let mentions = extract_components(&description);
    assert_eq!(mentions.len(), 1);

    let context = &mentions[0].context;
    assert_eq!(context.len(), 3);
    assert_eq!(context[0], "x".repeat(29));
    assert_eq!(context[1], "footer");
    assert_eq!(context[2], "y".repeat(29));
}

#[test]
fn test_context_window_respects_char_boundaries() {
    let description = format!("{} header", "é".repeat(20));
    let mentions = extract_components(&description);
    assert_eq!(mentions.len(), 1);

    let context = &mentions[0].context;
    assert_eq!(context.len(), 2);
    assert_eq!(context[0].chars().count(), 15);
    assert_eq!(context[1], "header");
}

#[test]
fn test_context_keeps_original_case() {
    let mentions = extract_components("The Admin Header");
    assert_eq!(mentions[0].context, vec!["The", "Admin", "Header"]);
    assert_eq!(mentions[0].content, "Admin Header");
}

#[test]
fn test_no_keywords() {
    assert!(extract_components("xyz").is_empty());
    assert!(extract_components("").is_empty());
}
