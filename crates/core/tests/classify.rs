//! Tests for page layout classification.

use proptest::prelude::*;
use wiresketch_core::classify::{classify_layout, LayoutCategory};
use wiresketch_core::extract::{Anchor, ComponentMention};
use wiresketch_core::kind::ComponentKind;

fn mention(kind: ComponentKind) -> ComponentMention {
    ComponentMention {
        kind,
        content: kind.default_label(),
        anchor: Anchor::Main,
        importance: 5,
        context: Vec::new(),
    }
}

fn classify(kinds: &[ComponentKind]) -> LayoutCategory {
    let mentions: Vec<_> = kinds.iter().copied().map(mention).collect();
    classify_layout(&mentions)
}

use ComponentKind::*;

#[test]
fn test_dashboard_needs_sidebar_and_data() {
    assert_eq!(classify(&[Sidebar, Chart]), LayoutCategory::Dashboard);
    assert_eq!(classify(&[Sidebar, Stats]), LayoutCategory::Dashboard);
    assert_eq!(classify(&[Sidebar, Table]), LayoutCategory::Dashboard);
    assert_eq!(classify(&[Chart, Table, Stats]), LayoutCategory::Standard);
}

#[test]
fn test_dashboard_wins_over_ecommerce() {
    assert_eq!(classify(&[Sidebar, Table, ProductCard]), LayoutCategory::Dashboard);
}

#[test]
fn test_ecommerce_indicators() {
    assert_eq!(classify(&[ProductCard]), LayoutCategory::Ecommerce);
    assert_eq!(classify(&[ShoppingCart]), LayoutCategory::Ecommerce);
    assert_eq!(classify(&[Filter, Text, Sidebar]), LayoutCategory::Ecommerce);
}

#[test]
fn test_blog_from_sidebar() {
    assert_eq!(classify(&[Header, Text, Sidebar]), LayoutCategory::Blog);
    assert_eq!(classify(&[Header, Text]), LayoutCategory::Standard);
}

#[test]
fn test_blog_from_context_words() {
    let mut text = mention(Text);
    text.context = vec!["my".into(), "blogging".into(), "site".into()];
    assert_eq!(classify_layout(&[mention(Header), text]), LayoutCategory::Blog);

    // context on any mention counts, not only the text one
    let mut header = mention(Header);
    header.context = vec!["Articles".into(), "articles".into()];
    assert_eq!(classify_layout(&[header, mention(Text)]), LayoutCategory::Blog);
}

#[test]
fn test_blog_context_needs_text() {
    let mut header = mention(Header);
    header.context = vec!["blog".into()];
    assert_eq!(classify_layout(&[header]), LayoutCategory::Standard);
}

#[test]
fn test_form_needs_two_distinct_kinds() {
    assert_eq!(classify(&[Form, Button]), LayoutCategory::Form);
    assert_eq!(classify(&[Input, Button]), LayoutCategory::Form);
    assert_eq!(classify(&[Form, Input, Button]), LayoutCategory::Form);
    assert_eq!(classify(&[Button]), LayoutCategory::Standard);
    assert_eq!(classify(&[Form, Form]), LayoutCategory::Standard);
}

#[test]
fn test_empty_is_standard() {
    assert_eq!(classify(&[]), LayoutCategory::Standard);
}

fn kind_orderings() -> impl Strategy<Value = (Vec<ComponentKind>, Vec<ComponentKind>)> {
    proptest::sample::subsequence(ComponentKind::ALL.to_vec(), 0..=8)
        .prop_flat_map(|kinds| (Just(kinds.clone()), Just(kinds).prop_shuffle()))
}

proptest! {
    #[test]
    fn prop_classification_ignores_order((ordered, shuffled) in kind_orderings()) {
        prop_assert_eq!(classify(&ordered), classify(&shuffled));
    }
}
