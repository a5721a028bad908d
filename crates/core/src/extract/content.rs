use crate::kind::ComponentKind;

/// A label chosen when the context contains any of `cues`.
struct LabelRule {
    cues: &'static [&'static str],
    label: &'static str,
}

const fn rule(cues: &'static [&'static str], label: &'static str) -> LabelRule {
    LabelRule { cues, label }
}

const HEADER_LABELS: &[LabelRule] = &[
    rule(&["company", "brand"], "Company Header"),
    rule(&["admin", "dashboard"], "Admin Header"),
];

const HERO_LABELS: &[LabelRule] = &[
    rule(&["ai", "artificial"], "AI-Powered Solution"),
    rule(&["saas", "software"], "SaaS Platform"),
    rule(&["ecommerce", "shop"], "Online Store"),
];

const BUTTON_LABELS: &[LabelRule] = &[
    rule(&["signup", "register"], "Sign Up"),
    rule(&["buy", "purchase"], "Buy Now"),
    rule(&["contact"], "Contact Us"),
    rule(&["learn"], "Learn More"),
];

const FORM_LABELS: &[LabelRule] = &[
    rule(&["contact"], "Contact Form"),
    rule(&["signup", "register"], "Registration Form"),
    rule(&["login"], "Login Form"),
];

const SEARCH_LABELS: &[LabelRule] = &[
    rule(&["product"], "Search products..."),
    rule(&["article", "content"], "Search articles..."),
];

/// Rules checked in order, then the label used when none apply.
fn label_table(kind: ComponentKind) -> Option<(&'static [LabelRule], &'static str)> {
    match kind {
        ComponentKind::Header => Some((HEADER_LABELS, "Main Header")),
        ComponentKind::Hero => Some((HERO_LABELS, "Welcome Message")),
        ComponentKind::Button => Some((BUTTON_LABELS, "Get Started")),
        ComponentKind::Form => Some((FORM_LABELS, "Form")),
        ComponentKind::Search => Some((SEARCH_LABELS, "Search...")),
        _ => None,
    }
}

/// Pick a display label for a component from the words around its keyword.
///
/// Cue checks are substring checks on the lower-cased context, so "ai"
/// also fires inside "email" or "detail".
pub fn derive_content(kind: ComponentKind, context: &[String]) -> String {
    let Some((rules, fallback)) = label_table(kind) else {
        return kind.default_label();
    };

    let text = context.join(" ").to_lowercase();
    rules
        .iter()
        .find(|r| r.cues.iter().any(|cue| text.contains(cue)))
        .map(|r| r.label)
        .unwrap_or(fallback)
        .to_string()
}
