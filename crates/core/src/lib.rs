pub mod kind;
pub mod extract;
pub mod augment;
pub mod classify;
pub mod layout;
pub mod style;
pub mod device;
pub mod request;
pub mod output;

use output::{Complexity, ParsedWireframe, WireframeRecord};
use request::{GenerationRequest, RequestError};

/// Parse a free-text page description into a positioned, styled wireframe.
/// This is the primary entry point for wiresketch-core. It never fails:
/// input with no recognizable components still yields a header and a
/// content block.
pub fn parse_wireframe(description: &str) -> ParsedWireframe {
    let mentions = extract::extract_components(description);
    tracing::debug!(
        kinds = ?mentions.iter().map(|m| m.kind).collect::<Vec<_>>(),
        "extracted components"
    );

    let complexity = Complexity::from_mention_count(mentions.len());

    let augmented = augment::add_fallbacks(mentions, description);
    tracing::debug!(
        kinds = ?augmented.iter().map(|m| m.kind).collect::<Vec<_>>(),
        "augmented with fallbacks"
    );

    let category = classify::classify_layout(&augmented);
    tracing::debug!(%category, "determined layout");

    let components = layout::place_components(augmented, category);
    tracing::debug!(count = components.len(), "generated components");

    ParsedWireframe {
        title: format!("Custom {} Wireframe", category.label()),
        description: format!("Dynamically generated wireframe based on: \"{description}\""),
        components,
        layout: category,
        complexity,
    }
}

/// Validate a generation request and produce a device-annotated record.
pub fn generate(request: &GenerationRequest) -> Result<WireframeRecord, RequestError> {
    let description = request.validate()?;
    let device = request.device.unwrap_or_default();
    let parsed = parse_wireframe(description);
    Ok(WireframeRecord::new(parsed, device))
}
