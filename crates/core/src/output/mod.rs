use crate::classify::LayoutCategory;
use crate::device::{Device, Dimensions};
use crate::kind::ComponentKind;
use crate::layout::Bounds;
use crate::style::ComponentStyle;
use serde::Serialize;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Length of the random tail on component ids.
const ID_SUFFIX_LEN: usize = 9;

/// A positioned, styled element on the wireframe canvas.
/// Paint order is list order; there is no z-index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireframeComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    #[serde(flatten)]
    pub bounds: Bounds,
    pub content: String,
    pub style: ComponentStyle,
}

/// How much the description asked for, judged on extracted mentions only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Simple,
    Medium,
    Complex,
}

impl Complexity {
    pub fn from_mention_count(count: usize) -> Self {
        match count {
            0..=3 => Complexity::Simple,
            4..=6 => Complexity::Medium,
            _ => Complexity::Complex,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Simple => "simple",
            Complexity::Medium => "medium",
            Complexity::Complex => "complex",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The output of one parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedWireframe {
    pub title: String,
    pub description: String,
    pub components: Vec<WireframeComponent>,
    pub layout: LayoutCategory,
    pub complexity: Complexity,
}

/// A parsed wireframe annotated for a target device, as served to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireframeRecord {
    pub id: String,
    #[serde(flatten)]
    pub wireframe: ParsedWireframe,
    pub device: Device,
    pub dimensions: Dimensions,
}

impl WireframeRecord {
    pub fn new(wireframe: ParsedWireframe, device: Device) -> Self {
        Self {
            id: format!("wireframe_{}", unix_millis()),
            wireframe,
            device,
            dimensions: device.dimensions(),
        }
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// `<type>_<unix millis>_<random suffix>`, unique across calls.
pub fn component_id(kind: ComponentKind) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}_{}", kind, unix_millis(), &suffix[..ID_SUFFIX_LEN])
}

/// Compact one-line-per-component rendering for terminals and agents.
///
/// ```text
/// [1:header "Main Header" @0,0 100x10]
/// [2:search "Search..." @20,12 60x6]
/// ```
pub fn to_compact_string(wireframe: &ParsedWireframe) -> String {
    wireframe
        .components
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let b = &c.bounds;
            format!(
                "[{}:{} \"{}\" @{},{} {}x{}]",
                i + 1,
                c.kind,
                c.content,
                b.x,
                b.y,
                b.width,
                b.height
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
