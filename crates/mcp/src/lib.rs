//! MCP server for wiresketch: turns page descriptions into wireframes over stdio.

use wiresketch_core::device::Device;
use wiresketch_core::kind::ComponentKind;
use wiresketch_core::output::{self, WireframeRecord};
use wiresketch_core::request::{GenerationRequest, RequestError};

use rmcp::{
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use serde::Deserialize;

// --- Parameter structs ---

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GenerateParams {
    #[schemars(description = "Plain-language description of the page, at least 10 characters")]
    pub description: String,
    #[schemars(description = "Target device: 'desktop' (default), 'tablet' or 'mobile'")]
    pub device: Option<String>,
    #[schemars(description = "Output format: 'compact' (default) or 'json'")]
    pub format: Option<String>,
}

// --- Output helpers ---

pub fn format_record(record: &WireframeRecord, format: Option<&str>) -> String {
    match format {
        Some("json") => serde_json::to_string_pretty(record).unwrap_or_default(),
        _ => {
            let wf = &record.wireframe;
            let mut header = format!(
                "title: {}\nlayout: {}\ncomplexity: {}\ndevice: {} {}x{}\nels: {}\n---\n",
                wf.title,
                wf.layout,
                wf.complexity,
                record.device,
                record.dimensions.width,
                record.dimensions.height,
                wf.components.len()
            );
            header.push_str(&output::to_compact_string(wf));
            header
        }
    }
}

fn map_request_error(e: RequestError) -> McpError {
    McpError::new(rmcp::model::ErrorCode::INVALID_PARAMS, e.to_string(), None)
}

// --- Server ---

#[derive(Clone)]
pub struct WiresketchServer {
    tool_router: ToolRouter<Self>,
}

impl Default for WiresketchServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl WiresketchServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Generate a wireframe from a plain-language page description. Returns positioned components in percent of the canvas.")]
    pub async fn generate_wireframe(
        &self,
        Parameters(params): Parameters<GenerateParams>,
    ) -> Result<CallToolResult, McpError> {
        let device = match params.device.as_deref() {
            Some(name) => name.parse::<Device>().map_err(map_request_error)?,
            None => Device::default(),
        };
        let request = GenerationRequest::new(params.description).with_device(device);
        let record = wiresketch_core::generate(&request).map_err(map_request_error)?;
        tracing::info!(
            layout = %record.wireframe.layout,
            components = record.wireframe.components.len(),
            "generated wireframe"
        );
        let text = format_record(&record, params.format.as_deref());
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(description = "List every component type a wireframe can contain, with its display priority (lower renders first).")]
    pub async fn component_types(&self) -> Result<CallToolResult, McpError> {
        let types: Vec<serde_json::Value> = ComponentKind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "type": kind,
                    "displayPriority": kind.display_priority(),
                    "defaultLabel": kind.default_label(),
                })
            })
            .collect();
        let json = serde_json::to_string_pretty(&types).unwrap_or_default();
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for WiresketchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "wiresketch: heuristic wireframe generator. Call generate_wireframe with a page \
                 description such as \"an admin dashboard with a sidebar and charts\". \
                 Components are listed as [n:type \"content\" @x,y WxH] in percent of the canvas."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "wiresketch-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
