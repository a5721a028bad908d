use pretty_assertions::assert_eq;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::ErrorCode;
use rmcp::ServerHandler;
use wiresketch_mcp::*;

fn extract_text(result: rmcp::model::CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.raw.as_text())
        .map(|t| t.text.clone())
        .unwrap_or_default()
}

fn params(description: &str) -> GenerateParams {
    GenerateParams {
        description: description.to_string(),
        device: None,
        format: None,
    }
}

#[tokio::test]
async fn test_generate_compact() {
    let server = WiresketchServer::new();
    let result = server
        .generate_wireframe(Parameters(params("A landing page with a hero and a footer")))
        .await
        .unwrap();

    let text = extract_text(result);
    let (head, body) = text.split_once("---\n").expect("header separator");
    assert!(head.contains("title: Custom Standard Wireframe"));
    assert!(head.contains("layout: standard"));
    assert!(head.contains("device: desktop 1200x800"));

    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("[1:header "));
    assert!(lines[1].starts_with("[2:hero "));
    assert!(lines[2].starts_with("[3:footer "));
}

#[tokio::test]
async fn test_generate_json_with_device() {
    let server = WiresketchServer::new();
    let result = server
        .generate_wireframe(Parameters(GenerateParams {
            device: Some("tablet".to_string()),
            format: Some("json".to_string()),
            ..params("An admin dashboard with a sidebar and a chart")
        }))
        .await
        .unwrap();

    let json: serde_json::Value = serde_json::from_str(&extract_text(result)).unwrap();
    assert_eq!(json["layout"], "dashboard");
    assert_eq!(json["device"], "tablet");
    assert_eq!(json["dimensions"]["width"], 768);
    assert_eq!(json["components"][0]["type"], "header");
    assert_eq!(json["components"][1]["type"], "sidebar");
    assert_eq!(json["components"][1]["height"], 100.0);
}

#[tokio::test]
async fn test_generate_rejects_short_description() {
    let server = WiresketchServer::new();
    let err = server
        .generate_wireframe(Parameters(params("nav")))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "Description must be at least 10 characters long");
}

#[tokio::test]
async fn test_generate_rejects_empty_description() {
    let server = WiresketchServer::new();
    let err = server
        .generate_wireframe(Parameters(params("")))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert_eq!(err.message, "Description is required and must be a string");
}

#[tokio::test]
async fn test_generate_rejects_unknown_device() {
    let server = WiresketchServer::new();
    let err = server
        .generate_wireframe(Parameters(GenerateParams {
            device: Some("smartwatch".to_string()),
            ..params("A landing page with a hero")
        }))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(err.message.contains("smartwatch"));
}

#[tokio::test]
async fn test_component_types() {
    let server = WiresketchServer::new();
    let result = server.component_types().await.unwrap();
    let json: Vec<serde_json::Value> = serde_json::from_str(&extract_text(result)).unwrap();

    assert_eq!(json.len(), 30);
    let priority_of = |name: &str| {
        json.iter()
            .find(|entry| entry["type"] == name)
            .map(|entry| entry["displayPriority"].as_u64().unwrap())
            .unwrap()
    };
    assert_eq!(priority_of("header"), 0);
    assert_eq!(priority_of("product-card"), 10);
    assert_eq!(priority_of("footer"), 99);
    assert_eq!(priority_of("modal"), 50);
}

#[test]
fn test_server_info() {
    let info = WiresketchServer::new().get_info();
    assert_eq!(info.server_info.name, "wiresketch-mcp");
    assert!(info.capabilities.tools.is_some());
}
