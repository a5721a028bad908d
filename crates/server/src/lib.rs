//! REST API server for wiresketch.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use wiresketch_core::device::Device;
use wiresketch_core::output::ParsedWireframe;
use wiresketch_core::request::{GenerationRequest, RequestError};

/// Description used by the sample endpoint.
pub const SAMPLE_DESCRIPTION: &str = "A simple landing page for a tech startup";

// ---------------------------------------------------------------------------
// Configuration and state
// ---------------------------------------------------------------------------

/// Shared server state.
pub struct AppState {
    config: ServerConfig,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// The only origin allowed by CORS.
    pub frontend_url: String,
    /// Device used when a request does not name one.
    pub default_device: Device,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5001,
            frontend_url: "http://localhost:3000".to_string(),
            default_device: Device::Desktop,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `PORT`, `FRONTEND_URL` and `DEFAULT_DEVICE`.
    /// Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(port) = std::env::var("PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => tracing::warn!(%port, "ignoring invalid PORT"),
            }
        }
        if let Ok(url) = std::env::var("FRONTEND_URL") {
            config.frontend_url = url;
        }
        if let Ok(device) = std::env::var("DEFAULT_DEVICE") {
            match device.parse() {
                Ok(d) => config.default_device = d,
                Err(e) => tracing::warn!(error = %e, "ignoring invalid DEFAULT_DEVICE"),
            }
        }
        config
    }
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct ParseParams {
    pub description: String,
}

#[derive(Debug, Serialize)]
struct SuccessResponse<T> {
    success: bool,
    data: T,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error,
        }),
    )
        .into_response()
}

fn map_request_error(e: RequestError) -> Response {
    error_response(StatusCode::BAD_REQUEST, e.to_string())
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);
    match HeaderValue::from_str(&config.frontend_url) {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!(url = %config.frontend_url, "invalid FRONTEND_URL, CORS disabled");
            layer
        }
    }
}

/// Build the axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(&state.config);
    Router::new()
        .route("/health", get(health))
        .route("/api/parse", post(parse))
        .route("/api/generate/wireframe", post(generate_wireframe))
        .route("/api/generate/test", get(sample))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> &'static str {
    "ok"
}

fn respond_with_record(state: &AppState, mut request: GenerationRequest) -> Response {
    request.device = request.device.or(Some(state.config.default_device));
    match wiresketch_core::generate(&request) {
        Ok(record) => {
            tracing::info!(
                layout = %record.wireframe.layout,
                components = record.wireframe.components.len(),
                device = %record.device,
                "generated wireframe"
            );
            Json(SuccessResponse {
                success: true,
                data: record,
                message: "Wireframe generated successfully",
            })
            .into_response()
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected generation request");
            map_request_error(e)
        }
    }
}

/// POST /api/generate/wireframe  { description, device? }
async fn generate_wireframe(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerationRequest>, JsonRejection>,
) -> Response {
    match body {
        Ok(Json(request)) => respond_with_record(&state, request),
        Err(rejection) => error_response(StatusCode::BAD_REQUEST, rejection.body_text()),
    }
}

/// POST /api/parse  { description }
async fn parse(Json(params): Json<ParseParams>) -> Json<ParsedWireframe> {
    Json(wiresketch_core::parse_wireframe(&params.description))
}

/// GET /api/generate/test
async fn sample(State(state): State<Arc<AppState>>) -> Response {
    respond_with_record(&state, GenerationRequest::new(SAMPLE_DESCRIPTION))
}
