mod catalog;
mod config;

use std::path::Path;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::{routing::get, Json, Router};
use tileview_shared::models::MapsDocument;
use tokio::sync::RwLock;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use catalog::Catalog;
use config::{Config, DEFAULT_LOG_FILTER};

#[derive(Clone)]
struct AppState {
    config: Arc<Config>,
    catalog: Arc<RwLock<Catalog>>,
}

impl AppState {
    fn new(config: Config, catalog: Catalog) -> Self {
        AppState {
            config: Arc::new(config),
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Root for generated tile templates: the configured base URL, else the
    /// host the client used to reach us.
    fn tile_base_url(&self, headers: &HeaderMap) -> String {
        if let Some(base) = &self.config.tile_base_url {
            return base.clone();
        }
        let host = headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .map(str::to_string)
            .unwrap_or_else(|| format!("localhost:{}", self.config.port));
        format!("http://{}", host)
    }
}

async fn maps_json(State(state): State<AppState>, headers: HeaderMap) -> Json<MapsDocument> {
    let base = state.tile_base_url(&headers);
    let doc = state.catalog.read().await.maps_document(&base);
    tracing::info!(overlays = doc.maps.len(), "Maps JSON requested");
    Json(doc)
}

async fn reload(State(state): State<AppState>) -> (StatusCode, String) {
    match Catalog::load(&state.config.catalog_path) {
        Ok(fresh) => {
            *state.catalog.write().await = fresh;
            (StatusCode::OK, "OK".to_string())
        }
        Err(e) => {
            tracing::error!(error = %e, "Catalog reload failed, keeping previous catalog");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn list_layers(State(state): State<AppState>) -> String {
    state.catalog.read().await.ids().collect::<Vec<_>>().join("\n")
}

async fn serve_index(State(state): State<AppState>) -> impl IntoResponse {
    // Try to serve the built frontend, fall back to a simple message
    match tokio::fs::read_to_string(state.config.dist_dir.join("index.html")).await {
        Ok(html) => Html(html),
        Err(_) => Html(
            r#"<!DOCTYPE html>
<html>
<head><title>Tile Overlay Viewer</title></head>
<body>
<h1>Tile Overlay Viewer</h1>
<p>Frontend not built yet. The overlay list is at <a href="/maps.json">/maps.json</a>.</p>
</body>
</html>"#
                .to_string(),
        ),
    }
}

/// Build a cache-controlled static file router.
///
/// Separated so tests can exercise the caching layer with arbitrary directories.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
fn build_app(state: AppState) -> Router {
    let dist = state.config.dist_dir.clone();
    // Bundle output is content-hashed by the frontend build
    let static_files = Router::new()
        .nest(
            "/assets",
            cached_static_router(&dist.join("assets"), CACHE_IMMUTABLE),
        )
        .nest(
            "/wasm",
            cached_static_router(&dist.join("wasm"), CACHE_IMMUTABLE),
        );

    Router::new()
        .route("/", get(serve_index))
        .route("/maps.json", get(maps_json))
        .route("/reload", get(reload))
        .route("/layers", get(list_layers))
        .with_state(state)
        .merge(static_files)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;
    let catalog = Catalog::load(&config.catalog_path)?;
    if catalog.is_empty() {
        tracing::warn!(path = %config.catalog_path.display(), "Catalog lists no overlays");
    }
    let addr = config.bind_addr();
    let app = build_app(AppState::new(config, catalog));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Serving overlay viewer");
    axum::serve(listener, app).await?;
    Ok(())
}
