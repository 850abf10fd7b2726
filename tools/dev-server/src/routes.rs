//! HTTP routes: the placeholder API and the static single-page app

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub const DEMO_MESSAGE: &str = "Hello from the demo endpoint";

#[derive(Debug, Serialize)]
struct Message {
    message: String,
}

#[derive(Debug)]
struct ApiState {
    ping_message: String,
}

/// Build the application router
///
/// Unknown paths outside `/api` fall back to `index.html` so client-side
/// routes survive a reload.
pub fn app(config: &ServerConfig) -> Router {
    let index = config.web_root.join("index.html");
    let serve_dir = ServeDir::new(&config.web_root)
        .precompressed_gzip()
        .precompressed_br()
        .not_found_service(ServeFile::new(index));

    let state = Arc::new(ApiState {
        ping_message: config.ping_message.clone(),
    });

    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/demo", get(demo))
        .route("/api/{*rest}", any(api_not_found))
        .with_state(state)
        .fallback_service(serve_dir)
        .layer(middleware::from_fn_with_state(config.isolation, add_headers))
        .layer(TraceLayer::new_for_http())
}

async fn ping(State(state): State<Arc<ApiState>>) -> Json<Message> {
    Json(Message {
        message: state.ping_message.clone(),
    })
}

async fn demo() -> Json<Message> {
    Json(Message {
        message: DEMO_MESSAGE.to_string(),
    })
}

async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(Message {
            message: "not found".to_string(),
        }),
    )
}

/// Add security headers and fix MIME types
async fn add_headers(State(isolation): State<bool>, request: Request<Body>, next: Next) -> Response {
    // Get the request path for MIME type detection
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        "Cross-Origin-Opener-Policy",
        HeaderValue::from_static("same-origin"),
    );
    if isolation {
        headers.insert(
            "Cross-Origin-Embedder-Policy",
            HeaderValue::from_static("require-corp"),
        );
    }

    // Fix MIME types for module scripts
    let content_type = if path.ends_with(".js") || path.ends_with(".mjs") {
        Some("application/javascript; charset=utf-8")
    } else if path.ends_with(".wasm") {
        Some("application/wasm")
    } else if path.ends_with(".css") {
        Some("text/css; charset=utf-8")
    } else if path.ends_with(".html") {
        Some("text/html; charset=utf-8")
    } else if path.ends_with(".json") {
        Some("application/json; charset=utf-8")
    } else {
        None
    };
    if let Some(content_type) = content_type {
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use tower::ServiceExt;

    const INDEX: &str = "<!doctype html><title>Folio</title>";

    fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        std::fs::create_dir(dir.path().join("pkg")).unwrap();
        std::fs::write(dir.path().join("pkg/folio_desktop_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
        dir
    }

    fn config(dir: &TempDir) -> ServerConfig {
        ServerConfig {
            web_root: dir.path().to_path_buf(),
            ..ServerConfig::default()
        }
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, headers, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_ping_uses_configured_message() {
        let dir = site();
        let mut config = config(&dir);
        config.ping_message = "pong".to_string();

        let (status, headers, body) = get(app(&config), "/api/ping").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, r#"{"message":"pong"}"#);
        assert!(headers[header::CONTENT_TYPE].to_str().unwrap().starts_with("application/json"));
    }

    #[tokio::test]
    async fn test_demo_endpoint() {
        let dir = site();
        let (status, _, body) = get(app(&config(&dir)), "/api/demo").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "message": DEMO_MESSAGE }));
    }

    #[tokio::test]
    async fn test_unknown_api_route_is_404() {
        let dir = site();
        let (status, _, body) = get(app(&config(&dir)), "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not found"));
    }

    #[tokio::test]
    async fn test_static_asset_with_fixed_mime() {
        let dir = site();
        let (status, headers, body) = get(app(&config(&dir)), "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");
        assert_eq!(headers[header::CONTENT_TYPE], "application/javascript; charset=utf-8");
        assert_eq!(headers["cross-origin-opener-policy"], "same-origin");
        assert!(headers.get("cross-origin-embedder-policy").is_none());

        let (status, headers, _) = get(app(&config(&dir)), "/pkg/folio_desktop_bg.wasm").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/wasm");
    }

    #[tokio::test]
    async fn test_spa_fallback_serves_index() {
        let dir = site();
        for uri in ["/", "/projects/savvo-sommelier", "/deep/link/page"] {
            let (status, _, body) = get(app(&config(&dir)), uri).await;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(body, INDEX, "{uri}");
        }
    }

    #[tokio::test]
    async fn test_isolation_headers() {
        let dir = site();
        let mut config = config(&dir);
        config.isolation = true;
        let (_, headers, _) = get(app(&config), "/").await;
        assert_eq!(headers["cross-origin-embedder-policy"], "require-corp");
    }
}
