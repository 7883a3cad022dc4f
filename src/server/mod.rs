//! HTTP server for the learn page

use anyhow::Result;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::PageError;
use crate::LearnSite;

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            PageError::Render(e) => tracing::error!("Render failed: {:?}", e),
            PageError::Fetch(e) => tracing::warn!(error = %e, "Responding 502"),
            PageError::NotFound(_) => {}
        }
        let body = match status {
            StatusCode::BAD_GATEWAY => "Content temporarily unavailable",
            StatusCode::NOT_FOUND => "Not found",
            _ => "Server error",
        };
        (status, body).into_response()
    }
}

/// Build the application router
pub fn router(site: Arc<LearnSite>) -> Router {
    let reference_route = format!("{}/:name", site.config.reference_path.trim_end_matches('/'));
    let static_files = ServeDir::new(&site.static_dir);

    let mut app = Router::new()
        .route(&site.config.page_path, get(learn_handler))
        .route(&reference_route, get(reference_handler));
    if site.config.page_path != "/" {
        app = app.route("/", get(learn_handler));
    }

    app.fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(site)
}

/// Start the server
pub async fn start(site: LearnSite, ip: &str, port: u16, open: bool) -> Result<()> {
    let page_path = site.config.page_path.clone();
    let app = router(Arc::new(site));

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let url = format!("http://{}:{}{}", ip, port, page_path);
    println!("Server running at {}", url);
    println!("Press Ctrl+C to stop.");

    if open {
        if let Err(e) = open_browser(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Host the request was addressed to.
///
/// HTTP/1 requests name it in the `Host` header, HTTP/2 requests in the
/// `:authority` pseudo-header that ends up in the URI. Falls back to the
/// configured site host.
fn request_host<'a>(headers: &'a HeaderMap, uri: &'a Uri, site: &'a LearnSite) -> &'a str {
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .filter(|host| !host.is_empty())
        .or_else(|| uri.authority().map(|authority| authority.as_str()))
        .unwrap_or_else(|| site.config.default_host())
}

async fn learn_handler(
    State(site): State<Arc<LearnSite>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Html<String>, PageError> {
    let host = request_host(&headers, &uri, &site);
    site.learn_page(host, uri.path()).await.map(Html)
}

async fn reference_handler(
    State(site): State<Arc<LearnSite>>,
    Path(name): Path<String>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Html<String>, PageError> {
    let host = request_host(&headers, &uri, &site);
    site.reference_page(host, uri.path(), &name).map(Html)
}

/// Open a URL in the default browser
fn open_browser(url: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        std::process::Command::new("open").arg(url).spawn()?;
    }

    #[cfg(target_os = "linux")]
    {
        std::process::Command::new("xdg-open").arg(url).spawn()?;
    }

    #[cfg(target_os = "windows")]
    {
        std::process::Command::new("cmd")
            .args(["/c", "start", url])
            .spawn()?;
    }

    Ok(())
}
