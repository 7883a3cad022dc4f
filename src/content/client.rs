//! Content API client

use async_trait::async_trait;

use super::post::{parse_posts, Post};
use crate::config::ContentConfig;
use crate::error::FetchError;

/// Anything that can supply the posts for one page view
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError>;
}

/// Fetches posts over HTTP from the content API
pub struct HttpPostSource {
    config: ContentConfig,
    client: reqwest::Client,
}

impl HttpPostSource {
    pub fn new(config: ContentConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("learn-page/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { config, client })
    }

    /// Query string selecting the page size and field projection
    pub fn query(&self) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.config.per_page.to_string()),
            ("_fields", self.config.fields.join(",")),
        ]
    }

    async fn fetch_once(&self) -> Result<Vec<Post>, FetchError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&self.query())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        Ok(parse_posts(&body)?)
    }
}

#[async_trait]
impl PostSource for HttpPostSource {
    async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
        let mut attempt = 0;
        loop {
            match self.fetch_once().await {
                Ok(posts) => {
                    tracing::debug!(count = posts.len(), attempt, "Fetched posts");
                    return Ok(posts);
                }
                Err(e) if e.is_transient() && attempt < self.config.retries => {
                    attempt += 1;
                    tracing::warn!(error = %e, attempt, "Content fetch failed, retrying");
                    tokio::time::sleep(self.config.retry_backoff()).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Router};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    /// Serve `app` on an ephemeral port and return its base URL
    pub(crate) async fn spawn_app(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// In-memory source: a JSON body to parse, or an upstream status to fail with
    pub(crate) enum StubSource {
        Body(&'static str),
        Fail(StatusCode),
    }

    #[async_trait]
    impl PostSource for StubSource {
        async fn fetch_posts(&self) -> Result<Vec<Post>, FetchError> {
            match self {
                StubSource::Body(body) => Ok(parse_posts(body)?),
                StubSource::Fail(status) => Err(FetchError::Status(*status)),
            }
        }
    }

    fn source_for(endpoint: String, retries: u32) -> HttpPostSource {
        HttpPostSource::new(ContentConfig {
            endpoint,
            retries,
            retry_backoff_ms: 1,
            timeout_secs: 5,
            ..ContentConfig::default()
        })
        .unwrap()
    }

    const BODY: &str = r#"[
        {"id": 1, "modified": "2024-01-01T00:00:00", "title": {"rendered": "Intro"}, "categories": [6]},
        {"id": 2, "modified": "2024-01-02T00:00:00", "title": {"rendered": "Refactoring"}, "categories": [7, 8]}
    ]"#;

    #[tokio::test]
    async fn test_fetch_sends_projection() {
        let app = Router::new().route(
            "/posts",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                if params.get("per_page").map(String::as_str) != Some("100") {
                    return (StatusCode::BAD_REQUEST, String::new());
                }
                let fields = params.get("_fields").cloned().unwrap_or_default();
                if !fields.starts_with("id,modified,title,categories") {
                    return (StatusCode::BAD_REQUEST, String::new());
                }
                (StatusCode::OK, BODY.to_string())
            }),
        );
        let base = spawn_app(app).await;

        let posts = source_for(format!("{}/posts", base), 0)
            .fetch_posts()
            .await
            .unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[1].id, 2);
    }

    #[tokio::test]
    async fn test_malformed_body_is_not_retried() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = Router::new().route(
            "/posts",
            get(move || {
                let counter = counter.clone();
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    r#"{"code": "rest_no_route"}"#
                }
            }),
        );
        let base = spawn_app(app).await;

        let err = source_for(format!("{}/posts", base), 2)
            .fetch_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_error_retried_then_succeeds() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let app = Router::new().route(
            "/posts",
            get(move || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        (StatusCode::SERVICE_UNAVAILABLE, String::new())
                    } else {
                        (StatusCode::OK, BODY.to_string())
                    }
                }
            }),
        );
        let base = spawn_app(app).await;

        let posts = source_for(format!("{}/posts", base), 1)
            .fetch_posts()
            .await
            .unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    /// Router answering every request with `status`, counting hits
    fn status_app(status: StatusCode, hits: Arc<AtomicUsize>) -> Router {
        Router::new().route(
            "/posts",
            get(move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    status
                }
            }),
        )
    }

    #[tokio::test]
    async fn test_client_error_status_is_not_retried() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_app(status_app(StatusCode::FORBIDDEN, hits.clone())).await;

        let err = source_for(format!("{}/posts", base), 3)
            .fetch_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(StatusCode::FORBIDDEN)));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_server_error_retries_exhausted() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base = spawn_app(status_app(StatusCode::BAD_GATEWAY, hits.clone())).await;

        let err = source_for(format!("{}/posts", base), 2)
            .fetch_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status(StatusCode::BAD_GATEWAY)));
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let app = Router::new().route(
            "/posts",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "[]"
            }),
        );
        let base = spawn_app(app).await;

        let source = HttpPostSource::new(ContentConfig {
            endpoint: format!("{}/posts", base),
            timeout_secs: 1,
            retries: 0,
            ..ContentConfig::default()
        })
        .unwrap();

        let started = Instant::now();
        let err = source.fetch_posts().await.unwrap_err();
        assert!(matches!(&err, FetchError::Network(e) if e.is_timeout()));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(format!("http://{}/posts", addr), 1)
            .fetch_posts()
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
