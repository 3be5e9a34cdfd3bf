#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

use folio_api::config::{ServerConfig, StoreBackend};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::author::Author;
use folio_core::error::CoreError;
use folio_core::sort::SortOptions;
use folio_core::store::AuthorStore;

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store: StoreBackend::Memory { seed_path: None },
    }
}

/// Build the full application router around the given author store.
///
/// Goes through [`build_app_router`] so integration tests exercise the same
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery)
/// that production uses.
pub fn build_test_app(authors: Arc<dyn AuthorStore>) -> Router {
    build_test_app_with_config(authors, test_config())
}

pub fn build_test_app_with_config(authors: Arc<dyn AuthorStore>, config: ServerConfig) -> Router {
    build_app_router(AppState { authors }, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub fn content_type(response: &Response) -> &str {
    response
        .headers()
        .get("content-type")
        .expect("Missing Content-Type header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Scripted author store
// ---------------------------------------------------------------------------

/// What a [`ScriptedAuthorStore`] answers with.
#[derive(Debug, Clone)]
pub enum Script {
    Resolve(Option<Vec<Author>>),
    Reject(String),
    Hang,
}

/// Test double for [`AuthorStore`].
///
/// Answers with its script only when asked for `{ family_name: 1 }`;
/// any other sort resolves to `None`. Records every sort it receives.
pub struct ScriptedAuthorStore {
    script: Script,
    healthy: bool,
    calls: Mutex<Vec<SortOptions>>,
}

impl ScriptedAuthorStore {
    pub fn new(script: Script) -> Arc<Self> {
        Arc::new(Self {
            script,
            healthy: true,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn resolving(authors: Vec<Author>) -> Arc<Self> {
        Self::new(Script::Resolve(Some(authors)))
    }

    pub fn rejecting(message: &str) -> Arc<Self> {
        Self::new(Script::Reject(message.to_string()))
    }

    pub fn unhealthy() -> Arc<Self> {
        Arc::new(Self {
            script: Script::Resolve(None),
            healthy: false,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<SortOptions> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AuthorStore for ScriptedAuthorStore {
    async fn get_all_authors(
        &self,
        sort: &SortOptions,
    ) -> Result<Option<Vec<Author>>, CoreError> {
        self.calls.lock().unwrap().push(*sort);

        if *sort != SortOptions::family_name_ascending() {
            return Ok(None);
        }

        match &self.script {
            Script::Resolve(authors) => Ok(authors.clone()),
            Script::Reject(message) => Err(CoreError::DataAccess(message.clone())),
            Script::Hang => {
                std::future::pending::<Result<Option<Vec<Author>>, CoreError>>().await
            }
        }
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        if self.healthy {
            Ok(())
        } else {
            Err(CoreError::DataAccess("connection refused".into()))
        }
    }
}

// ---------------------------------------------------------------------------
// Log capture
// ---------------------------------------------------------------------------

/// Counts ERROR events from any target while installed.
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Install an [`ErrorCounter`] as the default subscriber for this thread.
///
/// `#[tokio::test]` runs on a current-thread runtime, so handler futures
/// are polled on the thread holding the guard.
pub fn capture_errors() -> (ErrorCounter, DefaultGuard) {
    let counter = ErrorCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (counter, guard)
}
