// src/view/mod.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use url::Url;

use crate::models::HealthResponse;

/// Outcome of the one-shot backend health check. Starts at `Loading` and is
/// written at most once per mount, to `Ok` or `Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendStatus {
    Loading,
    Ok(HealthResponse),
    Error(String),
}

impl BackendStatus {
    /// Short label for the status line.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::Loading => "Checking…",
            Self::Ok(_) => "OK",
            Self::Error(_) => "Offline",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("HTTP {}", .0.as_u16())]
    Status(reqwest::StatusCode),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Where the check reports its single state transition. Pluggable so tests
/// can spy on writes.
pub trait StatusSink: Send + Sync + 'static {
    fn set(&self, status: BackendStatus);
}

/// Mounted-lifetime guard. Dropping it marks the view unmounted; an in-flight
/// check still runs to completion but discards its result instead of writing
/// to the sink.
#[derive(Debug)]
pub struct Mounted {
    flag: Arc<AtomicBool>,
}

impl Mounted {
    fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

/// Spawns the single health check. No retry, no timeout, no backoff; one
/// await on the response, then one guarded write.
pub fn spawn_check(
    client: Client,
    base_url: Url,
    sink: Arc<dyn StatusSink>,
) -> (Mounted, JoinHandle<()>) {
    let mounted = Mounted::new();
    let flag = Arc::clone(&mounted.flag);
    let handle = tokio::spawn(async move {
        let result = fetch_health(&client, &base_url).await;
        if !flag.load(Ordering::SeqCst) {
            tracing::debug!("view unmounted before health check resolved, discarding");
            return;
        }
        match result {
            Ok(data) => sink.set(BackendStatus::Ok(data)),
            Err(err) => sink.set(BackendStatus::Error(err.to_string())),
        }
    });
    (mounted, handle)
}

async fn fetch_health(client: &Client, base_url: &Url) -> Result<HealthResponse, ViewError> {
    let url = base_url.join("/api/health")?;
    let res = client.get(url).send().await?;
    if !res.status().is_success() {
        return Err(ViewError::Status(res.status()));
    }
    Ok(res.json::<HealthResponse>().await?)
}

struct WatchSink(watch::Sender<BackendStatus>);

impl StatusSink for WatchSink {
    fn set(&self, status: BackendStatus) {
        // Receiver gone means nobody is rendering; nothing to do.
        let _ = self.0.send(status);
    }
}

/// Handle the rendered view reads the backend status from. Dropping it
/// unmounts, so a late response leaves no trace.
pub struct StatusView {
    rx: watch::Receiver<BackendStatus>,
    _mounted: Mounted,
}

/// Mounts the status check against `base_url` and returns the view handle.
pub fn mount(client: Client, base_url: Url) -> StatusView {
    let (tx, rx) = watch::channel(BackendStatus::Loading);
    let (mounted, _handle) = spawn_check(client, base_url, Arc::new(WatchSink(tx)));
    StatusView {
        rx,
        _mounted: mounted,
    }
}

impl StatusView {
    pub fn status(&self) -> BackendStatus {
        self.rx.borrow().clone()
    }

    /// Waits until the check lands in `Ok` or `Error` and returns it.
    pub async fn settled(&mut self) -> BackendStatus {
        loop {
            let current = self.rx.borrow_and_update().clone();
            if current != BackendStatus::Loading {
                return current;
            }
            if self.rx.changed().await.is_err() {
                return self.rx.borrow().clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration;

    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use tokio::net::TcpListener;

    use super::*;
    use crate::server;

    async fn spawn_server(app: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app.into_make_service()).await.unwrap();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<BackendStatus>>);

    impl StatusSink for RecordingSink {
        fn set(&self, status: BackendStatus) {
            self.0.lock().unwrap().push(status);
        }
    }

    #[tokio::test]
    async fn reachable_server_settles_ok() {
        let base = spawn_server(server::app()).await;
        let mut view = mount(Client::new(), base);
        assert_eq!(view.status(), BackendStatus::Loading);
        assert_eq!(
            view.settled().await,
            BackendStatus::Ok(HealthResponse::running())
        );
    }

    #[tokio::test]
    async fn refused_connection_settles_error() {
        // Bind then drop to get a local port nothing listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = Url::parse(&format!("http://{addr}")).unwrap();
        let mut view = mount(Client::new(), base);
        match view.settled().await {
            BackendStatus::Error(msg) => assert!(!msg.is_empty()),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_2xx_maps_to_http_code_message() {
        let app = Router::new().route(
            "/api/health",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = spawn_server(app).await;
        let mut view = mount(Client::new(), base);
        assert_eq!(view.settled().await, BackendStatus::Error("HTTP 503".into()));
    }

    #[tokio::test]
    async fn unparseable_body_settles_error() {
        let app = Router::new().route("/api/health", get(|| async { "not json" }));
        let base = spawn_server(app).await;
        let mut view = mount(Client::new(), base);
        match view.settled().await {
            BackendStatus::Error(msg) => assert!(!msg.is_empty()),
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unmount_discards_late_response() {
        let app = Router::new().route(
            "/api/health",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(200)).await;
                Json(HealthResponse::running())
            }),
        );
        let base = spawn_server(app).await;

        let sink = Arc::new(RecordingSink::default());
        let (mounted, handle) =
            spawn_check(Client::new(), base, Arc::clone(&sink) as Arc<dyn StatusSink>);
        // Unmount while the request is still in flight.
        drop(mounted);
        handle.await.unwrap();
        assert!(sink.0.lock().unwrap().is_empty());
    }

    #[test]
    fn status_summaries() {
        assert_eq!(BackendStatus::Loading.summary(), "Checking…");
        assert_eq!(BackendStatus::Ok(HealthResponse::running()).summary(), "OK");
        assert_eq!(BackendStatus::Error("x".into()).summary(), "Offline");
    }
}
