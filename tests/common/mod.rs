#![allow(dead_code)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use click_logger::ClickLogger;
use click_logger::infrastructure::transport::{HttpClickTransport, LOG_CLICK_PATH};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;

/// A request received by the local logging endpoint.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub csrf_token: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct EndpointState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    status: StatusCode,
    body: &'static str,
}

/// Local stand-in for the server-side logging endpoint.
pub struct LogEndpoint {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl LogEndpoint {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn logger(&self) -> ClickLogger {
        let endpoint = Url::parse(&self.base_url)
            .unwrap()
            .join(LOG_CLICK_PATH)
            .unwrap();
        ClickLogger::new(Arc::new(HttpClickTransport::with_client(
            local_client(),
            endpoint,
        )))
    }
}

/// HTTP client that ignores any proxy configured in the environment.
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

async fn record_click(
    State(state): State<EndpointState>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    let header_value = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        csrf_token: header_value("x-csrftoken"),
        content_type: header_value(header::CONTENT_TYPE.as_str()),
        body,
    });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

/// Starts a logging endpoint on an ephemeral local port.
pub async fn spawn_log_endpoint(status: StatusCode, body: &'static str) -> LogEndpoint {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = EndpointState {
        requests: requests.clone(),
        status,
        body,
    };

    let app = Router::new()
        .route(LOG_CLICK_PATH, post(record_click))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    LogEndpoint {
        base_url: format!("http://{addr}"),
        requests,
    }
}

/// `io::Write` sink collecting formatted log lines.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Installs a thread-local subscriber writing into the returned capture.
///
/// Only effective on a current-thread runtime, where spawned tasks run on
/// the test thread.
pub fn capture_logs() -> (LogCapture, tracing::subscriber::DefaultGuard) {
    let capture = LogCapture::default();
    let writer = capture.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || writer.clone())
        .finish();

    let guard = tracing::subscriber::set_default(subscriber);
    (capture, guard)
}
