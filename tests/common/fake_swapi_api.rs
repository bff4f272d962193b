//! Fake starship API server for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1, serving `GET /api/starships` with a configurable response:
//! a page document, a malformed body, or a 500. The client under test
//! accepts a configurable base URL so it can be pointed at this server.
//!
//! # Example
//!
//! ```rust,no_run
//! # tokio_test::block_on(async {
//! use common::fake_swapi_api::FakeSwapiApi;
//!
//! let api = FakeSwapiApi::start().await.unwrap();
//! api.respond_with_page(common::fixtures::PAGE_JSON).await;
//!
//! // Point your client at api.base_url()
//! let url = api.base_url();
//! # });
//! ```

use axum::{extract::State, response::IntoResponse, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// What the next request will be answered with.
#[derive(Debug, Clone)]
enum ResponseMode {
    Page(String),
    Malformed(String),
    ServerError,
}

/// State shared between the router and test code.
struct ApiState {
    mode: ResponseMode,
}

/// Handle to the running fake starship API server.
pub struct FakeSwapiApi {
    addr: SocketAddr,
    state: Arc<Mutex<ApiState>>,
}

impl FakeSwapiApi {
    /// Start the fake API server on a random port. Returns once the server
    /// is listening. Answers 500 until a response is configured.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state = Arc::new(Mutex::new(ApiState {
            mode: ResponseMode::ServerError,
        }));

        let app = Router::new()
            .route("/api/starships", get(starships))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Give the task a moment to register.
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        Ok(Self { addr, state })
    }

    /// Base URL for the starship endpoint
    /// (e.g. `http://127.0.0.1:PORT/api/starships`).
    pub fn base_url(&self) -> String {
        format!("http://{}/api/starships", self.addr)
    }

    /// Answer subsequent requests with the given page document.
    pub async fn respond_with_page(&self, json: &str) {
        self.state.lock().await.mode = ResponseMode::Page(json.to_string());
    }

    /// Answer subsequent requests 200 but with a non-JSON body.
    pub async fn respond_with_malformed(&self, body: &str) {
        self.state.lock().await.mode = ResponseMode::Malformed(body.to_string());
    }

    /// Answer subsequent requests with HTTP 500.
    pub async fn respond_with_server_error(&self) {
        self.state.lock().await.mode = ResponseMode::ServerError;
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn starships(State(state): State<Arc<Mutex<ApiState>>>) -> impl IntoResponse {
    let mode = state.lock().await.mode.clone();
    match mode {
        ResponseMode::Page(json) => (
            axum::http::StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            json,
        ),
        ResponseMode::Malformed(body) => (
            axum::http::StatusCode::OK,
            [(axum::http::header::CONTENT_TYPE, "text/html")],
            body,
        ),
        ResponseMode::ServerError => (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            [(axum::http::header::CONTENT_TYPE, "text/plain")],
            String::new(),
        ),
    }
}
