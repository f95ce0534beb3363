//! In-process stand-in for the Discord API and CDN.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use futures_util::stream::{self, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub const TOKEN: &str = "test-token";
pub const ASSET_BYTES: &[u8] = b"\x89PNG fake image body";

/// Canned guild data plus request counters.
#[derive(Default)]
pub struct FakeDiscord {
    pub guilds: Value,
    pub details: Vec<(String, Value)>,
    pub missing_assets: Vec<String>,
    pub empty_assets: Vec<String>,
    pub broken_assets: Vec<String>,
    pub asset_delay: Option<Duration>,
    asset_hits: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeDiscord {
    pub fn new(guilds: Value) -> Self {
        Self {
            guilds,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_detail(mut self, guild_id: &str, detail: Value) -> Self {
        self.details.push((guild_id.to_string(), detail));
        self
    }

    #[must_use]
    pub fn with_missing_asset(mut self, file: &str) -> Self {
        self.missing_assets.push(file.to_string());
        self
    }

    #[must_use]
    pub fn with_empty_asset(mut self, file: &str) -> Self {
        self.empty_assets.push(file.to_string());
        self
    }

    #[must_use]
    pub fn with_broken_asset(mut self, file: &str) -> Self {
        self.broken_assets.push(file.to_string());
        self
    }

    #[must_use]
    pub fn with_asset_delay(mut self, delay: Duration) -> Self {
        self.asset_delay = Some(delay);
        self
    }

    pub fn asset_hits(&self) -> usize {
        self.asset_hits.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    fn enter(&self) {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
    }

    fn leave(&self) {
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        == Some(TOKEN)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        axum::Json(json!({ "message": "401: Unauthorized", "code": 0 })),
    )
        .into_response()
}

async fn list_guilds(State(fake): State<Arc<FakeDiscord>>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    axum::Json(fake.guilds.clone()).into_response()
}

async fn guild_detail(
    State(fake): State<Arc<FakeDiscord>>,
    Path(guild_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    fake.enter();
    let detail = fake
        .details
        .iter()
        .find(|(id, _)| *id == guild_id)
        .map(|(_, detail)| detail.clone());
    fake.leave();

    match detail {
        Some(detail) => axum::Json(detail).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "message": "Unknown Guild", "code": 10004 })),
        )
            .into_response(),
    }
}

async fn asset(State(fake): State<Arc<FakeDiscord>>, Path(file): Path<String>) -> Response {
    fake.asset_hits.fetch_add(1, Ordering::SeqCst);
    fake.enter();
    if let Some(delay) = fake.asset_delay {
        tokio::time::sleep(delay).await;
    }
    fake.leave();

    if fake.missing_assets.contains(&file) {
        return StatusCode::NOT_FOUND.into_response();
    }
    if fake.broken_assets.contains(&file) {
        return broken_body();
    }
    if fake.empty_assets.contains(&file) {
        return (StatusCode::OK, Vec::<u8>::new()).into_response();
    }
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/png")],
        ASSET_BYTES.to_vec(),
    )
        .into_response()
}

/// Sends the first half of the asset, then aborts the connection.
fn broken_body() -> Response {
    let head = stream::once(async { Ok::<_, std::io::Error>(ASSET_BYTES[..8].to_vec()) });
    let failure = stream::once(async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        Err(std::io::Error::other("connection dropped"))
    });
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "image/png")],
        Body::from_stream(head.chain(failure)),
    )
        .into_response()
}

/// Running fake server with its base URLs.
pub struct FakeServer {
    pub addr: SocketAddr,
    pub state: Arc<FakeDiscord>,
    _handle: tokio::task::JoinHandle<()>,
}

impl FakeServer {
    pub fn api_base(&self) -> String {
        format!("http://{}/api/v9", self.addr)
    }

    pub fn cdn_base(&self) -> String {
        format!("http://{}/cdn", self.addr)
    }
}

pub async fn start_server(fake: FakeDiscord) -> FakeServer {
    let state = Arc::new(fake);
    let app = Router::new()
        .route("/api/v9/users/@me/guilds", get(list_guilds))
        .route("/api/v9/guilds/{guild_id}", get(guild_detail))
        .route("/cdn/emojis/{file}", get(asset))
        .route("/cdn/stickers/{file}", get(asset))
        .with_state(Arc::clone(&state));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeServer {
        addr,
        state,
        _handle: handle,
    }
}
