use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::{Deserialize, Deserializer, de};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::error::{Result, ShellError};
use crate::nav::TriggerEvent;
use crate::session::{ShellSession, ShellSnapshot, ShellStore};
use crate::ui::{MOUNT_PATH, ShellComposer};

impl AppState {
    /// Build the shared state from configuration.
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            shells: ShellStore::new(config.breakpoints.small),
            composer: ShellComposer::new(config.theme, config.shell.placeholder_rows),
            config,
        }
    }
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::new(Arc::clone(&config));

    let _sweeper = spawn_session_sweeper(
        state.shells.clone(),
        Duration::from_secs(config.shell.session_timeout_secs),
        Duration::from_secs(config.shell.cleanup_interval_secs),
    );

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(ShellError::from)?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app).await.map_err(ShellError::from)?;
    Ok(())
}

/// Build the router: home page, shell API and static assets.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.server.static_dir);

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route(MOUNT_PATH, post(mount_handler))
        .route(
            "/api/shell/{id}",
            get(snapshot_handler).delete(unmount_handler),
        )
        .route("/api/shell/{id}/viewport", post(viewport_handler))
        .route("/api/shell/{id}/overlay", post(overlay_handler))
        .route("/api/shell/{id}/primary-draw", post(primary_draw_handler))
        .nest_service("/static", static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Periodically unmount shells whose tab went away without saying so.
pub fn spawn_session_sweeper(
    shells: ShellStore,
    timeout: Duration,
    every: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // First tick completes immediately.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = shells.cleanup_expired_with_timeout(timeout);
            if removed > 0 {
                info!(
                    name: "shell.sessions.swept",
                    removed,
                    remaining = shells.len(),
                    "Idle shells unmounted"
                );
            }
        }
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Request bodies
// ─────────────────────────────────────────────────────────────────────────────

/// Body of mount and viewport requests.
#[derive(Debug, Deserialize)]
pub struct ViewportRequest {
    /// `window.innerWidth` in CSS pixels.
    #[serde(deserialize_with = "lenient_width")]
    pub width: u32,
}

/// Body of overlay requests.
#[derive(Debug, Deserialize)]
pub struct OverlayRequest {
    #[serde(deserialize_with = "lenient_bool")]
    pub open: bool,
    /// DOM event type that caused the request.
    #[serde(default = "default_event_type")]
    pub event_type: String,
    /// DOM `key` for keyboard events.
    #[serde(default)]
    pub key: Option<String>,
}

/// Body of primary drawer requests.
#[derive(Debug, Deserialize)]
pub struct PrimaryDrawRequest {
    #[serde(deserialize_with = "lenient_bool")]
    pub open: bool,
}

fn default_event_type() -> String {
    "click".to_string()
}

// HTMX sends form values as strings even through json-enc.
#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Int(u64),
    Str(String),
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(value) => Ok(value),
        BoolOrString::Str(raw) => raw.trim().parse().map_err(de::Error::custom),
    }
}

fn lenient_width<'de, D>(deserializer: D) -> std::result::Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: u64 = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Int(value) => value,
        NumberOrString::Str(raw) => raw.trim().parse().map_err(de::Error::custom)?,
    };
    Ok(u32::try_from(value).unwrap_or(u32::MAX))
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET / - Home document.
async fn home_handler(State(state): State<AppState>) -> Html<String> {
    Html(state.composer.render_document())
}

/// GET /health - Liveness probe.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// POST /api/shell - Mount a shell at the reported width.
async fn mount_handler(
    State(state): State<AppState>,
    Json(req): Json<ViewportRequest>,
) -> impl IntoResponse {
    let session = state.shells.mount(req.width);
    let snapshot = session.snapshot();
    let id = snapshot.id.clone();
    (
        StatusCode::CREATED,
        [("x-shell-id", id)],
        Html(state.composer.render_shell(&snapshot)),
    )
}

/// GET /api/shell/:id - Current shell state.
async fn snapshot_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ShellSnapshot>> {
    let session = find_shell(&state, &id)?;
    Ok(Json(session.snapshot()))
}

/// DELETE /api/shell/:id - Unmount a shell.
async fn unmount_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state
        .shells
        .unmount(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ShellError::SessionNotFound(id))
}

/// POST /api/shell/:id/viewport - Window resize.
async fn viewport_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<ViewportRequest>,
) -> Result<Html<String>> {
    let session = find_shell(&state, &id)?;
    let snapshot = session.resize(req.width);
    Ok(Html(state.composer.render_shell(&snapshot)))
}

/// POST /api/shell/:id/overlay - Open or close the overlay drawer.
async fn overlay_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<OverlayRequest>,
) -> Result<Html<String>> {
    let session = find_shell(&state, &id)?;
    let trigger = TriggerEvent::from_dom(&req.event_type, req.key);
    let snapshot = session.toggle_overlay(req.open, &trigger);
    Ok(Html(state.composer.render_shell(&snapshot)))
}

/// POST /api/shell/:id/primary-draw - Open or close the primary drawer.
async fn primary_draw_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<PrimaryDrawRequest>,
) -> Result<Html<String>> {
    let session = find_shell(&state, &id)?;
    let snapshot = session.set_primary_draw(req.open);
    Ok(Html(state.composer.render_shell(&snapshot)))
}

fn find_shell(state: &AppState, id: &str) -> Result<ShellSession> {
    state
        .shells
        .get(id)
        .ok_or_else(|| ShellError::SessionNotFound(id.to_string()))
}
