//! Chatus navigation shell
//!
//! The responsive frame of the Chatus web client: a fixed top app bar, an
//! overlay drawer for narrow screens and a primary side drawer, rendered with
//! Leptos SSR and driven from the browser with HTMX.
//!
//! # Architecture
//!
//! - **Viewport**: breakpoint classifier that pushes narrow/wide changes to subscribers
//! - **Navigation state**: the two drawer flags and their open/close/toggle rules
//! - **Sessions**: one classifier + state pair per mounted browser tab
//! - **UI**: Leptos components that render a session into HTML
//! - **Server**: Axum routes that mount shells and forward browser events
//!
//! # Modules
//!
//! - [`viewport`]: viewport classification and change subscriptions
//! - [`nav`]: overlay and primary drawer state
//! - [`session`]: mounted shell sessions
//! - [`ui`]: shell composer
//! - [`server`]: HTTP surface

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod nav;
pub mod server;
pub mod session;
pub mod telemetry;
pub mod ui;
pub mod viewport;

use std::sync::Arc;

use crate::config::AppConfig;
use session::ShellStore;
use ui::ShellComposer;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Mounted shells.
    pub shells: ShellStore,
    /// Renders pages and shell fragments.
    pub composer: ShellComposer,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
