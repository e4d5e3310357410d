//! Shell composer.
//!
//! Leptos SSR components for the home page: a fixed top bar, an overlay
//! drawer for narrow layouts and the primary side drawer. The browser drives
//! them with HTMX; every interaction posts to the shell API and swaps in the
//! freshly rendered shell.
//!
//! # Structure
//!
//! - [`shell`]: app bar, primary drawer and page layout
//! - [`components`]: drawer toggle, placeholder rows and icons

pub mod components;
pub mod shell;

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::session::ShellSnapshot;
use shell::{Home, HomeDocument};

/// Endpoint that mounts a shell.
pub const MOUNT_PATH: &str = "/api/shell";

/// Browser page title.
const DOCUMENT_TITLE: &str = "Chatus";

/// HTMX core, pinned.
pub const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";
/// JSON body encoding for HTMX requests, served from `static/vendor`.
pub const JSON_ENC_SRC: &str = "/static/vendor/htmx-json-enc.js";
pub const STYLESHEET_HREF: &str = "/static/app.css";

/// App bar stacking order: one above the drawers.
pub(crate) const APP_BAR_Z_INDEX: u32 = 1201;

pub(crate) const VIEWPORT_VALS: &str = "js:{width: window.innerWidth}";
pub(crate) const OPEN_ON_CLICK_VALS: &str = r#"{"open": true, "event_type": "click"}"#;
pub(crate) const CLOSE_ON_CLICK_VALS: &str = r#"{"open": false, "event_type": "click"}"#;
pub(crate) const CLOSE_ON_KEY_VALS: &str =
    "js:{open: false, event_type: 'keydown', key: event.key}";
pub(crate) const OVERLAY_KEY_TRIGGER: &str =
    "keydown[key=='Escape'||key=='Tab'||key=='Shift'] from:body";
pub(crate) const DRAW_OPEN_VALS: &str = r#"{"open": true}"#;
pub(crate) const DRAW_CLOSE_VALS: &str = r#"{"open": false}"#;

/// URLs of one mounted shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellRoutes {
    pub shell: String,
    pub viewport: String,
    pub overlay: String,
    pub primary_draw: String,
}

impl ShellRoutes {
    #[must_use]
    pub fn for_shell(id: &str) -> Self {
        let shell = format!("{MOUNT_PATH}/{id}");
        Self {
            viewport: format!("{shell}/viewport"),
            overlay: format!("{shell}/overlay"),
            primary_draw: format!("{shell}/primary-draw"),
            shell,
        }
    }
}

/// Renders the home page and shell fragments.
///
/// Layout constants are fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct ShellComposer {
    theme: ThemeConfig,
    placeholder_rows: u32,
}

impl ShellComposer {
    #[must_use]
    pub fn new(theme: ThemeConfig, placeholder_rows: u32) -> Self {
        Self {
            theme,
            placeholder_rows,
        }
    }

    #[must_use]
    pub fn theme(&self) -> ThemeConfig {
        self.theme
    }

    /// Full HTML document for `GET /`.
    #[must_use]
    pub fn render_document(&self) -> String {
        let body = view! { <HomeDocument title=DOCUMENT_TITLE /> }.to_html();
        format!("<!DOCTYPE html>{body}")
    }

    /// Shell fragment for a mounted session.
    #[must_use]
    pub fn render_shell(&self, snapshot: &ShellSnapshot) -> String {
        view! {
            <Home snapshot=snapshot.clone() theme=self.theme rows=self.placeholder_rows />
        }
        .to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{NavState, OverlayMenuState, PrimaryDrawState};
    use crate::viewport::ViewportClass;

    const THEME: ThemeConfig = ThemeConfig {
        bar_height: 50,
        drawer_width: 240,
        drawer_closed_width: 70,
    };

    fn snapshot(viewport: ViewportClass, overlay: bool, primary: bool) -> ShellSnapshot {
        ShellSnapshot {
            id: "shell-1".to_string(),
            viewport,
            width: if viewport.is_narrow() { 375 } else { 1280 },
            nav: NavState {
                overlay: OverlayMenuState { is_open: overlay },
                primary_draw: PrimaryDrawState { is_open: primary },
            },
        }
    }

    /// Attribute value as the renderer escapes it.
    fn attr(value: &str) -> String {
        value.replace('&', "&amp;").replace('"', "&quot;")
    }

    /// Opening tag of the first element carrying `marker`.
    fn opening_tag<'a>(html: &'a str, marker: &str) -> &'a str {
        let at = html.find(marker).expect("marker present");
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn test_routes() {
        let routes = ShellRoutes::for_shell("abc");
        assert_eq!(routes.shell, "/api/shell/abc");
        assert_eq!(routes.viewport, "/api/shell/abc/viewport");
        assert_eq!(routes.overlay, "/api/shell/abc/overlay");
        assert_eq!(routes.primary_draw, "/api/shell/abc/primary-draw");
    }

    #[test]
    fn test_document_mounts_on_load() {
        let html = ShellComposer::new(THEME, 100).render_document();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("id=\"shell-root\""));
        assert!(html.contains("hx-post=\"/api/shell\""));
        assert!(html.contains("hx-trigger=\"load\""));
    }

    #[test]
    fn test_wide_shell_layout() {
        let composer = ShellComposer::new(THEME, 100);
        let html = composer.render_shell(&snapshot(ViewportClass::Wide, false, true));

        assert!(html.contains("data-shell-id=\"shell-1\""));
        assert!(html.contains("data-variant=\"permanent\""));
        assert!(html.contains("width: 240px;"));
        assert!(html.contains("margin-top: 50px;"));
        assert!(html.contains("calc(100vh - 50px)"));
        assert!(html.contains("aria-label=\"close drawer\""));
        assert!(html.contains("CHATUS"));
        assert!(!html.contains("aria-label=\"open drawer\""));
        assert!(!html.contains("overlay-drawer"));
    }

    #[test]
    fn test_wide_shell_collapsed_draw() {
        let composer = ShellComposer::new(THEME, 100);
        let html = composer.render_shell(&snapshot(ViewportClass::Wide, false, false));

        assert!(html.contains("width: 70px;"));
        assert!(html.contains("width: 100%;"));
        assert!(html.contains("data-icon=\"chevron-right\""));
    }

    #[test]
    fn test_narrow_shell_layout() {
        let composer = ShellComposer::new(THEME, 100);
        let html = composer.render_shell(&snapshot(ViewportClass::Narrow, false, false));

        assert!(html.contains("data-variant=\"temporary\""));
        assert!(html.contains("data-icon=\"menu\""));
        assert!(html.contains("hx-post=\"/api/shell/shell-1/overlay\""));
        assert!(!html.contains("overlay-drawer"));
        assert!(!html.contains("drawer-backdrop"));
        assert!(opening_tag(&html, "class=\"primary-draw\"").contains("hidden"));
    }

    #[test]
    fn test_narrow_primary_draw_open_shows_backdrop() {
        let composer = ShellComposer::new(THEME, 100);
        let html = composer.render_shell(&snapshot(ViewportClass::Narrow, false, true));

        assert!(!opening_tag(&html, "class=\"primary-draw\"").contains("hidden"));
        let backdrop = opening_tag(&html, "class=\"drawer-backdrop\"");
        assert!(backdrop.contains("hx-post=\"/api/shell/shell-1/primary-draw\""));
        assert!(backdrop.contains(&attr(DRAW_CLOSE_VALS)));
    }

    #[test]
    fn test_wide_shell_ignores_open_overlay() {
        let composer = ShellComposer::new(THEME, 100);
        let html = composer.render_shell(&snapshot(ViewportClass::Wide, true, true));

        assert!(!html.contains("overlay-drawer"));
        assert!(!html.contains("drawer-backdrop"));
        assert_eq!(html.matches("placeholder-row").count(), 100);
    }

    #[test]
    fn test_narrow_shell_with_overlay_open() {
        let composer = ShellComposer::new(THEME, 100);
        let html = composer.render_shell(&snapshot(ViewportClass::Narrow, true, false));

        assert!(html.contains("overlay-drawer"));
        assert!(html.contains("data-anchor=\"left\""));
        // Overlay rows plus primary drawer rows.
        assert_eq!(html.matches("placeholder-row").count(), 200);
    }

    #[test]
    fn test_overlay_closes_on_keys_and_backdrop() {
        let composer = ShellComposer::new(THEME, 100);
        let html = composer.render_shell(&snapshot(ViewportClass::Narrow, true, false));

        let overlay = opening_tag(&html, "class=\"overlay-drawer\"");
        assert!(overlay.contains("hx-post=\"/api/shell/shell-1/overlay\""));
        assert!(overlay.contains(&format!("hx-trigger=\"{}\"", attr(OVERLAY_KEY_TRIGGER))));
        assert!(overlay.contains(&attr(CLOSE_ON_KEY_VALS)));
        for key in ["Escape", "Tab", "Shift"] {
            assert!(OVERLAY_KEY_TRIGGER.contains(&format!("key=='{key}'")));
        }

        let backdrop = opening_tag(&html, "class=\"drawer-backdrop\"");
        assert!(backdrop.contains("hx-post=\"/api/shell/shell-1/overlay\""));
        assert!(backdrop.contains(&attr(CLOSE_ON_CLICK_VALS)));
    }

    #[test]
    fn test_layout_follows_theme() {
        let theme = ThemeConfig {
            bar_height: 64,
            drawer_width: 300,
            drawer_closed_width: 56,
        };
        let html =
            ShellComposer::new(theme, 1).render_shell(&snapshot(ViewportClass::Wide, false, true));

        assert!(opening_tag(&html, "class=\"drawer-toggle").contains("height: 64px;"));
        assert!(html.contains("calc(100vh - 64px)"));
        assert!(html.contains("width: 300px;"));
        assert!(!html.contains("50px"));
        assert!(
            opening_tag(&html, "class=\"app-bar\"")
                .contains(&format!("z-index: {APP_BAR_Z_INDEX};"))
        );
    }

    #[test]
    fn test_placeholder_row_count_follows_config() {
        let composer = ShellComposer::new(THEME, 3);
        let html = composer.render_shell(&snapshot(ViewportClass::Wide, false, true));

        assert_eq!(html.matches("placeholder-row").count(), 3);
    }
}
