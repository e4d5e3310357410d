//! Home page: the full document and the mounted shell fragment.

use leptos::prelude::*;

use super::{PrimaryAppBar, PrimaryDraw};
use crate::config::ThemeConfig;
use crate::session::ShellSnapshot;
use crate::ui::{
    HTMX_SRC, JSON_ENC_SRC, MOUNT_PATH, STYLESHEET_HREF, ShellRoutes, VIEWPORT_VALS,
};

/// Page document.
///
/// The body holds a mount point that posts the real window width once
/// HTMX loads, and is replaced by [`Home`].
#[component]
pub fn HomeDocument(title: &'static str) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>

                <script src=HTMX_SRC></script>
                <script src=JSON_ENC_SRC></script>
                <link rel="stylesheet" href=STYLESHEET_HREF />
            </head>
            <body class="shell-body">
                <div
                    id="shell-root"
                    hx-post=MOUNT_PATH
                    hx-trigger="load"
                    hx-vals=VIEWPORT_VALS
                    hx-swap="outerHTML"
                    hx-ext="json-enc"
                ></div>
            </body>
        </html>
    }
}

/// Mounted shell: app bar and primary drawer side by side.
///
/// Every request from inside targets this element and swaps it whole with
/// the re-rendered shell. Window resizes report the new width.
#[component]
pub fn Home(snapshot: ShellSnapshot, theme: ThemeConfig, rows: u32) -> impl IntoView {
    let routes = ShellRoutes::for_shell(&snapshot.id);
    let narrow = snapshot.is_narrow();
    let main_style = format!("margin-top: {}px;", theme.bar_height);

    view! {
        <div
            id="shell-root"
            class="shell flex"
            data-shell-id=snapshot.id.clone()
            data-viewport=snapshot.viewport.as_str()
            hx-post=routes.viewport.clone()
            hx-trigger="resize from:window"
            hx-vals=VIEWPORT_VALS
            hx-target="this"
            hx-swap="outerHTML"
            hx-ext="json-enc"
        >
            <PrimaryAppBar
                narrow=narrow
                overlay_open=snapshot.nav.overlay.is_open
                overlay_url=routes.overlay.clone()
                theme=theme
                rows=rows
            />
            <PrimaryDraw
                narrow=narrow
                open=snapshot.nav.primary_draw.is_open
                url=routes.primary_draw.clone()
                theme=theme
                rows=rows
            />
            <main id="shell-content" class="shell-main" style=main_style></main>
            <div hx-delete=routes.shell hx-trigger="pagehide from:window" hx-swap="none"></div>
        </div>
    }
}
