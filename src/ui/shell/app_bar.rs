//! Top app bar with the overlay drawer.

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::ui::components::{MenuIcon, PlaceholderRows};
use crate::ui::{
    APP_BAR_Z_INDEX, CLOSE_ON_CLICK_VALS, CLOSE_ON_KEY_VALS, OPEN_ON_CLICK_VALS,
    OVERLAY_KEY_TRIGGER,
};

/// Fixed top bar.
///
/// On narrow layouts it carries the menu button that opens the overlay
/// drawer. The bar sits above the primary drawer.
#[component]
pub fn PrimaryAppBar(
    /// Whether the viewport is narrow.
    narrow: bool,
    /// Overlay drawer state.
    overlay_open: bool,
    /// Overlay endpoint of the mounted shell.
    overlay_url: String,
    theme: ThemeConfig,
    /// Placeholder rows inside the overlay drawer.
    rows: u32,
) -> impl IntoView {
    let height = theme.bar_height;
    let toolbar_style = format!("height: {height}px; min-height: {height}px;");
    let bar_style =
        format!("z-index: {APP_BAR_Z_INDEX}; border-bottom: 1px solid var(--divider);");

    view! {
        <header class="app-bar" style=bar_style>
            <div class="toolbar toolbar-dense" style=toolbar_style>
                {narrow
                    .then(|| {
                        view! {
                            <div class="menu-slot">
                                <button
                                    type="button"
                                    class="icon-button edge-start"
                                    aria-label="open drawer"
                                    hx-post=overlay_url.clone()
                                    hx-vals=OPEN_ON_CLICK_VALS
                                >
                                    <MenuIcon />
                                </button>
                            </div>
                        }
                    })}
                // Overlay only exists on narrow layouts.
                {(narrow && overlay_open)
                    .then(|| {
                        view! {
                            <OverlayDrawer url=overlay_url.clone() width=theme.drawer_width rows=rows />
                        }
                    })}
                <a href="/" class="brand-link">
                    <div class="brand h6 no-wrap" style="font-weight: 700; letter-spacing: -0.5px;">
                        "CHATUS"
                    </div>
                </a>
            </div>
        </header>
    }
}

/// Left-anchored temporary drawer.
///
/// Dismissed by a backdrop click or a key press; Tab and Shift presses are
/// sent too and ignored by the shell.
#[component]
fn OverlayDrawer(url: String, width: u32, rows: u32) -> impl IntoView {
    let paper_style = format!("width: {width}px;");
    let backdrop_url = url.clone();

    view! {
        <div
            class="overlay-drawer"
            role="presentation"
            data-anchor="left"
            hx-post=url.clone()
            hx-trigger=OVERLAY_KEY_TRIGGER
            hx-vals=CLOSE_ON_KEY_VALS
        >
            <div class="drawer-backdrop" aria-hidden="true" hx-post=backdrop_url hx-vals=CLOSE_ON_CLICK_VALS></div>
            <nav class="drawer-paper drawer-anchor-left" style=paper_style>
                <PlaceholderRows count=rows />
            </nav>
        </div>
    }
}
