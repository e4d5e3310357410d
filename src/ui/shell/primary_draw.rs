//! Primary side drawer.

use leptos::prelude::*;

use crate::config::ThemeConfig;
use crate::ui::components::{DrawerToggle, PlaceholderRows};
use crate::ui::DRAW_CLOSE_VALS;

/// Drawer mode for the current viewport.
#[must_use]
pub fn draw_variant(narrow: bool) -> &'static str {
    if narrow { "temporary" } else { "permanent" }
}

/// Side drawer below the app bar.
///
/// Permanent on wide layouts, where closing shrinks it to the collapsed
/// width. Temporary on narrow layouts, where it only shows while open and
/// a backdrop click closes it.
#[component]
pub fn PrimaryDraw(
    /// Whether the viewport is narrow.
    narrow: bool,
    /// Primary drawer state.
    open: bool,
    /// Primary drawer endpoint of the mounted shell.
    url: String,
    theme: ThemeConfig,
    rows: u32,
) -> impl IntoView {
    let variant = draw_variant(narrow);
    let width = if open {
        theme.drawer_width
    } else {
        theme.drawer_closed_width
    };
    let bar = theme.bar_height;
    let paper_style =
        format!("margin-top: {bar}px; height: calc(100vh - {bar}px); width: {width}px;");
    let toggle_style = format!(
        "position: absolute; top: 0; right: 0; padding: 0; width: {};",
        if open { "auto" } else { "100%" }
    );
    let hidden = narrow && !open;

    view! {
        <aside
            class="primary-draw"
            data-variant=variant
            data-open=open.to_string()
            hidden=hidden
        >
            {(narrow && open)
                .then(|| {
                    view! {
                        <div
                            class="drawer-backdrop"
                            aria-hidden="true"
                            hx-post=url.clone()
                            hx-vals=DRAW_CLOSE_VALS
                        ></div>
                    }
                })}
            <div class="drawer-paper" style=paper_style>
                <div class="drawer-body" style=toggle_style>
                    <DrawerToggle open=open url=url.clone() height=bar />
                    <PlaceholderRows count=rows />
                </div>
            </div>
        </aside>
    }
}
