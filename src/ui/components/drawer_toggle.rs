//! Primary drawer open/close control.

use leptos::prelude::*;

use super::{ChevronLeftIcon, ChevronRightIcon};
use crate::ui::{DRAW_CLOSE_VALS, DRAW_OPEN_VALS};

/// Chevron button that flips the primary drawer.
///
/// Posts `{"open": false}` when the drawer is open and `{"open": true}`
/// when it is closed.
#[component]
pub fn DrawerToggle(
    /// Current primary drawer state.
    open: bool,
    /// Primary drawer endpoint of the mounted shell.
    url: String,
    /// App bar height; the toggle row lines up with it.
    height: u32,
) -> impl IntoView {
    let (vals, label) = if open {
        (DRAW_CLOSE_VALS, "close drawer")
    } else {
        (DRAW_OPEN_VALS, "open drawer")
    };

    let row_style = format!("height: {height}px;");

    view! {
        <div class="drawer-toggle flex items-center justify-end" style=row_style>
            <button type="button" class="icon-button" aria-label=label hx-post=url hx-vals=vals>
                {if open {
                    view! { <ChevronLeftIcon /> }.into_any()
                } else {
                    view! { <ChevronRightIcon /> }.into_any()
                }}
            </button>
        </div>
    }
}
