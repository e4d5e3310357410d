//! SVG icon components.
//!
//! Stand-ins for the toolkit's icon set, rendered inline.

use leptos::prelude::*;

/// Common icon size class.
const ICON_SIZE: &str = "icon h-6 w-6";

/// Menu/hamburger icon shown in the app bar on narrow layouts.
#[component]
pub fn MenuIcon(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            class=classes
            data-icon="menu"
        >
            <line x1="3" y1="12" x2="21" y2="12" />
            <line x1="3" y1="6" x2="21" y2="6" />
            <line x1="3" y1="18" x2="21" y2="18" />
        </svg>
    }
}

/// Points left; collapses the primary drawer.
#[component]
pub fn ChevronLeftIcon(
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
            data-icon="chevron-left"
        >
            <polyline points="15 18 9 12 15 6" />
        </svg>
    }
}

/// Points right; expands the primary drawer.
#[component]
pub fn ChevronRightIcon(
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{ICON_SIZE} {class}");

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class=classes
            data-icon="chevron-right"
        >
            <polyline points="9 18 15 12 9 6" />
        </svg>
    }
}
