//! Numbered filler rows for drawers that have no navigation list yet.

use leptos::prelude::*;

/// Renders `count` rows labelled `1..=count`.
#[component]
pub fn PlaceholderRows(count: u32) -> impl IntoView {
    view! {
        <div class="placeholder-list">
            {(1..=count)
                .map(|n| {
                    view! {
                        <p class="placeholder-row body1" style="margin-bottom: 16px;">
                            {n.to_string()}
                        </p>
                    }
                })
                .collect_view()}
        </div>
    }
}
