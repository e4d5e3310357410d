//! Navigation shell state.
//!
//! Two independent drawer flags live here:
//!
//! - [`OverlayMenuState`]: the transient overlay drawer opened from the app
//!   bar's menu button on narrow layouts. Forced closed whenever the viewport
//!   becomes wide.
//! - [`PrimaryDrawState`]: the persistent side drawer. Only its mount-time
//!   value is derived from the viewport; later viewport changes leave an
//!   explicit choice alone.
//!
//! State is published through a [`tokio::sync::watch`] channel so renderers
//! can observe changes without owning the state.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::debug;

/// Overlay (temporary) drawer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverlayMenuState {
    pub is_open: bool,
}

/// Primary (persistent) drawer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PrimaryDrawState {
    pub is_open: bool,
}

/// Snapshot of both drawers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub overlay: OverlayMenuState,
    pub primary_draw: PrimaryDrawState,
}

impl NavState {
    /// Mount-time defaults for the given viewport.
    #[must_use]
    pub fn mounted(is_narrow: bool) -> Self {
        Self {
            overlay: OverlayMenuState { is_open: false },
            primary_draw: PrimaryDrawState { is_open: !is_narrow },
        }
    }
}

/// Input event that triggered an overlay toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// Pointer activation (menu button, backdrop).
    Click,
    /// Key press with the DOM `key` value.
    KeyDown { key: String },
}

impl TriggerEvent {
    /// Build from a DOM event type and optional key.
    ///
    /// Anything that is not `keydown` counts as a click.
    #[must_use]
    pub fn from_dom(event_type: &str, key: Option<String>) -> Self {
        if event_type.eq_ignore_ascii_case("keydown") {
            Self::KeyDown {
                key: key.unwrap_or_default(),
            }
        } else {
            Self::Click
        }
    }

    #[must_use]
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::KeyDown { key: key.into() }
    }

    /// Tab and Shift presses move focus through the drawer; they never toggle it.
    #[must_use]
    pub fn is_focus_navigation(&self) -> bool {
        matches!(self, Self::KeyDown { key } if key == "Tab" || key == "Shift")
    }
}

/// Owner of the drawer state.
///
/// Cloning yields another handle to the same state.
#[derive(Debug, Clone)]
pub struct NavShell {
    state: Arc<watch::Sender<NavState>>,
}

impl Default for NavShell {
    fn default() -> Self {
        Self::new()
    }
}

impl NavShell {
    /// Create a shell with both drawers closed.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(NavState::default());
        Self {
            state: Arc::new(tx),
        }
    }

    /// Create a shell and run [`NavShell::initialize`] on it.
    #[must_use]
    pub fn mounted(is_narrow: bool) -> Self {
        let shell = Self::new();
        shell.initialize(is_narrow);
        shell
    }

    /// Current state of both drawers.
    #[must_use]
    pub fn snapshot(&self) -> NavState {
        *self.state.borrow()
    }

    /// Observe state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<NavState> {
        self.state.subscribe()
    }

    /// Reset both drawers to their mount-time values.
    pub fn initialize(&self, is_narrow: bool) {
        self.apply(NavState::mounted(is_narrow));
    }

    /// React to a viewport reclassification.
    ///
    /// Closes the overlay once the layout is wide. The primary drawer is left
    /// untouched.
    pub fn on_viewport_change(&self, is_narrow: bool) {
        if is_narrow {
            return;
        }
        let closed = self.state.send_if_modified(|state| {
            if state.overlay.is_open {
                state.overlay.is_open = false;
                true
            } else {
                false
            }
        });
        if closed {
            debug!(name: "shell.overlay.forced_closed", "Overlay closed on wide viewport");
        }
    }

    pub fn open_overlay(&self) {
        self.set_overlay(true);
    }

    pub fn close_overlay(&self) {
        self.set_overlay(false);
    }

    pub fn open_primary_draw(&self) {
        self.set_primary_draw(true);
    }

    pub fn close_primary_draw(&self) {
        self.set_primary_draw(false);
    }

    /// Apply an overlay request unless it came from focus navigation.
    ///
    /// Returns `true` when the request was applied.
    pub fn toggle_overlay(&self, requested_open: bool, trigger: &TriggerEvent) -> bool {
        if trigger.is_focus_navigation() {
            return false;
        }
        self.set_overlay(requested_open);
        true
    }

    fn set_overlay(&self, open: bool) {
        let mut next = self.snapshot();
        next.overlay.is_open = open;
        self.apply(next);
    }

    fn set_primary_draw(&self, open: bool) {
        let mut next = self.snapshot();
        next.primary_draw.is_open = open;
        self.apply(next);
    }

    fn apply(&self, next: NavState) {
        let changed = self.state.send_if_modified(|state| {
            if *state == next {
                false
            } else {
                *state = next;
                true
            }
        });
        if changed {
            debug!(
                name: "shell.nav.changed",
                overlay_open = next.overlay.is_open,
                primary_draw_open = next.primary_draw.is_open,
                "Navigation state changed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_from_viewport() {
        let narrow = NavShell::mounted(true);
        assert!(!narrow.snapshot().primary_draw.is_open);
        assert!(!narrow.snapshot().overlay.is_open);

        let wide = NavShell::mounted(false);
        assert!(wide.snapshot().primary_draw.is_open);
        assert!(!wide.snapshot().overlay.is_open);
    }

    #[test]
    fn test_overlay_follows_last_request() {
        let shell = NavShell::mounted(true);

        shell.open_overlay();
        shell.close_overlay();
        shell.open_overlay();
        assert!(shell.snapshot().overlay.is_open);

        shell.close_overlay();
        let once = shell.snapshot();
        shell.close_overlay();
        assert_eq!(shell.snapshot(), once);
    }

    #[test]
    fn test_focus_navigation_is_suppressed() {
        let shell = NavShell::mounted(true);

        assert!(!shell.toggle_overlay(true, &TriggerEvent::key_down("Tab")));
        assert!(!shell.toggle_overlay(true, &TriggerEvent::key_down("Shift")));
        assert!(!shell.snapshot().overlay.is_open);

        assert!(shell.toggle_overlay(true, &TriggerEvent::Click));
        assert!(shell.snapshot().overlay.is_open);

        assert!(!shell.toggle_overlay(false, &TriggerEvent::key_down("Tab")));
        assert!(shell.snapshot().overlay.is_open);

        assert!(shell.toggle_overlay(false, &TriggerEvent::key_down("Escape")));
        assert!(!shell.snapshot().overlay.is_open);
    }

    #[test]
    fn test_trigger_from_dom() {
        assert_eq!(TriggerEvent::from_dom("click", None), TriggerEvent::Click);
        assert_eq!(
            TriggerEvent::from_dom("keydown", Some("Tab".into())),
            TriggerEvent::key_down("Tab")
        );
        assert!(!TriggerEvent::from_dom("keydown", None).is_focus_navigation());
    }

    #[test]
    fn test_wide_viewport_closes_overlay_only() {
        let shell = NavShell::mounted(true);
        shell.open_overlay();

        shell.on_viewport_change(true);
        assert!(shell.snapshot().overlay.is_open);

        shell.on_viewport_change(false);
        let state = shell.snapshot();
        assert!(!state.overlay.is_open);
        assert!(!state.primary_draw.is_open);
    }

    #[test]
    fn test_viewport_change_keeps_primary_draw_choice() {
        let shell = NavShell::mounted(false);
        shell.close_primary_draw();

        shell.on_viewport_change(true);
        shell.on_viewport_change(false);
        assert!(!shell.snapshot().primary_draw.is_open);

        shell.open_primary_draw();
        shell.on_viewport_change(true);
        assert!(shell.snapshot().primary_draw.is_open);
    }

    #[test]
    fn test_subscribers_see_only_real_changes() {
        let shell = NavShell::mounted(false);
        let mut rx = shell.subscribe();

        shell.close_overlay();
        assert!(!rx.has_changed().unwrap());

        shell.open_overlay();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().overlay.is_open);

        shell.toggle_overlay(false, &TriggerEvent::key_down("Shift"));
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_handles_share_state() {
        let shell = NavShell::mounted(true);
        let other = shell.clone();
        other.open_primary_draw();
        assert!(shell.snapshot().primary_draw.is_open);
    }
}
