//! Mounted shell sessions.
//!
//! Each browser tab that mounts the shell gets a [`ShellSession`]: its own
//! [`ViewportClassifier`] wired to its own [`NavShell`]. Sessions are
//! identified by UUID and live until unmounted or swept for inactivity.
//!
//! # Example
//!
//! ```rust
//! use chatus_shell::session::ShellStore;
//!
//! let store = ShellStore::new(600);
//! let shell = store.mount(420);
//!
//! assert!(shell.snapshot().is_narrow());
//! assert!(!shell.snapshot().nav.primary_draw.is_open);
//!
//! shell.resize(1280);
//! assert_eq!(store.len(), 1);
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::nav::{NavShell, NavState, TriggerEvent};
use crate::viewport::{ViewportClass, ViewportClassifier};

/// Default idle timeout (30 minutes).
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Point-in-time view of a mounted shell, used for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShellSnapshot {
    pub id: String,
    pub viewport: ViewportClass,
    pub width: u32,
    pub nav: NavState,
}

impl ShellSnapshot {
    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.viewport.is_narrow()
    }
}

/// A single mounted shell.
#[derive(Debug, Clone)]
pub struct ShellSession {
    inner: Arc<ShellSessionInner>,
}

#[derive(Debug)]
struct ShellSessionInner {
    id: String,
    /// Held for the whole of every event so one shell sees one event at a time.
    classifier: Mutex<ViewportClassifier>,
    nav: NavShell,
    created_at: DateTime<Utc>,
    last_activity: RwLock<DateTime<Utc>>,
}

impl ShellSession {
    /// Mount a shell at the given width.
    fn mount(id: String, breakpoint: u32, width: u32) -> Self {
        let mut classifier = ViewportClassifier::new(breakpoint, width);
        let nav = NavShell::mounted(classifier.is_narrow());

        let listener = nav.clone();
        classifier.subscribe(move |class| listener.on_viewport_change(class.is_narrow()));

        let now = Utc::now();
        Self {
            inner: Arc::new(ShellSessionInner {
                id,
                classifier: Mutex::new(classifier),
                nav,
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Handle to the drawer state.
    #[must_use]
    pub fn nav(&self) -> &NavShell {
        &self.inner.nav
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.inner.created_at
    }

    #[must_use]
    pub fn snapshot(&self) -> ShellSnapshot {
        let classifier = self.lock_events();
        self.snapshot_locked(&classifier)
    }

    /// Feed a new viewport width. Returns the snapshot after listeners ran.
    pub fn resize(&self, width: u32) -> ShellSnapshot {
        let mut classifier = self.lock_events();
        let before = classifier.current();
        let after = classifier.resize(width);
        if before != after {
            info!(
                name: "shell.viewport.changed",
                shell_id = %self.inner.id,
                width,
                viewport = %after,
                "Viewport reclassified"
            );
        }
        self.touch();
        self.snapshot_locked(&classifier)
    }

    /// Overlay request from the app bar (menu button, backdrop, keys).
    pub fn toggle_overlay(&self, requested_open: bool, trigger: &TriggerEvent) -> ShellSnapshot {
        let classifier = self.lock_events();
        self.inner.nav.toggle_overlay(requested_open, trigger);
        self.touch();
        self.snapshot_locked(&classifier)
    }

    /// Primary drawer request from the drawer toggle.
    pub fn set_primary_draw(&self, open: bool) -> ShellSnapshot {
        let classifier = self.lock_events();
        if open {
            self.inner.nav.open_primary_draw();
        } else {
            self.inner.nav.close_primary_draw();
        }
        self.touch();
        self.snapshot_locked(&classifier)
    }

    /// Check if the session has been idle longer than `timeout`.
    #[must_use]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self
            .inner
            .last_activity
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match (Utc::now() - last).to_std() {
            Ok(idle) => idle > timeout,
            // Clock skew: last activity is in the future.
            Err(_) => false,
        }
    }

    fn lock_events(&self) -> MutexGuard<'_, ViewportClassifier> {
        self.inner
            .classifier
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot_locked(&self, classifier: &ViewportClassifier) -> ShellSnapshot {
        ShellSnapshot {
            id: self.inner.id.clone(),
            viewport: classifier.current(),
            width: classifier.width(),
            nav: self.inner.nav.snapshot(),
        }
    }

    fn touch(&self) {
        let mut guard = self
            .inner
            .last_activity
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Utc::now();
    }
}

/// Thread-safe store of mounted shells.
#[derive(Debug, Clone)]
pub struct ShellStore {
    inner: Arc<ShellStoreInner>,
}

#[derive(Debug)]
struct ShellStoreInner {
    breakpoint: u32,
    shells: RwLock<HashMap<String, ShellSession>>,
}

impl ShellStore {
    /// Create a store whose shells classify against `breakpoint`.
    #[must_use]
    pub fn new(breakpoint: u32) -> Self {
        Self {
            inner: Arc::new(ShellStoreInner {
                breakpoint,
                shells: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Mount a new shell at the given viewport width.
    #[must_use]
    pub fn mount(&self, width: u32) -> ShellSession {
        let id = Uuid::new_v4().to_string();
        let session = ShellSession::mount(id.clone(), self.inner.breakpoint, width);
        self.write().insert(id, session.clone());

        info!(
            name: "shell.mounted",
            shell_id = %session.id(),
            width,
            "Shell mounted"
        );
        session
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<ShellSession> {
        self.read().get(id).cloned()
    }

    /// Unmount a shell, dropping its state.
    pub fn unmount(&self, id: &str) -> Option<ShellSession> {
        let removed = self.write().remove(id);
        if removed.is_some() {
            info!(name: "shell.unmounted", shell_id = %id, "Shell unmounted");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn list_ids(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Remove shells idle longer than the default timeout.
    pub fn cleanup_expired(&self) -> usize {
        self.cleanup_expired_with_timeout(DEFAULT_SESSION_TIMEOUT)
    }

    /// Remove shells idle longer than `timeout`. Returns how many were removed.
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.write();
        let before = guard.len();
        guard.retain(|_, shell| !shell.is_expired_with_timeout(timeout));
        before - guard.len()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, ShellSession>> {
        self.inner
            .shells
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, ShellSession>> {
        self.inner
            .shells
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
