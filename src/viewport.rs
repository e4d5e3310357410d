//! Viewport classification.
//!
//! Splits the display width into [`ViewportClass::Narrow`] and
//! [`ViewportClass::Wide`] around a fixed breakpoint and pushes every change
//! of class to its subscribers, the same way a media query listener would.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use chatus_shell::viewport::{ViewportClass, ViewportClassifier};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut classifier = ViewportClassifier::new(600, 1024);
//! classifier.subscribe(move |class| sink.lock().unwrap().push(class));
//!
//! classifier.resize(480);
//! assert_eq!(*seen.lock().unwrap(), vec![ViewportClass::Narrow]);
//! ```

use std::fmt;

use serde::Serialize;

/// Width of the toolkit's `sm` breakpoint in CSS pixels.
pub const DEFAULT_SMALL_BREAKPOINT: u32 = 600;

/// Layout class of the current viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    /// Below the breakpoint (`max-width: breakpoint - 1`).
    Narrow,
    /// At or above the breakpoint.
    Wide,
}

impl ViewportClass {
    /// Classify `width` against `breakpoint`.
    #[must_use]
    pub fn from_width(width: u32, breakpoint: u32) -> Self {
        if width < breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    #[must_use]
    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }

    /// Name used in rendered markup.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Wide => "wide",
        }
    }
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handle returned by [`ViewportClassifier::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(ViewportClass) + Send>;

/// Breakpoint-driven width classifier with change subscriptions.
pub struct ViewportClassifier {
    breakpoint: u32,
    width: u32,
    current: ViewportClass,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl fmt::Debug for ViewportClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportClassifier")
            .field("breakpoint", &self.breakpoint)
            .field("width", &self.width)
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ViewportClassifier {
    /// Create a classifier for the given breakpoint and initial width.
    #[must_use]
    pub fn new(breakpoint: u32, width: u32) -> Self {
        Self {
            breakpoint,
            width,
            current: ViewportClass::from_width(width, breakpoint),
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current classification.
    #[must_use]
    pub fn current(&self) -> ViewportClass {
        self.current
    }

    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.current.is_narrow()
    }

    /// Last width reported by the environment.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Register a listener for class changes.
    ///
    /// Listeners are not called with the current value on registration.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(ViewportClass) + Send + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Re-evaluate the classification for a new width.
    ///
    /// When the class changes, every listener runs before this returns,
    /// in subscription order.
    pub fn resize(&mut self, width: u32) -> ViewportClass {
        self.width = width;
        let next = ViewportClass::from_width(width, self.breakpoint);
        if next != self.current {
            self.current = next;
            for (_, listener) in &mut self.listeners {
                listener(next);
            }
        }
        self.current
    }
}
