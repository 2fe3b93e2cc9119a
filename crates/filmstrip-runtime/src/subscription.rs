#![forbid(unsafe_code)]

//! Scoped ownership of global pointer listeners.
//!
//! A resize handle listens for pointer moves and releases on the whole
//! document, not just on itself, so the listeners outlive any single event.
//! [`ListenerGuard`] ties their removal to a value: the release closure runs
//! exactly once, either on [`release`](ListenerGuard::release) or on drop.
//!
//! # Usage
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use filmstrip_runtime::subscription::ListenerGuard;
//!
//! let removed = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&removed);
//! {
//!     let _guard = ListenerGuard::new("pointer", move || counter.set(counter.get() + 1));
//! }
//! assert_eq!(removed.get(), 1);
//! ```

use std::fmt;

/// Removes a set of listeners when released or dropped.
pub struct ListenerGuard {
    label: &'static str,
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    /// Wrap the closure that detaches the listeners.
    pub fn new(label: &'static str, release: impl FnOnce() + 'static) -> Self {
        tracing::trace!(label, "listeners attached");
        Self {
            label,
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for hosts that poll instead.
    #[must_use]
    pub fn detached(label: &'static str) -> Self {
        Self {
            label,
            release: None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Whether the release closure has yet to run.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Run the release closure now. Later calls do nothing.
    pub fn release(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::trace!(label = self.label, "listeners released");
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("label", &self.label)
            .field("active", &self.is_active())
            .finish()
    }
}
