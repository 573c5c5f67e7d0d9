//! Focus trap: confines Tab focus inside a container.
//!
//! One [`FocusTrap`] instance is created per activation (e.g. one per open
//! modal) and discarded after `deactivate()`. The trap has exactly two
//! states, inactive and active; nested or stacked activations are not
//! supported — activating while active simply re-snapshots.

use crate::dom::{Document, ElementId};
use crate::event::KeyEvent;

use super::focusable::list_focusable;

/// Confines keyboard focus to the descendants of one container.
#[derive(Debug)]
pub struct FocusTrap {
    container: ElementId,
    restore_to: Option<ElementId>,
    active: bool,
}

impl FocusTrap {
    /// Create an inactive trap for the given container.
    pub fn new(container: ElementId) -> Self {
        Self {
            container,
            restore_to: None,
            active: false,
        }
    }

    /// The container this trap confines focus to.
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Whether the trap is currently intercepting Tab keys.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activate the trap.
    ///
    /// Snapshots the current active element as the restore target, then
    /// focuses the first focusable descendant of the container. If the
    /// container has no focusable descendants this is a pure no-op: no
    /// interception, no focus change, and `false` is returned.
    ///
    /// Calling `activate` while already active re-snapshots state and is
    /// treated as a fresh activation.
    pub fn activate(&mut self, doc: &mut Document) -> bool {
        let focusables = list_focusable(doc, self.container);
        let Some(&first) = focusables.first() else {
            return false;
        };
        self.restore_to = doc.active_element();
        doc.focus(first);
        self.active = true;
        true
    }

    /// Intercept a key event while active.
    ///
    /// Tab moves focus forward, wrapping last→first; Shift+Tab/BackTab
    /// moves backward, wrapping first→last. The focusable set is
    /// recomputed on every press. Returns `true` exactly when the key was
    /// consumed — the caller's cue to stop further processing.
    pub fn handle_key(&mut self, doc: &mut Document, event: KeyEvent) -> bool {
        if !self.active {
            return false;
        }
        let forward = if event.is_tab_forward() {
            true
        } else if event.is_tab_backward() {
            false
        } else {
            return false;
        };

        let focusables = list_focusable(doc, self.container);
        if focusables.is_empty() {
            return false;
        }
        let len = focusables.len();
        let position = doc
            .active_element()
            .and_then(|current| focusables.iter().position(|&id| id == current));
        // If focus escaped the container, pull it back to the boundary.
        let next = match position {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        doc.focus(focusables[next]);
        true
    }

    /// Deactivate the trap.
    ///
    /// Restores focus to the element snapshotted at activation, if it is
    /// still connected to the document; otherwise focus stays where it is.
    /// Deactivating an inactive trap is a no-op.
    pub fn deactivate(&mut self, doc: &mut Document) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(previous) = self.restore_to.take() {
            if doc.is_connected(previous) {
                doc.focus(previous);
            }
        }
    }
}
