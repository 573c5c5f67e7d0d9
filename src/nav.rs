//! Roving-focus keyboard navigation for composite widgets.
//!
//! Stateless helpers for menus, tab lists, and option lists: arrow keys
//! move focus among peer controls, Home/End jump to the boundaries. The
//! interactive set is recomputed from the document on every key press.

use crate::dom::{Document, ElementId};
use crate::event::{Key, KeyEvent};
use crate::focus::list_interactive;

// ---------------------------------------------------------------------------
// NavOptions
// ---------------------------------------------------------------------------

/// Axis and wrapping configuration for [`handle_arrow_key`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NavOptions {
    /// React to Up/Down.
    pub vertical: bool,
    /// React to Left/Right.
    pub horizontal: bool,
    /// Wrap out-of-range indices instead of clamping at the boundary.
    pub wrap: bool,
}

impl NavOptions {
    /// A vertical navigator (menus, listboxes).
    pub fn vertical() -> Self {
        Self {
            vertical: true,
            ..Self::default()
        }
    }

    /// A horizontal navigator (tab lists, toolbars).
    pub fn horizontal() -> Self {
        Self {
            horizontal: true,
            ..Self::default()
        }
    }

    /// Enable both axes (grids of controls).
    pub fn both_axes() -> Self {
        Self {
            vertical: true,
            horizontal: true,
            wrap: false,
        }
    }

    /// Set wrapping (builder).
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }
}

// ---------------------------------------------------------------------------
// Roving navigation
// ---------------------------------------------------------------------------

enum Step {
    Next,
    Previous,
    First,
    Last,
}

/// Handle an arrow/Home/End key over `container`'s interactive set.
///
/// Down/Right advance, Up/Left go back — each only on its enabled axis.
/// Home jumps to the first item and End to the last regardless of axis.
/// With `wrap` the ends join up; without it the index clamps at the
/// boundary. The resulting element is focused. Returns `true` exactly when
/// the key was handled — the caller's cue to suppress default behavior.
/// An empty interactive set handles nothing.
pub fn handle_arrow_key(
    doc: &mut Document,
    container: ElementId,
    event: KeyEvent,
    options: NavOptions,
) -> bool {
    let step = match event.code {
        Key::Down if options.vertical => Step::Next,
        Key::Up if options.vertical => Step::Previous,
        Key::Right if options.horizontal => Step::Next,
        Key::Left if options.horizontal => Step::Previous,
        Key::Home => Step::First,
        Key::End => Step::Last,
        _ => return false,
    };

    let items = list_interactive(doc, container);
    if items.is_empty() {
        return false;
    }
    let last = items.len() - 1;
    let current = doc
        .active_element()
        .and_then(|active| items.iter().position(|&id| id == active));

    let next = match step {
        Step::First => 0,
        Step::Last => last,
        Step::Next => match current {
            Some(i) if i < last => i + 1,
            Some(_) if options.wrap => 0,
            Some(i) => i,
            None => 0,
        },
        Step::Previous => match current {
            Some(i) if i > 0 => i - 1,
            Some(_) if options.wrap => last,
            Some(i) => i,
            None => last,
        },
    };

    doc.focus(items[next]);
    true
}

/// The interactive element after `current` within `container`, in document
/// order. `None` at the boundary or when `current` is not in the set.
pub fn next_focusable(
    doc: &Document,
    container: ElementId,
    current: ElementId,
) -> Option<ElementId> {
    let items = list_interactive(doc, container);
    let position = items.iter().position(|&id| id == current)?;
    items.get(position + 1).copied()
}

/// The interactive element before `current` within `container`. `None` at
/// the boundary or when `current` is not in the set.
pub fn previous_focusable(
    doc: &Document,
    container: ElementId,
    current: ElementId,
) -> Option<ElementId> {
    let items = list_interactive(doc, container);
    let position = items.iter().position(|&id| id == current)?;
    position.checked_sub(1).map(|i| items[i])
}
