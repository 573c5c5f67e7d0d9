//! Focusability predicates and set computation.
//!
//! Two sets are consumed by the runtime: the *focusable* set used by the
//! focus trap (what Tab can reach) and the *interactive* set used by roving
//! navigation (links, buttons, and menu-like roles). Both are computed
//! fresh from the document on every call — the tree may mutate between
//! actions, so nothing here is cached.

use crate::dom::{Document, ElementData, ElementId};

/// Roles that participate in roving-focus navigation.
const INTERACTIVE_ROLES: [&str; 3] = ["button", "menuitem", "option"];

/// Whether an element can receive Tab focus.
///
/// True when the element is rendered and at least one of the following
/// holds: it is an anchor with an `href`; it is a non-disabled
/// button/input/select/textarea; it carries a `tab_index` other than `-1`.
pub fn is_focusable(data: &ElementData) -> bool {
    if !data.rendered {
        return false;
    }
    let by_tag = match data.tag.as_str() {
        "a" => data.href.is_some(),
        "button" | "input" | "select" | "textarea" => !data.disabled,
        _ => false,
    };
    let by_tab_index = matches!(data.tab_index, Some(i) if i != -1);
    by_tag || by_tab_index
}

/// Whether an element participates in roving-focus navigation.
///
/// Role-aware: anchors with an `href`, buttons, and elements carrying a
/// `button`/`menuitem`/`option` role, as long as they are rendered and not
/// disabled.
pub fn is_interactive(data: &ElementData) -> bool {
    if !data.rendered || data.disabled {
        return false;
    }
    match data.tag.as_str() {
        "a" => data.href.is_some(),
        "button" => true,
        _ => data
            .role
            .as_deref()
            .is_some_and(|role| INTERACTIVE_ROLES.contains(&role)),
    }
}

/// Focusable descendants of `container`, in document (depth-first) order.
///
/// The container itself is excluded: a trap confines focus *inside* its
/// container.
pub fn list_focusable(doc: &Document, container: ElementId) -> Vec<ElementId> {
    collect(doc, container, is_focusable)
}

/// Interactive descendants of `container`, in document order.
pub fn list_interactive(doc: &Document, container: ElementId) -> Vec<ElementId> {
    collect(doc, container, is_interactive)
}

fn collect(
    doc: &Document,
    container: ElementId,
    predicate: fn(&ElementData) -> bool,
) -> Vec<ElementId> {
    doc.walk_depth_first(container)
        .into_iter()
        .filter(|&id| id != container)
        .filter(|&id| doc.get(id).is_some_and(predicate))
        .collect()
}
