//! Document tree: insert, remove, walk, queries, focus state.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};

use super::node::{ElementData, ElementId};

/// Empty slice constant for returning when an element has no children.
const EMPTY_CHILDREN: &[ElementId] = &[];

/// The retained element tree, backed by a slotmap arena.
///
/// All elements live in a single `SlotMap`. Parent/child relationships are
/// stored in secondary maps so that removal is O(subtree size) and lookup is
/// O(1). The document also owns the focus state: at most one element is the
/// active element at any time.
pub struct Document {
    pub(crate) nodes: SlotMap<ElementId, ElementData>,
    children: SecondaryMap<ElementId, Vec<ElementId>>,
    parent: SecondaryMap<ElementId, ElementId>,
    root: Option<ElementId>,
    active: Option<ElementId>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            children: SecondaryMap::new(),
            parent: SecondaryMap::new(),
            root: None,
            active: None,
        }
    }

    /// Insert an element with no parent.
    ///
    /// The first element ever inserted becomes the document root; later
    /// parentless inserts leave the root unchanged.
    pub fn insert(&mut self, data: ElementData) -> ElementId {
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        if self.root.is_none() {
            self.root = Some(id);
        }
        id
    }

    /// Insert an element appended to `parent`'s child list.
    ///
    /// Debug builds assert that `parent` is a live element.
    pub fn insert_child(&mut self, parent: ElementId, data: ElementData) -> ElementId {
        debug_assert!(
            self.nodes.contains_key(parent),
            "insert_child: stale parent id"
        );
        let id = self.nodes.insert(data);
        self.children.insert(id, Vec::new());
        self.parent.insert(id, parent);
        self.children
            .get_mut(parent)
            .expect("parent must have children vec")
            .push(id);
        id
    }

    /// Remove an element together with its whole subtree.
    ///
    /// Yields the removed element's own data (`None` for a stale id).
    /// Focus is cleared when the active element was inside the subtree;
    /// removing the root leaves the document rootless.
    pub fn remove(&mut self, id: ElementId) -> Option<ElementData> {
        if !self.nodes.contains_key(id) {
            return None;
        }

        if let Some(parent_id) = self.parent.remove(id) {
            if let Some(siblings) = self.children.get_mut(parent_id) {
                siblings.retain(|&child| child != id);
            }
        }
        if self.root == Some(id) {
            self.root = None;
        }

        // Breadth-first over the subtree; each element's child list is
        // taken out of the map as it is visited.
        let mut queue = VecDeque::from([id]);
        let mut detached = None;
        while let Some(current) = queue.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                queue.extend(kids);
            }
            self.parent.remove(current);
            let data = self.nodes.remove(current);
            if current == id {
                detached = data;
            }
        }

        if let Some(active) = self.active {
            if !self.nodes.contains_key(active) {
                self.active = None;
            }
        }

        detached
    }

    /// Get the parent of an element, if it has one.
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.parent.get(id).copied()
    }

    /// Get the children of an element. Returns an empty slice if the element
    /// has no children or does not exist.
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Walk from `id` up to the root, collecting ancestor element ids.
    ///
    /// The returned vec does **not** include `id` itself; it starts with the
    /// immediate parent and ends at the root.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    /// Immutable access to an element's data.
    pub fn get(&self, id: ElementId) -> Option<&ElementData> {
        self.nodes.get(id)
    }

    /// Mutable access to an element's data.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementData> {
        self.nodes.get_mut(id)
    }

    /// The current root element, if set.
    pub fn root(&self) -> Option<ElementId> {
        self.root
    }

    /// Number of elements in the document.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the document is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the document contains an element with the given id.
    pub fn contains(&self, id: ElementId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Whether the element exists and its ancestor chain reaches the root.
    ///
    /// Stale ids and elements in detached subtrees are not connected.
    pub fn is_connected(&self, id: ElementId) -> bool {
        if !self.nodes.contains_key(id) {
            return false;
        }
        let root = match self.root {
            Some(r) => r,
            None => return false,
        };
        id == root || self.ancestors(id).last() == Some(&root)
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: ElementId) -> Vec<ElementId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            // Push children in reverse so the first child is visited first.
            let kids = self.children(current);
            for &child in kids.iter().rev() {
                stack.push(child);
            }
        }
        result
    }

    /// Find the first element whose `id` field matches the given string.
    pub fn query_by_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .find(|(_, data)| data.id.as_deref() == Some(id))
            .map(|(element_id, _)| element_id)
    }

    /// Find all elements matching an arbitrary predicate.
    pub fn query_all(&self, predicate: impl Fn(&ElementData) -> bool) -> Vec<ElementId> {
        self.nodes
            .iter()
            .filter(|(_, data)| predicate(data))
            .map(|(element_id, _)| element_id)
            .collect()
    }

    // ── Focus state ──────────────────────────────────────────────────

    /// The element that currently holds focus, if any.
    pub fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    /// Move focus to the given element.
    ///
    /// No-op if the element does not exist. Returns whether focus moved.
    pub fn focus(&mut self, id: ElementId) -> bool {
        if self.nodes.contains_key(id) {
            self.active = Some(id);
            true
        } else {
            false
        }
    }

    /// Clear focus (no element focused).
    pub fn blur(&mut self) {
        self.active = None;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
