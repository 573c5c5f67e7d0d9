//! Retained element tree consumed by the runtime.
//!
//! A slotmap-backed arena ([`Document`]) with parent/child links, traversal,
//! queries, and document-level focus state. Visual components own the shape
//! of this tree; the runtime only reads it and moves focus within it.

pub mod node;
pub mod tree;

pub use node::{ElementData, ElementId, Priority};
pub use tree::Document;
