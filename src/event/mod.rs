//! Input events consumed by focus containment and roving navigation.

pub mod keys;

pub use keys::{Key, KeyEvent, Modifiers};
