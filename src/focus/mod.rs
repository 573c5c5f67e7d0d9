//! Focus containment for modal-like surfaces.
//!
//! - [`focusable`] — the focusability predicates and set computation
//! - [`trap`] — the per-activation [`FocusTrap`](trap::FocusTrap) controller

pub mod focusable;
pub mod trap;

pub use focusable::{is_focusable, is_interactive, list_focusable, list_interactive};
pub use trap::FocusTrap;
