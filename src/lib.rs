//! # civic-runtime
//!
//! Shared runtime substrate for the Civic design-system component library.
//! Visual components (buttons, alerts, modals, data tables) are thin,
//! declarative renderers; everything that needs real state management,
//! tree-traversal algorithms, or lifecycle-safe scheduling lives here and
//! is reused by every component.
//!
//! ## Core Systems
//!
//! - **[`dom`]** — Slotmap-backed element arena with traversal, queries,
//!   and document focus state
//! - **[`event`]** — Key events decoupled from the crossterm backend
//! - **[`i18n`]** — Locale store with synchronous fan-out, namespaced
//!   message registry with fallback resolution
//! - **[`focus`]** — Focusability predicates and the modal focus trap
//! - **[`nav`]** — Roving-focus keyboard navigation for composite widgets
//! - **[`announce`]** — Live-region announcer for assistive technology
//! - **[`schedule`]** — Cancellable deferred tasks
//! - **[`component`]** — Base integration embedded by every component
//! - **[`context`]** — The constructed application context tying
//!   everything together

// Foundation
pub mod dom;
pub mod event;

// Core systems
pub mod announce;
pub mod focus;
pub mod i18n;
pub mod nav;
pub mod schedule;

// Integration
pub mod component;
pub mod context;

pub use announce::{LiveRegionAnnouncer, ANNOUNCE_DELAY};
pub use component::ComponentBase;
pub use context::Context;
pub use dom::{Document, ElementData, ElementId, Priority};
pub use event::{Key, KeyEvent, Modifiers};
pub use focus::FocusTrap;
pub use i18n::{Locale, LocaleStore, MessageRegistry};
pub use nav::NavOptions;
pub use schedule::{Scheduler, TaskHandle};
