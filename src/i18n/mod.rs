//! Locale propagation and message resolution.
//!
//! - [`locale`] — the closed [`Locale`](locale::Locale) value type and
//!   canonicalization
//! - [`store`] — process-wide current locale with synchronous fan-out
//! - [`messages`] — namespaced message registry with fallback resolution

pub mod locale;
pub mod messages;
pub mod store;

pub use locale::{Locale, LocaleParseError, DEFAULT_LOCALE};
pub use messages::MessageRegistry;
pub use store::{LocaleStore, MemoryPreferences, PreferenceStore, SubscriberId};
