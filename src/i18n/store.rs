//! Locale store: current value, subscriptions, startup resolution.
//!
//! [`LocaleStore`] holds the single current [`Locale`] for a running
//! application and fans out every change synchronously to its subscribers.
//! Persistence goes through the [`PreferenceStore`] seam so tests and
//! non-browser hosts can supply their own backing storage.

use tracing::debug;

use super::locale::{Locale, DEFAULT_LOCALE};

// ---------------------------------------------------------------------------
// PreferenceStore
// ---------------------------------------------------------------------------

/// Backing storage for the persisted locale preference.
pub trait PreferenceStore {
    /// Load the previously persisted locale tag, if any.
    fn load(&self) -> Option<String>;

    /// Persist a locale tag. Overwrites any previous value.
    fn save(&mut self, tag: &str);
}

/// In-memory [`PreferenceStore`]. The default; also used by tests.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    value: Option<String>,
}

impl MemoryPreferences {
    /// Create an empty preference store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a preference store pre-seeded with a persisted tag.
    pub fn with_value(tag: impl Into<String>) -> Self {
        Self {
            value: Some(tag.into()),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, tag: &str) {
        self.value = Some(tag.to_string());
    }
}

// ---------------------------------------------------------------------------
// SubscriberId
// ---------------------------------------------------------------------------

/// Handle identifying one subscription. Unsubscribing twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

// ---------------------------------------------------------------------------
// LocaleStore
// ---------------------------------------------------------------------------

/// Holds the current locale and an ordered subscriber list.
///
/// Every `set` notifies each subscriber exactly once, synchronously, in
/// subscription order. Subscribers are removed only by `unsubscribe` —
/// callbacks that outlive their owner must guard themselves (the component
/// base does this with a `Weak` reference).
pub struct LocaleStore {
    current: Locale,
    next_id: u64,
    subscribers: Vec<(SubscriberId, Box<dyn FnMut(Locale)>)>,
    preferences: Box<dyn PreferenceStore>,
}

impl LocaleStore {
    /// Create a store with the default locale and in-memory preferences.
    pub fn new() -> Self {
        Self::with_preferences(Box::new(MemoryPreferences::new()))
    }

    /// Create a store backed by the given preference storage.
    pub fn with_preferences(preferences: Box<dyn PreferenceStore>) -> Self {
        Self {
            current: DEFAULT_LOCALE,
            next_id: 0,
            subscribers: Vec::new(),
            preferences,
        }
    }

    /// The current locale. `en-CA` before any initialization.
    pub fn get(&self) -> Locale {
        self.current
    }

    /// Canonicalize `input`, store it, persist it, and notify every
    /// subscriber with the new value, in subscription order.
    pub fn set(&mut self, input: &str) {
        let locale = Locale::canonical(input);
        debug!(input, locale = %locale, "locale changed");
        self.current = locale;
        self.preferences.save(locale.as_str());
        for (_, callback) in self.subscribers.iter_mut() {
            callback(locale);
        }
    }

    /// Register a callback invoked on every locale change.
    pub fn subscribe(&mut self, callback: impl FnMut(Locale) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscription. Idempotent: returns `false` (and does
    /// nothing) if the id was already removed.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Resolve the initial locale, once, at startup.
    ///
    /// Precedence: explicit override → persisted preference → host
    /// environment language (best-effort `fr` prefix match) → `en-CA`.
    /// The resolved value is persisted back so subsequent loads are
    /// stable. Does not notify: this runs before any subscriber exists.
    pub fn initialize(&mut self, override_tag: Option<&str>, env_language: Option<&str>) {
        let resolved = if let Some(tag) = override_tag {
            Locale::canonical(tag)
        } else if let Some(saved) = self.preferences.load() {
            Locale::canonical(&saved)
        } else if env_language.is_some_and(|lang| lang.to_ascii_lowercase().starts_with("fr")) {
            Locale::FrCa
        } else {
            DEFAULT_LOCALE
        };
        debug!(locale = %resolved, "initial locale resolved");
        self.current = resolved;
        self.preferences.save(resolved.as_str());
    }

    /// Best-effort read of the host environment language.
    ///
    /// Checks `LC_ALL`, `LC_MESSAGES`, then `LANG`, returning the first
    /// non-empty value.
    pub fn detect_env_language() -> Option<String> {
        ["LC_ALL", "LC_MESSAGES", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.is_empty())
    }
}

impl Default for LocaleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LocaleStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleStore")
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
