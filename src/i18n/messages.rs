//! Namespaced message registry with fallback resolution.
//!
//! Messages are keyed `namespace -> locale -> key -> text`, where the
//! namespace is a component name. Registration is additive and last write
//! wins; resolution never fails — the worst case returns the raw key.

use std::collections::HashMap;

use tracing::warn;

use super::locale::{Locale, DEFAULT_LOCALE};

type KeyMap = HashMap<String, String>;
type LocaleMap = HashMap<Locale, KeyMap>;

/// Registry of translated messages, scoped by component namespace.
#[derive(Debug, Default)]
pub struct MessageRegistry {
    namespaces: HashMap<String, LocaleMap>,
}

impl MessageRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge entries into `namespace` for `locale`.
    ///
    /// Only the keys provided are touched; existing keys in the namespace
    /// survive. Re-registering an existing (namespace, locale, key)
    /// overwrites silently, so registration is idempotent. Structurally
    /// malformed input — an empty namespace, key, or text — is skipped and
    /// reported via `tracing::warn!`; the valid entries in the same batch
    /// still land.
    pub fn register<K, V>(
        &mut self,
        namespace: &str,
        locale: Locale,
        entries: impl IntoIterator<Item = (K, V)>,
    ) where
        K: Into<String>,
        V: Into<String>,
    {
        if namespace.is_empty() {
            warn!("rejecting message registration with empty namespace");
            return;
        }
        let keys = self
            .namespaces
            .entry(namespace.to_string())
            .or_default()
            .entry(locale)
            .or_default();
        for (key, text) in entries {
            let key = key.into();
            let text = text.into();
            if key.is_empty() || text.is_empty() {
                warn!(namespace, %locale, key, "skipping malformed message entry");
                continue;
            }
            keys.insert(key, text);
        }
    }

    /// Resolve a message. Never panics, always returns a renderable string.
    ///
    /// Resolution order:
    /// 1. exact (namespace, locale, key);
    /// 2. (namespace, `en-CA`, key) when the requested locale misses;
    /// 3. the caller-supplied fallback;
    /// 4. the raw key itself.
    ///
    /// A missing namespace behaves identically to a missing key.
    pub fn get(&self, namespace: &str, key: &str, locale: Locale, fallback: Option<&str>) -> String {
        let locales = self.namespaces.get(namespace);
        if let Some(text) = locales.and_then(|l| l.get(&locale)).and_then(|k| k.get(key)) {
            return text.clone();
        }
        if locale != DEFAULT_LOCALE {
            if let Some(text) = locales
                .and_then(|l| l.get(&DEFAULT_LOCALE))
                .and_then(|k| k.get(key))
            {
                return text.clone();
            }
        }
        fallback.map(str::to_string).unwrap_or_else(|| key.to_string())
    }

    /// Whether an exact (namespace, locale, key) entry is registered.
    pub fn contains(&self, namespace: &str, key: &str, locale: Locale) -> bool {
        self.namespaces
            .get(namespace)
            .and_then(|l| l.get(&locale))
            .is_some_and(|k| k.contains_key(key))
    }

    /// Number of registered namespaces.
    pub fn namespace_count(&self) -> usize {
        self.namespaces.len()
    }
}
