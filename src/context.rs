//! Application context: one constructed object owning the runtime state.
//!
//! The original design-system runtime kept its locale value, message maps,
//! and live region in module scope. Here they live in an explicitly
//! constructed [`Context`] with a defined lifecycle — create once at
//! startup, pass by reference — so parallel test runs get fully isolated
//! instances.

use std::time::Instant;

use crate::announce::LiveRegionAnnouncer;
use crate::dom::{Document, Priority};
use crate::i18n::{LocaleStore, MessageRegistry, PreferenceStore};
use crate::schedule::Scheduler;

/// Owns the document, locale store, message registry, scheduler, and
/// announcer for one running application.
pub struct Context {
    /// The retained element tree.
    pub document: Document,
    /// Process-wide locale value and subscriptions.
    pub locale: LocaleStore,
    /// Namespaced translated messages.
    pub messages: MessageRegistry,
    /// Pending deferred tasks.
    pub scheduler: Scheduler,
    /// Live-region delivery to assistive technology.
    pub announcer: LiveRegionAnnouncer,
}

impl Context {
    /// Create a context with in-memory locale preferences.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            locale: LocaleStore::new(),
            messages: MessageRegistry::new(),
            scheduler: Scheduler::new(),
            announcer: LiveRegionAnnouncer::new(),
        }
    }

    /// Create a context with the given preference storage.
    pub fn with_preferences(preferences: Box<dyn PreferenceStore>) -> Self {
        Self {
            locale: LocaleStore::with_preferences(preferences),
            ..Self::new()
        }
    }

    /// Resolve the initial locale from an optional explicit override, the
    /// persisted preference, and the host environment language.
    pub fn initialize_locale(&mut self, override_tag: Option<&str>) {
        let env = LocaleStore::detect_env_language();
        self.locale.initialize(override_tag, env.as_deref());
    }

    /// Announce a message to assistive technology.
    pub fn announce(&mut self, message: impl Into<String>, priority: Priority) {
        self.announcer
            .announce(&mut self.document, &mut self.scheduler, message, priority);
    }

    /// Run every deferred task due at or before `now`.
    pub fn run_due_tasks(&mut self, now: Instant) -> usize {
        self.scheduler.run_due(now, &mut self.document)
    }

    /// Drive deferred tasks until none remain.
    ///
    /// Sleeps until each next deadline, then fires what is due. Intended
    /// for hosts with an async event loop; synchronous hosts call
    /// [`run_due_tasks`](Context::run_due_tasks) from their own tick.
    pub async fn drive_timers(&mut self) {
        while let Some(deadline) = self.scheduler.next_deadline() {
            tokio::time::sleep_until(deadline.into()).await;
            // Fire against the slept-to deadline: the wall clock may not
            // have caught up under tokio's auto-advanced test clock.
            self.run_due_tasks(Instant::now().max(deadline));
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("elements", &self.document.len())
            .field("locale", &self.locale.get())
            .field("namespaces", &self.messages.namespace_count())
            .field("pending_tasks", &self.scheduler.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::dom::ElementData;
    use crate::i18n::{Locale, MemoryPreferences};

    use super::*;

    #[test]
    fn new_context_is_empty() {
        let ctx = Context::new();
        assert!(ctx.document.is_empty());
        assert_eq!(ctx.locale.get(), Locale::EnCa);
        assert_eq!(ctx.messages.namespace_count(), 0);
        assert!(ctx.scheduler.is_empty());
        assert!(ctx.announcer.region().is_none());
    }

    #[test]
    fn contexts_are_isolated() {
        let mut a = Context::new();
        let mut b = Context::new();
        a.locale.set("fr-CA");
        b.messages.register("ns", Locale::EnCa, [("k", "v")]);

        assert_eq!(a.locale.get(), Locale::FrCa);
        assert_eq!(b.locale.get(), Locale::EnCa);
        assert_eq!(a.messages.namespace_count(), 0);
    }

    #[test]
    fn with_preferences_feeds_initialization() {
        let mut ctx =
            Context::with_preferences(Box::new(MemoryPreferences::with_value("fr-CA")));
        ctx.locale.initialize(None, None);
        assert_eq!(ctx.locale.get(), Locale::FrCa);
    }

    #[test]
    fn initialize_locale_override() {
        let mut ctx = Context::new();
        ctx.initialize_locale(Some("fr-CA"));
        assert_eq!(ctx.locale.get(), Locale::FrCa);
    }

    #[test]
    fn announce_and_run_due() {
        let mut ctx = Context::new();
        ctx.document.insert(ElementData::new("body"));
        ctx.announce("Saved", Priority::Polite);

        let region = ctx.announcer.region().unwrap();
        assert_eq!(ctx.document.get(region).unwrap().text, "");

        ctx.run_due_tasks(Instant::now() + crate::announce::ANNOUNCE_DELAY * 2);
        assert_eq!(ctx.document.get(region).unwrap().text, "Saved");
    }

    #[tokio::test(start_paused = true)]
    async fn drive_timers_fires_pending_writes() {
        let mut ctx = Context::new();
        ctx.document.insert(ElementData::new("body"));
        ctx.announce("Done", Priority::Assertive);

        ctx.drive_timers().await;

        let region = ctx.announcer.region().unwrap();
        assert_eq!(ctx.document.get(region).unwrap().text, "Done");
        assert!(ctx.scheduler.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn drive_timers_idles_on_empty_scheduler() {
        let mut ctx = Context::new();
        ctx.drive_timers().await;
        assert!(ctx.scheduler.is_empty());
    }
}
