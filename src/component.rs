//! Base integration shared by every visual component.
//!
//! [`ComponentBase`] is the glue a component embeds to get a reactive
//! `locale`, namespaced message lookup, and lifecycle-safe subscription
//! handling. The store only ever holds a `Weak` reference to the
//! component's state: a callback firing after the component is gone
//! upgrades to nothing and falls through harmlessly. Actual removal stays
//! caller-driven via `unmount`.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::context::Context;
use crate::dom::Priority;
use crate::i18n::{Locale, LocaleStore, MessageRegistry, SubscriberId};

/// Locale cell shared between the component and its store callback.
type LocaleCell = Rc<Cell<Locale>>;

/// Per-component runtime state: message namespace plus cached locale.
///
/// Embed one per component instance; call [`mount`](ComponentBase::mount)
/// when the component connects and [`unmount`](ComponentBase::unmount)
/// when it disconnects.
#[derive(Debug)]
pub struct ComponentBase {
    name: String,
    locale: LocaleCell,
    subscription: Option<SubscriberId>,
}

impl ComponentBase {
    /// Create a base for the component with the given name.
    ///
    /// The name doubles as the component's message namespace.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locale: Rc::new(Cell::new(Locale::default())),
            subscription: None,
        }
    }

    /// The component name, used as the message namespace.
    pub fn component_name(&self) -> &str {
        &self.name
    }

    /// Subscribe to locale changes and seed the cached locale.
    ///
    /// Idempotent: mounting while mounted is a no-op.
    pub fn mount(&mut self, store: &mut LocaleStore) {
        if self.subscription.is_some() {
            return;
        }
        self.locale.set(store.get());
        let weak: Weak<Cell<Locale>> = Rc::downgrade(&self.locale);
        self.subscription = Some(store.subscribe(move |locale| {
            if let Some(cell) = weak.upgrade() {
                cell.set(locale);
            }
        }));
    }

    /// Remove the subscription. Idempotent; safe before any mount.
    pub fn unmount(&mut self, store: &mut LocaleStore) {
        if let Some(id) = self.subscription.take() {
            store.unsubscribe(id);
        }
    }

    /// Whether the component is currently subscribed.
    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    /// The component's view of the current locale.
    ///
    /// Tracks every global change while mounted; frozen at its last value
    /// after unmount.
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    /// Resolve a message in this component's namespace at its current
    /// locale. Never fails; see `MessageRegistry::get` for the chain.
    pub fn message(&self, registry: &MessageRegistry, key: &str, fallback: Option<&str>) -> String {
        registry.get(&self.name, key, self.locale(), fallback)
    }

    /// Announce a message to assistive technology through the context's
    /// live region.
    pub fn announce(&self, ctx: &mut Context, message: impl Into<String>, priority: Priority) {
        ctx.announce(message, priority);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_base_defaults() {
        let base = ComponentBase::new("civic-alert");
        assert_eq!(base.component_name(), "civic-alert");
        assert_eq!(base.locale(), Locale::EnCa);
        assert!(!base.is_mounted());
    }

    #[test]
    fn mount_seeds_current_locale() {
        let mut store = LocaleStore::new();
        store.set("fr-CA");

        let mut base = ComponentBase::new("civic-alert");
        base.mount(&mut store);
        assert!(base.is_mounted());
        assert_eq!(base.locale(), Locale::FrCa);
    }

    #[test]
    fn locale_tracks_global_changes_while_mounted() {
        let mut store = LocaleStore::new();
        let mut base = ComponentBase::new("civic-alert");
        base.mount(&mut store);

        store.set("fr-CA");
        assert_eq!(base.locale(), Locale::FrCa);
        store.set("en");
        assert_eq!(base.locale(), Locale::EnCa);
    }

    #[test]
    fn unmount_freezes_locale() {
        let mut store = LocaleStore::new();
        let mut base = ComponentBase::new("civic-alert");
        base.mount(&mut store);
        base.unmount(&mut store);

        store.set("fr-CA");
        assert_eq!(base.locale(), Locale::EnCa);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn double_mount_subscribes_once() {
        let mut store = LocaleStore::new();
        let mut base = ComponentBase::new("civic-alert");
        base.mount(&mut store);
        base.mount(&mut store);
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn double_unmount_is_noop() {
        let mut store = LocaleStore::new();
        let mut base = ComponentBase::new("civic-alert");
        base.mount(&mut store);
        base.unmount(&mut store);
        base.unmount(&mut store);
        assert!(!base.is_mounted());
    }

    #[test]
    fn unmount_before_mount_is_noop() {
        let mut store = LocaleStore::new();
        let mut base = ComponentBase::new("civic-alert");
        base.unmount(&mut store);
        assert!(!base.is_mounted());
    }

    #[test]
    fn dropped_component_callback_is_harmless() {
        let mut store = LocaleStore::new();
        {
            let mut base = ComponentBase::new("civic-alert");
            base.mount(&mut store);
            // Dropped without unmount — the subscription outlives it.
        }
        // The stale callback upgrades to nothing; no panic, no effect.
        store.set("fr-CA");
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn message_resolves_in_own_namespace() {
        let mut store = LocaleStore::new();
        let mut registry = MessageRegistry::new();
        registry.register("civic-alert", Locale::EnCa, [("label.close", "Close")]);
        registry.register("civic-alert", Locale::FrCa, [("label.close", "Fermer")]);
        registry.register("civic-button", Locale::EnCa, [("label.close", "Dismiss")]);

        let mut base = ComponentBase::new("civic-alert");
        base.mount(&mut store);
        assert_eq!(base.message(&registry, "label.close", None), "Close");

        store.set("fr-CA");
        assert_eq!(base.message(&registry, "label.close", None), "Fermer");
    }

    #[test]
    fn message_falls_back_for_unregistered_key() {
        let registry = MessageRegistry::new();
        let base = ComponentBase::new("civic-alert");
        assert_eq!(
            base.message(&registry, "label.close", Some("Close")),
            "Close"
        );
        assert_eq!(base.message(&registry, "label.close", None), "label.close");
    }

    #[test]
    fn announce_delegates_to_context_region() {
        use std::time::Instant;

        use crate::announce::ANNOUNCE_DELAY;
        use crate::dom::ElementData;

        let mut ctx = Context::new();
        ctx.document.insert(ElementData::new("body"));
        let mut base = ComponentBase::new("civic-alert");
        base.mount(&mut ctx.locale);

        base.announce(&mut ctx, "Saved", Priority::Polite);
        ctx.run_due_tasks(Instant::now() + ANNOUNCE_DELAY * 2);

        let region = ctx.announcer.region().unwrap();
        assert_eq!(ctx.document.get(region).unwrap().text, "Saved");
    }

    #[test]
    fn two_components_track_independently() {
        let mut store = LocaleStore::new();
        let mut alert = ComponentBase::new("civic-alert");
        let mut button = ComponentBase::new("civic-button");
        alert.mount(&mut store);
        button.mount(&mut store);

        store.set("fr-CA");
        assert_eq!(alert.locale(), Locale::FrCa);
        assert_eq!(button.locale(), Locale::FrCa);

        alert.unmount(&mut store);
        store.set("en");
        assert_eq!(alert.locale(), Locale::FrCa);
        assert_eq!(button.locale(), Locale::EnCa);
    }
}
