//! Live-region announcer for assistive technology.
//!
//! One visually-hidden `role="status"` element per context, created lazily
//! on first use and appended to the document root. Announcing clears the
//! region's text immediately and writes the message a beat later — many
//! screen readers suppress live-region content that did not change, and the
//! clear-then-delayed-write sequence forces a re-announcement even for
//! repeated text.

use std::time::Duration;

use crate::dom::{Document, ElementData, ElementId, Priority};
use crate::schedule::{Scheduler, TaskHandle};

/// Delay between clearing the region and writing the message.
pub const ANNOUNCE_DELAY: Duration = Duration::from_millis(100);

/// Delivers text to assistive technology through a shared live region.
///
/// Calls within the delay window are not queued: the newer announcement
/// cancels the pending write, so the most recent message wins.
#[derive(Debug, Default)]
pub struct LiveRegionAnnouncer {
    region: Option<ElementId>,
    pending: Option<TaskHandle>,
}

impl LiveRegionAnnouncer {
    /// Create an announcer with no live region yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live-region element, if it has been created.
    pub fn region(&self) -> Option<ElementId> {
        self.region
    }

    /// Announce `message` at the given priority.
    ///
    /// Creates the live region on first use. Sets the region's live
    /// priority, clears its text content immediately, then schedules the
    /// write of `message` after [`ANNOUNCE_DELAY`]. A pending write from an
    /// earlier call is cancelled.
    pub fn announce(
        &mut self,
        doc: &mut Document,
        scheduler: &mut Scheduler,
        message: impl Into<String>,
        priority: Priority,
    ) {
        let region = self.ensure_region(doc);

        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }

        if let Some(data) = doc.get_mut(region) {
            data.live = Some(priority);
            data.text.clear();
        }

        let message = message.into();
        self.pending = Some(scheduler.schedule(ANNOUNCE_DELAY, move |doc| {
            if let Some(data) = doc.get_mut(region) {
                data.text = message;
            }
        }));
    }

    /// Remove the live region and cancel any pending write.
    ///
    /// Cleanup only — the region is otherwise reused for the whole
    /// session. A later `announce` recreates it.
    pub fn destroy(&mut self, doc: &mut Document, scheduler: &mut Scheduler) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel(handle);
        }
        if let Some(region) = self.region.take() {
            doc.remove(region);
        }
    }

    /// Lazily create the live region, appended to the document root.
    ///
    /// At most one region exists per announcer; a stale id (region removed
    /// behind our back) is replaced.
    fn ensure_region(&mut self, doc: &mut Document) -> ElementId {
        if let Some(region) = self.region {
            if doc.contains(region) {
                return region;
            }
        }
        let data = ElementData::new("div")
            .with_role("status")
            .with_tab_index(-1);
        let region = match doc.root() {
            Some(root) => doc.insert_child(root, data),
            None => doc.insert(data),
        };
        self.region = Some(region);
        region
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    fn fire_pending(scheduler: &mut Scheduler, doc: &mut Document) -> usize {
        scheduler.run_due(Instant::now() + ANNOUNCE_DELAY * 2, doc)
    }

    fn setup() -> (Document, Scheduler, LiveRegionAnnouncer) {
        let mut doc = Document::new();
        doc.insert(ElementData::new("body"));
        (doc, Scheduler::new(), LiveRegionAnnouncer::new())
    }

    #[test]
    fn region_created_lazily_on_first_announce() {
        let (mut doc, mut sched, mut announcer) = setup();
        assert!(announcer.region().is_none());

        announcer.announce(&mut doc, &mut sched, "Saved", Priority::Polite);
        let region = announcer.region().unwrap();
        let data = doc.get(region).unwrap();
        assert!(data.has_role("status"));
        assert_eq!(data.live, Some(Priority::Polite));
        assert_eq!(doc.parent(region), doc.root());
    }

    #[test]
    fn region_created_at_most_once() {
        let (mut doc, mut sched, mut announcer) = setup();
        announcer.announce(&mut doc, &mut sched, "one", Priority::Polite);
        let first = announcer.region().unwrap();
        fire_pending(&mut sched, &mut doc);
        announcer.announce(&mut doc, &mut sched, "two", Priority::Polite);
        assert_eq!(announcer.region(), Some(first));
    }

    #[test]
    fn message_written_after_delay_not_before() {
        let (mut doc, mut sched, mut announcer) = setup();
        announcer.announce(&mut doc, &mut sched, "Saved", Priority::Polite);
        let region = announcer.region().unwrap();

        // Cleared immediately, written only once the delay elapses.
        assert_eq!(doc.get(region).unwrap().text, "");
        assert_eq!(sched.run_due(Instant::now(), &mut doc), 0);
        assert_eq!(doc.get(region).unwrap().text, "");

        fire_pending(&mut sched, &mut doc);
        assert_eq!(doc.get(region).unwrap().text, "Saved");
    }

    #[test]
    fn repeated_message_passes_through_empty_state() {
        let (mut doc, mut sched, mut announcer) = setup();

        announcer.announce(&mut doc, &mut sched, "Saved", Priority::Polite);
        let region = announcer.region().unwrap();
        fire_pending(&mut sched, &mut doc);
        assert_eq!(doc.get(region).unwrap().text, "Saved");

        // Second identical announcement clears first, then rewrites, so
        // assistive technology observes a change both times.
        announcer.announce(&mut doc, &mut sched, "Saved", Priority::Polite);
        assert_eq!(doc.get(region).unwrap().text, "");
        fire_pending(&mut sched, &mut doc);
        assert_eq!(doc.get(region).unwrap().text, "Saved");
    }

    #[test]
    fn newer_announcement_supersedes_pending_write() {
        let (mut doc, mut sched, mut announcer) = setup();

        announcer.announce(&mut doc, &mut sched, "first", Priority::Polite);
        announcer.announce(&mut doc, &mut sched, "second", Priority::Polite);

        // Only one write is pending; the superseded one was cancelled.
        assert_eq!(sched.len(), 1);
        fire_pending(&mut sched, &mut doc);
        let region = announcer.region().unwrap();
        assert_eq!(doc.get(region).unwrap().text, "second");
    }

    #[test]
    fn priority_updates_on_each_announce() {
        let (mut doc, mut sched, mut announcer) = setup();
        announcer.announce(&mut doc, &mut sched, "alert", Priority::Assertive);
        let region = announcer.region().unwrap();
        assert_eq!(doc.get(region).unwrap().live, Some(Priority::Assertive));

        announcer.announce(&mut doc, &mut sched, "info", Priority::Polite);
        assert_eq!(doc.get(region).unwrap().live, Some(Priority::Polite));
    }

    #[test]
    fn destroy_removes_region_and_cancels_pending() {
        let (mut doc, mut sched, mut announcer) = setup();
        announcer.announce(&mut doc, &mut sched, "Saved", Priority::Polite);
        let region = announcer.region().unwrap();

        announcer.destroy(&mut doc, &mut sched);
        assert!(announcer.region().is_none());
        assert!(!doc.contains(region));
        assert!(sched.is_empty());

        // The cancelled write must not resurrect anything.
        assert_eq!(fire_pending(&mut sched, &mut doc), 0);
    }

    #[test]
    fn destroy_without_region_is_noop() {
        let (mut doc, mut sched, mut announcer) = setup();
        announcer.destroy(&mut doc, &mut sched);
        assert!(announcer.region().is_none());
    }

    #[test]
    fn announce_after_destroy_recreates_region() {
        let (mut doc, mut sched, mut announcer) = setup();
        announcer.announce(&mut doc, &mut sched, "one", Priority::Polite);
        announcer.destroy(&mut doc, &mut sched);

        announcer.announce(&mut doc, &mut sched, "two", Priority::Polite);
        let region = announcer.region().unwrap();
        fire_pending(&mut sched, &mut doc);
        assert_eq!(doc.get(region).unwrap().text, "two");
    }

    #[test]
    fn empty_document_region_becomes_root() {
        let mut doc = Document::new();
        let mut sched = Scheduler::new();
        let mut announcer = LiveRegionAnnouncer::new();
        announcer.announce(&mut doc, &mut sched, "hi", Priority::Polite);
        assert_eq!(doc.root(), announcer.region());
    }

    #[test]
    fn region_is_not_tab_focusable() {
        let (mut doc, mut sched, mut announcer) = setup();
        announcer.announce(&mut doc, &mut sched, "hi", Priority::Polite);
        let region = announcer.region().unwrap();
        assert!(!crate::focus::is_focusable(doc.get(region).unwrap()));
    }
}
