//! Element types: ElementId, ElementData, Priority.

use slotmap::new_key_type;

new_key_type! {
    /// Unique identifier for an element in the document arena. Copy, lightweight (u64).
    pub struct ElementId;
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Politeness level of a live-region announcement.
///
/// Polite announcements wait for the assistive technology to finish what it
/// is currently reading; assertive announcements interrupt it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    #[default]
    Polite,
    Assertive,
}

impl Priority {
    /// The `aria-live` attribute value for this priority.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Polite => "polite",
            Priority::Assertive => "assertive",
        }
    }
}

// ---------------------------------------------------------------------------
// ElementData
// ---------------------------------------------------------------------------

/// Data associated with a single element in the document.
///
/// Carries exactly the surface the runtime consumes: the tag and the
/// attributes that feed the focusability predicate, plus the text content
/// and live-region priority used by the announcer.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Tag name (e.g. "a", "button", "civic-card").
    pub tag: String,
    /// Optional unique id.
    pub id: Option<String>,
    /// Link target. Only meaningful for anchors: an anchor without an
    /// `href` is not focusable.
    pub href: Option<String>,
    /// ARIA role (e.g. "button", "menuitem", "option", "status").
    pub role: Option<String>,
    /// Explicit tab index. `Some(-1)` removes the element from the tab
    /// order; any other value opts it in.
    pub tab_index: Option<i32>,
    /// Whether the element is disabled.
    pub disabled: bool,
    /// Whether the element currently has a layout box. Elements that are
    /// in the tree but not rendered never receive focus.
    pub rendered: bool,
    /// Live-region priority, if this element is a live region.
    pub live: Option<Priority>,
    /// Text content.
    pub text: String,
}

impl ElementData {
    /// Create a new `ElementData` with the given tag and sensible defaults.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            href: None,
            role: None,
            tab_index: None,
            disabled: false,
            rendered: true,
            live: None,
            text: String::new(),
        }
    }

    /// Set the element id (builder).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the link target (builder).
    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Set the ARIA role (builder).
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set an explicit tab index (builder).
    pub fn with_tab_index(mut self, tab_index: i32) -> Self {
        self.tab_index = Some(tab_index);
        self
    }

    /// Set whether the element is disabled (builder).
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set whether the element has a layout box (builder).
    pub fn rendered(mut self, rendered: bool) -> Self {
        self.rendered = rendered;
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Check whether this element has the given ARIA role.
    pub fn has_role(&self, role: &str) -> bool {
        self.role.as_deref() == Some(role)
    }
}
