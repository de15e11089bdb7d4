//! Page events as seen by the core, already resolved from raw DOM events.
//!
//! The DOM layer maps each browser event onto one of these by identifying
//! which bound element it hit. Indices refer to positions in
//! [`crate::page::PageState`].

#[cfg(test)]
#[path = "event_test.rs"]
mod event_test;

/// Where a document-level click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Exactly on the primary link of link item `i`.
    MainLink(usize),
    /// Anywhere else on the page.
    Elsewhere,
}

impl ClickTarget {
    /// Whether this click landed on link item `index`'s primary link.
    #[must_use]
    pub fn hits_link(self, index: usize) -> bool {
        self == Self::MainLink(index)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// Right-click on link item `link`'s primary link.
    ContextMenu { link: usize },
    /// Any left click on the document.
    Click { target: ClickTarget },
    /// Checkbox of task `task` fired `change` with its new checked state.
    CheckboxChanged { task: usize, checked: bool },
    /// `openForm()` was called.
    OpenPopup,
    /// `closeForm()` was called.
    ClosePopup,
}
