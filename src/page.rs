//! Page model: the presentational state the binder keeps in sync with the DOM.
//!
//! Nothing here is persisted. Each link panel, task label and the popup
//! carries one boolean-like value that mirrors a single inline style on the
//! rendered element. `PageState` is the browser-free copy of those values; the
//! DOM layer seeds it at bind time and writes back only what changes.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::consts::{DISPLAY_HIDDEN, DISPLAY_VISIBLE};

/// Two-state visibility of a panel or the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

impl Visibility {
    /// The CSS `display` value that renders this visibility.
    #[must_use]
    pub fn display(self) -> &'static str {
        match self {
            Self::Visible => DISPLAY_VISIBLE,
            Self::Hidden => DISPLAY_HIDDEN,
        }
    }

    /// Read visibility back from a computed `display` value.
    ///
    /// Any rendered display (`block`, `flex`, `inline-block`, ...) is visible;
    /// only `none`, or no value at all, is hidden.
    #[must_use]
    pub fn from_display(display: &str) -> Self {
        match display.trim() {
            "" | DISPLAY_HIDDEN => Self::Hidden,
            _ => Self::Visible,
        }
    }
}

/// One link row: a primary link plus its edit-links panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkItem {
    pub panel: Visibility,
}

/// One task row: a checkbox and the label it styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskItem {
    /// Whether the label currently shows the completed style.
    pub completed: bool,
}

/// The popup form, if the page has one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Popup {
    pub visibility: Visibility,
}

/// All transient state of a bound page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub links: Vec<LinkItem>,
    pub tasks: Vec<TaskItem>,
    pub popup: Option<Popup>,
}

impl PageState {
    /// A page with `links` hidden panels, `tasks` pending tasks and an optional hidden popup.
    #[must_use]
    pub fn with_counts(links: usize, tasks: usize, has_popup: bool) -> Self {
        Self {
            links: vec![LinkItem::default(); links],
            tasks: vec![TaskItem::default(); tasks],
            popup: has_popup.then(Popup::default),
        }
    }
}
