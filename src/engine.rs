//! Event reducer for the page binder.
//!
//! `PageCore` owns the [`PageState`] and turns each [`PageEvent`] into state
//! changes plus a list of [`Action`]s for the host to apply to the DOM. It has
//! no browser dependencies, so every behavior of the binder is tested here.
//!
//! Actions are emitted only for real transitions: hiding an already hidden
//! panel or reopening an open popup yields no DOM write.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::error::PageError;
use crate::event::{ClickTarget, PageEvent};
use crate::page::{PageState, Visibility};

/// DOM mutations requested by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Suppress the browser's default handling of the current event.
    PreventDefault,
    SetPanel { link: usize, visibility: Visibility },
    SetTaskCompleted { task: usize, completed: bool },
    SetPopup(Visibility),
}

#[derive(Debug, Clone, Default)]
pub struct PageCore {
    state: PageState,
}

impl PageCore {
    #[must_use]
    pub fn new(state: PageState) -> Self {
        Self { state }
    }

    /// Current state, for queries and tests.
    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Reduce one event.
    ///
    /// # Errors
    ///
    /// Returns `UnknownLink`/`UnknownTask` for indices outside the bound page
    /// and `NoPopup` for popup events on a page without one. State is left
    /// untouched on error.
    pub fn handle(&mut self, event: PageEvent) -> Result<Vec<Action>, PageError> {
        match event {
            PageEvent::ContextMenu { link } => self.reveal_panel(link),
            PageEvent::Click { target } => Ok(self.hide_panels_except(target)),
            PageEvent::CheckboxChanged { task, checked } => self.set_completed(task, checked),
            PageEvent::OpenPopup => self.set_popup(Visibility::Visible),
            PageEvent::ClosePopup => self.set_popup(Visibility::Hidden),
        }
    }

    /// Actions that mark already-checked tasks completed.
    ///
    /// Used once after binding so labels agree with checkboxes the browser
    /// restored before the script ran. Unchecked labels keep their markup
    /// styles untouched.
    #[must_use]
    pub fn sync_labels(&self) -> Vec<Action> {
        self.state
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, item)| item.completed)
            .map(|(task, _)| Action::SetTaskCompleted { task, completed: true })
            .collect()
    }

    fn reveal_panel(&mut self, link: usize) -> Result<Vec<Action>, PageError> {
        let item = self.state.links.get_mut(link).ok_or(PageError::UnknownLink(link))?;
        let mut actions = vec![Action::PreventDefault];
        if item.panel != Visibility::Visible {
            item.panel = Visibility::Visible;
            log::debug!("edit links {link} shown");
            actions.push(Action::SetPanel { link, visibility: Visibility::Visible });
        }
        Ok(actions)
    }

    fn hide_panels_except(&mut self, target: ClickTarget) -> Vec<Action> {
        let mut actions = Vec::new();
        for (link, item) in self.state.links.iter_mut().enumerate() {
            if item.panel == Visibility::Visible && !target.hits_link(link) {
                item.panel = Visibility::Hidden;
                actions.push(Action::SetPanel { link, visibility: Visibility::Hidden });
            }
        }
        if !actions.is_empty() {
            log::debug!("click {target:?} hid {} edit-links panel(s)", actions.len());
        }
        actions
    }

    fn set_completed(&mut self, task: usize, checked: bool) -> Result<Vec<Action>, PageError> {
        let item = self.state.tasks.get_mut(task).ok_or(PageError::UnknownTask(task))?;
        if item.completed == checked {
            return Ok(Vec::new());
        }
        item.completed = checked;
        log::debug!("task {task} completed={checked}");
        Ok(vec![Action::SetTaskCompleted { task, completed: checked }])
    }

    fn set_popup(&mut self, visibility: Visibility) -> Result<Vec<Action>, PageError> {
        let popup = self.state.popup.as_mut().ok_or(PageError::NoPopup)?;
        if popup.visibility == visibility {
            return Ok(Vec::new());
        }
        popup.visibility = visibility;
        log::debug!("popup {visibility:?}");
        Ok(vec![Action::SetPopup(visibility)])
    }
}
