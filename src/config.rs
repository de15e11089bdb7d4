//! Page configuration: which selectors identify the bound elements and how
//! task checkboxes are paired with their labels.
//!
//! Every field has a default matching the shipped templates, so an empty JSON
//! object (or no config at all) binds the stock page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    COMPLETED_COLOR, COMPLETED_DECORATION, EDIT_LINKS_SELECTOR, LINK_ITEM_SELECTOR, MAIN_LINK_SELECTOR, POPUP_ID,
    TASK_CHECKBOX_SELECTOR, TASK_LABEL_SELECTOR, TASK_ROW_SELECTOR,
};
use crate::error::PageError;

/// How checkboxes find the label they style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPairing {
    /// Each task row container holds its own checkbox and label.
    #[default]
    Row,
    /// The Nth checkbox on the page styles the Nth label.
    Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub link_item: String,
    pub main_link: String,
    pub edit_links: String,
    pub task_pairing: TaskPairing,
    pub task_row: String,
    pub task_checkbox: String,
    pub task_label: String,
    pub completed_color: String,
    pub completed_decoration: String,
    /// Popup element id, without `#`.
    pub popup_id: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            link_item: LINK_ITEM_SELECTOR.into(),
            main_link: MAIN_LINK_SELECTOR.into(),
            edit_links: EDIT_LINKS_SELECTOR.into(),
            task_pairing: TaskPairing::default(),
            task_row: TASK_ROW_SELECTOR.into(),
            task_checkbox: TASK_CHECKBOX_SELECTOR.into(),
            task_label: TASK_LABEL_SELECTOR.into(),
            completed_color: COMPLETED_COLOR.into(),
            completed_decoration: COMPLETED_DECORATION.into(),
            popup_id: POPUP_ID.into(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// `Config` for malformed JSON, `InvalidConfig` for an empty selector.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject empty selectors, which would make `querySelector` throw.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first empty field.
    pub fn validate(&self) -> Result<(), PageError> {
        let mut required = vec![
            ("linkItem", &self.link_item),
            ("mainLink", &self.main_link),
            ("editLinks", &self.edit_links),
            ("taskCheckbox", &self.task_checkbox),
            ("taskLabel", &self.task_label),
            ("popupId", &self.popup_id),
        ];
        if self.task_pairing == TaskPairing::Row {
            required.push(("taskRow", &self.task_row));
        }
        match required.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((name, _)) => Err(PageError::InvalidConfig(format!("{name} must not be empty"))),
            None => Ok(()),
        }
    }
}
