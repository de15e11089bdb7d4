//! Shared constants for the page binder: default selectors and CSS values.

// ── Link items ──────────────────────────────────────────────────

/// Container of one link row.
pub const LINK_ITEM_SELECTOR: &str = ".link-item";

/// Primary link inside a link row; right-click target.
pub const MAIN_LINK_SELECTOR: &str = ".main-link";

/// Secondary-links panel inside a link row.
pub const EDIT_LINKS_SELECTOR: &str = ".edit-links";

// ── Tasks ───────────────────────────────────────────────────────

/// Container of one task row (row pairing).
pub const TASK_ROW_SELECTOR: &str = ".task-item";

/// Checkbox inside a task row, or document-wide in position pairing.
pub const TASK_CHECKBOX_SELECTOR: &str = "input[type=checkbox]";

/// Label inside a task row, or document-wide in position pairing.
pub const TASK_LABEL_SELECTOR: &str = ".task-label";

/// Inline `color` applied to a completed task label.
pub const COMPLETED_COLOR: &str = "gray";

/// Inline `text-decoration` applied to a completed task label.
pub const COMPLETED_DECORATION: &str = "line-through";

// ── Popup ───────────────────────────────────────────────────────

/// Element id of the login popup form.
pub const POPUP_ID: &str = "myForm";

// ── DOM ─────────────────────────────────────────────────────────

/// `display` value of a visible panel or popup.
pub const DISPLAY_VISIBLE: &str = "block";

/// `display` value of a hidden panel or popup.
pub const DISPLAY_HIDDEN: &str = "none";

/// `<body>` attribute carrying a JSON `PageConfig` override.
pub const CONFIG_ATTRIBUTE: &str = "data-page-config";
