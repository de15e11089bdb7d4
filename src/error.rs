//! Error taxonomy for binding and driving the page.
//!
//! Bind-time errors (`MissingChild`, `TaskCountMismatch`, config errors) mean
//! the markup does not satisfy the page contract and nothing is bound.
//! Handler-time errors are logged by the DOM layer and never thrown into the
//! page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// What kind of row a [`PageError::MissingChild`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Link,
    Task,
}

impl std::fmt::Display for RowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Link => f.write_str("link item"),
            Self::Task => f.write_str("task row"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("{kind} {index} has no element matching {selector:?}")]
    MissingChild { kind: RowKind, index: usize, selector: String },
    #[error("task count mismatch: {checkboxes} checkboxes, {labels} labels")]
    TaskCountMismatch { checkboxes: usize, labels: usize },
    #[error("page has no popup form")]
    NoPopup,
    #[error("unknown link item: {0}")]
    UnknownLink(usize),
    #[error("unknown task: {0}")]
    UnknownTask(usize),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid page config: {0}")]
    InvalidConfig(String),
    #[error("dom error: {0}")]
    Dom(String),
}
