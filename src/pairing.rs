//! Assembles bound element groups from the page markup.
//!
//! Link items and task rows are containers whose children must all be
//! present; position pairing matches two flat collections by index and
//! refuses to guess when their lengths differ. Lookup is abstracted behind
//! [`ChildLookup`] so the rules can be exercised without a browser.

#[cfg(test)]
#[path = "pairing_test.rs"]
mod pairing_test;

use crate::error::{PageError, RowKind};

/// A container that can look up a descendant by CSS selector.
pub trait ChildLookup {
    type Child;

    /// First descendant matching `selector`, if any.
    ///
    /// # Errors
    ///
    /// Implementations return `Dom` when the lookup itself fails.
    fn find(&self, selector: &str) -> Result<Option<Self::Child>, PageError>;
}

/// For each row, find one child per selector; a missing child fails the bind.
///
/// # Errors
///
/// `MissingChild` naming the first row and selector that matched nothing,
/// or any error raised by the lookup.
pub fn pair_within_rows<R: ChildLookup>(
    kind: RowKind,
    rows: &[R],
    first: &str,
    second: &str,
) -> Result<Vec<(R::Child, R::Child)>, PageError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| {
            let a = require(row, kind, index, first)?;
            let b = require(row, kind, index, second)?;
            Ok((a, b))
        })
        .collect()
}

/// Pair the Nth checkbox with the Nth label.
///
/// # Errors
///
/// `TaskCountMismatch` when the collections differ in length.
pub fn pair_by_position<C, L>(checkboxes: Vec<C>, labels: Vec<L>) -> Result<Vec<(C, L)>, PageError> {
    if checkboxes.len() != labels.len() {
        return Err(PageError::TaskCountMismatch { checkboxes: checkboxes.len(), labels: labels.len() });
    }
    Ok(checkboxes.into_iter().zip(labels).collect())
}

fn require<R: ChildLookup>(row: &R, kind: RowKind, index: usize, selector: &str) -> Result<R::Child, PageError> {
    row.find(selector)?
        .ok_or_else(|| PageError::MissingChild { kind, index, selector: selector.to_owned() })
}
