use std::collections::HashMap;

use super::*;

// =============================================================
// Helpers
// =============================================================

/// A row whose children are keyed by selector.
struct FakeRow(HashMap<&'static str, u32>);

impl FakeRow {
    fn new(children: &[(&'static str, u32)]) -> Self {
        Self(children.iter().copied().collect())
    }
}

impl ChildLookup for FakeRow {
    type Child = u32;

    fn find(&self, selector: &str) -> Result<Option<u32>, PageError> {
        Ok(self.0.get(selector).copied())
    }
}

struct BrokenRow;

impl ChildLookup for BrokenRow {
    type Child = u32;

    fn find(&self, selector: &str) -> Result<Option<u32>, PageError> {
        Err(PageError::Dom(format!("SyntaxError: '{selector}' is not a valid selector")))
    }
}

// =============================================================
// Row pairing
// =============================================================

#[test]
fn rows_pair_their_own_children() {
    let rows = vec![
        FakeRow::new(&[(".main-link", 1), (".edit-links", 2)]),
        FakeRow::new(&[(".main-link", 3), (".edit-links", 4)]),
    ];
    let pairs = pair_within_rows(RowKind::Link, &rows, ".main-link", ".edit-links").unwrap();
    assert_eq!(pairs, vec![(1, 2), (3, 4)]);
}

#[test]
fn no_rows_is_empty_not_error() {
    let rows: Vec<FakeRow> = Vec::new();
    assert!(pair_within_rows(RowKind::Task, &rows, "a", "b").unwrap().is_empty());
}

#[test]
fn missing_second_child_reports_row_and_selector() {
    let rows = vec![
        FakeRow::new(&[(".main-link", 1), (".edit-links", 2)]),
        FakeRow::new(&[(".main-link", 3)]),
    ];
    let err = pair_within_rows(RowKind::Link, &rows, ".main-link", ".edit-links").unwrap_err();
    match err {
        PageError::MissingChild { kind, index, selector } => {
            assert_eq!(kind, RowKind::Link);
            assert_eq!(index, 1);
            assert_eq!(selector, ".edit-links");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn missing_first_child_is_reported_before_second() {
    let rows = vec![FakeRow::new(&[])];
    let err = pair_within_rows(RowKind::Task, &rows, "input[type=checkbox]", ".task-label").unwrap_err();
    assert!(matches!(err, PageError::MissingChild { ref selector, .. } if selector == "input[type=checkbox]"));
}

#[test]
fn lookup_failure_propagates() {
    let rows = vec![BrokenRow];
    assert!(matches!(pair_within_rows(RowKind::Link, &rows, "[", "b"), Err(PageError::Dom(_))));
}

// =============================================================
// Position pairing
// =============================================================

#[test]
fn position_pairs_by_index() {
    let pairs = pair_by_position(vec!["c0", "c1", "c2"], vec!["l0", "l1", "l2"]).unwrap();
    assert_eq!(pairs, vec![("c0", "l0"), ("c1", "l1"), ("c2", "l2")]);
}

#[test]
fn position_rejects_more_checkboxes() {
    let err = pair_by_position(vec![1, 2, 3], vec![1, 2]).unwrap_err();
    assert!(matches!(err, PageError::TaskCountMismatch { checkboxes: 3, labels: 2 }));
}

#[test]
fn position_rejects_more_labels() {
    let err = pair_by_position(Vec::<u8>::new(), vec![1]).unwrap_err();
    assert!(matches!(err, PageError::TaskCountMismatch { checkboxes: 0, labels: 1 }));
}
