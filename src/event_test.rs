use super::*;

#[test]
fn main_link_hits_only_its_own_index() {
    let target = ClickTarget::MainLink(2);
    assert!(target.hits_link(2));
    assert!(!target.hits_link(0));
    assert!(!target.hits_link(3));
}

#[test]
fn elsewhere_hits_no_link() {
    assert!((0..8).all(|i| !ClickTarget::Elsewhere.hits_link(i)));
}
