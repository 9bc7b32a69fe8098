mod common;

use common::{Call, FakePage, Node};
use page_elements_sync::checks::scroll_until_element_is_fully_visible;
use page_elements_sync::prelude::*;

const MENU: &str = "//nav[@id='menu']";

#[test]
fn present_reports_matches() {
    let mut node = Node::new(MENU);
    node.class = "menu open".to_string();
    let page = FakePage::new(vec![node]);
    assert!(is_element_present(&page, &ResolvedLocator::xpath(MENU)).unwrap());
    assert!(!is_element_present(&page, &ResolvedLocator::xpath("//nav[@id='other']")).unwrap());
}

#[test]
fn visible_scrolls_then_checks() {
    let page = FakePage::new(vec![Node::new(MENU)]);
    assert!(is_element_visible(&page, &ResolvedLocator::xpath(MENU)).unwrap());
    let calls = page.calls();
    assert_eq!(&calls[calls.len() - 2..], &[Call::Scroll(0), Call::Displayed(0)]);
}

#[test]
fn visible_is_false_for_hidden_or_missing() {
    let page = FakePage::new(vec![Node::new(MENU).hidden()]);
    assert!(!is_element_visible(&page, &ResolvedLocator::xpath(MENU)).unwrap());

    let page = FakePage::new(vec![]);
    assert!(!is_element_visible(&page, &ResolvedLocator::xpath(MENU)).unwrap());
    assert_eq!(page.count(|c| matches!(c, Call::Scroll(_))), 0);
}

#[test]
fn element_going_stale_mid_check_counts_as_not_visible() {
    // Re-render between the lookup and the scroll.
    let page = FakePage::new(vec![Node::new(MENU)]).after(3, |nodes| nodes[0].generation += 1);
    assert!(!is_element_visible(&page, &ResolvedLocator::xpath(MENU)).unwrap());
}

#[test]
fn element_vanishing_between_lookups_counts_as_not_visible() {
    let page = FakePage::new(vec![Node::new(MENU)]).after(2, |nodes| nodes[0].attached = false);
    assert!(!is_element_visible(&page, &ResolvedLocator::xpath(MENU)).unwrap());
}

#[test]
fn other_errors_are_not_swallowed() {
    let page = FakePage::new(vec![Node::new(MENU).broken()]);
    assert!(is_element_visible(&page, &ResolvedLocator::xpath(MENU)).is_err());
}

#[test]
fn scroll_helper_delegates_to_driver() {
    let page = FakePage::new(vec![Node::new(MENU)]);
    let elem = page.element(0);
    scroll_until_element_is_fully_visible(&page, &elem).unwrap();
    assert_eq!(page.calls(), vec![Call::Scroll(0)]);
}
