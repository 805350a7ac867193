//! Tab set behavior against parsed markup

mod common;

use common::*;
use lg_dom::{Document, Key};
use lg_kit::markers::events;
use lg_kit::{state, Activation, Tabs, TabsOptions, Widget};

fn setup(activation: Activation) -> (Document, Tabs) {
    let mut doc = load(TABS);
    let mut tabs = Tabs::new(by_id(&doc, "panes"), TabsOptions { activation });
    tabs.init(&mut doc).unwrap();
    (doc, tabs)
}

/// Exactly one tab selected and reachable, and only its panel visible
fn assert_single_selection(doc: &Document, tabs: &Tabs, expected: usize) {
    for (i, &tab) in tabs.tabs().iter().enumerate() {
        let on = i == expected;
        assert_eq!(state::is_selected(doc, tab), on, "aria-selected of tab {i}");
        assert_eq!(state::is_reachable(doc, tab), on, "tabindex of tab {i}");
        let panel = tabs.panels()[i].expect("panel resolves");
        assert_eq!(state::is_visible(doc, panel), on, "panel {i}");
    }
}

#[test]
fn test_init_defaults_to_first() {
    let (doc, tabs) = setup(Activation::Auto);
    assert_eq!(tabs.tabs().len(), 4);
    assert_single_selection(&doc, &tabs, 0);
    assert_eq!(attr(&doc, "t1", "tabindex").as_deref(), Some("-1"));
}

#[test]
fn test_select_keeps_one_selected() {
    let (mut doc, tabs) = setup(Activation::Auto);
    for index in [2, 3, 0, 1, 6] {
        tabs.select(&mut doc, index, false);
        assert_single_selection(&doc, &tabs, index % 4);
    }
}

#[test]
fn test_next_prev_wrap() {
    let (mut doc, tabs) = setup(Activation::Auto);

    tabs.prev(&mut doc);
    assert_single_selection(&doc, &tabs, 3);
    assert_eq!(doc.active_element(), Some(by_id(&doc, "t3")));

    tabs.next(&mut doc);
    assert_single_selection(&doc, &tabs, 0);
}

#[test]
fn test_auto_arrow_navigation() {
    let (mut doc, tabs) = setup(Activation::Auto);
    doc.focus(by_id(&doc, "t0"));

    let event = doc.press_key(Key::ArrowLeft);
    assert!(event.is_default_prevented());
    assert_eq!(doc.active_element(), Some(by_id(&doc, "t3")));
    assert_single_selection(&doc, &tabs, 3);

    doc.press_key(Key::ArrowRight);
    assert_single_selection(&doc, &tabs, 0);
}

#[test]
fn test_end_then_previous() {
    let (mut doc, tabs) = setup(Activation::Auto);
    doc.focus(by_id(&doc, "t1"));

    doc.press_key(Key::End);
    assert_single_selection(&doc, &tabs, 3);
    doc.press_key(Key::ArrowLeft);
    assert_single_selection(&doc, &tabs, 2);
    doc.press_key(Key::Home);
    assert_single_selection(&doc, &tabs, 0);
}

#[test]
fn test_manual_activation_defers_selection() {
    let (mut doc, tabs) = setup(Activation::Manual);
    let changes = count_events(&mut doc, events::TABS_CHANGE);
    doc.focus(by_id(&doc, "t0"));

    doc.press_key(Key::ArrowRight);
    doc.press_key(Key::ArrowRight);
    assert_eq!(doc.active_element(), Some(by_id(&doc, "t2")));
    assert_single_selection(&doc, &tabs, 0);
    assert_eq!(*changes.borrow(), 0);

    let event = doc.press_key(Key::Enter);
    assert!(event.is_default_prevented());
    assert_single_selection(&doc, &tabs, 2);
    assert_eq!(*changes.borrow(), 1);

    doc.press_key(Key::End);
    doc.press_key(Key::Space);
    assert_single_selection(&doc, &tabs, 3);
}

#[test]
fn test_auto_ignores_enter_and_vertical_keys() {
    let (mut doc, tabs) = setup(Activation::Auto);
    let changes = count_events(&mut doc, events::TABS_CHANGE);
    doc.focus(by_id(&doc, "t0"));

    doc.press_key(Key::Enter);
    doc.press_key(Key::ArrowDown);
    assert_eq!(*changes.borrow(), 0);
    assert_single_selection(&doc, &tabs, 0);
}

#[test]
fn test_click_selects_and_focuses() {
    let (mut doc, tabs) = setup(Activation::Manual);
    let t2 = by_id(&doc, "t2");

    doc.click(t2);
    assert_single_selection(&doc, &tabs, 2);
    assert_eq!(doc.active_element(), Some(t2));
}

#[test]
fn test_preselected_tab_wins() {
    let html = TABS.replace(r#"id="t2""#, r#"id="t2" aria-selected="true""#);
    let mut doc = load(&html);
    let mut tabs = Tabs::new(by_id(&doc, "panes"), TabsOptions::default());
    tabs.init(&mut doc).unwrap();

    assert_single_selection(&doc, &tabs, 2);
    assert_eq!(tabs.current_index(&doc), 2);
}

#[test]
fn test_missing_panel_keeps_alignment() {
    let html = TABS.replace(r#"id="p1""#, r#"id="gone""#);
    let mut doc = load(&html);
    let mut tabs = Tabs::new(by_id(&doc, "panes"), TabsOptions::default());
    tabs.init(&mut doc).unwrap();

    assert_eq!(tabs.panels()[1], None);
    assert_eq!(tabs.panels()[2], Some(by_id(&doc, "p2")));

    tabs.select(&mut doc, 1, false);
    assert!(state::is_selected(&doc, by_id(&doc, "t1")));
    assert!(!state::is_visible(&doc, by_id(&doc, "p2")));
}
