//! Markup loading tests

use lg_dom::Key;
use lg_html::{parse, HtmlParser};

const MARKUP: &str = r#"<!DOCTYPE html>
<html>
<head><title>Kit</title></head>
<body>
  <!-- navigation -->
  <button id="menu" data-lg-hamburger aria-controls="site-nav" aria-expanded="false">Menu</button>
  <nav id="site-nav" data-lg-nav data-state="closed"><a href="/">Home</a></nav>
  <div data-lg-tabs data-lg-options='{"activation":"manual"}'>
    <div role="tablist">
      <button role="tab" id="t0" aria-controls="p0" aria-selected="true">A</button>
      <button role="tab" id="t1" aria-controls="p1">B</button>
    </div>
    <section role="tabpanel" id="p0">a</section>
    <section role="tabpanel" id="p1" hidden>b</section>
  </div>
</body>
</html>"#;

#[test]
fn test_attributes_survive() {
    let doc = parse(MARKUP).unwrap();
    let menu = doc.get_element_by_id("menu").unwrap();

    assert_eq!(doc.get_attribute(menu, "data-lg-hamburger"), Some(""));
    assert_eq!(doc.get_attribute(menu, "aria-controls"), Some("site-nav"));
    assert_eq!(doc.get_attribute(menu, "aria-expanded"), Some("false"));

    let p1 = doc.get_element_by_id("p1").unwrap();
    assert!(doc.has_attribute(p1, "hidden"));

    let tabs = doc.query_selector(doc.root(), "[data-lg-tabs]").unwrap();
    assert_eq!(
        doc.get_attribute(tabs, "data-lg-options"),
        Some(r#"{"activation":"manual"}"#)
    );
}

#[test]
fn test_document_order_queries() {
    let doc = parse(MARKUP).unwrap();
    let tabs = doc.query_selector_all(doc.root(), r#"[role="tab"]"#);
    let ids: Vec<_> = tabs
        .iter()
        .map(|&t| doc.tree().element(t).and_then(|e| e.id()).unwrap())
        .collect();
    assert_eq!(ids, vec!["t0", "t1"]);

    let nav = doc.get_element_by_id("site-nav").unwrap();
    assert!(doc.matches(nav, "nav[data-lg-nav]"));
    assert!(!doc.matches(nav, "[data-lg-hamburger]"));
}

#[test]
fn test_whitespace_text_dropped() {
    let doc = parse("<div id=\"d\">\n   \n</div>").unwrap();
    let div = doc.get_element_by_id("d").unwrap();
    assert_eq!(doc.tree().children(div).count(), 0);
}

#[test]
fn test_events_work_on_parsed_tree() {
    let mut doc = HtmlParser::new().parse(MARKUP).unwrap();
    let link = doc.query_selector(doc.root(), "a").unwrap();
    let body = doc.body().unwrap();

    let hits = std::rc::Rc::new(std::cell::Cell::new(0));
    let counter = hits.clone();
    doc.add_event_listener(body, lg_dom::EventType::KeyDown, move |_, e| {
        if e.key() == Some(&Key::Tab) {
            counter.set(counter.get() + 1);
        }
    });

    doc.key_down(link, Key::Tab);
    doc.key_down(link, Key::Enter);
    assert_eq!(hits.get(), 1);
}
